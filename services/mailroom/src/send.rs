//! SMTP Report Delivery
//!
//! Sends the rendered report to the configured recipient as an email
//! attachment, via lettre's async SMTP transport.

use anyhow::{Context, Result};
use lettre::{
    message::{header::ContentType, Attachment, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::path::Path;
use tracing::info;

use factura_utils::SmtpConfig;

/// SMTP client for delivering the invoice report.
pub struct ReportSender {
    config: SmtpConfig,
}

impl ReportSender {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    /// Send the report file as an attachment to the configured recipient.
    pub async fn send_report(&self, report_path: &Path) -> Result<String> {
        let content = tokio::fs::read(report_path)
            .await
            .with_context(|| format!("Failed to read report {}", report_path.display()))?;
        let attachment_name = report_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("reporting.csv")
            .to_string();

        let email = self.build_message(&attachment_name, content)?;

        let creds = Credentials::new(
            self.config.username.clone(),
            self.config.password.clone(),
        );

        let mailer: AsyncSmtpTransport<Tokio1Executor> =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.host)
                .context("Failed to create SMTP transport")?
                .port(self.config.port)
                .credentials(creds)
                .build();

        let response = mailer.send(email).await.context("Failed to send report email")?;
        info!(recipient = %self.config.recipient, "Report email accepted by SMTP server");

        Ok(response.message().collect::<Vec<_>>().join("\n"))
    }

    fn build_message(&self, attachment_name: &str, content: Vec<u8>) -> Result<Message> {
        let from_mailbox: Mailbox =
            format!("{} <{}>", self.config.from_name, self.config.from_address)
                .parse()
                .context("Invalid from address")?;
        let to_mailbox: Mailbox = self
            .config
            .recipient
            .parse()
            .context("Invalid recipient address")?;

        Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(self.config.subject.clone())
            .multipart(
                MultiPart::mixed()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(self.config.body.clone()),
                    )
                    .singlepart(
                        Attachment::new(attachment_name.to_string()).body(
                            content,
                            ContentType::parse("text/csv")
                                .context("Invalid attachment content type")?,
                        ),
                    ),
            )
            .context("Failed to build email")
    }
}
