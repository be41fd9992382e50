//! IMAP Mailbox Fetch
//!
//! Polls the configured folder for unseen messages matching the subject
//! filter and saves every `application/pdf` attachment into the input
//! directory.

use anyhow::{Context, Result};
use mailparse::ParsedMail;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

use factura_utils::MailboxConfig;

/// IMAP client for retrieving invoice attachments.
pub struct MailboxClient {
    config: MailboxConfig,
}

impl MailboxClient {
    pub fn new(config: MailboxConfig) -> Self {
        Self { config }
    }

    /// Fetch unseen invoice emails and save their PDF attachments.
    ///
    /// Returns the saved file paths. Blocking; callers on an async runtime
    /// should wrap this in `spawn_blocking`.
    pub fn fetch_invoices(&self) -> Result<Vec<PathBuf>> {
        let tls = native_tls::TlsConnector::builder()
            .build()
            .context("Failed to build TLS connector")?;
        let client = imap::connect(
            (self.config.imap_host.as_str(), self.config.imap_port),
            &self.config.imap_host,
            &tls,
        )
        .context("Failed to connect to IMAP server")?;

        let mut session = client
            .login(&self.config.account, &self.config.password)
            .map_err(|e| e.0)
            .context("IMAP login failed")?;

        session
            .select(&self.config.folder)
            .with_context(|| format!("Failed to select folder {}", self.config.folder))?;

        let query = format!("(UNSEEN SUBJECT \"{}\")", self.config.subject_filter);
        let ids = session.search(&query).context("IMAP search failed")?;

        fs::create_dir_all(&self.config.input_dir).with_context(|| {
            format!("Failed to create input dir {}", self.config.input_dir.display())
        })?;

        let mut saved = Vec::new();
        for id in &ids {
            let messages = session
                .fetch(id.to_string(), "RFC822")
                .with_context(|| format!("Failed to fetch message {id}"))?;
            for message in messages.iter() {
                let Some(body) = message.body() else { continue };
                let parsed =
                    mailparse::parse_mail(body).context("Failed to parse MIME message")?;
                self.save_pdf_attachments(&parsed, &mut saved)?;
            }
        }

        session.logout().ok();
        info!("Fetched {} PDF attachment(s) from mailbox", saved.len());
        Ok(saved)
    }

    /// Walk the MIME tree and save every PDF part carrying a filename.
    fn save_pdf_attachments(
        &self,
        part: &ParsedMail<'_>,
        saved: &mut Vec<PathBuf>,
    ) -> Result<()> {
        if part.ctype.mimetype.eq_ignore_ascii_case("application/pdf") {
            let disposition = part.get_content_disposition();
            if let Some(filename) = disposition.params.get("filename") {
                let path = self.config.input_dir.join(sanitize_filename(filename));
                let content = part
                    .get_body_raw()
                    .context("Failed to decode PDF attachment body")?;
                fs::write(&path, content)
                    .with_context(|| format!("Failed to save {}", path.display()))?;
                debug!(file = %path.display(), "Saved PDF attachment");
                saved.push(path);
            }
        }
        for sub in &part.subparts {
            self.save_pdf_attachments(sub, saved)?;
        }
        Ok(())
    }
}

/// Keep only the final path component of an attachment name, so a hostile
/// filename cannot escape the input directory.
fn sanitize_filename(name: &str) -> String {
    name.rsplit(['/', '\\']).next().unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("facture.pdf"), "facture.pdf");
        assert_eq!(sanitize_filename("../../etc/facture.pdf"), "facture.pdf");
        assert_eq!(sanitize_filename(r"C:\temp\facture.pdf"), "facture.pdf");
    }

    #[test]
    fn pdf_attachment_is_extracted_from_mime_tree() {
        let raw = concat!(
            "From: fournisseur@example.com\r\n",
            "To: invoices@example.com\r\n",
            "Subject: Facture Octobre\r\n",
            "MIME-Version: 1.0\r\n",
            "Content-Type: multipart/mixed; boundary=\"sep\"\r\n",
            "\r\n",
            "--sep\r\n",
            "Content-Type: text/plain\r\n",
            "\r\n",
            "Bonjour, facture en piece jointe.\r\n",
            "--sep\r\n",
            "Content-Type: application/pdf\r\n",
            "Content-Disposition: attachment; filename=\"facture_0042.pdf\"\r\n",
            "Content-Transfer-Encoding: base64\r\n",
            "\r\n",
            "JVBERi0xLjQK\r\n",
            "--sep--\r\n",
        );

        let dir = tempfile::tempdir().unwrap();
        let client = MailboxClient::new(MailboxConfig {
            imap_host: "imap.example.com".into(),
            imap_port: 993,
            account: "invoices@example.com".into(),
            password: String::new(),
            folder: "INBOX".into(),
            subject_filter: "Facture".into(),
            input_dir: dir.path().to_path_buf(),
        });

        let parsed = mailparse::parse_mail(raw.as_bytes()).unwrap();
        let mut saved = Vec::new();
        client.save_pdf_attachments(&parsed, &mut saved).unwrap();

        assert_eq!(saved.len(), 1);
        assert_eq!(
            saved[0].file_name().and_then(|n| n.to_str()),
            Some("facture_0042.pdf")
        );
        assert_eq!(fs::read(&saved[0]).unwrap(), b"%PDF-1.4\n");
    }
}
