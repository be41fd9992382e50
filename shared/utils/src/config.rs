use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub mailbox: MailboxConfig,
    pub smtp: SmtpConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// IMAP mailbox the invoices arrive in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailboxConfig {
    pub imap_host: String,
    pub imap_port: u16,
    pub account: String,
    pub password: String,
    /// Folder to poll, usually INBOX.
    pub folder: String,
    /// Only unseen messages whose subject contains this string are fetched.
    pub subject_filter: String,
    /// Directory PDF attachments are saved into.
    pub input_dir: PathBuf,
}

/// Outbound SMTP account used to deliver the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_address: String,
    pub from_name: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with FACTURA prefix
            .add_source(Environment::with_prefix("FACTURA").separator("__"));

        config.build()?.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mailbox: MailboxConfig {
                imap_host: "imap.gmail.com".to_string(),
                imap_port: 993,
                account: "invoices@example.com".to_string(),
                password: String::new(),
                folder: "INBOX".to_string(),
                subject_filter: "Facture".to_string(),
                input_dir: PathBuf::from("data/input"),
            },
            smtp: SmtpConfig {
                host: "smtp.gmail.com".to_string(),
                port: 587,
                username: "invoices@example.com".to_string(),
                password: String::new(),
                from_address: "invoices@example.com".to_string(),
                from_name: "Factura Pipeline".to_string(),
                recipient: "compta@example.com".to_string(),
                subject: "Reporting factures".to_string(),
                body: "Bonjour,\n\nVeuillez trouver ci-joint le reporting des factures.\n".to_string(),
            },
            report: ReportConfig {
                output_dir: PathBuf::from("data/traitement"),
                file_name: "reporting_factures.csv".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "plain".to_string(),
                file_path: None,
            },
        }
    }
}
