use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FacturaError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Mailbox error: {message}")]
    Mailbox { message: String },

    #[error("Document processing error: {document} - {message}")]
    DocumentProcessing { document: String, message: String },

    #[error("Report generation error: {message}")]
    Report { message: String },

    #[error("Email delivery error: {message}")]
    EmailDelivery { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FacturaError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn mailbox(message: impl Into<String>) -> Self {
        Self::Mailbox {
            message: message.into(),
        }
    }

    pub fn document_processing(document: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DocumentProcessing {
            document: document.into(),
            message: message.into(),
        }
    }

    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }

    pub fn email_delivery(message: impl Into<String>) -> Self {
        Self::EmailDelivery {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Mailbox { .. } => "MAILBOX_ERROR",
            Self::DocumentProcessing { .. } => "DOCUMENT_PROCESSING_ERROR",
            Self::Report { .. } => "REPORT_ERROR",
            Self::EmailDelivery { .. } => "EMAIL_DELIVERY_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type FacturaResult<T> = Result<T, FacturaError>;

// Conversion from common error types
impl From<config::ConfigError> for FacturaError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}

impl From<std::io::Error> for FacturaError {
    fn from(error: std::io::Error) -> Self {
        Self::internal(error.to_string())
    }
}

impl From<serde_json::Error> for FacturaError {
    fn from(error: serde_json::Error) -> Self {
        Self::internal(error.to_string())
    }
}
