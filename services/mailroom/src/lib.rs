//! Factura Mailroom
//!
//! Mailbox boundary of the pipeline: fetches unseen invoice emails over
//! IMAP and saves their PDF attachments, and delivers the rendered report
//! over SMTP.

pub mod fetch;
pub mod send;

pub use fetch::MailboxClient;
pub use send::ReportSender;
