//! Factura Pipeline
//!
//! Orchestrates one invoice run: fetch PDF invoices from the mailbox,
//! extract structured fields from each document, render the tabular
//! report and email it to the configured recipient.
//!
//! A document that cannot be read is logged and skipped; the run still
//! produces a report for every readable document.

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use factura_mailroom::{MailboxClient, ReportSender};
use factura_reporting::ReportWriter;
use factura_utils::{init_logging, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration incomplete ({e}), using defaults");
            AppConfig::default()
        }
    };
    init_logging(&config.logging)?;

    info!("=== Starting invoice pipeline ===");
    let outcome = run(&config).await;
    if let Err(e) = &outcome {
        error!(error = %e, "Invoice pipeline failed");
    }
    info!("=== Invoice pipeline finished ===");
    outcome
}

async fn run(config: &AppConfig) -> Result<()> {
    info!("Fetching invoices from mailbox");
    let mailbox = MailboxClient::new(config.mailbox.clone());
    let mut fetched = tokio::task::spawn_blocking(move || mailbox.fetch_invoices())
        .await
        .context("Mailbox fetch task panicked")?
        .context("Failed to fetch invoices from mailbox")?;

    if fetched.is_empty() {
        warn!("No new invoice found in the mailbox");
        return Ok(());
    }
    info!("{} invoice(s) fetched", fetched.len());

    // Deterministic report row order.
    fetched.sort();

    let mut records = Vec::new();
    for path in &fetched {
        info!(document = %path.display(), "Parsing invoice");
        match factura_extraction::extract_from_file(path) {
            Ok(record) => {
                if record.is_all_unknown() {
                    warn!(document = %path.display(), "No field matched, row kept with sentinels");
                }
                records.push(record);
            }
            Err(e) => {
                error!(document = %path.display(), error = %e, "Failed to parse invoice, skipping")
            }
        }
    }

    if records.is_empty() {
        anyhow::bail!("No invoice data extracted, stopping before report generation");
    }

    info!("Rendering report");
    let writer = ReportWriter::new(config.report.clone());
    let report_path = writer
        .write_report(&records)
        .context("Failed to render report")?;

    info!("Sending report by email");
    let sender = ReportSender::new(config.smtp.clone());
    sender
        .send_report(&report_path)
        .await
        .context("Failed to send report")?;
    info!(recipient = %config.smtp.recipient, "Report sent");

    Ok(())
}
