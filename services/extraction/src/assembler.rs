//! Invoice record assembly.
//!
//! Runs the normalizer once, then each field matcher over the normalized
//! text, and merges the results into one total [`InvoiceRecord`]. A matcher
//! that finds nothing never aborts assembly; absence is a sentinel. The
//! only propagated failure is a document whose text cannot be obtained at
//! all.

use anyhow::Result;
use std::path::Path;
use tracing::warn;

use factura_models::{AmountSource, InvoiceRecord, UNKNOWN};

use crate::{amount, date, invoice_number, normalize, pdf};

/// Assemble one record from a document's raw text and filename.
///
/// Pure and idempotent: identical input always yields an identical record.
pub fn extract_invoice_record(raw_text: &str, filename: &str) -> InvoiceRecord {
    let text = normalize::normalize_text(raw_text);

    let invoice_number = invoice_number::find_invoice_number(&text, Some(filename));
    let invoice_date = date::find_date(&text);
    let (total_amount, amount_source, billing_period) = match amount::find_amount(&text) {
        Some(m) => (m.display, m.source, m.period),
        None => (UNKNOWN.to_string(), AmountSource::NotFound, String::new()),
    };

    InvoiceRecord {
        source_filename: filename.to_string(),
        invoice_number: invoice_number.unwrap_or_else(|| UNKNOWN.to_string()),
        invoice_date: invoice_date.unwrap_or_else(|| UNKNOWN.to_string()),
        total_amount,
        billing_period,
        amount_source,
    }
}

/// Read a PDF from disk and assemble its record.
///
/// Unreadable documents propagate as errors; a readable document where no
/// rule fires still yields an all-sentinel record. A document that reads
/// fine but contains no text at all is logged here, since the record shape
/// alone cannot distinguish it from "text present, nothing matched".
pub fn extract_from_file(path: &Path) -> Result<InvoiceRecord> {
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    let text = pdf::extract_text_from_file(path)?;
    if text.trim().is_empty() {
        warn!(document = %filename, "extraction produced no text");
    }

    Ok(extract_invoice_record(&text, &filename))
}
