//! CSV report writer.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use factura_extraction::parse_amount;
use factura_models::InvoiceRecord;
use factura_utils::ReportConfig;

/// Fixed column order of the report.
pub const REPORT_COLUMNS: [&str; 7] = [
    "fichier",
    "numero_facture",
    "date",
    "total_ttc",
    "montant_numerique",
    "periode",
    "source_montant",
];

/// Writes the invoice batch to a CSV file in the output directory.
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Render one row per record, in the order given, and return the path
    /// of the written file.
    pub fn write_report(&self, records: &[InvoiceRecord]) -> Result<PathBuf> {
        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output dir {}",
                self.config.output_dir.display()
            )
        })?;
        let path = self.config.output_dir.join(&self.config.file_name);

        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create report {}", path.display()))?;
        writer
            .write_record(REPORT_COLUMNS)
            .context("Failed to write report header")?;

        for record in records {
            let numeric = numeric_cell(&record.total_amount);
            writer
                .write_record([
                    record.source_filename.as_str(),
                    record.invoice_number.as_str(),
                    record.invoice_date.as_str(),
                    record.total_amount.as_str(),
                    numeric.as_str(),
                    record.billing_period.as_str(),
                    record.amount_source.as_str(),
                ])
                .with_context(|| {
                    format!("Failed to write report row for {}", record.source_filename)
                })?;
        }

        writer.flush().context("Failed to flush report")?;
        info!(report = %path.display(), rows = records.len(), "Report written");
        Ok(path)
    }
}

/// Canonical numeric form of a display amount, for consumers that need a
/// real number. Falls back to the display string when the value cannot be
/// parsed, so no row is ever dropped.
pub fn numeric_cell(display: &str) -> String {
    match parse_amount(display) {
        Some(value) => format!("{value:.2}"),
        None => display.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use factura_models::{AmountSource, UNKNOWN};

    fn sample_record() -> InvoiceRecord {
        InvoiceRecord {
            source_filename: "facture_0042.pdf".into(),
            invoice_number: "2025-0042".into(),
            invoice_date: "03/03/2025".into(),
            total_amount: "1 234,56€".into(),
            billing_period: "Mars 2025".into(),
            amount_source: AmountSource::PeriodTotalMarker,
        }
    }

    #[test]
    fn header_has_fixed_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(ReportConfig {
            output_dir: dir.path().to_path_buf(),
            file_name: "reporting.csv".into(),
        });

        let path = writer.write_report(&[sample_record()]).unwrap();
        let content = fs::read_to_string(path).unwrap();
        let mut lines = content.lines();

        assert_eq!(
            lines.next().unwrap(),
            "fichier,numero_facture,date,total_ttc,montant_numerique,periode,source_montant"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("facture_0042.pdf,2025-0042,03/03/2025,"));
        assert!(row.contains("1234.56"));
        assert!(row.ends_with("Mars 2025,period_total_marker"));
    }

    #[test]
    fn unknown_amount_keeps_sentinel_in_numeric_column() {
        let mut record = sample_record();
        record.total_amount = UNKNOWN.into();
        record.amount_source = AmountSource::NotFound;
        record.billing_period = String::new();

        let dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(ReportConfig {
            output_dir: dir.path().to_path_buf(),
            file_name: "reporting.csv".into(),
        });

        let path = writer.write_report(&[record]).unwrap();
        let content = fs::read_to_string(path).unwrap();
        let row = content.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "facture_0042.pdf,2025-0042,03/03/2025,INCONNU,INCONNU,,not_found"
        );
    }

    #[test]
    fn numeric_cell_fallback_preserves_display() {
        assert_eq!(numeric_cell("255,63€"), "255.63");
        assert_eq!(numeric_cell("1,234.56"), "1234.56");
        assert_eq!(numeric_cell("INCONNU"), "INCONNU");
    }
}
