use serde::{Deserialize, Serialize};

/// Sentinel written into any field no matcher rule could fill.
///
/// Records are total: consumers never branch on missing keys, they compare
/// against this sentinel instead.
pub const UNKNOWN: &str = "INCONNU";

/// Provenance tag recording which fallback rule produced `total_amount`.
///
/// Diagnostic only; no business logic depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmountSource {
    /// Line-anchored "Total TTC*" marker with a "pour <month> <year>" phrase.
    PeriodTotalMarker,
    /// Line-anchored "Total TTC*" marker without a period phrase.
    GenericTotalMarker,
    /// Generic "Total / Montant TTC / Amount due" style marker.
    GenericAmount,
    /// No amount rule fired.
    NotFound,
}

impl AmountSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PeriodTotalMarker => "period_total_marker",
            Self::GenericTotalMarker => "generic_total_marker",
            Self::GenericAmount => "generic_amount",
            Self::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for AmountSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured result of extracting one invoice document.
///
/// One record is assembled per source document and is immutable afterwards.
/// Every field is always populated: unmatched fields carry the `INCONNU`
/// sentinel, except `billing_period` where absence is normal and is an
/// empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    /// Name of the originating document, always populated from the input.
    pub source_filename: String,
    /// Invoice number, or `INCONNU` if no rule fired.
    pub invoice_number: String,
    /// Invoice date in `dd/mm/yyyy` display form, or `INCONNU`.
    pub invoice_date: String,
    /// Locale-formatted display total (e.g. `255,63€`), or `INCONNU`.
    /// Kept as source-formatted text so separators and currency symbol
    /// survive into the report.
    pub total_amount: String,
    /// Free-text billing period (e.g. `Octobre 2025`), empty if none.
    pub billing_period: String,
    /// Which fallback rule produced `total_amount`.
    pub amount_source: AmountSource,
}

impl InvoiceRecord {
    /// All-sentinel record for a document where nothing matched
    /// (or where text extraction yielded nothing).
    pub fn unknown(source_filename: impl Into<String>) -> Self {
        Self {
            source_filename: source_filename.into(),
            invoice_number: UNKNOWN.to_string(),
            invoice_date: UNKNOWN.to_string(),
            total_amount: UNKNOWN.to_string(),
            billing_period: String::new(),
            amount_source: AmountSource::NotFound,
        }
    }

    /// True when no field matcher fired at all.
    pub fn is_all_unknown(&self) -> bool {
        self.invoice_number == UNKNOWN
            && self.invoice_date == UNKNOWN
            && self.total_amount == UNKNOWN
            && self.billing_period.is_empty()
    }
}
