//! Pattern rule tables.
//!
//! Every regex of the extraction engine lives here, compiled once into
//! process-wide immutable tables. Priority order is visible as data: the
//! matchers iterate these lists in order and stop at the first rule that
//! yields an acceptable candidate.

use factura_models::AmountSource;
use once_cell::sync::Lazy;
use regex::Regex;

fn rx(pattern: &str) -> Regex {
    Regex::new(pattern).expect("hard-coded rule pattern must compile")
}

/// Run of two or more horizontal whitespace characters; collapsed to one
/// space by the normalizer. Newlines are untouched, the line-anchored
/// amount rules need them.
pub static HSPACE_RUN: Lazy<Regex> = Lazy::new(|| rx(r"[ \t]{2,}"));

/// In-text invoice-number rules, tried in order:
/// "Facture [N°]", a bare "N°/No/Nº" marker, "Invoice no./number/#",
/// "Inv. no.".
pub static INVOICE_NUMBER_RULES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        rx(r"(?i)\bfacture\s*(?:n[°ºo]\s*)?[:#]?\s*([A-Za-z0-9._/\-]{2,})"),
        rx(r"(?i)\bn[°ºo]\s*[:#]?\s*([A-Za-z0-9._/\-]+)"),
        rx(r"(?i)\binvoice\s*(?:no\.?|number|#)\s*[:#]?\s*([A-Za-z0-9._/\-]+)"),
        rx(r"(?i)\binv\.?\s*no\.?\s*[:#]?\s*([A-Za-z0-9._/\-]+)"),
    ]
});

/// A candidate shaped like `yyyy-mm-dd` / `yyyy/mm/dd` is almost certainly
/// a misfired date, never an invoice number.
pub static DATE_SHAPED: Lazy<Regex> = Lazy::new(|| rx(r"^\d{4}[-/]\d{2}[-/]\d{2}$"));

/// Filename fallback: "facture/invoice/inv" marker in the stem
/// (e.g. FACTURE_2024-123.pdf).
pub static FILENAME_MARKER_RULE: Lazy<Regex> =
    Lazy::new(|| rx(r"(?i)\b(?:facture|invoice|inv)[-_ ]*([A-Za-z0-9._/\-]+)"));

/// Last-resort filename token: a usual alphanumeric-hyphenated reference.
pub static FILENAME_TOKEN_RULE: Lazy<Regex> =
    Lazy::new(|| rx(r"([A-Za-z0-9]{3,}[-_/][A-Za-z0-9._/\-]{2,})"));

/// Both accepted date shapes as one alternation, document order wins:
/// `dd/mm/yyyy` or `dd-mm-yyyy` (optionally preceded by "le"), or
/// ISO-like `yyyy-mm-dd`.
pub static DATE_RULE: Lazy<Regex> = Lazy::new(|| {
    rx(r"(?i)(?:\ble\s*)?(?P<d1>\d{2})[/-](?P<m1>\d{2})[/-](?P<y1>\d{4})\b|(?P<y2>\d{4})-(?P<m2>\d{2})-(?P<d2>\d{2})\b")
});

/// One amount rule: pattern, provenance tag, and whether a billing-period
/// phrase is captured on success.
pub struct AmountRule {
    pub pattern: Regex,
    pub source: AmountSource,
    pub captures_period: bool,
}

/// Ordered amount fallback chain. First rule that yields a numeric token
/// wins; later rules are never consulted once an earlier one fired.
///
/// `Total TTC*` (asterisk included) is the domain convention for a
/// recurring/estimated tax-inclusive total.
pub static AMOUNT_RULES: Lazy<Vec<AmountRule>> = Lazy::new(|| {
    vec![
        // 1) "Total TTC* pour <month> [<year>] <amount>" line, period captured
        AmountRule {
            pattern: rx(
                r"(?im)^\s*total\s*ttc\*\s*pour\s+(?P<period>\S+(?:\s+\d{4})?)\s*(?P<cur_left>[€$]?)\s*(?P<num>[\d\s.,]+)\s*(?P<cur_right>[€$]?)\s*$",
            ),
            source: AmountSource::PeriodTotalMarker,
            captures_period: true,
        },
        // 2) "Total TTC*" line without requiring the period phrase
        AmountRule {
            pattern: rx(
                r"(?im)^\s*total\s*ttc\*\s*(?:pour\s+\S+(?:\s+\d{4})?)?\s*(?P<cur_left>[€$]?)\s*(?P<num>[\d\s.,]+)\s*(?P<cur_right>[€$]?)\s*$",
            ),
            source: AmountSource::GenericTotalMarker,
            captures_period: false,
        },
        // 3a) "Total [TTC] / Montant TTC / Total à payer / Net à payer"
        AmountRule {
            pattern: rx(
                r"(?i)\b(?:total\s*(?:ttc|t\.t\.c\.)?|montant\s*ttc|total\s*à\s*payer|net\s*à\s*payer)\b[^0-9€$]*(?P<cur_left>[€$]?)\s*(?P<num>[\d\s.,]+)\s*(?P<cur_right>[€$]?)",
            ),
            source: AmountSource::GenericAmount,
            captures_period: false,
        },
        // 3b) "Grand total / Amount due / Total"
        AmountRule {
            pattern: rx(
                r"(?i)\b(?:grand\s*total|amount\s*due|total)\b[^0-9€$]*(?P<cur_left>[€$]?)\s*(?P<num>[\d\s.,]+)\s*(?P<cur_right>[€$]?)",
            ),
            source: AmountSource::GenericAmount,
            captures_period: false,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rule_tables_compile() {
        assert_eq!(INVOICE_NUMBER_RULES.len(), 4);
        assert_eq!(AMOUNT_RULES.len(), 4);
        assert!(DATE_RULE.is_match("03/03/2025"));
    }

    #[test]
    fn date_shaped_is_full_match_only() {
        assert!(DATE_SHAPED.is_match("2025-10-06"));
        assert!(DATE_SHAPED.is_match("2025/10/06"));
        assert!(!DATE_SHAPED.is_match("2025-03-621513456"));
        assert!(!DATE_SHAPED.is_match("F-2025-10-06"));
    }
}
