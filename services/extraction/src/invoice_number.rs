//! Invoice-number matcher.
//!
//! Ordered fallback chain: in-text marker rules first, then the source
//! filename. A candidate shaped like a calendar date is rejected at every
//! stage and the chain moves on.

use std::path::Path;

use crate::rules;

/// Find the best invoice-number candidate in `text`, falling back to the
/// filename (extension stripped) when no in-text rule matched.
pub fn find_invoice_number(text: &str, filename: Option<&str>) -> Option<String> {
    for rule in rules::INVOICE_NUMBER_RULES.iter() {
        if let Some(caps) = rule.captures(text) {
            if let Some(candidate) = accept(&caps[1]) {
                return Some(candidate);
            }
        }
    }

    let stem = filename
        .map(Path::new)
        .and_then(Path::file_stem)
        .and_then(|s| s.to_str())?;

    if let Some(caps) = rules::FILENAME_MARKER_RULE.captures(stem) {
        if let Some(candidate) = accept(&caps[1]) {
            return Some(candidate);
        }
    }

    // Last resort: any usual alphanumeric-hyphenated reference in the stem.
    rules::FILENAME_TOKEN_RULE
        .captures(stem)
        .and_then(|caps| accept(&caps[1]))
}

/// Decoration trimming plus date-shape rejection. Trimming comes first so
/// a candidate like `2025-10-06.` cannot dodge the rejection.
fn accept(candidate: &str) -> Option<String> {
    let cleaned = candidate
        .trim_start_matches(['#', ':'])
        .trim_end_matches(['.', ',', ';', ':']);
    if cleaned.is_empty() || rules::DATE_SHAPED.is_match(cleaned) {
        return None;
    }
    Some(cleaned.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_facture_with_number_sign() {
        assert_eq!(
            find_invoice_number("Facture N°2025-03-621513456", None).as_deref(),
            Some("2025-03-621513456")
        );
    }

    #[test]
    fn matches_facture_without_marker() {
        assert_eq!(
            find_invoice_number("facture FA-2024-0042 du mois", None).as_deref(),
            Some("FA-2024-0042")
        );
    }

    #[test]
    fn matches_bare_number_sign_marker() {
        assert_eq!(
            find_invoice_number("Ref client 12\nNº : A-881", None).as_deref(),
            Some("A-881")
        );
    }

    #[test]
    fn matches_english_invoice_markers() {
        assert_eq!(
            find_invoice_number("Invoice number INV-2024/77", None).as_deref(),
            Some("INV-2024/77")
        );
        assert_eq!(
            find_invoice_number("inv. no. 554-A", None).as_deref(),
            Some("554-A")
        );
    }

    #[test]
    fn date_shaped_candidate_falls_through_to_next_rule() {
        // "Facture 2025-10-06" misfires on the emission date; the bare
        // marker rule then picks up the real number.
        let text = "Facture 2025-10-06\nN° FC-2210";
        assert_eq!(find_invoice_number(text, None).as_deref(), Some("FC-2210"));
    }

    #[test]
    fn date_shaped_candidate_with_no_other_rule_yields_none() {
        assert_eq!(find_invoice_number("Facture 2025-10-06", None), None);
    }

    #[test]
    fn filename_marker_fallback() {
        assert_eq!(
            find_invoice_number("texte sans numero", Some("FACTURE_2024-123.pdf")).as_deref(),
            Some("2024-123")
        );
    }

    #[test]
    fn filename_token_last_resort() {
        assert_eq!(
            find_invoice_number("", Some("ACME-2024_007.pdf")).as_deref(),
            Some("ACME-2024_007")
        );
    }

    #[test]
    fn date_shaped_filename_is_rejected() {
        assert_eq!(find_invoice_number("", Some("2025-10-06.pdf")), None);
    }

    #[test]
    fn trailing_punctuation_is_trimmed() {
        assert_eq!(
            find_invoice_number("Facture no 2024.0042.", None).as_deref(),
            Some("2024.0042")
        );
    }

    #[test]
    fn no_candidate_at_all() {
        assert_eq!(find_invoice_number("", None), None);
        assert_eq!(find_invoice_number("aucun marqueur ici", Some("scan.pdf")), None);
    }
}
