//! Amount matcher and numeric normalization.
//!
//! The matcher walks the ordered [`rules::AMOUNT_RULES`] chain and returns
//! the first numeric token found, preserved exactly as formatted in the
//! source (separators kept, currency symbol collapsed to a trailing
//! position). [`parse_amount`] is the separate step that turns such a
//! display value into a real number when one is required.

use factura_models::AmountSource;
use regex::Captures;

use crate::rules;

/// A matched total amount with its provenance and optional billing period.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountMatch {
    /// Display value, e.g. `255,63€` or `1 234,56€`.
    pub display: String,
    /// Which rule of the fallback chain fired.
    pub source: AmountSource,
    /// Billing-period phrase (e.g. `Mars 2025`), empty unless the
    /// period-anchored rule matched.
    pub period: String,
}

/// Find the tax-inclusive total in normalized text.
///
/// Rules are tried strictly in priority order; an earlier rule always wins
/// over a later one even when both would match. `None` means no rule fired.
pub fn find_amount(text: &str) -> Option<AmountMatch> {
    for rule in rules::AMOUNT_RULES.iter() {
        for caps in rule.pattern.captures_iter(text) {
            let Some(display) = display_amount(&caps) else {
                // Degenerate match without a single digit; keep scanning.
                continue;
            };
            let period = if rule.captures_period {
                caps.name("period")
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default()
            } else {
                String::new()
            };
            return Some(AmountMatch {
                display,
                source: rule.source,
                period,
            });
        }
    }
    None
}

/// Trimmed numeric token plus whichever currency symbol was present,
/// left or right. `None` when the token carries no digit at all.
fn display_amount(caps: &Captures<'_>) -> Option<String> {
    let num = caps.name("num").map(|m| m.as_str().trim()).unwrap_or("");
    if !num.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let cur = caps
        .name("cur_left")
        .map(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .or_else(|| {
            caps.name("cur_right")
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        })
        .unwrap_or("");
    Some(format!("{num}{cur}"))
}

/// Best-effort numeric value of a locale-ambiguous amount string.
///
/// Currency symbols and spaces are stripped first. When both `,` and `.`
/// appear, whichever occurs later is the decimal separator and the other is
/// dropped as a thousands separator; a lone `,` is read as a decimal comma.
/// Inherently ambiguous inputs (`1.234` as one thousand or one-point-two)
/// follow this heuristic; failure to parse yields `None` and the caller
/// keeps the display string instead.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '€' | '$') && !c.is_whitespace())
        .collect();
    if stripped.is_empty() {
        return None;
    }

    let canonical = match (stripped.rfind(','), stripped.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => stripped.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => stripped.replace(',', ""),
        (Some(_), None) => stripped.replace(',', "."),
        _ => stripped,
    };

    canonical.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_anchored_rule_wins_over_generic() {
        let text = "Total TTC* pour Mars 2025 323,00€\nTotal à payer 999,00€";
        let m = find_amount(text).unwrap();
        assert_eq!(m.display, "323,00€");
        assert_eq!(m.source, AmountSource::PeriodTotalMarker);
        assert_eq!(m.period, "Mars 2025");
    }

    #[test]
    fn period_without_year() {
        let m = find_amount("Total TTC* pour Octobre 255,63€").unwrap();
        assert_eq!(m.display, "255,63€");
        assert_eq!(m.source, AmountSource::PeriodTotalMarker);
        assert_eq!(m.period, "Octobre");
    }

    #[test]
    fn star_marker_without_period_phrase() {
        let m = find_amount("Total TTC* 255,63€").unwrap();
        assert_eq!(m.display, "255,63€");
        assert_eq!(m.source, AmountSource::GenericTotalMarker);
        assert_eq!(m.period, "");
    }

    #[test]
    fn star_marker_is_line_anchored() {
        // Not at line start: the star rules must not fire, the generic
        // "total" rule picks it up instead.
        let m = find_amount("voir Total TTC* 255,63€ ci-dessous").unwrap();
        assert_eq!(m.source, AmountSource::GenericAmount);
    }

    #[test]
    fn generic_french_markers() {
        let m = find_amount("Montant TTC : 120,00 €").unwrap();
        assert_eq!(m.display, "120,00€");
        assert_eq!(m.source, AmountSource::GenericAmount);

        let m = find_amount("Net à payer 88,10").unwrap();
        assert_eq!(m.display, "88,10");
    }

    #[test]
    fn generic_english_markers() {
        let m = find_amount("Grand total $1,234.56").unwrap();
        assert_eq!(m.display, "1,234.56$");
        assert_eq!(m.source, AmountSource::GenericAmount);

        let m = find_amount("Amount due: 42.00").unwrap();
        assert_eq!(m.display, "42.00");
    }

    #[test]
    fn thousands_space_is_preserved_in_display() {
        let m = find_amount("Total TTC* 1 234,56€").unwrap();
        assert_eq!(m.display, "1 234,56€");
    }

    #[test]
    fn marker_without_digits_does_not_match() {
        assert_eq!(find_amount("Total dû dès réception"), None);
        assert_eq!(find_amount(""), None);
    }

    #[test]
    fn parse_amount_separator_heuristic() {
        assert_eq!(parse_amount("1 234,56€"), Some(1234.56));
        assert_eq!(parse_amount("1,234.56"), Some(1234.56));
        assert_eq!(parse_amount("1.234,56"), Some(1234.56));
        assert_eq!(parse_amount("255,63€"), Some(255.63));
        assert_eq!(parse_amount("42.00"), Some(42.0));
        assert_eq!(parse_amount("1200"), Some(1200.0));
    }

    #[test]
    fn parse_amount_failures_yield_none() {
        assert_eq!(parse_amount("INCONNU"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("€"), None);
        // Multiple commas with no period stay ambiguous and unparsed.
        assert_eq!(parse_amount("1,234,567"), None);
    }
}
