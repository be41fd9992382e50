//! Text normalization.
//!
//! Cleans raw PDF-extracted text into a canonical form the pattern rules
//! can rely on. Line structure is preserved: the "Total TTC*" rules are
//! line-anchored and need the newlines.

use crate::rules;

/// Normalize raw extracted text.
///
/// Non-breaking and thin spaces become regular spaces, decorative dash
/// variants become ASCII `-`, and runs of horizontal whitespace collapse to
/// a single space. Pure; an empty input yields an empty string.
pub fn normalize_text(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let mut text = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            // NBSP, figure/punctuation/thin/hair spaces, narrow NBSP
            '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' => text.push(' '),
            // hyphen variants, en/em/horizontal-bar dashes, minus sign
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
            | '\u{2212}' => text.push('-'),
            _ => text.push(ch),
        }
    }

    rules::HSPACE_RUN.replace_all(&text, " ").into_owned()
}
