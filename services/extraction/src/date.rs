//! Date matcher.
//!
//! Accepts `dd/mm/yyyy` or `dd-mm-yyyy` (optionally preceded by "le") and
//! ISO-like `yyyy-mm-dd`; whichever shape occurs first in the document
//! wins. The output is always canonicalized to `dd/mm/yyyy`.
//!
//! Shape matching only; calendar validity is not checked.

use crate::rules;

/// Return the first matched date in `dd/mm/yyyy` display form.
pub fn find_date(text: &str) -> Option<String> {
    let caps = rules::DATE_RULE.captures(text)?;
    if let (Some(d), Some(m), Some(y)) = (caps.name("d1"), caps.name("m1"), caps.name("y1")) {
        return Some(format!("{}/{}/{}", d.as_str(), m.as_str(), y.as_str()));
    }
    let y = caps.name("y2")?;
    let m = caps.name("m2")?;
    let d = caps.name("d2")?;
    Some(format!("{}/{}/{}", d.as_str(), m.as_str(), y.as_str()))
}
