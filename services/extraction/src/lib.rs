//! Invoice Field Extraction
//!
//! Turns raw, inconsistently formatted PDF text into a typed
//! [`InvoiceRecord`](factura_models::InvoiceRecord): invoice number, date,
//! tax-inclusive total with its currency formatting, and billing period.
//!
//! The engine is pure pattern matching over normalized text: no OCR, no
//! layout analysis, no guessing. Each field has an ordered fallback chain of
//! rules (see [`rules`]); when no rule fires the field carries an explicit
//! sentinel instead of being absent. Extraction is synchronous, stateless
//! and idempotent, so callers can run documents in parallel and re-run them
//! freely.

pub mod amount;
pub mod assembler;
pub mod date;
pub mod invoice_number;
pub mod normalize;
pub mod pdf;
pub mod rules;

pub use amount::{find_amount, parse_amount, AmountMatch};
pub use assembler::{extract_from_file, extract_invoice_record};
pub use date::find_date;
pub use invoice_number::find_invoice_number;
pub use normalize::normalize_text;
