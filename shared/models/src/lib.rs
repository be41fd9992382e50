//! # Factura Core Domain Models
//!
//! Core domain models for the Factura invoice-processing pipeline.
//! All models implement serialization/deserialization with serde.
//!
//! ## Key Models
//!
//! - **InvoiceRecord**: the structured result of extracting one invoice
//!   document (number, date, total, billing period, provenance tag)
//! - **AmountSource**: provenance tag recording which fallback rule
//!   produced the matched total amount

pub mod invoice;

pub use invoice::*;
