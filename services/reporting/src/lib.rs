//! Factura Reporting
//!
//! Renders the batch of extracted invoice records into the tabular report
//! that gets emailed to the recipients. Row order is whatever order the
//! caller supplies records in; the pipeline feeds them sorted by filename.

pub mod report;

pub use report::{numeric_cell, ReportWriter, REPORT_COLUMNS};
