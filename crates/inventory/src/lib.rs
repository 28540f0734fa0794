//! Inventory module.
//!
//! An ordered, in-memory collection of products plus the fixed-column text
//! report rendered from it. The report writer is the only piece that does IO.

pub mod collection;
pub mod report;

pub use collection::{Inventory, total_value};
pub use report::{ReportError, render_report, write_report};
