//! Line scanner for frontend/monitor logs.

pub mod marker;
pub mod parse;
pub mod report;

pub use marker::{LineKind, classify};
pub use parse::{scan, scan_text, split_lines};
pub use report::ScanReport;
