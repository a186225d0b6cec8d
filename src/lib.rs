//! Extract backend IP assignments from serving-system frontend logs.
//!
//! The scan is a single pass over the log lines: encode scheduling decisions
//! yield the chosen backend IP, preemption notices yield the IP printed on the
//! following line, and recompute/decoder lines are tallied.

pub mod error;
pub mod logging;
pub mod render;
pub mod scan;

pub use error::ScanError;
pub use scan::{ScanReport, scan, scan_text};
