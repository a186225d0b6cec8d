//! Stdout renderings of a scan report.

pub mod json;
pub mod text;
