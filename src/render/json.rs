use crate::scan::ScanReport;

/// Pretty-printed JSON of the full report, counters included.
pub fn render_report(report: &ScanReport) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
