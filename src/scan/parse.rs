use crate::error::ScanError;
use crate::scan::marker::{LineKind, classify, is_log_whitespace};
use crate::scan::report::ScanReport;

use std::fs;
use std::path::Path;
use tracing::{debug, trace, warn};

/// Read a log file and scan it.
///
/// The whole file is read and decoded before scanning, so an invalid byte
/// anywhere fails the scan without partial results.
pub fn scan(path: impl AsRef<Path>) -> Result<ScanReport, ScanError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| ScanError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| ScanError::Decoding {
        path: path.to_path_buf(),
        source,
    })?;

    let report = scan_text(&text);
    debug!(
        path = %path.display(),
        lines = report.lines,
        encode = report.encode_ips.len(),
        preempted = report.preempted_ips.len(),
        recompute = report.recompute_times,
        decoder = report.decoder_times,
        "scanned log file"
    );
    Ok(report)
}

/// Scan already-loaded log text.
pub fn scan_text(text: &str) -> ScanReport {
    let lines = split_lines(text);
    let mut report = ScanReport {
        lines: lines.len(),
        ..ScanReport::default()
    };

    for (i, line) in lines.iter().enumerate() {
        let lno = i + 1;
        let kind = classify(line);
        trace!(lno, ?kind, "classified line");

        match kind {
            LineKind::Encode { ip } => report.encode_ips.push(ip.to_string()),
            LineKind::EncodeWithoutToken => {
                warn!(lno, "encode decision has no backend IP token, skipping");
            }
            // The next line is still classified on its own in the following iteration.
            LineKind::PreemptMarker => match lines.get(i + 1) {
                Some(next) => report
                    .preempted_ips
                    .push(next.trim_matches(is_log_whitespace).to_string()),
                None => debug!(lno, "preemption notice on last line, no IP follows"),
            },
            LineKind::Recompute => report.recompute_times += 1,
            LineKind::Decoder => report.decoder_times += 1,
            LineKind::Other => {}
        }
    }

    report
}

/// Split on `\n`, `\r\n` and lone `\r`. A trailing terminator does not start
/// an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SCENARIO: &str = "\
Choose backend IP: 10.0.0.1 x Encode id: 1
new preempted nodes size:1
10.0.0.2
recompute!
decoder performed ~something
Choose backend IP: 10.0.0.3 x Encode id: 2
";

    #[test]
    fn end_to_end_scenario() {
        let report = scan_text(SCENARIO);
        assert_eq!(report.encode_ips, vec!["10.0.0.1", "10.0.0.3"]);
        assert_eq!(report.encode_count(), 2);
        assert_eq!(report.preempted_ips, vec!["10.0.0.2"]);
        assert_eq!(report.recompute_times, 1);
        assert_eq!(report.decoder_times, 1);
        assert_eq!(report.lines, 6);
    }

    #[test]
    fn no_markers_gives_empty_report() {
        let report = scan_text("hello\nworld\n\n");
        assert_eq!(
            report,
            ScanReport {
                lines: 3,
                ..ScanReport::default()
            }
        );
        assert_eq!(scan_text(""), ScanReport::default());
    }

    #[test]
    fn preempted_ip_is_trimmed_next_line() {
        let report = scan_text("new preempted nodes size:1\n   192.168.1.1 \t\n");
        assert_eq!(report.preempted_ips, vec!["192.168.1.1"]);
    }

    #[test]
    fn preempted_ip_trims_ascii_separators() {
        let report = scan_text("new preempted nodes size:1\n\x1e10.0.0.2\x1c\n");
        assert_eq!(report.preempted_ips, vec!["10.0.0.2"]);
    }

    #[test]
    fn preempt_marker_on_last_line_is_skipped() {
        let report = scan_text("new preempted nodes size:1\n10.0.0.7\nnew preempted nodes size:1");
        assert_eq!(report.preempted_ips, vec!["10.0.0.7"]);

        let report = scan_text("new preempted nodes size:1\n");
        assert!(report.preempted_ips.is_empty());
    }

    #[test]
    fn blank_line_after_marker_is_kept_as_empty_entry() {
        let report = scan_text("new preempted nodes size:1\n\nrest\n");
        assert_eq!(report.preempted_ips, vec![""]);
    }

    #[test]
    fn line_after_marker_is_classified_too() {
        let text = "new preempted nodes size:1\nEncode id: 9 Choose backend IP: 10.1.1.1 x\n";
        let report = scan_text(text);
        assert_eq!(
            report.preempted_ips,
            vec!["Encode id: 9 Choose backend IP: 10.1.1.1 x"]
        );
        assert_eq!(report.encode_ips, vec!["10.1.1.1"]);
    }

    #[test]
    fn consecutive_markers_chain() {
        let text = "new preempted nodes size:1\nnew preempted nodes size:1\n10.0.0.8\n";
        let report = scan_text(text);
        assert_eq!(
            report.preempted_ips,
            vec!["new preempted nodes size:1", "10.0.0.8"]
        );
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let text = "\
Encode id: 1, Choose backend IP: 10.0.0.2 to send data
Encode id: 2, Choose backend IP: 10.0.0.1 to send data
Encode id: 3, Choose backend IP: 10.0.0.2 to send data
";
        let report = scan_text(text);
        assert_eq!(report.encode_ips, vec!["10.0.0.2", "10.0.0.1", "10.0.0.2"]);
    }

    #[test]
    fn encode_line_without_token_is_skipped() {
        let report = scan_text("Encode id: 1 Choose backend IP:\nEncode id: 2 Choose backend IP: 10.0.0.4\n");
        assert_eq!(report.encode_ips, vec!["10.0.0.4"]);
    }

    #[test]
    fn crlf_and_cr_match_lf() {
        let crlf = SCENARIO.replace('\n', "\r\n");
        let cr = SCENARIO.replace('\n', "\r");
        assert_eq!(scan_text(&crlf), scan_text(SCENARIO));
        assert_eq!(scan_text(&cr), scan_text(SCENARIO));
    }

    #[test]
    fn split_lines_terminators() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("\r\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn scan_is_idempotent() {
        assert_eq!(scan_text(SCENARIO), scan_text(SCENARIO));
    }
}
