//! Plain-text output: list literals and counts, one value per line.

use crate::scan::ScanReport;
use std::fmt::Write;

/// Render the report in the fixed order: encode list, encode count,
/// preempted list. With `with_counters`, the recompute and decoder tallies
/// follow on two more lines.
pub fn render_report(report: &ScanReport, with_counters: bool) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", list_literal(&report.encode_ips));
    let _ = writeln!(out, "{}", report.encode_count());
    let _ = writeln!(out, "{}", list_literal(&report.preempted_ips));
    if with_counters {
        let _ = writeln!(out, "recompute: {}", report.recompute_times);
        let _ = writeln!(out, "decoder: {}", report.decoder_times);
    }
    out
}

/// `['a', 'b']`, or `[]` when empty.
pub fn list_literal(items: &[String]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| quote(s)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Single quotes unless the value contains `'` and no `"`.
fn quote(s: &str) -> String {
    let q = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(q);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == q => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => escape_code_point(&mut out, c),
            c => out.push(c),
        }
    }
    out.push(q);
    out
}

/// Controls, separators other than the plain space, and the common
/// format/private-use code points are not printed raw.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{e000}'..='\u{f8ff}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
            | '\u{f0000}'..='\u{10ffff}'
    )
}

/// `\xNN`, `\uNNNN` or `\UNNNNNNNN` depending on the code point width.
fn escape_code_point(out: &mut String, c: char) {
    let cp = c as u32;
    let _ = if cp <= 0xff {
        write!(out, "\\x{:02x}", cp)
    } else if cp <= 0xffff {
        write!(out, "\\u{:04x}", cp)
    } else {
        write!(out, "\\U{:08x}", cp)
    };
}
