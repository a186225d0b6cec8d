//! Fixed markers emitted by the frontend workers and the preemption monitor.
//!
//! Example lines:
//! ```text
//! [INFO] Encode id: 17, Choose backend IP: 10.0.0.4 to send data
//! new preempted nodes size:1
//! 10.0.0.9
//! CDC query 3 recompute!
//! decoder performed ~
//! ```

pub const CHOOSE_BACKEND_IP: &str = "Choose backend IP:";
pub const ENCODE_ID: &str = "Encode id:";
/// Only single-node preemptions carry the IP on the next line.
pub const PREEMPTED_NODES: &str = "new preempted nodes size:1";
pub const RECOMPUTE: &str = "recompute!";
pub const DECODER_PERFORMED: &str = "decoder performed ~";

/// What a single line contributes to the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Encode scheduling decision with the chosen backend IP token.
    Encode { ip: &'a str },
    /// Both encode markers are present but nothing follows the IP marker.
    EncodeWithoutToken,
    /// Preemption notice; the IP is on the next physical line.
    PreemptMarker,
    Recompute,
    Decoder,
    Other,
}

/// Classify one line. Checks are exclusive and evaluated in priority order.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.contains(CHOOSE_BACKEND_IP) && line.contains(ENCODE_ID) {
        return match encode_token(line) {
            Some(ip) => LineKind::Encode { ip },
            None => LineKind::EncodeWithoutToken,
        };
    }
    if line.contains(PREEMPTED_NODES) {
        LineKind::PreemptMarker
    } else if line.contains(RECOMPUTE) {
        LineKind::Recompute
    } else if line.contains(DECODER_PERFORMED) {
        LineKind::Decoder
    } else {
        LineKind::Other
    }
}

/// Token separator: Unicode whitespace plus the ASCII information
/// separators `\x1c`..=`\x1f`.
pub fn is_log_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// First whitespace-delimited token between the first IP marker and the next
/// one (or end of line). Not validated as an address.
fn encode_token(line: &str) -> Option<&str> {
    line.split(CHOOSE_BACKEND_IP)
        .nth(1)?
        .split(is_log_whitespace)
        .find(|s| !s.is_empty())
}
