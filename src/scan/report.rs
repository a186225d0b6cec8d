use serde::Serialize;

/// Everything collected from one pass over a log file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Backend IPs chosen for encode queries, in file order.
    pub encode_ips: Vec<String>,
    /// IPs printed after single-node preemption notices, in file order.
    pub preempted_ips: Vec<String>,
    pub recompute_times: usize,
    pub decoder_times: usize,
    /// Physical lines scanned.
    pub lines: usize,
}

impl ScanReport {
    pub fn encode_count(&self) -> usize {
        self.encode_ips.len()
    }
}
