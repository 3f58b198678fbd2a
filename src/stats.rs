//! Compression statistics collected by the optimal parser and bit encoder.
//!
//! Grounded on the bookkeeping counters `zxpac4::lz_parse` and
//! `zxpac4::encode_history` accumulate in the original sources
//! (`m_num_literals`, `m_num_pmr_literals`, `m_num_matches`,
//! `m_num_matched_bytes`, `m_num_pmr_matches`), surfaced here as a plain
//! value type the driver can report to the CLI at higher verbosity levels.

/// Counters describing how an input buffer was encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Number of literal bytes emitted.
    pub num_literals: usize,
    /// Number of literals whose byte happened to match the PMR-predicted byte.
    pub num_pmr_literals: usize,
    /// Number of match tokens emitted.
    pub num_matches: usize,
    /// Number of match tokens whose offset equals the carried PMR offset.
    pub num_pmr_matches: usize,
    /// Total number of bytes covered by match tokens.
    pub num_matched_bytes: usize,
    /// Largest positive value of `bytes_written - bytes_consumed` observed
    /// while encoding, i.e. the safety distance an in-place decompressor
    /// would need (spec §4.4/§4.5).
    pub max_security_distance: isize,
    /// Length, in bytes, of the encoded output (set once encoding finishes).
    pub encoded_len: usize,
    /// Length, in bytes, of the original input.
    pub input_len: usize,
}

impl Stats {
    /// Ratio of `encoded_len` to `input_len`, or `1.0` when the input is empty.
    pub fn ratio(&self) -> f64 {
        if self.input_len == 0 {
            1.0
        } else {
            self.encoded_len as f64 / self.input_len as f64
        }
    }
}
