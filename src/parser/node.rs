//! A single node of the parser's cost-arrival array.
//!
//! One node per input position `0..=len`, mirroring
//! `examples/original_source/zxpac4/src/zxpac4.cpp`'s `m_cost_array` (an
//! arrival-cost table indexed by position) and the `Lz4HcOptimal` struct of
//! `jafreck-lz4r/src/hc/compress_hc.rs`'s `compress_optimal` — the closest
//! existing Rust analogue, generalized here from a bounded lookahead window
//! to one entry per position in the whole buffer, as spec §3 requires.

/// The edge used to arrive at a position in the shortest-path parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrival {
    /// The start of the buffer; no edge arrives here.
    Start,
    /// Arrived via a single literal byte.
    Literal,
    /// Arrived via a match of the given `(offset, length)`.
    Match { offset: usize, length: usize },
}

/// One entry of the parser's cost-arrival table.
#[derive(Debug, Clone, Copy)]
pub struct Node {
    /// Total bit cost of the cheapest path found so far from position 0.
    pub cost: u32,
    /// The edge used to reach this position along that cheapest path.
    pub arrival: Arrival,
    /// The PMR (previous match reference) offset in effect after arriving
    /// at this position along the cheapest path.
    pub pmr_offset: usize,
}

impl Node {
    pub const UNREACHABLE: u32 = u32::MAX;

    pub fn unreachable() -> Self {
        Node {
            cost: Self::UNREACHABLE,
            arrival: Arrival::Start,
            pmr_offset: 0,
        }
    }

    pub fn start(initial_pmr_offset: usize) -> Self {
        Node {
            cost: 0,
            arrival: Arrival::Start,
            pmr_offset: initial_pmr_offset,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.cost != Self::UNREACHABLE
    }
}
