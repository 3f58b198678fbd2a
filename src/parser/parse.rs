//! Optimal (shortest-path) parsing.
//!
//! Grounded on `examples/original_source/zxpac4/src/zxpac4.cpp::lz_parse`:
//! a forward relaxation pass that, for every position, considers a literal
//! edge and every match candidate the matcher reports, followed by a
//! backward pass that walks the cheapest-arrival chain from the end of the
//! buffer back to the start, recovering the token sequence in order.

use crate::compress::Config;
use crate::cost::CostModel;
use crate::matcher::{find_matches, MatcherContext};
use crate::parser::node::{Arrival, Node};
use crate::stats::Stats;

/// Extends `buf[pos..]` against `buf[pos - pmr_offset..]` as far as it can,
/// independent of whatever the hash chain matcher found (spec §4.3.3's "PMR
/// probe") — catches matches at the carried-over offset that the chain may
/// have missed or evicted.
fn pmr_probe(buf: &[u8], pos: usize, pmr_offset: usize, max_match: usize) -> Option<usize> {
    if pmr_offset == 0 || pos < pmr_offset {
        return None;
    }
    let src = pos - pmr_offset;
    let max_len = (buf.len() - pos).min(max_match);
    let mut len = 0;
    while len < max_len && buf[src + len] == buf[pos + len] {
        len += 1;
    }
    if len > 0 {
        Some(len)
    } else {
        None
    }
}

/// One emitted token, either a literal byte or a back-reference match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Literal(u8),
    Match { offset: usize, length: usize },
}

/// Runs the optimal parser over `buf`, returning the chosen token sequence
/// and the statistics gathered while recovering it.
pub fn parse(buf: &[u8], config: &Config) -> (Vec<Token>, Stats) {
    let n = buf.len();
    let cost_model = CostModel::new(config.is_ascii);
    let mut nodes = vec![Node::unreachable(); n + 1];
    nodes[0] = Node::start(config.initial_pmr_offset);

    let mut matcher = MatcherContext::new(n);
    let prefer_pmr_ties = config.backward_steps > 0;

    for pos in 0..n {
        if !nodes[pos].is_reachable() {
            continue;
        }
        let entering_pmr = nodes[pos].pmr_offset;
        let prev_was_literal = matches!(nodes[pos].arrival, Arrival::Literal);

        // Literal edge: pos -> pos + 1. When the byte at `pos` happens to
        // equal the PMR-predicted byte, a length-1 PMR match encodes it more
        // cheaply than an ordinary literal (spec §4.3.1).
        let pmr_byte_matches =
            entering_pmr != 0 && pos >= entering_pmr && buf[pos] == buf[pos - entering_pmr];
        let lit_cost = if pmr_byte_matches {
            nodes[pos].cost + cost_model.match_cost(1, entering_pmr, entering_pmr)
        } else {
            nodes[pos].cost + cost_model.literal_cost(prev_was_literal)
        };
        let lit_arrival = if pmr_byte_matches {
            Arrival::Match { offset: entering_pmr, length: 1 }
        } else {
            Arrival::Literal
        };
        relax(&mut nodes, pos + 1, lit_cost, lit_arrival, entering_pmr, prefer_pmr_ties);

        // Match edges: pos -> pos + length, for every candidate the matcher offers.
        let candidates = find_matches(&mut matcher, buf, pos, config);
        for cand in candidates {
            let cost = nodes[pos].cost
                + cost_model.match_cost(cand.length, cand.offset, entering_pmr);
            relax(
                &mut nodes,
                pos + cand.length,
                cost,
                Arrival::Match { offset: cand.offset, length: cand.length },
                cand.offset,
                prefer_pmr_ties,
            );
        }

        // PMR probe: independent of the hash chain, extend the match at the
        // carried-over PMR offset as far as it goes (spec §4.3.3).
        if let Some(len) = pmr_probe(buf, pos, entering_pmr, config.max_match) {
            if len >= config.min_match {
                let cost = nodes[pos].cost + cost_model.match_cost(len, entering_pmr, entering_pmr);
                relax(
                    &mut nodes,
                    pos + len,
                    cost,
                    Arrival::Match { offset: entering_pmr, length: len },
                    entering_pmr,
                    prefer_pmr_ties,
                );
            }
        }
    }

    recover(buf, &nodes, config)
}

/// Updates `nodes[target]` if `cost` improves on (or, when `prefer_pmr_ties`
/// is set and the edge preserves the incoming PMR offset, ties) the best
/// cost recorded so far.
#[allow(clippy::too_many_arguments)]
fn relax(
    nodes: &mut [Node],
    target: usize,
    cost: u32,
    arrival: Arrival,
    pmr_offset: usize,
    prefer_pmr_ties: bool,
) {
    let current = &nodes[target];
    let strictly_better = cost < current.cost;
    let tie_prefers_pmr =
        prefer_pmr_ties && cost == current.cost && pmr_offset == current.pmr_offset;
    if strictly_better || tie_prefers_pmr {
        nodes[target] = Node { cost, arrival, pmr_offset };
    }
}

/// Walks the cheapest-arrival chain from the end of the buffer back to the
/// start, recovering the token sequence in forward order and the statistics
/// describing it.
fn recover(buf: &[u8], nodes: &[Node], config: &Config) -> (Vec<Token>, Stats) {
    let mut tokens = Vec::new();
    let mut stats = Stats {
        input_len: buf.len(),
        ..Stats::default()
    };

    let mut pos = buf.len();
    // Walk the cheapest-arrival chain backward, then reverse into forward order.
    while pos > 0 {
        match nodes[pos].arrival {
            Arrival::Start => unreachable!("position 0 reached before pos == 0"),
            Arrival::Literal => {
                tokens.push(Token::Literal(buf[pos - 1]));
                pos -= 1;
            }
            Arrival::Match { offset, length } => {
                tokens.push(Token::Match { offset, length });
                pos -= length;
            }
        }
    }
    tokens.reverse();

    // Replay forward, tracking the entering PMR offset at each step, to
    // collect the statistics spec §6 asks the driver to report.
    let mut entering_pmr = config.initial_pmr_offset;
    let mut src_pos = 0usize;
    for token in &tokens {
        match *token {
            Token::Literal(byte) => {
                stats.num_literals += 1;
                if src_pos >= entering_pmr && buf[src_pos - entering_pmr] == byte {
                    stats.num_pmr_literals += 1;
                }
                src_pos += 1;
            }
            Token::Match { offset, length } => {
                stats.num_matches += 1;
                stats.num_matched_bytes += length;
                if offset == entering_pmr {
                    stats.num_pmr_matches += 1;
                }
                entering_pmr = offset;
                src_pos += length;
            }
        }
    }

    (tokens, stats)
}
