//! Chained hash-table match search.
//!
//! Grounded on `examples/original_source/zxpac4/src/hash.cpp`'s
//! `hash3::impl_find_matches`: walk the hash chain for the current position's
//! 2-byte prefix, extend each candidate into a full match length, keep only
//! matches that improve on the best found so far, and stop early once a
//! `good_match`-length match is found or the chain is exhausted (bounded by
//! `max_chain` links). The chain is (re)inserted at the end of the call, the
//! same order the original uses.

use crate::compress::Config;
use crate::matcher::types::{Match, MatcherContext};

/// Extends a candidate at `cand` against the current position `pos`,
/// returning the number of bytes that match (capped at `max_match`).
fn count_match(buf: &[u8], pos: usize, cand: usize, max_match: usize) -> usize {
    let max_len = (buf.len() - pos).min(max_match);
    let mut len = 0;
    while len < max_len && buf[cand + len] == buf[pos + len] {
        len += 1;
    }
    len
}

/// Searches for back-reference candidates at `pos`, returning them ordered by
/// strictly increasing length (spec §3's "Candidate set": one entry per
/// length worth considering, each with the smallest offset that achieves it).
///
/// Returns an empty vector when fewer than `min_match` bytes remain, or when
/// no candidate reaches `min_match`.
pub fn find_matches(
    ctx: &mut MatcherContext,
    buf: &[u8],
    pos: usize,
    config: &Config,
) -> Vec<Match> {
    let mut candidates = Vec::new();

    if buf.len() - pos >= config.min_match {
        let mut best_len = config.min_match - 1;
        let mut cand = ctx.chain_head(buf, pos);
        let min_pos = pos.saturating_sub(config.window_size);
        let mut chain_steps = 0;

        while cand >= 0 && (cand as usize) >= min_pos && chain_steps < config.max_chain {
            let cand_pos = cand as usize;
            let len = count_match(buf, pos, cand_pos, config.max_match);

            let improves = if config.only_better_matches {
                len > best_len
            } else {
                len >= best_len && len >= config.min_match
            };

            if len >= config.min_match && improves {
                best_len = len;
                candidates.push(Match {
                    offset: pos - cand_pos,
                    length: len,
                });
                if len >= config.good_match || len >= config.max_match - 1 {
                    break;
                }
            }

            cand = ctx.next_in_chain(cand_pos);
            chain_steps += 1;
        }
    }

    ctx.insert(buf, pos);
    candidates
}
