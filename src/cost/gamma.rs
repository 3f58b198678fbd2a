//! Shared unary-pair prefix code used by both the length and offset codes.
//!
//! Grounded on the ASCII-art bit-pattern tables in
//! `examples/original_source/zxpac4/inc/zxpac4.h` (matchlen codes
//! `0`/`10`/`110`/.../`1111111`, offset codes `0+nnnnnnn`
//! through `111111+nnnnnnnnn`): a value is split into a "tier" — the number
//! of doublings needed to reach it — written as that many `1` bits followed
//! by a `0` terminator (the highest tier omits the terminator, since the
//! value range is already bounded), followed by that many extra bits holding
//! the value's offset within the tier.
//!
//! This crate's encoder and reference decoder only need to agree with each
//! other (there is no requirement to interoperate with the original tool's
//! binary format), so the exact bit widths below are a self-consistent
//! reimplementation rather than a byte-for-byte port of `cost4c.cpp`'s
//! literal table.

/// Tier and within-tier offset for `value` (`value >= 0`), with tiers capped
/// at `max_tier` (the highest tier drops its terminator bit, so it must be
/// wide enough to hold every value the caller can produce).
#[inline]
pub fn tier_of(value: u64, max_tier: u32) -> (u32, u64) {
    let mut tier = 0u32;
    while tier < max_tier && value >= (1u64 << (tier + 1)) - 1 {
        tier += 1;
    }
    let base = (1u64 << tier) - 1;
    (tier, value - base)
}

/// Number of bits the code for `tier` occupies, including the unary prefix.
#[inline]
pub fn tier_cost_bits(tier: u32, max_tier: u32) -> u32 {
    if tier >= max_tier {
        2 * tier
    } else {
        2 * tier + 1
    }
}

/// Total bit cost of encoding `value` at the given `max_tier`.
#[inline]
pub fn cost_bits(value: u64, max_tier: u32) -> u32 {
    let (tier, _) = tier_of(value, max_tier);
    tier_cost_bits(tier, max_tier)
}
