//! Offset prefix code.
//!
//! Grounded on `examples/original_source/zxpac4/inc/zxpac4.h:53-64`'s
//! documented offset table: a one-byte field (`X` flag bit + 7 bits) handles
//! offsets 1..127 directly (`0+nnnnnnn`); larger offsets set the flag bit,
//! store the low 7 bits of their within-bracket value in that same byte
//! (`1+nnnnnnn`), then a tiered prefix code selects which power-of-two
//! bracket the offset falls in and carries its remaining high bits.
//!
//! Unlike the [`crate::cost::gamma`] length code, whose prefix grows by one
//! `1` bit per tier, this code's brackets double in size only every *two*
//! tiers (128, 256, 512, 1024, 2048, 4096, 8192, 16384, 32768, 65536), so its
//! prefix grows by one bit every second tier: `00`/`01` (2 bits),
//! `100`/`101` (3 bits), `1100`/`1101` (4 bits), `11100`/`11101` (5 bits),
//! `11110`/`11111` (5 bits, the last pair dropping the terminator its group
//! would otherwise need, mirroring the length code's top-tier rule, since no
//! tier follows it). The distilled spec's offset table mistranscribes the
//! `8192..32767` brackets as 4-bit `1110`/`1111` prefixes, which collide with
//! the 5-bit `11110`/`11111` prefixes used just below — a code can't use
//! `1111` as both a complete codeword and a prefix of `11110`/`11111`, so
//! this module follows the original header's literal bit patterns instead,
//! which are the self-consistent (Kraft-valid) reading.

/// Largest offset this code can represent: tier 9's bracket ceiling
/// (2^17 - 1), matching this crate's `window_size` ceiling (`Config::validate`).
pub const MAX_OFFSET: u64 = 131_071;

/// Highest tier index the code supports.
const MAX_TIER: u32 = 9;

/// Splits an offset `>= 128` into its bracket tier (0..=9) and the value
/// within that bracket (`offset - bracket_lo(tier)`).
pub fn tier_of(offset: u64) -> (u32, u64) {
    let mut tier = 0u32;
    let mut lo = 128u64;
    while tier < MAX_TIER && offset >= lo * 2 {
        lo *= 2;
        tier += 1;
    }
    (tier, offset - lo)
}

/// Lower bound of the bracket for `tier` (`128 * 2^tier`).
pub fn bracket_lo(tier: u32) -> u64 {
    128u64 << tier
}

/// Bit length of `tier`'s prefix code. Tiers pair up two-by-two
/// (`00`/`01`, `100`/`101`, ...); the final pair (tiers 8 and 9) drops the
/// `0` terminator its group would otherwise need, since no tier follows it.
pub fn prefix_len(tier: u32) -> u32 {
    let group = tier / 2;
    if group < 4 {
        group + 2
    } else {
        group + 1
    }
}

/// Decomposes `tier`'s prefix code into the number of leading `1` bits, a
/// dropped-terminator flag (whether a `0` is written after those ones), and
/// the single selector bit distinguishing the two tiers sharing that prefix.
pub fn prefix_shape(tier: u32) -> (u32, bool, u8) {
    let group = tier / 2;
    let leading_ones = group.min(4);
    let has_terminator = group < 4;
    let selector = (tier % 2) as u8;
    (leading_ones, has_terminator, selector)
}

/// Total bit cost of encoding `offset`, excluding the match token's own
/// `1 0` tag bits.
pub fn cost_bits(offset: u64) -> u32 {
    if offset <= 127 {
        8
    } else {
        let (tier, _) = tier_of(offset);
        8 + prefix_len(tier) + tier
    }
}
