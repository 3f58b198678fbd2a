//! Token stream encoding: header, gamma-coded length, byte-plus-tiered-prefix
//! offset, ASCII piggyback, security-distance tracking, and the
//! compression-failure check.
//!
//! Grounded on `examples/original_source/zxpac4/src/zxpac4.cpp::encode_history`:
//! header byte (`ascii` flag in bit 7, initial PMR offset in bits 6..0) +
//! 3-byte big-endian decompressed length, followed by one tag bit per token,
//! the gamma-coded length payload, and the offset payload from
//! `examples/original_source/zxpac4/inc/zxpac4.h:53-64`'s table (see
//! `src/cost/offset.rs`). `config.reversed` is applied afterwards, to the
//! whole header+body byte stream (spec §6), so it never touches this
//! header's bit layout.

use crate::compress::Config;
use crate::cost::LENGTH_MAX_TIER;
use crate::cost::gamma::tier_of;
use crate::cost::offset as offset_code;
use crate::encoder::bitwriter::BitWriter;
use crate::error::CompressError;
use crate::parser::Token;
use crate::stats::Stats;

/// Number of header bytes: 1 flags/PMR byte + 3 big-endian length bytes.
pub const HEADER_SIZE: usize = 4;

fn write_tiered_value(bw: &mut BitWriter, value: u64, max_tier: u32) {
    let (tier, extra) = tier_of(value, max_tier);
    for _ in 0..tier {
        bw.write_bit(1);
    }
    if tier < max_tier {
        bw.write_bit(0);
    }
    bw.write_bits(extra, tier);
}

/// Writes an offset using the byte-plus-tiered-prefix layout (the inverse of
/// `BitReader::read_offset_value` in `src/decoder.rs`): offsets `1..=127`
/// store directly as a flag bit (`0`) plus 7 raw bits; larger offsets set
/// the flag bit, store the low 7 bits of their within-bracket value, then a
/// tiered prefix selecting the bracket, then the remaining high bits.
fn write_offset_value(bw: &mut BitWriter, offset: u64) {
    if offset <= 127 {
        bw.write_bit(0);
        bw.write_bits(offset, 7);
        return;
    }
    bw.write_bit(1);
    let (tier, extra) = offset_code::tier_of(offset);
    let low7 = extra & 0x7f;
    let high = extra >> 7;
    bw.write_bits(low7, 7);
    let (leading_ones, has_terminator, selector) = offset_code::prefix_shape(tier);
    for _ in 0..leading_ones {
        bw.write_bit(1);
    }
    if has_terminator {
        bw.write_bit(0);
    }
    bw.write_bit(selector);
    bw.write_bits(high, tier);
}

/// Encodes `tokens` (as produced by [`crate::parser::parse`]) into the wire
/// format described in spec §6, updating `stats` with the security distance
/// observed along the way.
///
/// Returns [`CompressError::Incompressible`] when the encoded body would not
/// be smaller than `input_len`.
pub fn encode(
    tokens: &[Token],
    input_len: usize,
    config: &Config,
    stats: &mut Stats,
) -> Result<Vec<u8>, CompressError> {
    let mut bw = BitWriter::new();
    let mut consumed = 0usize;
    let mut max_distance: isize = 0;
    let mut entering_pmr = config.initial_pmr_offset;

    for token in tokens {
        match *token {
            Token::Literal(byte) => {
                bw.write_tag(0, config.is_ascii);
                bw.write_literal_byte(byte, config.is_ascii);
                consumed += 1;
            }
            Token::Match { offset, length } => {
                bw.write_tag(1, config.is_ascii);
                let is_pmr = offset == entering_pmr;
                bw.write_bit(if is_pmr { 1 } else { 0 });
                write_tiered_value(&mut bw, (length - 1) as u64, LENGTH_MAX_TIER);
                if !is_pmr {
                    write_offset_value(&mut bw, offset as u64);
                }
                entering_pmr = offset;
                consumed += length;
            }
        }
        let distance = bw.byte_len() as isize + HEADER_SIZE as isize - consumed as isize;
        max_distance = max_distance.max(distance);
    }

    stats.max_security_distance = max_distance;

    let body = bw.finish();
    let total_len = HEADER_SIZE + body.len();
    if total_len >= input_len {
        return Err(CompressError::Incompressible);
    }

    let mut out = Vec::with_capacity(total_len);
    let flags = if config.is_ascii { 0x80u8 } else { 0 };
    out.push(flags | (config.initial_pmr_offset as u8 & 0x7f));
    out.extend_from_slice(&(input_len as u32).to_be_bytes()[1..4]);
    out.extend_from_slice(&body);

    stats.encoded_len = out.len();
    Ok(out)
}
