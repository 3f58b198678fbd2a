//! Reference decoder.
//!
//! This is test/verification tooling, not a target-platform artifact — the
//! original sources' self-extracting decompressor payloads for 8/16-bit
//! targets are explicitly out of scope (spec §1's Non-goals). Round-trip
//! correctness (spec §8, property 1) is untestable without *some* decoder,
//! so this crate carries a portable one purely to drive its own test suite,
//! implementing the exact inverse of [`crate::encoder::encode`].

use crate::cost::LENGTH_MAX_TIER;
use crate::cost::offset as offset_code;
use crate::encoder::HEADER_SIZE;
use crate::error::DecodeError;

struct BitReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
    last_literal_byte_pos: Option<usize>,
}

impl<'a> BitReader<'a> {
    fn new(data: &'a [u8]) -> Self {
        BitReader { data, bit_pos: 0, last_literal_byte_pos: None }
    }

    fn read_bit(&mut self) -> Result<u8, DecodeError> {
        self.last_literal_byte_pos = None;
        let byte_idx = self.bit_pos / 8;
        let bit_idx = self.bit_pos % 8;
        let byte = *self.data.get(byte_idx).ok_or(DecodeError::Truncated)?;
        self.bit_pos += 1;
        Ok((byte >> (7 - bit_idx)) & 1)
    }

    fn read_bits(&mut self, n: u32) -> Result<u64, DecodeError> {
        let mut value = 0u64;
        for _ in 0..n {
            value = (value << 1) | self.read_bit()? as u64;
        }
        Ok(value)
    }

    fn align_to_byte(&mut self) {
        if self.bit_pos % 8 != 0 {
            self.bit_pos = (self.bit_pos / 8 + 1) * 8;
        }
    }

    fn read_literal_byte(&mut self, ascii: bool) -> Result<u8, DecodeError> {
        if ascii {
            self.align_to_byte();
            let byte_idx = self.bit_pos / 8;
            let byte = *self.data.get(byte_idx).ok_or(DecodeError::Truncated)?;
            self.bit_pos += 8;
            self.last_literal_byte_pos = Some(byte_idx);
            Ok(byte >> 1)
        } else {
            Ok(self.read_bits(8)? as u8)
        }
    }

    fn read_tag(&mut self, ascii: bool) -> Result<u8, DecodeError> {
        if ascii {
            if let Some(pos) = self.last_literal_byte_pos.take() {
                return Ok(self.data[pos] & 1);
            }
        }
        self.read_bit()
    }

    fn read_tiered_value(&mut self, max_tier: u32) -> Result<u64, DecodeError> {
        let mut tier = 0u32;
        loop {
            if tier == max_tier {
                break;
            }
            if self.read_bit()? == 0 {
                break;
            }
            tier += 1;
        }
        let base = (1u64 << tier) - 1;
        let extra = self.read_bits(tier)?;
        Ok(base + extra)
    }

    /// Reads an offset encoded by the byte-plus-tiered-prefix layout (the
    /// inverse of the encoder's offset writer, see `src/cost/offset.rs`).
    fn read_offset_value(&mut self) -> Result<u64, DecodeError> {
        let flag = self.read_bit()?;
        let low7 = self.read_bits(7)?;
        if flag == 0 {
            return Ok(low7);
        }
        let mut leading_ones = 0u32;
        while leading_ones < 4 {
            if self.read_bit()? == 0 {
                break;
            }
            leading_ones += 1;
        }
        let selector = self.read_bit()?;
        let tier = leading_ones * 2 + selector as u32;
        let high = self.read_bits(tier)?;
        Ok(offset_code::bracket_lo(tier) + (high << 7) + low7)
    }
}

/// Decodes a buffer produced by [`crate::encoder::encode`] (with
/// `config.reversed == false`) back into the original input bytes. For a
/// stream produced with `reversed == true`, call [`decompress_reversed`]
/// instead — per spec §6 the reversal flag is carried out-of-band by
/// whichever convention the caller and encoder agreed on, not inside the
/// header itself.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    if input.len() < HEADER_SIZE {
        return Err(DecodeError::TruncatedHeader);
    }

    let flags = input[0];
    let is_ascii = flags & 0x80 != 0;
    let initial_pmr_offset = (flags & 0x7f) as usize;
    let decoded_len =
        u32::from_be_bytes([0, input[1], input[2], input[3]]) as usize;

    let mut out = Vec::with_capacity(decoded_len);
    let mut reader = BitReader::new(&input[HEADER_SIZE..]);
    let mut pmr_offset = initial_pmr_offset;

    while out.len() < decoded_len {
        let tag = reader.read_tag(is_ascii)?;
        if tag == 0 {
            let byte = reader.read_literal_byte(is_ascii)?;
            out.push(byte);
        } else {
            let is_pmr = reader.read_bit()? == 1;
            // Matches write their length code as `length - 1` (spec §4.3's
            // wire-format quirk); this also lets a length-1 PMR match
            // (§4.3.1) share the same code space without colliding with
            // ordinary matches, since those never produce length 1 when
            // `min_match > 1`.
            let length = reader.read_tiered_value(LENGTH_MAX_TIER)? as usize + 1;
            let offset = if is_pmr {
                pmr_offset
            } else {
                reader.read_offset_value()? as usize
            };
            if offset > out.len() {
                return Err(DecodeError::InvalidBackReference { pos: out.len(), offset });
            }
            pmr_offset = offset;
            for _ in 0..length {
                let byte = out[out.len() - offset];
                out.push(byte);
            }
        }
    }

    Ok(out)
}

/// Decodes a buffer produced by [`crate::encoder::encode`] with
/// `config.reversed == true`: un-reverses the whole header+body byte stream
/// first, then decodes normally (spec §6: "the companion decoder reads it
/// backward").
pub fn decompress_reversed(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let mut forward = input.to_vec();
    forward.reverse();
    decompress(&forward)
}
