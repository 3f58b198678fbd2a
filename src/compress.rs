//! Compression driver: `Config`, validation, and the `compress` entry point.
//!
//! Grounded on `examples/original_source/zxpac4/src/zxpac4.cpp::lz_encode`
//! (buffer allocation, optional reversal, the overall compress lifecycle) and
//! `examples/original_source/zxpac4/inc/lz_base.h`'s `lz_config` struct for
//! the tunable set, expressed as a plain value type rather than being baked
//! into the CRTP `lz_base<Derived>` hierarchy spec §9 singles out for
//! replacement.

use crate::encoder::encode;
use crate::error::CompressError;
use crate::parser::parse;
use crate::stats::Stats;

/// Largest input this crate will compress in one call (spec §1).
pub const MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Tunable parameters shared by the matcher, cost model, and parser.
///
/// Mirrors `lz_config` from `examples/original_source/zxpac4/inc/lz_base.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum back-reference distance the matcher will consider.
    pub window_size: usize,
    /// Minimum match length the matcher will report.
    pub min_match: usize,
    /// Maximum match length; longer runs are split across multiple tokens.
    pub max_match: usize,
    /// Match length at or above which the matcher stops extending its search early.
    pub good_match: usize,
    /// Maximum number of hash-chain links walked per position.
    pub max_chain: usize,
    /// Number of positions the parser may look back when recovering an
    /// equal-cost, PMR-preserving alternative during relaxation.
    pub backward_steps: usize,
    /// Initial PMR offset assumed before the first token (fits in 6 bits of
    /// the wire header; see `encoder::encode`).
    pub initial_pmr_offset: usize,
    /// Only replace the matcher's current best candidate with a strictly
    /// longer one, rather than accepting equal-length alternatives.
    pub only_better_matches: bool,
    /// Treat the input as 7-bit ASCII text, enabling literal tag-bit
    /// piggybacking.
    pub is_ascii: bool,
    /// Reverse the finished output byte stream (header + body) after
    /// compressing, and un-reverse it before decompressing, for backward
    /// in-place decompression on the target.
    pub reversed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_size: 131_072,
            min_match: 2,
            max_match: 255,
            good_match: 63,
            max_chain: 256,
            backward_steps: 4,
            initial_pmr_offset: 5,
            only_better_matches: false,
            is_ascii: false,
            reversed: false,
        }
    }
}

impl Config {
    /// Validates the configuration's internal invariants.
    pub fn validate(&self) -> Result<(), CompressError> {
        if self.min_match < 2 {
            return Err(CompressError::InvalidConfig("min_match must be at least 2"));
        }
        if self.max_match < self.min_match {
            return Err(CompressError::InvalidConfig("max_match must be >= min_match"));
        }
        if self.max_match > 255 {
            return Err(CompressError::InvalidConfig("max_match must be <= 255"));
        }
        // spec §6 allows window_size up to 2^24 in general, but this crate's
        // fixed 17-tier offset code (the mature 17-bit-window `zxpac4`
        // variant of spec §4.2) can only address offsets up to 2 * (2^17 -
        // 1); capping here at 2^17 keeps every representable offset encodable
        // without silently truncating the offset code's extra-bits field.
        if self.window_size < 256 || self.window_size > 131_072 {
            return Err(CompressError::InvalidConfig(
                "window_size must be in [256, 131072] for the 17-bit offset code",
            ));
        }
        if !self.window_size.is_power_of_two() {
            return Err(CompressError::InvalidConfig("window_size must be a power of two"));
        }
        if self.initial_pmr_offset == 0 || self.initial_pmr_offset > 0x7f {
            return Err(CompressError::InvalidConfig(
                "initial_pmr_offset must be in [1, 127]",
            ));
        }
        Ok(())
    }
}

/// Compresses `input` into the wire format described in spec §6.
///
/// Returns [`CompressError::InputTooShort`] for inputs under 2 bytes (spec
/// §6: "`InputTooShort`: N < 2"), [`CompressError::InputTooLarge`] above
/// [`MAX_INPUT_SIZE`], [`CompressError::AsciiViolation`] when
/// `config.is_ascii` is set but a byte has its top bit set, and
/// [`CompressError::Incompressible`] when the encoded output would not be
/// smaller than `input`.
pub fn compress(input: &[u8], config: &Config) -> Result<(Vec<u8>, Stats), CompressError> {
    config.validate()?;

    if input.len() < 2 {
        return Err(CompressError::InputTooShort);
    }
    if input.len() > MAX_INPUT_SIZE {
        return Err(CompressError::InputTooLarge { len: input.len(), max: MAX_INPUT_SIZE });
    }
    if config.is_ascii {
        if let Some((pos, &byte)) = input.iter().enumerate().find(|(_, &b)| b & 0x80 != 0) {
            return Err(CompressError::AsciiViolation { pos, byte });
        }
    }

    let (tokens, mut stats) = parse(input, config);
    let mut encoded = encode(&tokens, input.len(), config, &mut stats)?;
    if config.reversed {
        encoded.reverse();
    }
    Ok((encoded, stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        let result = compress(&[], &Config::default());
        assert_eq!(result.unwrap_err(), CompressError::InputTooShort);
    }

    #[test]
    fn rejects_single_byte_input() {
        let result = compress(b"A", &Config::default());
        assert_eq!(result.unwrap_err(), CompressError::InputTooShort);
    }

    #[test]
    fn rejects_oversized_input() {
        let input = vec![0u8; MAX_INPUT_SIZE + 1];
        let result = compress(&input, &Config::default());
        assert!(matches!(result, Err(CompressError::InputTooLarge { .. })));
    }

    #[test]
    fn rejects_non_ascii_when_ascii_requested() {
        let input = vec![b'a', b'b', 0x80];
        let config = Config { is_ascii: true, ..Config::default() };
        let result = compress(&input, &config);
        assert!(matches!(result, Err(CompressError::AsciiViolation { pos: 2, .. })));
    }

    #[test]
    fn reports_incompressible_for_random_like_short_input() {
        let input: Vec<u8> = (0..8u8).map(|i| i.wrapping_mul(97).wrapping_add(13)).collect();
        let config = Config::default();
        let result = compress(&input, &config);
        assert!(matches!(result, Err(CompressError::Incompressible)));
    }

    #[test]
    fn compresses_highly_repetitive_input() {
        let input = vec![b'z'; 4096];
        let config = Config::default();
        let (out, stats) = compress(&input, &config).unwrap();
        assert!(out.len() < input.len());
        assert!(stats.num_matches > 0);
        assert_eq!(stats.input_len, input.len());
    }

    #[test]
    fn invalid_config_is_rejected_before_touching_input() {
        let config = Config { min_match: 1, ..Config::default() };
        let result = compress(b"hello", &config);
        assert!(matches!(result, Err(CompressError::InvalidConfig(_))));
    }
}
