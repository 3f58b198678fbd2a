//! Command-line argument surface.
//!
//! Mirrors the long-option table of `examples/original_source/zxpac4/src/main.cpp`'s
//! `getopt_long` array (`--max-chain`, `--good-match`, `--backward`,
//! `--only-better`, `--pmr-offset`, `--reverse`, `--ascii`, `--verbose`,
//! `--debug`), expressed with `clap`'s derive API rather than hand-rolled
//! `getopt` parsing — `clap` is already part of the teacher's dependency
//! stack and this crate is not a line-for-line C port.

use std::path::PathBuf;

use clap::Parser;

use crate::compress::Config;

/// A size-optimizing LZ77 compressor for retro 8/16-bit targets and raw
/// binary/ASCII blobs.
#[derive(Debug, Parser)]
#[command(name = "zxpac4", version, about, author)]
pub struct Cli {
    /// Input file or directory. Directories are expanded recursively.
    pub input: PathBuf,

    /// Output file. Defaults to `<input>.zx4`. Ignored when `input` is a directory.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Maximum back-reference window size in bytes.
    #[arg(long = "window-size", default_value_t = Config::default().window_size)]
    pub window_size: usize,

    /// Minimum match length the matcher will report.
    #[arg(long = "min-match", default_value_t = Config::default().min_match)]
    pub min_match: usize,

    /// Maximum match length; matches longer than this are split.
    #[arg(long = "max-match", default_value_t = Config::default().max_match)]
    pub max_match: usize,

    /// Match length at or above which the matcher stops walking the hash chain early.
    #[arg(long = "good-match", default_value_t = Config::default().good_match)]
    pub good_match: usize,

    /// Maximum number of hash-chain links the matcher walks per position.
    #[arg(long = "max-chain", default_value_t = Config::default().max_chain)]
    pub max_chain: usize,

    /// Number of positions the parser may look back when recovering an
    /// equal-cost, shorter-offset match.
    #[arg(long = "backward-steps", default_value_t = Config::default().backward_steps)]
    pub backward_steps: usize,

    /// Initial PMR (previous match reference) offset assumed before the first token.
    #[arg(long = "pmr-offset", default_value_t = Config::default().initial_pmr_offset)]
    pub pmr_offset: usize,

    /// Treat the input as 7-bit ASCII text and enable literal-bit piggybacking.
    #[arg(long = "ascii")]
    pub ascii: bool,

    /// Reverse the compressed byte stream (header and body) before writing
    /// it out, for backward in-place decompression on the target.
    #[arg(long = "reverse")]
    pub reverse: bool,

    /// Only replace the matcher's current best candidate with a strictly
    /// better one (shorter chain walk, coarser selection).
    #[arg(long = "only-better-matches")]
    pub only_better_matches: bool,

    /// Increase output verbosity. May be repeated.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Enable debug-level diagnostics.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Builds a [`Config`] from the parsed arguments, without validating it.
    /// Validation happens in [`Config::validate`] so CLI and library callers
    /// share one source of truth for invariants.
    pub fn to_config(&self) -> Config {
        Config {
            window_size: self.window_size,
            min_match: self.min_match,
            max_match: self.max_match,
            good_match: self.good_match,
            max_chain: self.max_chain,
            backward_steps: self.backward_steps,
            initial_pmr_offset: self.pmr_offset,
            only_better_matches: self.only_better_matches,
            is_ascii: self.ascii,
            reversed: self.reverse,
        }
    }

    /// Maps `-v`/`--verbose` repeats and `--debug` onto the crate's display
    /// level scale (0=errors only .. 4=debug).
    pub fn display_level(&self) -> u32 {
        if self.debug {
            4
        } else {
            (1 + self.verbose as u32).min(3)
        }
    }
}
