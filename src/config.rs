//! Compile-time configuration constants for the batch file driver.
//!
//! The core compressor itself takes all of its tunables through
//! [`crate::compress::Config`]; the constants here govern only the ambient
//! CLI/driver layer (how many files to process concurrently), in the spirit
//! of the teacher's `NB_WORKERS_DEFAULT`/`NB_WORKERS_MAX` pair.

/// Default number of files processed concurrently when a directory is given,
/// when `--jobs` is not specified. `0` means auto-detect from the number of
/// available CPU cores.
pub const NB_WORKERS_DEFAULT: usize = 0;

/// Upper bound on the number of worker threads selectable at runtime.
pub const NB_WORKERS_MAX: usize = 200;

/// Default output file extension appended to a compressed file's input name.
pub const DEFAULT_EXTENSION: &str = ".zx4";
