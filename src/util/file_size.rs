//! File size queries backed by `std::fs` metadata.
//!
//! Provides three functions:
//! - [`get_open_file_size`]  — byte length of an already-open [`std::fs::File`]
//! - [`get_file_size`]       — byte length of a file at a given path
//! - [`get_total_file_size`] — summed byte length over a slice of paths
//!
//! Non-regular files (directories, pipes, sockets) and unreachable paths
//! contribute `0`, avoiding error propagation through bulk size operations.

use std::fs::{self, File};
use std::path::Path;

/// Returns the size in bytes of the open file `file`.
///
/// Returns `0` if `file` does not refer to a regular file (e.g. stdin, a pipe,
/// or a directory). Use [`get_file_size`] when only a path is available.
pub fn get_open_file_size(file: &File) -> u64 {
    file.metadata()
        .ok()
        .filter(|m| m.file_type().is_file())
        .map(|m| m.len())
        .unwrap_or(0)
}

/// Returns the size in bytes of the regular file at `path`.
///
/// Returns `0` if the path does not exist, is not a regular file, or cannot
/// be stat-ted. This makes the function safe to use in accumulation loops
/// without requiring callers to handle per-file errors.
pub fn get_file_size(path: &Path) -> u64 {
    fs::metadata(path)
        .ok()
        .filter(|m| m.file_type().is_file())
        .map(|m| m.len())
        .unwrap_or(0)
}

/// Returns the total size in bytes of all regular files in `paths`.
///
/// Each element is queried with [`get_file_size`]; non-regular files and
/// unreachable paths contribute `0`. Returns `0` for an empty slice.
pub fn get_total_file_size(paths: &[&Path]) -> u64 {
    paths.iter().map(|p| get_file_size(p)).sum()
}

// ─── Tests ────────────────────────────────────────────────────────────────────
