//! Whole-file I/O for the compression driver.
//!
//! Unlike the teacher crate's streaming frame API, zxpac4's core pipeline
//! operates on a single in-memory buffer (spec §1, §5), so this module is
//! reduced to "read a bounded file into a `Vec<u8>`" and "write a buffer to a
//! file, honoring an overwrite policy" — grounded on the sentinel/overwrite
//! idiom of `jafreck-lz4r/src/io/file_io.rs`'s `open_dst_file`, trimmed of
//! the stdin/stdout/sparse-file/skippable-frame concepts that have no
//! counterpart in a single-shot buffer API.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::displaylevel;

/// Largest input this crate will read into memory in one call, per spec §1.
pub const MAX_INPUT_SIZE: usize = 16 * 1024 * 1024;

/// Reads `path` into memory, refusing inputs above [`MAX_INPUT_SIZE`].
pub fn read_input_file(path: &Path) -> io::Result<Vec<u8>> {
    let meta = fs::metadata(path)?;
    if meta.len() > MAX_INPUT_SIZE as u64 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "{}: {} bytes exceeds the {} byte limit",
                path.display(),
                meta.len(),
                MAX_INPUT_SIZE
            ),
        ));
    }
    displaylevel!(4, "reading {} ({} bytes)\n", path.display(), meta.len());
    fs::read(path)
}

/// Writes `data` to `path`.
///
/// When `overwrite` is `false` and `path` already exists, prompts on stderr
/// at display level ≥ 2; at level ≤ 1 the call refuses silently, matching the
/// teacher's non-interactive-terminal fallback.
pub fn write_output_file(path: &Path, data: &[u8], overwrite: bool) -> io::Result<()> {
    if !overwrite && path.exists() {
        if crate::cli::constants::display_level() <= 1 {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{}: already exists; not overwritten", path.display()),
            ));
        }
        eprint!(
            "{} already exists; do you want to overwrite (y/N) ? ",
            path.display()
        );
        io::stderr().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        let first = line.trim_start().chars().next().unwrap_or('\0');
        if first != 'y' && first != 'Y' {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{}: not overwritten", path.display()),
            ));
        }
    }
    fs::write(path, data)
}

/// Derives a default output path by appending the given extension.
pub fn default_output_path(input: &Path, extension: &str) -> std::path::PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(extension);
    std::path::PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_small_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.bin");
        fs::write(&path, b"hello world").unwrap();
        let data = read_input_file(&path).unwrap();
        assert_eq!(data, b"hello world");
    }

    #[test]
    fn rejects_file_over_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.bin");
        let f = fs::File::create(&path).unwrap();
        f.set_len(MAX_INPUT_SIZE as u64 + 1).unwrap();
        let result = read_input_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn writes_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.zx4");
        write_output_file(&path, b"data", false).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"data");
    }

    #[test]
    fn overwrite_true_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.zx4");
        fs::write(&path, b"old").unwrap();
        write_output_file(&path, b"new", true).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"new");
    }

    #[test]
    fn default_output_path_appends_extension() {
        let p = default_output_path(Path::new("foo.bin"), ".zx4");
        assert_eq!(p, Path::new("foo.bin.zx4"));
    }
}
