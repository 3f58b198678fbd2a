/// Returns the number of logical CPU cores available on the system.
///
/// Used to size the default worker pool for batch/directory compression
/// (`src/main.rs`), in the idiom of `jafreck-lz4r/src/util/cores.rs`'s
/// `count_cores`. `std::thread::available_parallelism` is the portable
/// equivalent of the platform-specific core-counting APIs that idiom wraps.
///
/// Guaranteed to return a value ≥ 1 (falls back to 1 on error).
pub fn count_cores() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
