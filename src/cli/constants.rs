//! Display infrastructure and global CLI state.
//!
//! Mirrors the verbosity model of the original C++ sources
//! (`zxpac4.cpp::lz_search_matches`/`lz_parse`'s `verbose()`/`get_debug_level()`
//! gated `std::cout`/`std::cerr` tracing) via a small set of `eprintln!`-style
//! macros, in the idiom the teacher crate uses for its own `DISPLAY*` macros.

use std::sync::atomic::{AtomicU32, Ordering};

pub const COMPRESSOR_NAME: &str = "zxpac4";

pub const AUTHOR: &str = "Jouni 'Mr.Spiv' Korhonen";

/// Welcome/banner message format: compressor name, version string, author.
pub const WELCOME_MESSAGE_FMT: &str = "*** {} v{}, by {} ***\n";

// ── Display level global ───────────────────────────────────────────────────
//
// 0 = no output; 1 = errors only; 2 = normal; 3 = verbose; 4 = debug.
// A crate-level atomic so CLI, driver, and core modules can share one
// verbosity knob without threading a context object through every call.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(1);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Print to stdout, unconditionally.
#[macro_export]
macro_rules! displayout {
    ($($arg:tt)*) => { print!($($arg)*) };
}

/// Print to stderr, unconditionally.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

/// Print debug output — active only in debug builds.
#[macro_export]
macro_rules! debugoutput {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        eprint!($($arg)*);
    };
}

/// Print a diagnostic and terminate the process with `error` as the exit code.
#[macro_export]
macro_rules! end_process {
    ($error:expr, $($arg:tt)*) => {{
        #[cfg(debug_assertions)]
        eprint!("Error in {}, line {} : \n", file!(), line!());
        if $crate::cli::constants::display_level() >= 1 {
            eprint!("Error {} : ", $error);
            eprint!($($arg)*);
            eprint!("\n");
        }
        std::process::exit($error as i32);
    }};
}
