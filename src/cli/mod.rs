//! Command-line argument parsing and display-level plumbing.

#[macro_use]
pub mod constants;
pub mod args;

pub use args::Cli;
