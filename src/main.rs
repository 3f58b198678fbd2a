//! Binary entry point for the `zxpac4` command-line tool.
//!
//! Parses arguments, expands directory inputs recursively, and drives one
//! [`zxpac4::compress::compress`] call per file — fanning out across files
//! with `rayon` when a directory was given, mirroring the batch-processing
//! shape of `jafreck-lz4r/src/main.rs` and `src/io/` without its streaming
//! frame-format machinery, which has no counterpart in this crate's
//! single-buffer pipeline.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use clap::Parser;
use rayon::prelude::*;

use zxpac4::cli::constants::{set_display_level, AUTHOR, COMPRESSOR_NAME};
use zxpac4::cli::Cli;
use zxpac4::compress::compress;
use zxpac4::io::{default_output_path, read_input_file, write_output_file};
use zxpac4::util::{create_file_list, is_directory};
use zxpac4::{displaylevel, CompressError};

fn compress_one(input: &Path, output: Option<&Path>, config: &zxpac4::Config) -> i32 {
    let data = match read_input_file(input) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("zxpac4: {}: {}", input.display(), e);
            return 1;
        }
    };

    let out_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output_path(input, zxpac4::config::DEFAULT_EXTENSION));

    match compress(&data, config) {
        Ok((encoded, stats)) => {
            if let Err(e) = write_output_file(&out_path, &encoded, true) {
                eprintln!("zxpac4: {}: {}", out_path.display(), e);
                return 1;
            }
            displaylevel!(
                2,
                "{} : {} -> {} bytes ({:.1}%)\n",
                input.display(),
                stats.input_len,
                stats.encoded_len,
                stats.ratio() * 100.0
            );
            0
        }
        Err(CompressError::Incompressible) => {
            displaylevel!(2, "{} : incompressible, skipped\n", input.display());
            0
        }
        Err(e) => {
            eprintln!("zxpac4: {}: {}", input.display(), e);
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    set_display_level(cli.display_level());

    displaylevel!(3, "*** {} v{}, by {} ***\n", COMPRESSOR_NAME, zxpac4::VERSION, AUTHOR);

    let config = cli.to_config();
    if let Err(e) = config.validate() {
        eprintln!("zxpac4: {}", e);
        std::process::exit(1);
    }

    if is_directory(&cli.input) {
        let nb_workers = if zxpac4::config::NB_WORKERS_DEFAULT == 0 {
            num_cpus::get()
        } else {
            zxpac4::config::NB_WORKERS_DEFAULT
        };
        let _ = rayon::ThreadPoolBuilder::new()
            .num_threads(nb_workers.min(zxpac4::config::NB_WORKERS_MAX))
            .build_global();

        let files = match create_file_list(&[cli.input.as_path()]) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("zxpac4: {}", e);
                std::process::exit(1);
            }
        };
        let failures = AtomicUsize::new(0);
        files.par_iter().for_each(|path| {
            if compress_one(path, None, &config) != 0 {
                failures.fetch_add(1, Ordering::Relaxed);
            }
        });
        std::process::exit(if failures.load(Ordering::Relaxed) > 0 { 1 } else { 0 });
    }

    let code = compress_one(&cli.input, cli.output.as_deref(), &config);
    std::process::exit(code);
}
