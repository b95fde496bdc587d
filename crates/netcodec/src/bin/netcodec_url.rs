//! `netcodec-url` — percent-encode stdin, or decode it.
//!
//! Usage:
//!   netcodec-url [-d|--decode] [--strict] [--safe <marks>] [--config <file>]
//!
//! `--strict` fails on malformed `%` escapes instead of copying them;
//! `--safe` adds marks (e.g. `/`) the encoder leaves unescaped.

use netcodec::cli::{self, Tool};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::execute(Tool::Url, &args, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
