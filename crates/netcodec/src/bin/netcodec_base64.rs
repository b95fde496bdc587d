//! `netcodec-base64` — base64-encode stdin, or decode it.
//!
//! Usage:
//!   netcodec-base64 [-d|--decode] [--config <file>]
//!
//! Encoded output ends with a newline. Decoding rejects anything that is not
//! standard, padded base64 (surrounding whitespace aside) and exits with
//! status 1.

use netcodec::cli::{self, Tool};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::execute(Tool::Base64, &args, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
