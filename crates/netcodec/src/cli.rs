//! Command-line front end shared by the `netcodec-base64` and `netcodec-url`
//! binaries.
//!
//! Both tools read all of stdin, transform it and write the result to
//! stdout. Encoded text is followed by a newline; decoded bytes are written
//! as-is.

use std::io::{Read, Write};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::{Codec, CodecConfig, CodecError, MalformedEscapePolicy};

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// ── Commands ──────────────────────────────────────────────────────────────

/// Which codec a binary drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Base64,
    Url,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Encode,
    Decode,
}

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub tool: Tool,
    pub direction: Direction,
    pub config: CodecConfig,
}

/// One-line usage summary for `tool`.
pub fn usage(tool: Tool) -> &'static str {
    match tool {
        Tool::Base64 => "usage: netcodec-base64 [-d|--decode] [--config <file>]",
        Tool::Url => {
            "usage: netcodec-url [-d|--decode] [--strict] [--safe <marks>] [--config <file>]"
        }
    }
}

/// Parses arguments (without the program name) into a [`Command`].
///
/// `--config` loads a TOML [`CodecConfig`] first; `--strict` and `--safe`
/// then override the loaded values.
pub fn parse_args(tool: Tool, args: &[String]) -> Result<Command, CliError> {
    let mut direction = Direction::Encode;
    let mut config_path: Option<PathBuf> = None;
    let mut strict = false;
    let mut safe: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match (tool, arg.as_str()) {
            (_, "-d" | "--decode") => direction = Direction::Decode,
            (_, "--config") => {
                let path = iter.next().ok_or_else(|| missing_value(tool, arg))?;
                config_path = Some(PathBuf::from(path));
            }
            (Tool::Url, "--strict") => strict = true,
            (Tool::Url, "--safe") => {
                let marks = iter.next().ok_or_else(|| missing_value(tool, arg))?;
                safe = Some(marks.clone());
            }
            (_, other) => {
                return Err(CliError::Usage(format!(
                    "unknown argument: {other}\n{}",
                    usage(tool)
                )));
            }
        }
    }

    let mut config = match config_path {
        Some(path) => CodecConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => CodecConfig::default(),
    };
    if strict {
        config.malformed_escape = MalformedEscapePolicy::Reject;
    }
    if let Some(marks) = safe {
        config.url_safe_marks = marks;
    }

    Ok(Command {
        tool,
        direction,
        config,
    })
}

fn missing_value(tool: Tool, flag: &str) -> CliError {
    CliError::Usage(format!("{flag} requires a value\n{}", usage(tool)))
}

// ── Execution ─────────────────────────────────────────────────────────────

/// Runs `command` over `input`, returning the bytes to write to stdout.
///
/// Base64 decoding trims surrounding ASCII whitespace first; URL encoding
/// and decoding drop a single trailing line break.
pub fn run(command: &Command, input: &[u8]) -> Result<Vec<u8>, CliError> {
    let codec = Codec::new(command.config.clone())?;
    let output = match (command.tool, command.direction) {
        (Tool::Base64, Direction::Encode) => line(codec.base64_encode(input)),
        (Tool::Base64, Direction::Decode) => codec.base64_decode(input.trim_ascii())?,
        (Tool::Url, Direction::Encode) => line(codec.url_encode(strip_line_break(input))),
        (Tool::Url, Direction::Decode) => codec.url_decode(strip_line_break(input))?,
    };
    tracing::debug!(
        tool = ?command.tool,
        direction = ?command.direction,
        input_len = input.len(),
        output_len = output.len(),
        "transcoded"
    );
    Ok(output)
}

/// Parses `args`, reads all of `stdin`, runs the command and writes to
/// `stdout`.
pub fn execute(
    tool: Tool,
    args: &[String],
    mut stdin: impl Read,
    mut stdout: impl Write,
) -> Result<(), CliError> {
    let command = parse_args(tool, args)?;
    let mut input = Vec::new();
    stdin.read_to_end(&mut input)?;
    stdout.write_all(&run(&command, &input)?)?;
    stdout.flush()?;
    Ok(())
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn line(text: String) -> Vec<u8> {
    let mut bytes = text.into_bytes();
    bytes.push(b'\n');
    bytes
}

fn strip_line_break(input: &[u8]) -> &[u8] {
    let input = input.strip_suffix(b"\n").unwrap_or(input);
    input.strip_suffix(b"\r").unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strip_line_break_only_once() {
        assert_eq!(strip_line_break(b"a\n\n"), b"a\n");
        assert_eq!(strip_line_break(b"a\r\n"), b"a");
        assert_eq!(strip_line_break(b"a"), b"a");
    }

    #[test]
    fn url_flags_rejected_for_base64() {
        let err = parse_args(Tool::Base64, &args(&["--strict"])).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }

    #[test]
    fn missing_flag_value() {
        let err = parse_args(Tool::Url, &args(&["--safe"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("--safe requires a value\n{}", usage(Tool::Url))
        );
    }
}
