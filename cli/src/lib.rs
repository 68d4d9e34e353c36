//! Shared plumbing for the demonstration binaries: hex parsing and the
//! exit-code convention.

use clap::Parser;
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum ParseValueError {
    #[error("`{0}` is not a hexadecimal value")]
    NotHexadecimal(String),
    #[error("`{0}` does not fit in 32 bits")]
    OutOfRange(String),
}

/// Parses a 32-bit value from hex text, with or without a `0x` prefix.
///
/// Malformed input is an error rather than the zero fallback some lenient
/// parsers apply.
pub fn parse_hex_value(text: &str) -> Result<u32, ParseValueError> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);
    u32::from_str_radix(digits, 16).map_err(|error| match error.kind() {
        std::num::IntErrorKind::PosOverflow => ParseValueError::OutOfRange(text.to_owned()),
        _ => ParseValueError::NotHexadecimal(text.to_owned()),
    })
}

/// Parses command-line arguments, exiting with code 1 on bad or missing
/// input and 0 for `--help`/`--version`.
#[must_use]
pub fn parse_args_or_exit<Cli: Parser>() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            let _ = error.print();
            let code = if error.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    }
}

/// Maps a fallible `run` to the process exit status.
pub fn exit_status(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(1)
        }
    }
}
