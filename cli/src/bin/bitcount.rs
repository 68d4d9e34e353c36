//! Program A: Hamming weight of one value via the shared byte-lookup table.

use bitops::CountTable;
use bitops_cli::{exit_status, parse_args_or_exit, parse_hex_value};
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bitcount")]
#[command(version)]
#[command(about = "Count the set bits of a hexadecimal value via a byte-lookup table", long_about = None)]
struct Cli {
    /// Input value, hexadecimal (with or without a 0x prefix)
    value: String,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let value = parse_hex_value(&cli.value)?;
    let count = CountTable::shared().count(value);
    println!("Source: 0x{value:X}, result: {count}");
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_args_or_exit::<Cli>();
    exit_status(run(&cli))
}
