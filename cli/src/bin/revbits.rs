//! Program B: bit reversal plus both constant-free bit counts for each value.

use bitops::{count_by_condensing, count_by_kernighan_brian, reverse_bits};
use bitops_cli::{exit_status, parse_args_or_exit, parse_hex_value};
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "revbits")]
#[command(version)]
#[command(about = "Reverse the bits of hexadecimal values and count their set bits", long_about = None)]
struct Cli {
    /// Input values, hexadecimal (with or without a 0x prefix)
    #[arg(required = true)]
    values: Vec<String>,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut parsed = Vec::with_capacity(cli.values.len());
    for text in &cli.values {
        parsed.push(parse_hex_value(text)?);
    }

    for &value in &parsed {
        println!("{value:08X} -> {:08X}", reverse_bits(value));
    }

    println!("** Bit Counts:");
    for &value in &parsed {
        println!(
            "{value:08X}: Brian: {}, Condense: {}",
            count_by_kernighan_brian(value),
            count_by_condensing(value)
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = parse_args_or_exit::<Cli>();
    exit_status(run(&cli))
}
