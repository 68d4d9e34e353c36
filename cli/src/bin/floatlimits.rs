//! Program C: floating-point precision loss demonstration and the integer
//! limits report.

use bitops_cli::parse_args_or_exit;
use clap::Parser;
use floatcmp::{approx_eq, limits_line};

#[derive(Parser)]
#[command(name = "floatlimits")]
#[command(version)]
#[command(about = "Demonstrate f64 rounding error and print integer type limits", long_about = None)]
struct Cli {}

fn verdict(equal: bool) -> &'static str {
    if equal {
        "Equals"
    } else {
        "Different"
    }
}

fn main() {
    let _cli = parse_args_or_exit::<Cli>();

    let detoured: f64 = (100.0 + 1.0 / 3.0) - 100.0;
    let direct: f64 = 1.0 / 3.0;

    println!("(100 + 1/3) - 100 :: {detoured:.12}");
    println!(
        "direct: {direct:.12}; detoured: {detoured:.12}; diff: {:e}",
        (direct - detoured).abs()
    );

    let by_operator = direct == detoured;
    println!("By the op:: direct==detoured: {by_operator}<=={}", verdict(by_operator));
    let by_function = approx_eq(direct, detoured);
    println!("By the fun:: direct==detoured: {by_function}<=={}", verdict(by_function));

    println!();
    println!("Machine Epsilon: {:e}", f64::EPSILON);
    println!("Signed:");
    println!("\t{}", limits_line::<i32>("int"));
    println!("\t{}", limits_line::<i64>("long long"));
    println!("Unsigned:");
    println!("\t{}", limits_line::<u32>("int"));
    println!("\t{}", limits_line::<u64>("long long"));
}
