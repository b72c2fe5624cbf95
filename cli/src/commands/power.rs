use colored::*;
use labkit_core::power;

use crate::terminal::print;

pub fn power(base: f64, exponent: i64) {
    let result: f64 = power::power(base, exponent);
    let value: ColoredString = result.to_string().bright_yellow().bold();

    print::aligned_line("Base", base.to_string());
    print::aligned_line("Exponent", exponent.to_string());
    print::aligned_line("Result", value);
}
