use colored::*;
use labkit_core::frequency;

use crate::terminal::{colors, print};

pub fn freq(values: &[i64]) {
    print::aligned_line("Input", print::sequence(values));

    for (value, count) in frequency::count_frequencies(values) {
        let count: ColoredString = count.to_string().color(colors::ACCENT);
        print::aligned_line(&value.to_string(), count);
    }
}
