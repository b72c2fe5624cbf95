use colored::*;
use labkit_common::config::Config;
use labkit_core::sorting::{self, SortAlgorithm, SortTrace};
use rand::Rng;

use crate::terminal::{colors, print};

/// Range of the random values, matching the bar heights of a visualizer.
const RANDOM_MIN: i64 = 10;
const RANDOM_MAX: i64 = 400;

pub fn sort(
    algorithm: SortAlgorithm,
    size: usize,
    values: Vec<i64>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let input: Vec<i64> = if values.is_empty() {
        random_values(size)
    } else {
        values
    };

    let mut sorted: Vec<i64> = input.clone();
    let trace: SortTrace = algorithm.trace(&mut sorted);

    if sorting::replay(&input, &trace.steps) != sorted {
        anyhow::bail!("{algorithm} sort produced a trace that does not replay to its output");
    }

    print::aligned_line("Algorithm", algorithm.to_string().color(colors::ACCENT));
    print::aligned_line("Input", print::sequence(&input));
    print::aligned_line("Output", print::sequence(&sorted));

    if !cfg.is_quiet() {
        print::fat_separator();
    }
    print::aligned_line("Steps", trace.steps.len().to_string().bold());
    print::aligned_line("Compares", trace.compares().to_string());
    print::aligned_line("Swaps", trace.swaps().to_string());
    print::aligned_line("Sets", trace.sets().to_string());

    Ok(())
}

fn random_values(size: usize) -> Vec<i64> {
    let mut rng = rand::rng();
    (0..size)
        .map(|_| rng.random_range(RANDOM_MIN..=RANDOM_MAX))
        .collect()
}
