use anyhow::Context;
use colored::*;
use labkit_common::config::Config;
use labkit_common::grid::{self, Cell};
use labkit_core::islands;

use crate::lprint;
use crate::terminal::{colors, print};

pub fn islands(input: &str, cfg: &Config) -> anyhow::Result<()> {
    let mut grid: Vec<Vec<Cell>> =
        grid::parse_grid(input).with_context(|| format!("Failed to parse grid '{input}'"))?;

    if !cfg.is_quiet() {
        print_grid(&grid);
        lprint!();
    }

    let rows: usize = grid.len();
    let cols: usize = grid[0].len();
    let count: usize = islands::count_islands(&mut grid)?;

    print::aligned_line("Grid", format!("{rows}x{cols}"));
    print::aligned_line("Islands", count.to_string().bright_yellow().bold());

    Ok(())
}

fn print_grid(grid: &[Vec<Cell>]) {
    for row in grid {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                Cell::Land => "■".color(colors::LAND).to_string(),
                Cell::Water => "·".color(colors::WATER).to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ");
        print::print(&format!("  {line}"));
    }
}
