#![cfg(test)]
use labkit_common::error::InputError;
use labkit_common::grid::{Cell, parse_grid};
use labkit_core::islands::{count_islands, count_islands_preserving};

#[test]
fn islands_reference_grid() {
    let mut grid = parse_grid("1100,1100,0010,0001").unwrap();
    assert_eq!(count_islands(&mut grid), Ok(3));

    // The grid was drained by the first pass.
    assert_eq!(count_islands(&mut grid), Ok(0));
}

#[test]
fn islands_uniform_grids() {
    for (rows, cols) in [(1, 1), (3, 7), (10, 2)] {
        let mut land = vec![vec![Cell::Land; cols]; rows];
        assert_eq!(count_islands(&mut land), Ok(1), "{rows}x{cols} land");

        let mut water = vec![vec![Cell::Water; cols]; rows];
        assert_eq!(count_islands(&mut water), Ok(0), "{rows}x{cols} water");
    }
}

#[test]
fn islands_zero_rows_is_rejected() {
    let mut grid: Vec<Vec<Cell>> = Vec::new();
    assert_eq!(count_islands(&mut grid), Err(InputError::EmptyGrid));
    assert_eq!(parse_grid(""), Err(InputError::EmptyGrid));
}

#[test]
fn islands_preserving_matches_destructive() {
    let grid = parse_grid(
        "11000\n\
         11011\n\
         00100\n\
         00011",
    )
    .unwrap();

    let mut scratch = grid.clone();
    assert_eq!(count_islands_preserving(&grid), count_islands(&mut scratch));
    assert_eq!(count_islands_preserving(&grid), Ok(4));
}

#[test]
fn islands_large_snake_does_not_overflow() {
    // A single island that zig-zags across every row.
    let (rows, cols) = (401, 400);
    let mut grid = vec![vec![Cell::Water; cols]; rows];
    for r in (0..rows).step_by(2) {
        grid[r].fill(Cell::Land);
        if r + 1 < rows {
            let link = if (r / 2) % 2 == 0 { cols - 1 } else { 0 };
            grid[r + 1][link] = Cell::Land;
        }
    }

    assert_eq!(count_islands(&mut grid), Ok(1));
}
