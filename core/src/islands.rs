//! # Island Counter
//!
//! Counts connected regions of land in a grid. Cells are connected
//! horizontally and vertically, never diagonally.
//!
//! **Destructive contract:** [`count_islands`] drains every land cell it
//! visits to water, using the grid itself as the visited set. Once it returns,
//! the grid holds no land and a second call yields `0`. Use
//! [`count_islands_preserving`] to keep the input intact.

use labkit_common::error::InputError;
use labkit_common::grid::{Cell, validate_shape};
use tracing::{debug, trace};

/// Neighbour offsets in visiting order: down, up, right, left.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Counts the islands of `grid`, draining it in the process.
///
/// Fails with [`InputError::EmptyGrid`] when there are no rows and with
/// [`InputError::RaggedRow`] when the rows differ in length. The grid is left
/// untouched on error.
pub fn count_islands(grid: &mut [Vec<Cell>]) -> Result<usize, InputError> {
    let cols: usize = validate_shape(grid)?;
    let rows: usize = grid.len();
    let mut count: usize = 0;

    for r in 0..rows {
        for c in 0..cols {
            if grid[r][c].is_land() {
                count += 1;
                let area: usize = flood_fill(grid, r, c);
                debug!("Island {count} starts at ({r}, {c}) and covers {area} cells");
            }
        }
    }

    Ok(count)
}

/// Same as [`count_islands`] but works on a copy of the grid.
pub fn count_islands_preserving(grid: &[Vec<Cell>]) -> Result<usize, InputError> {
    let mut scratch: Vec<Vec<Cell>> = grid.to_vec();
    count_islands(&mut scratch)
}

/// Drains the island containing `(row, col)` and returns its size.
///
/// Uses an explicit stack, so the depth of an island is bounded by heap
/// memory rather than the call stack. A cell is drained as soon as it is
/// pushed and can never enter the stack twice.
fn flood_fill(grid: &mut [Vec<Cell>], row: usize, col: usize) -> usize {
    let rows: usize = grid.len();
    let cols: usize = grid[0].len();
    let mut stack: Vec<(usize, usize)> = vec![(row, col)];
    let mut area: usize = 0;

    grid[row][col] = Cell::Water;

    while let Some((r, c)) = stack.pop() {
        area += 1;
        trace!("Visiting ({r}, {c})");

        for (dr, dc) in DIRECTIONS {
            let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc))
            else {
                continue;
            };
            if nr >= rows || nc >= cols || !grid[nr][nc].is_land() {
                continue;
            }

            grid[nr][nc] = Cell::Water;
            stack.push((nr, nc));
        }
    }

    area
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
