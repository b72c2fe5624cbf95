//! # Grid Model
//!
//! Cells and textual grids consumed by the island counter.
//!
//! A grid is written row by row, rows separated by `,`, `;` or a newline:
//! * `1` or `#` is **land**.
//! * `0` or `.` is **water**.
//!
//! Whitespace inside a row is ignored, so `"1 1 0 0"` and `"1100"` are the same row.

use tracing::debug;

use crate::error::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Land,
    Water,
}

impl Cell {
    pub fn is_land(self) -> bool {
        self == Cell::Land
    }
}

impl TryFrom<char> for Cell {
    type Error = char;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '1' | '#' => Ok(Cell::Land),
            '0' | '.' => Ok(Cell::Water),
            other => Err(other),
        }
    }
}

/// Parses a textual grid into rows of cells.
///
/// Empty rows (e.g. from a trailing separator) are skipped. The result is
/// checked with [`validate_shape`], so a successful parse is always a
/// non-empty rectangle.
pub fn parse_grid(s: &str) -> Result<Vec<Vec<Cell>>, InputError> {
    let mut grid: Vec<Vec<Cell>> = Vec::new();

    for line in s.split([',', ';', '\n']) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let row_idx: usize = grid.len();
        let row: Vec<Cell> = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .enumerate()
            .map(|(column, symbol)| {
                Cell::try_from(symbol).map_err(|symbol| InputError::InvalidCell {
                    row: row_idx,
                    column,
                    symbol,
                })
            })
            .collect::<Result<_, _>>()?;

        grid.push(row);
    }

    let width: usize = validate_shape(&grid)?;
    debug!("Parsed a {}x{} grid", grid.len(), width);

    Ok(grid)
}

/// Checks that the grid has at least one row and that every row is as wide
/// as the first. Returns that width.
pub fn validate_shape(grid: &[Vec<Cell>]) -> Result<usize, InputError> {
    let first = grid.first().ok_or(InputError::EmptyGrid)?;
    let expected: usize = first.len();

    for (row, cells) in grid.iter().enumerate().skip(1) {
        if cells.len() != expected {
            return Err(InputError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
    }

    Ok(expected)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    const L: Cell = Cell::Land;
    const W: Cell = Cell::Water;

    #[test]
    fn test_parse_grid_separators() {
        let expected = vec![
            vec![L, L, W, W],
            vec![L, L, W, W],
            vec![W, W, L, W],
            vec![W, W, W, L],
        ];

        assert_eq!(parse_grid("1100,1100,0010,0001"), Ok(expected.clone()));
        assert_eq!(parse_grid("1100;1100;0010;0001"), Ok(expected.clone()));
        assert_eq!(parse_grid("1100\n1100\n0010\n0001\n"), Ok(expected.clone()));
        assert_eq!(parse_grid("##..,##..,..#.,...#"), Ok(expected.clone()));
        assert_eq!(parse_grid(" 1 1 0 0 , 1100,0010,0001,"), Ok(expected));
    }

    #[test]
    fn test_parse_grid_errors() {
        assert_eq!(parse_grid(""), Err(InputError::EmptyGrid));
        assert_eq!(parse_grid(" , ;"), Err(InputError::EmptyGrid));

        assert_eq!(
            parse_grid("10,1"),
            Err(InputError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );

        assert_eq!(
            parse_grid("10,1x"),
            Err(InputError::InvalidCell {
                row: 1,
                column: 1,
                symbol: 'x'
            })
        );
    }

    #[test]
    fn test_validate_shape() {
        assert_eq!(validate_shape(&[]), Err(InputError::EmptyGrid));
        assert_eq!(validate_shape(&[vec![]]), Ok(0));
        assert_eq!(validate_shape(&[vec![L, W], vec![W, W]]), Ok(2));
    }
}
