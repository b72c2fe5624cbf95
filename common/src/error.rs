//! # Input Errors
//!
//! Errors raised when caller-provided input cannot be used by an algorithm.
//! Operations on empty containers are not errors and never show up here.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The grid has no rows, so its width is undefined.
    #[error("grid must contain at least one row")]
    EmptyGrid,

    /// A row differs in length from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character that is neither land nor water.
    #[error("invalid cell '{symbol}' at row {row}, column {column}")]
    InvalidCell {
        row: usize,
        column: usize,
        symbol: char,
    },
}
