//! # labkit-common
//!
//! Models and errors shared between the algorithm crate and the command line.
//!
//! * [`grid`]: the [`grid::Cell`] model and the textual grid parser.
//! * [`error`]: [`error::InputError`], raised for malformed caller input.
//! * [`config`]: runtime switches assembled from command-line flags.

pub mod config;
pub mod error;
pub mod grid;
