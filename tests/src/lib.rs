//! Cross-crate integration and property tests for `labkit`.

mod frequency;
mod islands;
mod list;
mod power;
mod sorting;
