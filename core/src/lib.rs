//! # labkit-core
//!
//! Small, self-contained algorithms and data structures. None of the modules
//! depend on each other; each one can be used and tested on its own.
//!
//! * [`power`]: `x^n` by exponentiation by squaring.
//! * [`list`]: a doubly linked list with insert and delete at both ends.
//! * [`islands`]: counts connected land regions of a grid by flood fill.
//! * [`stack`]: a singly linked LIFO stack.
//! * [`frequency`]: ordered value frequencies of an integer sequence.
//! * [`sorting`]: classic sorts that record a replayable step trace.

pub mod frequency;
pub mod islands;
pub mod list;
pub mod power;
pub mod sorting;
pub mod stack;
