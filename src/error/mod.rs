//! Validation failure types.
//!
//! This module provides [`ErrorTree`], the recursive value that represents
//! one or many validation failures, and [`ErrorKind`], its shape tag.

mod tree;

pub use tree::{ErrorKind, ErrorTree};
