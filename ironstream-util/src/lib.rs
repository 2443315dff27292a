//! # IronStream Util
//!
//! Small, dependency-free helpers shared across IronStream crates.

pub mod strings;

pub use strings::{split, trim, trim_left, trim_right};
