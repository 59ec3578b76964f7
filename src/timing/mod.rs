//! Symbol timing implementations
//!
//! Currently only fixed timing (whole samples per symbol).

mod fixed;

pub use fixed::FixedTiming;
