//! Utility functions for the sample path

mod clamp;
mod math;

pub use clamp::{quantize_volts, saturate_at};
pub use math::normalize_angle;
