//! Carrier oscillator implementations
//!
//! Currently only the phase-accumulator `Oscillator`.

mod oscillator;

pub use oscillator::Oscillator;
