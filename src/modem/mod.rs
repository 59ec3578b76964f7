//! Modulator implementations
//!
//! Analog (AM/FM/PM) and binary (ASK/FSK/PSK) modulators generic over the
//! carrier oscillator, plus the bit unpacker that feeds the binary family.

mod analog;
mod binary;
mod params;
mod symbols;

#[cfg(test)]
mod test_support;

pub use analog::AnalogModulator;
pub use binary::BinaryModulator;
pub use params::{clamp_carrier, AnalogKind, BinaryKind};
pub use symbols::SymbolExtractor;
