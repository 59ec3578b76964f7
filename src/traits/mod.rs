//! Core DSP traits for the modulators
//!
//! These traits define mathematical behavior, not codecs or pipelines.
//! Each trait represents one orthogonal axis of modulator configuration.

mod carrier;
mod modulator;
mod timing;

pub use carrier::{CarrierOscillator, Waveform};
pub use modulator::SampleModulator;
pub use timing::SymbolTiming;
