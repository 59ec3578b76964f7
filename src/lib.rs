//! PDSP Modulation - Per-sample carrier modulators for codec sample paths
//!
//! Analog (AM/FM/PM) and binary (ASK/FSK/PSK) modulators that turn one
//! message sample or bit symbol into one codec sample per call. The sample
//! path never allocates and never fails: out-of-range configuration
//! saturates at the codec limits.

pub mod carriers;
pub mod codec;
pub mod error;
pub mod modem;
pub mod nif;
pub mod timing;
pub mod traits;
mod utils;

// Re-export core types for convenience
pub use carriers::Oscillator;
pub use codec::CodecProfile;
pub use error::{ModulationError, ModulationResult};
pub use modem::{AnalogKind, AnalogModulator, BinaryKind, BinaryModulator, SymbolExtractor};
pub use timing::FixedTiming;
pub use traits::{CarrierOscillator, SampleModulator, SymbolTiming, Waveform};
pub use utils::quantize_volts;

rustler::init!("Elixir.PdspModulation.Native");
