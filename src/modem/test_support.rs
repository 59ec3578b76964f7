//! Carrier doubles for modulator tests

use crate::traits::{CarrierOscillator, Waveform};

/// Carrier frozen at one phase
///
/// Returns `cos(phase + offset)` on every query without advancing, and
/// records what the modulator asked of it.
#[derive(Debug, Clone)]
pub struct HeldCarrier {
    pub phase: f64,
    pub frequency: f64,
    pub amplitude: f64,
    pub init_calls: usize,
    pub queries: usize,
}

impl HeldCarrier {
    pub fn at_phase(phase: f64) -> Self {
        Self {
            phase,
            frequency: 0.0,
            amplitude: 0.0,
            init_calls: 0,
            queries: 0,
        }
    }
}

impl CarrierOscillator for HeldCarrier {
    fn initialize(
        &mut self,
        _waveform: Waveform,
        amplitude: f64,
        frequency: f64,
        _phase: f64,
        _offset: f64,
    ) {
        self.amplitude = amplitude;
        self.frequency = frequency;
        self.init_calls += 1;
    }

    fn set_frequency(&mut self, freq_hz: f64) {
        self.frequency = freq_hz;
    }

    fn frequency(&self) -> f64 {
        self.frequency
    }

    fn phase(&self) -> f64 {
        self.phase
    }

    fn next_value_shifted(&mut self, phase_offset: f64) -> f64 {
        self.queries += 1;
        (self.phase + phase_offset).cos()
    }

    fn reset(&mut self) {}
}
