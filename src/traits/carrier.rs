//! Carrier trait - Frequency/phase generation
//!
//! Defines the oscillator a modulator drives. Pure physics - no
//! modulation awareness.

/// Periodic shape produced by a carrier oscillator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Waveform {
    /// cos(phase)
    #[default]
    Sinusoid,
    /// +1 for the first half period, -1 for the second
    Square,
    /// Linear ramp +1 → -1 → +1, in phase with the sinusoid
    Triangle,
    /// Linear ramp -1 → +1 over one period
    Sawtooth,
}

/// Carrier oscillator trait
///
/// Implementations produce one unit-amplitude carrier sample per call and
/// accept frequency updates between calls. Every `next_value*` call advances
/// the phase by exactly one sample, so callers must query at most once per
/// output sample.
pub trait CarrierOscillator: Send + Sync {
    /// Configure waveform, amplitude [V], frequency [Hz], start phase [rad]
    /// and DC offset [V]
    fn initialize(
        &mut self,
        waveform: Waveform,
        amplitude: f64,
        frequency: f64,
        phase: f64,
        offset: f64,
    );

    /// Retune without disturbing phase continuity
    fn set_frequency(&mut self, freq_hz: f64);

    /// Current frequency [Hz]
    fn frequency(&self) -> f64;

    /// Current phase [rad], in [0, 2π)
    fn phase(&self) -> f64;

    /// Evaluate the unit waveform at `phase + phase_offset`, then advance
    fn next_value_shifted(&mut self, phase_offset: f64) -> f64;

    /// Unit waveform sample at the current phase, then advance
    fn next_value(&mut self) -> f64 {
        self.next_value_shifted(0.0)
    }

    /// Rewind the phase to the configured start phase
    fn reset(&mut self);
}
