//! Phase-accumulator carrier oscillator
//!
//! Generates the carrier for the modulators. Phase-continuous,
//! frequency-adjustable, one sample per query.

use crate::traits::{CarrierOscillator, Waveform};
use crate::utils::normalize_angle;
use std::f64::consts::{PI, TAU};

/// Phase-accumulator oscillator
#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    amplitude: f64,
    offset: f64,
    start_phase: f64,
    phase: f64,
    phase_inc: f64,
    freq_hz: f64,
    sample_rate: f64,
}

impl Oscillator {
    /// Create a unit-amplitude sinusoid
    ///
    /// # Arguments
    /// * `freq_hz` - Carrier frequency in Hz
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(freq_hz: f64, sample_rate: u32) -> Self {
        let sample_rate_f = sample_rate as f64;
        Self {
            waveform: Waveform::Sinusoid,
            amplitude: 1.0,
            offset: 0.0,
            start_phase: 0.0,
            phase: 0.0,
            phase_inc: TAU * freq_hz / sample_rate_f,
            freq_hz,
            sample_rate: sample_rate_f,
        }
    }

    /// Configured waveform
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Configured output amplitude [V]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Configured DC offset [V]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Scaled sample `amplitude * unit + offset`, then advance
    ///
    /// For standalone tone generation. Modulators read the unit sample and
    /// apply their own carrier amplitude.
    pub fn output(&mut self) -> f64 {
        self.amplitude * self.next_value() + self.offset
    }

    #[inline]
    fn unit_at(&self, theta: f64) -> f64 {
        match self.waveform {
            Waveform::Sinusoid => theta.cos(),
            Waveform::Square => {
                if normalize_angle(theta) < PI {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => {
                let t = normalize_angle(theta);
                if t < PI {
                    1.0 - 2.0 * t / PI
                } else {
                    2.0 * t / PI - 3.0
                }
            }
            Waveform::Sawtooth => normalize_angle(theta) / PI - 1.0,
        }
    }
}

impl CarrierOscillator for Oscillator {
    fn initialize(
        &mut self,
        waveform: Waveform,
        amplitude: f64,
        frequency: f64,
        phase: f64,
        offset: f64,
    ) {
        self.waveform = waveform;
        self.amplitude = amplitude;
        self.offset = offset;
        self.start_phase = normalize_angle(phase);
        self.phase = self.start_phase;
        self.set_frequency(frequency);
    }

    fn set_frequency(&mut self, freq_hz: f64) {
        self.freq_hz = freq_hz;
        self.phase_inc = TAU * freq_hz / self.sample_rate;
    }

    fn frequency(&self) -> f64 {
        self.freq_hz
    }

    fn phase(&self) -> f64 {
        self.phase
    }

    fn next_value_shifted(&mut self, phase_offset: f64) -> f64 {
        let value = self.unit_at(self.phase + phase_offset);
        self.phase += self.phase_inc;

        // Keep phase in [0, 2π); FM can drive the increment negative
        if self.phase >= TAU || self.phase < 0.0 {
            self.phase = normalize_angle(self.phase);
        }

        value
    }

    fn reset(&mut self) {
        self.phase = self.start_phase;
    }
}
