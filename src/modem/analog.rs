//! Analog modulator (AM / FM / PM)
//!
//! Consumes one message sample per call and produces one carrier sample.
//! Messages are expected normalized to the codec swing, |m| ≤ 1.

use tracing::warn;

use crate::codec::CodecProfile;
use crate::traits::{CarrierOscillator, SampleModulator, Waveform};

use super::params::{clamp_carrier, AnalogKind};

/// Analog modulator driving its own carrier oscillator
///
/// # Type Parameters
/// * `K` - Carrier oscillator, exclusively owned
#[derive(Debug, Clone)]
pub struct AnalogModulator<K: CarrierOscillator> {
    kind: Option<AnalogKind>,
    k: f64,
    carrier_amplitude: f64,
    carrier_frequency: f64,
    carrier: K,
    codec: CodecProfile,
}

impl<K: CarrierOscillator> AnalogModulator<K> {
    /// Create a modulator against the default codec
    ///
    /// # Arguments
    /// * `kind` - AM, FM or PM
    /// * `carrier_amplitude` - Carrier amplitude [V], saturates at Vpp/2
    /// * `carrier_frequency` - Carrier frequency [Hz], saturates at Fs/4
    /// * `k` - Modulation depth (AM), frequency deviation (FM) or phase deviation (PM)
    /// * `carrier` - Oscillator to bind
    pub fn new(
        kind: AnalogKind,
        carrier_amplitude: f64,
        carrier_frequency: f64,
        k: f64,
        carrier: K,
    ) -> Self {
        Self::with_codec(
            CodecProfile::DEFAULT,
            kind,
            carrier_amplitude,
            carrier_frequency,
            k,
            carrier,
        )
    }

    /// Create a modulator against a specific codec
    pub fn with_codec(
        codec: CodecProfile,
        kind: AnalogKind,
        carrier_amplitude: f64,
        carrier_frequency: f64,
        k: f64,
        carrier: K,
    ) -> Self {
        let mut modulator = Self {
            kind: None,
            k: 0.0,
            carrier_amplitude: 0.0,
            carrier_frequency: 0.0,
            carrier,
            codec,
        };
        modulator.configure(Some(kind), carrier_amplitude, carrier_frequency, k);
        modulator
    }

    /// Re-initialize in place
    ///
    /// A supplied `carrier` replaces the bound one. Either way the bound
    /// carrier is re-initialized to a sinusoid at the clamped amplitude and
    /// frequency, so FM retuning does not carry over.
    pub fn initialize(
        &mut self,
        kind: AnalogKind,
        carrier_amplitude: f64,
        carrier_frequency: f64,
        k: f64,
        carrier: Option<K>,
    ) {
        self.bind(carrier);
        self.configure(Some(kind), carrier_amplitude, carrier_frequency, k);
    }

    /// Re-initialize from a raw modulation tag
    ///
    /// An unknown tag leaves the modulator unmodulated: `k` is zero and every
    /// value is `0.0`.
    pub fn initialize_tag(
        &mut self,
        tag: u8,
        carrier_amplitude: f64,
        carrier_frequency: f64,
        k: f64,
        carrier: Option<K>,
    ) {
        let kind = match AnalogKind::try_from(tag) {
            Ok(kind) => Some(kind),
            Err(e) => {
                warn!(error = %e, "analog modulator left unmodulated");
                None
            }
        };
        self.bind(carrier);
        self.configure(kind, carrier_amplitude, carrier_frequency, k);
    }

    fn bind(&mut self, carrier: Option<K>) {
        if let Some(carrier) = carrier {
            self.carrier = carrier;
        }
    }

    fn configure(
        &mut self,
        kind: Option<AnalogKind>,
        carrier_amplitude: f64,
        carrier_frequency: f64,
        k: f64,
    ) {
        let (amplitude, frequency) =
            clamp_carrier(&self.codec, carrier_amplitude, carrier_frequency);

        self.kind = kind;
        self.carrier_amplitude = amplitude;
        self.carrier_frequency = frequency;

        self.carrier
            .initialize(Waveform::Sinusoid, amplitude, frequency, 0.0, 0.0);

        self.k = match kind {
            Some(kind) => kind.derive_k(k, frequency),
            None => 0.0,
        };
    }

    /// Modulate a block of message samples to channel samples
    pub fn modulate(&mut self, messages: &[f64]) -> Vec<i16> {
        messages.iter().map(|&m| self.next_sample(m)).collect()
    }

    /// Rewind the carrier and undo any FM retuning
    pub fn reset(&mut self) {
        self.carrier.set_frequency(self.carrier_frequency);
        self.carrier.reset();
    }

    /// Configured kind, `None` after an unknown tag
    pub fn kind(&self) -> Option<AnalogKind> {
        self.kind
    }

    /// Legal modulation parameter in use
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Clamped carrier amplitude [V]
    pub fn carrier_amplitude(&self) -> f64 {
        self.carrier_amplitude
    }

    /// Clamped carrier frequency [Hz]
    pub fn carrier_frequency(&self) -> f64 {
        self.carrier_frequency
    }

    /// Get reference to the bound carrier
    pub fn carrier(&self) -> &K {
        &self.carrier
    }

    /// Get mutable reference to the bound carrier
    pub fn carrier_mut(&mut self) -> &mut K {
        &mut self.carrier
    }
}

impl<K: CarrierOscillator> SampleModulator for AnalogModulator<K> {
    type Input = f64;

    fn codec(&self) -> &CodecProfile {
        &self.codec
    }

    #[inline]
    fn next_value(&mut self, message: f64) -> f64 {
        match self.kind {
            Some(AnalogKind::Am) => {
                let carrier = self.carrier.next_value();
                carrier * self.carrier_amplitude + self.k * (message * carrier)
            }
            Some(AnalogKind::Fm) => {
                self.carrier
                    .set_frequency(self.carrier_frequency + self.k * message);
                self.carrier.next_value() * self.carrier_amplitude
            }
            Some(AnalogKind::Pm) => {
                self.carrier.next_value_shifted(self.k * message) * self.carrier_amplitude
            }
            None => 0.0,
        }
    }
}
