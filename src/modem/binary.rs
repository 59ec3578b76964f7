//! Binary keying modulator (ASK / FSK / PSK)
//!
//! Consumes one bit symbol per call and produces one carrier sample.
//! Symbols are masked to their least significant bit.

use tracing::warn;

use crate::codec::CodecProfile;
use crate::traits::{CarrierOscillator, SampleModulator, SymbolTiming, Waveform};

use super::params::{clamp_carrier, BinaryKind};
use super::symbols::SymbolExtractor;

/// Binary modulator driving its own carrier oscillator
///
/// # Type Parameters
/// * `K` - Carrier oscillator, exclusively owned
#[derive(Debug, Clone)]
pub struct BinaryModulator<K: CarrierOscillator> {
    kind: Option<BinaryKind>,
    k: f64,
    carrier_amplitude: f64,
    carrier_frequency: f64,
    shift_frequency: f64,
    symbol_sample_count: usize,
    samples_per_symbol: usize,
    carrier: K,
    codec: CodecProfile,
}

impl<K: CarrierOscillator> BinaryModulator<K> {
    /// Create a modulator against the default codec
    ///
    /// # Arguments
    /// * `kind` - ASK, FSK or PSK
    /// * `carrier_amplitude` - Carrier amplitude [V], saturates at Vpp/2
    /// * `carrier_frequency` - Carrier frequency [Hz], saturates at Fs/4
    /// * `k` - Amplitude (ASK), frequency (FSK) or phase (PSK) difference
    /// * `carrier` - Oscillator to bind
    pub fn new(
        kind: BinaryKind,
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
        kind: BinaryKind,
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
            shift_frequency: 0.0,
            symbol_sample_count: 0,
            samples_per_symbol: 1,
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
    /// frequency. Symbol pacing is kept.
    pub fn initialize(
        &mut self,
        kind: BinaryKind,
        carrier_amplitude: f64,
        carrier_frequency: f64,
        k: f64,
        carrier: Option<K>,
    ) {
        self.bind(carrier);
        self.configure(Some(kind), carrier_amplitude, carrier_frequency, k);
    }

    /// Re-initialize from a raw keying tag
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
        let kind = match BinaryKind::try_from(tag) {
            Ok(kind) => Some(kind),
            Err(e) => {
                warn!(error = %e, "binary modulator left unmodulated");
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
        kind: Option<BinaryKind>,
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
            Some(kind) => kind.derive_k(k, amplitude, frequency),
            None => 0.0,
        };
        self.shift_frequency = match kind {
            Some(BinaryKind::Fsk) => self.k / 2.0,
            _ => 0.0,
        };
        self.symbol_sample_count = 0;
    }

    /// Hold each symbol for `samples` output samples (at least one)
    pub fn set_samples_per_symbol(&mut self, samples: usize) {
        self.samples_per_symbol = samples.max(1);
        self.symbol_sample_count = 0;
    }

    /// Take symbol pacing from a timing description
    pub fn set_timing<T: SymbolTiming>(&mut self, timing: &T) {
        self.set_samples_per_symbol(timing.samples_per_symbol());
    }

    /// Count one emitted sample against the current symbol
    ///
    /// Returns `true` once the symbol has been held for its full duration;
    /// the counter then starts over for the next symbol.
    #[inline]
    pub fn advance_symbol_clock(&mut self) -> bool {
        self.symbol_sample_count += 1;
        if self.symbol_sample_count >= self.samples_per_symbol {
            self.symbol_sample_count = 0;
            true
        } else {
            false
        }
    }

    /// Key a byte stream onto the carrier
    ///
    /// Bits leave each byte LSB first through `extractor`, each held for
    /// `samples_per_symbol` samples. An extractor left mid-byte finishes
    /// the remaining bit positions of the first byte only.
    pub fn modulate(&mut self, bytes: &[u8], extractor: &mut SymbolExtractor) -> Vec<i16> {
        let capacity = output_capacity(bytes.len(), self.samples_per_symbol);
        let mut output = Vec::with_capacity(capacity);

        for &byte in bytes {
            loop {
                let symbol = extractor.next_symbol(byte);
                loop {
                    output.push(self.next_sample(symbol));
                    if self.advance_symbol_clock() {
                        break;
                    }
                }
                if extractor.is_byte_aligned() {
                    break;
                }
            }
        }

        output
    }

    /// Rewind the carrier, undo FSK retuning and restart symbol pacing
    pub fn reset(&mut self) {
        self.carrier.set_frequency(self.carrier_frequency);
        self.carrier.reset();
        self.symbol_sample_count = 0;
    }

    /// Configured kind, `None` after an unknown tag
    pub fn kind(&self) -> Option<BinaryKind> {
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

    /// FSK offset from the carrier for each symbol [Hz]
    pub fn shift_frequency(&self) -> f64 {
        self.shift_frequency
    }

    /// Samples each symbol is held for
    pub fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    /// Samples already emitted for the current symbol
    pub fn symbol_sample_count(&self) -> usize {
        self.symbol_sample_count
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

/// Upper bound on the samples `modulate` reserves up front
const MAX_RESERVED_SAMPLES: usize = 1 << 20;

fn output_capacity(byte_count: usize, samples_per_symbol: usize) -> usize {
    byte_count
        .saturating_mul(8)
        .saturating_mul(samples_per_symbol)
        .min(MAX_RESERVED_SAMPLES)
}

impl<K: CarrierOscillator> SampleModulator for BinaryModulator<K> {
    type Input = u8;

    fn codec(&self) -> &CodecProfile {
        &self.codec
    }

    #[inline]
    fn next_value(&mut self, symbol: u8) -> f64 {
        let one = symbol & 0x01 == 1;
        match self.kind {
            Some(BinaryKind::Psk) => {
                // 180° flip
                let y = self.carrier.next_value() * self.carrier_amplitude;
                if one {
                    -y
                } else {
                    y
                }
            }
            Some(BinaryKind::Ask) => {
                let c = self.carrier.next_value();
                if one {
                    c * (self.carrier_amplitude / 2.0)
                } else {
                    c * self.carrier_amplitude
                }
            }
            Some(BinaryKind::Fsk) => {
                let freq = if one {
                    self.carrier_frequency + self.shift_frequency
                } else {
                    self.carrier_frequency - self.shift_frequency
                };
                self.carrier.set_frequency(freq);
                self.carrier.next_value() * self.carrier_amplitude
            }
            None => 0.0,
        }
    }
}
