//! Modulation kinds and parameter legality
//!
//! Every limit here saturates instead of rejecting: the sample path must
//! never fail, so an out-of-range request is pulled onto the nearest legal
//! value and the modulator keeps running.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use tracing::debug;

use crate::codec::CodecProfile;
use crate::error::ModulationError;
use crate::utils::saturate_at;

/// Analog modulation kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogKind {
    /// s(t) = Ac·c(t) + k·m(t)·c(t), k is the modulation depth
    Am,
    /// s(t) = Ac·cos(2π(fc + k·m(t))t), k is the frequency deviation [Hz]
    Fm,
    /// s(t) = Ac·cos(2πfc·t + k·m(t)), k is the phase deviation [rad]
    Pm,
}

impl AnalogKind {
    /// Legal modulation parameter for this kind
    ///
    /// * AM: fractional part of |k|, in [0, 1)
    /// * FM: at most `carrier_frequency / 8`
    /// * PM: at most π/4
    pub fn derive_k(self, k: f64, carrier_frequency: f64) -> f64 {
        match self {
            AnalogKind::Am => k.abs() % 1.0,
            AnalogKind::Fm => saturate_at(k, carrier_frequency / 8.0),
            AnalogKind::Pm => saturate_at(k, FRAC_PI_4),
        }
    }
}

impl TryFrom<u8> for AnalogKind {
    type Error = ModulationError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(AnalogKind::Am),
            1 => Ok(AnalogKind::Fm),
            2 => Ok(AnalogKind::Pm),
            other => Err(ModulationError::UnknownAnalogTag(other)),
        }
    }
}

/// Binary keying kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryKind {
    /// Amplitude-shift keying, k is the amplitude difference [V]
    Ask,
    /// Frequency-shift keying, k is the frequency difference [Hz]
    Fsk,
    /// Phase-shift keying, k is the phase difference [rad]
    Psk,
}

impl BinaryKind {
    /// Legal modulation parameter for this kind
    ///
    /// * ASK: at most `carrier_amplitude / 4`
    /// * FSK: at most `carrier_frequency / 8`
    /// * PSK: within [0, π/2]
    pub fn derive_k(self, k: f64, carrier_amplitude: f64, carrier_frequency: f64) -> f64 {
        match self {
            BinaryKind::Ask => saturate_at(k, carrier_amplitude * 0.25),
            BinaryKind::Fsk => saturate_at(k, carrier_frequency * 0.125),
            BinaryKind::Psk => saturate_at(k.max(0.0), FRAC_PI_2),
        }
    }
}

impl TryFrom<u8> for BinaryKind {
    type Error = ModulationError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(BinaryKind::Ask),
            1 => Ok(BinaryKind::Fsk),
            2 => Ok(BinaryKind::Psk),
            other => Err(ModulationError::UnknownBinaryTag(other)),
        }
    }
}

/// Saturate a requested carrier against the codec
///
/// Returns `(amplitude, frequency)` with amplitude ≤ Vpp/2 and
/// frequency ≤ Fs/4.
pub fn clamp_carrier(codec: &CodecProfile, amplitude: f64, frequency: f64) -> (f64, f64) {
    let max_amplitude = codec.max_carrier_amplitude();
    let max_frequency = codec.max_carrier_frequency();

    let clamped_amplitude = saturate_at(amplitude, max_amplitude);
    let clamped_frequency = saturate_at(frequency, max_frequency);

    if clamped_amplitude != amplitude {
        debug!(
            requested = amplitude,
            limit = max_amplitude,
            "carrier amplitude saturated"
        );
    }
    if clamped_frequency != frequency {
        debug!(
            requested = frequency,
            limit = max_frequency,
            "carrier frequency saturated"
        );
    }

    (clamped_amplitude, clamped_frequency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_am_depth_wraps() {
        assert!((AnalogKind::Am.derive_k(0.3, 1000.0) - 0.3).abs() < 1e-12);
        assert!((AnalogKind::Am.derive_k(1.25, 1000.0) - 0.25).abs() < 1e-12);
        assert!((AnalogKind::Am.derive_k(-2.5, 1000.0) - 0.5).abs() < 1e-12);
        assert_eq!(AnalogKind::Am.derive_k(1.0, 1000.0), 0.0);
    }

    #[test]
    fn test_fm_deviation_limit() {
        assert_eq!(AnalogKind::Fm.derive_k(50.0, 1000.0), 50.0);
        assert_eq!(AnalogKind::Fm.derive_k(500.0, 1000.0), 125.0);
    }

    #[test]
    fn test_pm_deviation_limit() {
        assert_eq!(AnalogKind::Pm.derive_k(0.5, 1000.0), 0.5);
        // Bounded by π/4, never by the FM formula
        assert_eq!(AnalogKind::Pm.derive_k(3.0, 1000.0), FRAC_PI_4);
        assert_eq!(AnalogKind::Pm.derive_k(3.0, 1.0), FRAC_PI_4);
    }

    #[test]
    fn test_binary_limits() {
        assert_eq!(BinaryKind::Ask.derive_k(1.0, 1.0, 1000.0), 0.25);
        assert_eq!(BinaryKind::Ask.derive_k(0.1, 1.0, 1000.0), 0.1);
        assert_eq!(BinaryKind::Fsk.derive_k(500.0, 1.0, 1000.0), 125.0);
        assert_eq!(BinaryKind::Fsk.derive_k(100.0, 1.0, 1000.0), 100.0);
    }

    #[test]
    fn test_psk_limits_independent_of_fsk() {
        assert_eq!(BinaryKind::Psk.derive_k(3.0, 1.0, 1000.0), FRAC_PI_2);
        assert_eq!(BinaryKind::Psk.derive_k(-1.0, 1.0, 1000.0), 0.0);
        assert_eq!(BinaryKind::Psk.derive_k(1.0, 1.0, 1000.0), 1.0);
        // FSK with a small carrier does not leak the PSK bound
        assert_eq!(BinaryKind::Fsk.derive_k(3.0, 1.0, 8.0), 1.0);
    }

    #[test]
    fn test_tags() {
        assert_eq!(AnalogKind::try_from(1), Ok(AnalogKind::Fm));
        assert_eq!(BinaryKind::try_from(2), Ok(BinaryKind::Psk));
        assert_eq!(
            AnalogKind::try_from(3),
            Err(ModulationError::UnknownAnalogTag(3))
        );
        assert_eq!(
            BinaryKind::try_from(9),
            Err(ModulationError::UnknownBinaryTag(9))
        );
    }

    #[test]
    fn test_clamp_carrier() {
        let codec = CodecProfile::DEFAULT;
        assert_eq!(clamp_carrier(&codec, 1.0, 1000.0), (1.0, 1000.0));
        assert_eq!(clamp_carrier(&codec, 5.0, 30000.0), (1.65, 12000.0));
    }
}
