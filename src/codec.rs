//! Codec constants shared by every modulator
//!
//! The codec bounds every configuration clamp: carrier amplitude is limited
//! to half the peak-to-peak swing and carrier frequency to a quarter of the
//! sample rate.

/// Peak-to-peak output swing of the default codec [V]
pub const CODEC_VPP: f64 = 3.3;

/// Sample rate of the default codec [Hz]
pub const CODEC_SAMPLE_RATE: u32 = 48_000;

/// Channel sample width of the default codec
pub const CODEC_BITS: u32 = 16;

/// Fixed electrical description of the codec a modulator feeds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodecProfile {
    /// Peak-to-peak output swing [V]
    pub peak_to_peak_volts: f64,
    /// Sample rate [Hz]
    pub sample_rate: u32,
    /// Voltage represented by one channel LSB [V]
    pub volts_per_lsb: f64,
}

impl CodecProfile {
    /// 3.3 Vpp, 48 kHz, 16-bit codec
    pub const DEFAULT: CodecProfile = CodecProfile {
        peak_to_peak_volts: CODEC_VPP,
        sample_rate: CODEC_SAMPLE_RATE,
        volts_per_lsb: CODEC_VPP / (1u32 << CODEC_BITS) as f64,
    };

    /// Largest carrier amplitude the codec can reproduce [V]
    #[inline]
    pub fn max_carrier_amplitude(&self) -> f64 {
        self.peak_to_peak_volts / 2.0
    }

    /// Largest carrier frequency accepted by the modulators [Hz]
    #[inline]
    pub fn max_carrier_frequency(&self) -> f64 {
        self.sample_rate as f64 / 4.0
    }
}

impl Default for CodecProfile {
    fn default() -> Self {
        Self::DEFAULT
    }
}
