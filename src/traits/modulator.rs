//! Modulator trait - message → codec sample
//!
//! Shared by the analog and binary families so the quantization step is
//! written once.

use crate::codec::CodecProfile;
use crate::utils::quantize_volts;

/// Per-sample modulator
pub trait SampleModulator {
    /// One message sample (float for analog, bit symbol for binary)
    type Input: Copy;

    /// Codec this modulator was configured against
    fn codec(&self) -> &CodecProfile;

    /// Instantaneous output voltage [V] for one input
    fn next_value(&mut self, input: Self::Input) -> f64;

    /// Instantaneous output as a channel sample
    ///
    /// Always `trunc(next_value / volts_per_lsb)`; no hidden state.
    #[inline]
    fn next_sample(&mut self, input: Self::Input) -> i16 {
        let volts = self.next_value(input);
        quantize_volts(volts, self.codec().volts_per_lsb)
    }
}
