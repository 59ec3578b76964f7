//! SymbolTiming trait - Sample/symbol rate relationship
//!
//! Defines how many output samples each binary symbol is held for.

/// Symbol timing trait
pub trait SymbolTiming: Send + Sync {
    /// Samples per symbol period
    fn samples_per_symbol(&self) -> usize;

    /// Sample rate in Hz
    fn sample_rate(&self) -> u32;

    /// Symbol rate in baud
    fn symbol_rate(&self) -> u32 {
        self.sample_rate() / self.samples_per_symbol() as u32
    }
}
