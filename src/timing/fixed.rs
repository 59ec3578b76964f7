//! Fixed symbol timing
//!
//! Each binary symbol is held for a whole number of codec samples, so the
//! sample rate must be an integer multiple of the symbol rate.

use crate::error::{ModulationError, ModulationResult};
use crate::traits::SymbolTiming;

/// Fixed symbol timing (deterministic hold)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTiming {
    sample_rate: u32,
    symbol_rate: u32,
    samples_per_symbol: usize,
}

impl FixedTiming {
    /// Create fixed timing from sample and symbol rates
    ///
    /// # Errors
    /// `ZeroSymbolRate` for a zero baud rate, `UnalignedSymbolRate` when
    /// the sample rate is not an integer multiple of the symbol rate.
    pub fn new(sample_rate: u32, symbol_rate: u32) -> ModulationResult<Self> {
        if symbol_rate == 0 {
            return Err(ModulationError::ZeroSymbolRate);
        }
        if sample_rate % symbol_rate != 0 {
            return Err(ModulationError::UnalignedSymbolRate {
                sample_rate,
                symbol_rate,
            });
        }

        Ok(Self {
            sample_rate,
            symbol_rate,
            samples_per_symbol: (sample_rate / symbol_rate) as usize,
        })
    }
}

impl SymbolTiming for FixedTiming {
    fn samples_per_symbol(&self) -> usize {
        self.samples_per_symbol
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn symbol_rate(&self) -> u32 {
        self.symbol_rate
    }
}
