//! Modulator error types
//!
//! Only configuration-time and host-boundary paths are fallible. The
//! per-sample path saturates instead of failing.

use thiserror::Error;

/// Result type for modulator configuration
pub type ModulationResult<T> = Result<T, ModulationError>;

/// Errors raised outside the sample path
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModulationError {
    /// Raw tag does not name an analog modulation
    #[error("unknown analog modulation tag: {0}")]
    UnknownAnalogTag(u8),

    /// Raw tag does not name a binary keying
    #[error("unknown binary modulation tag: {0}")]
    UnknownBinaryTag(u8),

    /// Symbol rate of zero cannot pace symbols
    #[error("symbol rate must be non-zero")]
    ZeroSymbolRate,

    /// Sample rate is not a whole multiple of the symbol rate
    #[error("sample rate {sample_rate} must be integer multiple of symbol rate {symbol_rate}")]
    UnalignedSymbolRate { sample_rate: u32, symbol_rate: u32 },

    /// Host handed over a modulation name we do not implement
    #[error("unsupported modulation type: {0}")]
    UnsupportedModulation(String),

    /// A resource mutex was poisoned by a panicking holder
    #[error("lock poisoned")]
    LockPoisoned,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ModulationError::UnknownAnalogTag(7).to_string(),
            "unknown analog modulation tag: 7"
        );
        assert_eq!(
            ModulationError::UnalignedSymbolRate {
                sample_rate: 8000,
                symbol_rate: 2400
            }
            .to_string(),
            "sample rate 8000 must be integer multiple of symbol rate 2400"
        );
    }
}
