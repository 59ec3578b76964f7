//! Byte → bit symbol unpacking
//!
//! Bits leave LSB first. Each extractor owns its cursor, so independent
//! bitstreams need independent extractors.

/// Stateful LSB-first bit unpacker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SymbolExtractor {
    cursor: u8,
}

impl SymbolExtractor {
    /// Create an extractor positioned at bit 0
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Extract the bit under the cursor and advance
    ///
    /// The same byte must be supplied for eight consecutive calls. Passing a
    /// new byte early drops the unread bits of the previous one.
    #[inline]
    pub fn next_symbol(&mut self, byte: u8) -> u8 {
        let symbol = (byte >> self.cursor) & 0x01;
        self.cursor += 1;
        if self.cursor == 8 {
            self.cursor = 0;
        }
        symbol
    }

    /// Bit position the next call will read
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// True when the next call starts a fresh byte
    pub fn is_byte_aligned(&self) -> bool {
        self.cursor == 0
    }

    /// Rewind to bit 0
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsb_first_order() {
        let mut ex = SymbolExtractor::new();
        let bits: Vec<u8> = (0..8).map(|_| ex.next_symbol(0b1011_0010)).collect();
        assert_eq!(bits, vec![0, 1, 0, 0, 1, 1, 0, 1]);
        assert!(ex.is_byte_aligned());
    }

    #[test]
    fn test_ninth_call_starts_next_byte() {
        let mut ex = SymbolExtractor::new();
        for _ in 0..8 {
            ex.next_symbol(0x00);
        }
        assert_eq!(ex.next_symbol(0x01), 1);
        assert_eq!(ex.cursor(), 1);
    }

    #[test]
    fn test_early_byte_drops_unread_bits() {
        let mut ex = SymbolExtractor::new();
        ex.next_symbol(0xFF);
        ex.next_symbol(0xFF);
        // Cursor stays at bit 2 for the new byte
        assert_eq!(ex.next_symbol(0b0000_0100), 1);
        assert_eq!(ex.cursor(), 3);
    }

    #[test]
    fn test_independent_extractors() {
        let mut a = SymbolExtractor::new();
        let mut b = SymbolExtractor::new();
        a.next_symbol(0xFF);
        a.next_symbol(0xFF);
        assert_eq!(b.next_symbol(0x01), 1);
        assert_eq!(a.cursor(), 2);
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn test_reset() {
        let mut ex = SymbolExtractor::new();
        ex.next_symbol(0xAA);
        ex.reset();
        assert_eq!(ex, SymbolExtractor::new());
    }
}
