use crate::{low_mask, InsufficientData, MAX_FIELD_BITS};

/// Pops bit fields most-significant-bit first from a byte slice.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    // Pulled in but not yet consumed, right-aligned.
    current: u64,
    bits_left: u32,
    buf: &'a [u8],
    bits_read: usize,
}

impl<'a> BitReader<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            current: 0,
            bits_left: 0,
            buf,
            bits_read: 0,
        }
    }

    /// Reads a `num_bits` wide field. With `restore_leading_bit` only the
    /// `num_bits - 1` low bits come from the stream and the top bit is set.
    ///
    /// On failure nothing is consumed.
    pub fn pop_bits(&mut self, num_bits: u32, restore_leading_bit: bool) -> Result<u32, InsufficientData> {
        debug_assert!(num_bits <= MAX_FIELD_BITS);

        if num_bits == 0 {
            return Ok(0);
        }
        let stored = if restore_leading_bit { num_bits - 1 } else { num_bits };

        if self.bits_left < stored {
            let needed = (stored - self.bits_left) as usize;
            let available = self.buf.len().saturating_mul(8);
            if available < needed {
                return Err(InsufficientData {
                    missing_bits: needed - available,
                });
            }
            while self.bits_left < stored {
                self.current = (self.current << 8) | self.buf[0] as u64;
                self.buf = &self.buf[1..];
                self.bits_left += 8;
            }
        }

        self.bits_left -= stored;
        self.bits_read += stored as usize;

        let mut value = ((self.current >> self.bits_left) & low_mask(stored)) as u32;
        self.current &= low_mask(self.bits_left);

        if restore_leading_bit {
            value |= 1u32 << (num_bits - 1);
        }
        Ok(value)
    }

    #[inline]
    pub fn bits_read(&self) -> usize {
        self.bits_read
    }

    /// Bits already consumed in the byte under the cursor, in `0..8`.
    #[inline]
    pub fn bit_offset(&self) -> u32 {
        (8 - self.bits_left % 8) % 8
    }

    /// Whole bytes not yet touched by the cursor.
    #[inline]
    pub fn remaining_bytes(&self) -> usize {
        self.buf.len()
    }
}
