use crate::{low_mask, MAX_FIELD_BITS};

/// Appends bit fields most-significant-bit first to a growing byte buffer.
#[derive(Debug, Default)]
pub struct BitWriter {
    current: u64,
    bit_pos: u32,
    buf: Vec<u8>,
    bits_written: usize,
}

impl BitWriter {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buf: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Writes the low `num_bits` of `value`. With `skip_leading_bit` the top
    /// bit of the field is known to be set and only the `num_bits - 1` bits
    /// below it are stored.
    #[inline]
    pub fn append_bits(&mut self, value: u32, num_bits: u32, skip_leading_bit: bool) {
        debug_assert!(num_bits <= MAX_FIELD_BITS);

        let num_bits = if skip_leading_bit {
            debug_assert!(
                num_bits > 0 && (value >> (num_bits - 1)) & 1 == 1,
                "BitWriter: implicit leading bit of {value:#x} ({num_bits} bits) is not set"
            );
            num_bits.saturating_sub(1)
        } else {
            num_bits
        };
        if num_bits == 0 {
            return;
        }

        self.current = (self.current << num_bits) | (value as u64 & low_mask(num_bits));
        self.bit_pos += num_bits;
        self.bits_written += num_bits as usize;

        while self.bit_pos >= 8 {
            self.bit_pos -= 8;
            self.buf.push((self.current >> self.bit_pos) as u8);
        }
        self.current &= low_mask(self.bit_pos);
    }

    /// Appends the first `num_bits` bits of `bytes`, ignoring whatever follows
    /// them in the last byte touched.
    pub fn append_bit_run(&mut self, bytes: &[u8], num_bits: usize) {
        debug_assert!(num_bits <= bytes.len() * 8, "BitWriter: bit run out of bounds");

        let whole = num_bits / 8;
        for &byte in &bytes[..whole] {
            self.append_bits(byte as u32, 8, false);
        }

        let tail = (num_bits % 8) as u32;
        if tail > 0 {
            self.append_bits((bytes[whole] >> (8 - tail)) as u32, tail, false);
        }
    }

    /// Zero-pads the pending partial byte, if any, and returns every byte
    /// written.
    #[inline]
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_pos > 0 {
            self.buf.push((self.current << (8 - self.bit_pos)) as u8);
        }
        self.buf
    }

    #[inline]
    pub fn bits_written(&self) -> usize {
        self.bits_written
    }

    /// Bits already occupied in the pending byte, in `0..8`.
    #[inline]
    pub fn bit_offset(&self) -> u32 {
        self.bit_pos
    }

    /// Completed bytes. Excludes the pending partial byte.
    #[inline]
    pub fn flushed(&self) -> &[u8] {
        &self.buf
    }

    #[inline]
    pub fn compute_bytes_written(&self) -> usize {
        (self.bits_written + 7) / 8
    }
}
