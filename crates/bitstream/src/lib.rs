// MSB-first bit cursors over byte buffers. Every field is at most 32 bits
// wide, so a u64 accumulator always has room for a field plus a partial byte.

pub mod bit_reader;
pub mod bit_writer;

pub use bit_reader::*;
pub use bit_writer::*;


/// Widest field the cursors accept, in bits.
pub const MAX_FIELD_BITS: u32 = u32::BITS;

/// Number of bits needed to represent `v`; 0 for 0.
#[inline]
pub const fn bit_width(v: u32) -> u32 {
    u32::BITS - v.leading_zeros()
}

// Low `num_bits` set. Valid for num_bits < 64.
#[inline]
pub(crate) const fn low_mask(num_bits: u32) -> u64 {
    !(!0u64 << num_bits)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("insufficient data, expected {missing_bits} more bits")]
pub struct InsufficientData {
    pub missing_bits: usize,
}
