use bitstream::InsufficientData;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("mismatched field and value count, got {fields} fields and {values} values")]
    FieldCountMismatch { fields: usize, values: usize },

    #[error("value {value} too large for field width {width}")]
    ValueTooWide { value: u32, width: u8 },

    #[error("empty input")]
    EmptyInput,

    #[error(transparent)]
    InsufficientData(#[from] InsufficientData),

    /// Decoded bit length too large for a u32. Saturates at `u32::MAX` when
    /// the high bits of a header wider than 32 bits are set.
    #[error("invalid bit-length {bit_length} for field {field}")]
    InvalidBitLength { field: usize, bit_length: u32 },

    #[error("{bytes} trailing bytes after last field")]
    TrailingData { bytes: usize },
}
