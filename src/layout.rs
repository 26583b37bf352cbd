use bitstream::{bit_width, MAX_FIELD_BITS};

use crate::{Error, Result};

/// Header widths of a record, one per field, in bits.
///
/// Built once and reused for every record of the same shape. Headers wider
/// than 32 bits are allowed; their extra high bits are always zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldLayout {
    widths: Vec<u8>,
}

impl FieldLayout {
    pub fn new(widths: impl Into<Vec<u8>>) -> Self {
        Self {
            widths: widths.into(),
        }
    }

    #[inline]
    pub fn widths(&self) -> &[u8] {
        &self.widths
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Total size of the header zone in bits.
    #[inline]
    pub fn header_bits(&self) -> usize {
        header_bits(&self.widths)
    }

    /// Largest value `field` can hold, or `None` past the last field.
    pub fn max_value(&self, field: usize) -> Option<u32> {
        self.widths.get(field).map(|&width| match (width as u32).min(MAX_FIELD_BITS) {
            0 => 0,
            w => u32::MAX >> (u32::BITS - w),
        })
    }

    /// Size in bytes of the largest record this layout can produce.
    pub fn max_encoded_len(&self) -> usize {
        let value_bits: usize = self
            .widths
            .iter()
            .map(|&w| (w as u32).min(MAX_FIELD_BITS).saturating_sub(1) as usize)
            .sum();
        (self.header_bits() + value_bits + 7) / 8
    }

    /// Exact number of meaningful bits `encode` produces for `values`,
    /// before the final padding.
    pub fn encoded_bits(&self, values: &[u32]) -> Result<usize> {
        check_field_count(&self.widths, values)?;

        let mut value_bits = 0;
        for (&width, &value) in self.widths.iter().zip(values) {
            let bit_length = bit_width(value);
            if bit_length > width as u32 {
                return Err(Error::ValueTooWide { value, width });
            }
            value_bits += bit_length.saturating_sub(1) as usize;
        }
        Ok(self.header_bits() + value_bits)
    }
}

impl From<&[u8]> for FieldLayout {
    fn from(widths: &[u8]) -> Self {
        Self::new(widths)
    }
}

impl AsRef<[u8]> for FieldLayout {
    fn as_ref(&self) -> &[u8] {
        &self.widths
    }
}

pub(crate) fn check_field_count(widths: &[u8], values: &[u32]) -> Result<()> {
    if widths.len() != values.len() {
        return Err(Error::FieldCountMismatch {
            fields: widths.len(),
            values: values.len(),
        });
    }
    Ok(())
}

#[inline]
pub(crate) fn header_bits(widths: &[u8]) -> usize {
    widths.iter().map(|&w| w as usize).sum()
}
