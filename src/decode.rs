use bitstream::{BitReader, InsufficientData, MAX_FIELD_BITS};
use log::{debug, trace, warn};

use crate::layout::header_bits;
use crate::{Error, FieldLayout, Result};

/// Unpacks one value per entry of `header_widths` from `data`.
///
/// Bytes past the last field are ignored; see [`decode_exact`] for the strict
/// form.
///
/// Empty `data` fails with [`Error::EmptyInput`] only when the headers take at
/// least one bit. With no header bits at all, as for `[]` or `[0, 0]`, the
/// record holds nothing but zeros and empty `data` decodes to them, matching
/// the empty buffer [`encode`](crate::encode) produces for it.
pub fn decode(header_widths: &[u8], data: &[u8]) -> Result<Vec<u32>> {
    decode_fields(header_widths, data).map(|(values, _)| values)
}

/// Like [`decode`], but fails with [`Error::TrailingData`] if whole bytes
/// remain after the byte holding the last field's final bit.
pub fn decode_exact(header_widths: &[u8], data: &[u8]) -> Result<Vec<u32>> {
    let (values, trailing) = decode_fields(header_widths, data)?;
    reject_trailing(values, trailing)
}

impl FieldLayout {
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u32>> {
        decode(self.widths(), data)
    }

    pub fn decode_exact(&self, data: &[u8]) -> Result<Vec<u32>> {
        decode_exact(self.widths(), data)
    }
}

fn reject_trailing(values: Vec<u32>, trailing: usize) -> Result<Vec<u32>> {
    if trailing > 0 {
        warn!("{trailing} trailing bytes after {} fields", values.len());
        return Err(Error::TrailingData { bytes: trailing });
    }
    Ok(values)
}

fn truncated(field: usize, e: InsufficientData) -> Error {
    warn!("field {field}: stream ends {} bits short", e.missing_bits);
    e.into()
}

// Headers past 32 bits must be zero above the length; anything set there
// reads as `u32::MAX`.
fn pop_header(reader: &mut BitReader, width: u8) -> std::result::Result<u32, InsufficientData> {
    let mut excess = (width as u32).saturating_sub(MAX_FIELD_BITS);
    let mut overflow = false;
    while excess > 0 {
        let chunk = excess.min(MAX_FIELD_BITS);
        overflow |= reader.pop_bits(chunk, false)? != 0;
        excess -= chunk;
    }

    let bit_length = reader.pop_bits((width as u32).min(MAX_FIELD_BITS), false)?;
    Ok(if overflow { u32::MAX } else { bit_length })
}

// Returns the values and the number of untouched bytes left in `data`.
fn decode_fields(header_widths: &[u8], data: &[u8]) -> Result<(Vec<u32>, usize)> {
    if data.is_empty() && header_bits(header_widths) > 0 {
        return Err(Error::EmptyInput);
    }

    let mut reader = BitReader::new(data);

    let mut bit_lengths = Vec::with_capacity(header_widths.len());
    for (field, &width) in header_widths.iter().enumerate() {
        let bit_length = pop_header(&mut reader, width).map_err(|e| truncated(field, e))?;
        bit_lengths.push(bit_length);
    }

    // Lengths above the header width are accepted as long as they fit a u32.
    if let Some(field) = bit_lengths.iter().position(|&l| l > MAX_FIELD_BITS) {
        let bit_length = bit_lengths[field];
        warn!("field {field}: bit-length {bit_length} does not fit a u32");
        return Err(Error::InvalidBitLength { field, bit_length });
    }

    // Values continue on the same cursor, right after the last header.
    let mut values = Vec::with_capacity(bit_lengths.len());
    for (field, &bit_length) in bit_lengths.iter().enumerate() {
        let value = reader
            .pop_bits(bit_length, true)
            .map_err(|e| truncated(field, e))?;
        trace!("field {field}: {value} in {bit_length} bits");
        values.push(value);
    }

    debug!(
        "decoded {} fields from {} of {} bytes",
        values.len(),
        (reader.bits_read() + 7) / 8,
        data.len()
    );
    Ok((values, reader.remaining_bytes()))
}
