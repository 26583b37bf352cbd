use bitstream::{bit_width, BitWriter, MAX_FIELD_BITS};
use log::{debug, trace};

use crate::layout::{check_field_count, header_bits};
use crate::{Error, FieldLayout, Result};

/// Packs `values` using one header of `header_widths[i]` bits per field.
///
/// Fails with [`Error::FieldCountMismatch`] if the slices differ in length and
/// with [`Error::ValueTooWide`] if a value's bit length exceeds its header
/// width.
pub fn encode(header_widths: &[u8], values: &[u32]) -> Result<Vec<u8>> {
    check_field_count(header_widths, values)?;
    encode_fields(header_widths, values)
}

impl FieldLayout {
    pub fn encode(&self, values: &[u32]) -> Result<Vec<u8>> {
        check_field_count(self.widths(), values)?;
        encode_fields(self.widths(), values)
    }
}

fn encode_fields(header_widths: &[u8], values: &[u32]) -> Result<Vec<u8>> {
    let mut headers = BitWriter::with_capacity((header_bits(header_widths) + 7) / 8 + values.len() * 4);
    let mut payload = BitWriter::with_capacity(values.len() * 4);

    for (field, (&width, &value)) in header_widths.iter().zip(values).enumerate() {
        let bit_length = bit_width(value);

        // Zero only takes up its header
        if bit_length == 0 {
            append_header(&mut headers, 0, width);
            trace!("field {field}: zero");
            continue;
        }

        if bit_length > width as u32 {
            return Err(Error::ValueTooWide { value, width });
        }

        append_header(&mut headers, bit_length, width);
        payload.append_bits(value, bit_length, true);
        trace!("field {field}: {value} in {bit_length} bits");
    }

    // The value zone follows the headers bit-contiguously; its own padding is
    // dropped.
    let header_bits = headers.bits_written();
    let payload_bits = payload.bits_written();
    headers.append_bit_run(&payload.finish(), payload_bits);

    let out = headers.finish();
    debug!(
        "encoded {} fields: {header_bits} header bits, {payload_bits} value bits, {} bytes",
        values.len(),
        out.len()
    );
    Ok(out)
}

// Headers past 32 bits carry zeros above the length.
fn append_header(writer: &mut BitWriter, bit_length: u32, width: u8) {
    let mut excess = (width as u32).saturating_sub(MAX_FIELD_BITS);
    while excess > 0 {
        let chunk = excess.min(MAX_FIELD_BITS);
        writer.append_bits(0, chunk, false);
        excess -= chunk;
    }
    writer.append_bits(bit_length, (width as u32).min(MAX_FIELD_BITS), false);
}
