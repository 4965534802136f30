//! DER length field decoding and encoding.
//!
//! X.690 Section 8.1.3: bit 7 of the first length octet selects the form.
//! Clear means short form, the remaining seven bits are the length (0-127).
//! Set means long form, the remaining seven bits count the big-endian
//! length octets that follow. A count of zero is the BER indefinite form,
//! which DER forbids.

use super::cursor::Cursor;
use crate::error::{DecodeErrorKind, Error, Result};

/// Decode a length field starting at the cursor.
///
/// Consumes exactly one octet for the short form and `1 + num_bytes`
/// octets for the long form. Never consumes content bytes.
pub fn decode_length(cursor: &mut Cursor<'_>) -> Result<u64> {
    let first = cursor.read_byte()?;
    decode_length_after_first(first, cursor)
}

/// Decode a length field whose first octet the caller already consumed.
///
/// Only long-form continuation octets are read from the cursor; a
/// short-form `first` returns immediately without touching it. This is
/// the tail call of header decoding, where the identifier octet's
/// following byte has already been pulled off the buffer.
pub fn decode_length_after_first(first: u8, cursor: &mut Cursor<'_>) -> Result<u64> {
    // Short form: the seven low bits are the length itself.
    if first & 0x80 == 0 {
        return Ok(u64::from(first));
    }

    let num_bytes = first & 0x7F;
    if num_bytes == 0 {
        return Err(Error::decode(
            cursor.position(),
            DecodeErrorKind::IndefiniteLength,
        ));
    }

    let mut length = 0u64;
    for _ in 0..num_bytes {
        length = (length << 8) | u64::from(cursor.read_byte()?);
    }
    Ok(length)
}

/// Decode a length field at `pos` in `buf`.
///
/// Returns the length and the position of the first byte past the field.
/// `pos` is validated against the buffer before any read; positions past
/// the end fail with `InvalidPosition`, a position exactly at the end
/// fails with `UnexpectedEndOfData` once the read is attempted.
pub fn decode_length_at(buf: &[u8], pos: usize) -> Result<(u64, usize)> {
    let mut cursor = Cursor::with_position(buf, pos)?;
    let length = decode_length(&mut cursor)?;
    Ok((length, cursor.position()))
}

/// Encode a length in minimal DER form.
///
/// Returns a stack-allocated array and the number of valid bytes. The
/// bytes are in reverse order for prepending onto a reverse buffer (see
/// [`EncodeBuf`](super::EncodeBuf)).
pub fn encode_length(len: u64) -> ([u8; 9], usize) {
    let mut out = [0u8; 9];
    if len < 0x80 {
        out[0] = len as u8;
        return (out, 1);
    }

    // Long form: value octets little-endian first (reversed big-endian),
    // then the count octet with bit 7 set.
    let mut value = len;
    let mut count = 0;
    while value > 0 {
        out[count] = value as u8;
        count += 1;
        value >>= 8;
    }
    out[count] = 0x80 | count as u8;
    (out, count + 1)
}
