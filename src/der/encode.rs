//! DER header encoding.
//!
//! Uses a reverse buffer approach: writes from end backwards to avoid
//! needing to pre-calculate lengths.

use super::header::{TagClass, TagForm};
use super::length::encode_length;
use bytes::Bytes;

/// Buffer for DER encoding that writes backwards.
///
/// Content is pushed first, then the length and identifier octets are
/// prepended, so nothing needs its length pre-computed. [`finish`]
/// reverses the buffer into wire order.
///
/// [`finish`]: EncodeBuf::finish
pub struct EncodeBuf {
    buf: Vec<u8>,
}

impl EncodeBuf {
    /// Create a new encode buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Create a new encode buffer with specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Push a single byte (prepends to front).
    pub fn push_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Push multiple bytes (prepends to front, reversed).
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend(bytes.iter().rev());
    }

    /// Push a DER length field in minimal form.
    pub fn push_length(&mut self, len: u64) {
        let (bytes, count) = encode_length(len);
        // encode_length returns bytes in reverse order for prepending.
        for byte in bytes.iter().take(count) {
            self.buf.push(*byte);
        }
    }

    /// Push an identifier octet composed from class, form, and number.
    ///
    /// `number` must be 30 or less; 31 is the high-tag-number escape and
    /// has no single-octet encoding.
    pub fn push_identifier(&mut self, class: TagClass, form: TagForm, number: u8) {
        debug_assert!(number <= 30, "tag number {number} needs the high-tag-number form");
        let form_bit = match form {
            TagForm::Primitive => 0x00,
            TagForm::Constructed => 0x20,
        };
        self.buf.push(class.as_bits() << 6 | form_bit | (number & 0x1F));
    }

    /// Push a complete tag-and-length header: length field, then
    /// identifier octet.
    pub fn push_header(&mut self, class: TagClass, form: TagForm, number: u8, len: u64) {
        self.push_length(len);
        self.push_identifier(class, form, number);
    }

    /// Get the current length of encoded data.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finalize and return the encoded bytes.
    ///
    /// The buffer is reversed to produce the correct order.
    pub fn finish(mut self) -> Bytes {
        self.buf.reverse();
        Bytes::from(self.buf)
    }

    /// Finalize and return as `Vec<u8>`.
    pub fn finish_vec(mut self) -> Vec<u8> {
        self.buf.reverse();
        self.buf
    }
}

impl Default for EncodeBuf {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::der::tag;

    #[test]
    fn encode_null_header() {
        let mut buf = EncodeBuf::new();
        buf.push_header(TagClass::Universal, TagForm::Primitive, tag::universal::NULL, 0);
        assert_eq!(&buf.finish()[..], &[0x05, 0x00]);
    }

    #[test]
    fn encode_integer_tlv() {
        let mut buf = EncodeBuf::new();
        buf.push_byte(0x2A);
        buf.push_header(
            TagClass::Universal,
            TagForm::Primitive,
            tag::universal::INTEGER,
            1,
        );
        assert_eq!(&buf.finish()[..], &[0x02, 0x01, 0x2A]);
    }

    #[test]
    fn encode_sequence_header_long_form() {
        let mut buf = EncodeBuf::new();
        buf.push_header(
            TagClass::Universal,
            TagForm::Constructed,
            tag::universal::SEQUENCE,
            0x010F,
        );
        assert_eq!(&buf.finish()[..], &[0x30, 0x82, 0x01, 0x0F]);
    }

    #[test]
    fn encode_context_specific_constructed() {
        let mut buf = EncodeBuf::new();
        buf.push_header(TagClass::ContextSpecific, TagForm::Constructed, 3, 5);
        assert_eq!(&buf.finish()[..], &[0xA3, 0x05]);
    }

    #[test]
    fn push_bytes_keeps_wire_order() {
        let mut buf = EncodeBuf::new();
        buf.push_bytes(&[0x01, 0x02, 0x03]);
        buf.push_header(
            TagClass::Universal,
            TagForm::Primitive,
            tag::universal::OCTET_STRING,
            3,
        );
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.finish_vec(), vec![0x04, 0x03, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn empty_buffer() {
        let buf = EncodeBuf::default();
        assert!(buf.is_empty());
        assert!(buf.finish().is_empty());
    }
}
