//! DER identifier octet decoding.
//!
//! Tag encoding follows X.690 Section 8.1.2:
//! - Bits 7-6: Class (00=Universal, 01=Application, 10=Context-specific, 11=Private)
//! - Bit 5: Primitive (0) or Constructed (1)
//! - Bits 4-0: Tag number (0-30, or 31 announcing the high-tag-number form)

use super::cursor::Cursor;
use super::length::decode_length;
use crate::error::{DecodeErrorKind, Error, Result};

/// Tag number bits announcing the multi-octet high-tag-number form.
const HIGH_TAG_NUMBER: u8 = 0x1F;

/// Tag class from bits 7-6 of the identifier octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagClass {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

impl TagClass {
    /// Class from the two low bits of `octet >> 6`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b00 => TagClass::Universal,
            0b01 => TagClass::Application,
            0b10 => TagClass::ContextSpecific,
            _ => TagClass::Private,
        }
    }

    /// The two class bits, unshifted.
    pub const fn as_bits(self) -> u8 {
        match self {
            TagClass::Universal => 0b00,
            TagClass::Application => 0b01,
            TagClass::ContextSpecific => 0b10,
            TagClass::Private => 0b11,
        }
    }
}

impl std::fmt::Display for TagClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagClass::Universal => write!(f, "universal"),
            TagClass::Application => write!(f, "application"),
            TagClass::ContextSpecific => write!(f, "context-specific"),
            TagClass::Private => write!(f, "private"),
        }
    }
}

/// Primitive or constructed encoding, bit 5 of the identifier octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagForm {
    Primitive,
    Constructed,
}

impl std::fmt::Display for TagForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagForm::Primitive => write!(f, "primitive"),
            TagForm::Constructed => write!(f, "constructed"),
        }
    }
}

/// Decoded tag-and-length header.
///
/// `data_length` counts the content octets that follow the header. The
/// decoder never reads them; interpreting content is the job of a value
/// decoder dispatching on `class` and `number` (see [`super::tag`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagHeader {
    /// Tag class from bits 7-6.
    pub class: TagClass,
    /// Primitive or constructed, bit 5.
    pub form: TagForm,
    /// Tag number, 0-30.
    pub number: u8,
    /// Number of content octets following the header.
    pub data_length: u64,
}

impl TagHeader {
    /// True when the header introduces a constructed encoding.
    pub fn is_constructed(&self) -> bool {
        self.form == TagForm::Constructed
    }

    /// True for universal-class tags.
    pub fn is_universal(&self) -> bool {
        self.class == TagClass::Universal
    }

    /// True when this header introduces the given universal type, e.g.
    /// `header.is_universal_type(tag::universal::SEQUENCE)`.
    pub fn is_universal_type(&self, number: u8) -> bool {
        self.class == TagClass::Universal && self.number == number
    }
}

/// Decode an identifier octet and the length field that follows it.
///
/// Rejects tag number 31 with `HighTagNumberUnsupported` before any
/// length octet is touched. Cursor position on return is the offset of
/// the first content byte.
pub fn decode_header(cursor: &mut Cursor<'_>) -> Result<TagHeader> {
    let start = cursor.position();
    let octet = cursor.read_byte()?;

    let number = octet & 0x1F;
    if number == HIGH_TAG_NUMBER {
        return Err(Error::decode(start, DecodeErrorKind::HighTagNumberUnsupported));
    }

    let class = TagClass::from_bits(octet >> 6);
    let form = if octet & 0x20 != 0 {
        TagForm::Constructed
    } else {
        TagForm::Primitive
    };
    let data_length = decode_length(cursor)?;

    tracing::trace!(%class, %form, number, data_length, "decoded tag header");

    Ok(TagHeader {
        class,
        form,
        number,
        data_length,
    })
}

/// Decode a tag-and-length header at `pos` in `buf`.
///
/// Returns the header and the position of the first content byte. `pos`
/// is validated against the buffer before any read.
pub fn decode_header_at(buf: &[u8], pos: usize) -> Result<(TagHeader, usize)> {
    let mut cursor = Cursor::with_position(buf, pos)?;
    let header = decode_header(&mut cursor)?;
    Ok((header, cursor.position()))
}
