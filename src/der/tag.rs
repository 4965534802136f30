//! Universal tag numbers.
//!
//! The header decoder stops at the tag-and-length framing; a value
//! decoder built on top dispatches on [`TagHeader::number`] against
//! these constants (compare via [`TagHeader::is_universal_type`]).
//!
//! [`TagHeader::number`]: super::TagHeader
//! [`TagHeader::is_universal_type`]: super::TagHeader::is_universal_type

/// Universal tag numbers (bits 4-0 of the identifier octet, class 00).
pub mod universal {
    pub const BOOLEAN: u8 = 0x01;
    pub const INTEGER: u8 = 0x02;
    pub const BIT_STRING: u8 = 0x03;
    pub const OCTET_STRING: u8 = 0x04;
    pub const NULL: u8 = 0x05;
    pub const OBJECT_IDENTIFIER: u8 = 0x06;
    pub const UTF8_STRING: u8 = 0x0C;
    pub const SEQUENCE: u8 = 0x10;
    pub const SET: u8 = 0x11;
    pub const PRINTABLE_STRING: u8 = 0x13;
    pub const IA5_STRING: u8 = 0x16;
    pub const UTC_TIME: u8 = 0x17;
    pub const GENERALIZED_TIME: u8 = 0x18;
}
