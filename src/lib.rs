//! DER tag-and-length header decoding.
//!
//! Every value inside a BER/DER-encoded structure — certificates, keys,
//! PKCS containers — is framed by an identifier octet and a length field.
//! This crate decodes exactly that framing: what kind of tag introduces
//! the content and how many bytes follow. It never interprets the content
//! octets themselves; that is the job of a value decoder built on top.
//!
//! Decoding is strict DER: the BER indefinite-length form and the
//! multi-octet high-tag-number form are rejected. Every failure carries
//! the byte offset where the decoder stopped and one of four
//! [`DecodeErrorKind`]s.
//!
//! # Example
//!
//! ```
//! use der_header::{decode_header_at, TagClass, TagForm};
//! use der_header::der::tag;
//!
//! // SEQUENCE, 3 content bytes
//! let buf = [0x30, 0x03, 0x02, 0x01, 0x2A];
//! let (header, content_start) = decode_header_at(&buf, 0).unwrap();
//!
//! assert_eq!(header.class, TagClass::Universal);
//! assert_eq!(header.form, TagForm::Constructed);
//! assert!(header.is_universal_type(tag::universal::SEQUENCE));
//! assert_eq!(header.data_length, 3);
//! assert_eq!(content_start, 2);
//! ```
//!
//! Decoding is a pure function of `(buffer, position)`: buffers may be
//! shared across concurrent decodes, and each call owns its [`Cursor`]
//! exclusively for its duration.

pub mod der;
pub mod error;

pub use der::{
    Cursor, EncodeBuf, TagClass, TagForm, TagHeader, decode_header, decode_header_at,
    decode_length, decode_length_after_first, decode_length_at, encode_length,
};
pub use error::{DecodeErrorKind, Error, Result};
