//! DER header codec.
//!
//! This module provides decoding of the tag-and-length framing that
//! introduces every value in a BER/DER-encoded structure, and a matching
//! encoder. The implementation follows X.690 with the DER restrictions:
//! definite lengths only, no high-tag-number form.

mod cursor;
mod encode;
mod header;
mod length;
pub mod tag;

pub use cursor::*;
pub use encode::*;
pub use header::*;
pub use length::*;
