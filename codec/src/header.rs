//! Type tags that prefix every encoded value.
//!
//! Each header is a big-endian `u16`. The constants are picked so that the
//! Base64 form of an encoded buffer starts with a readable two-letter
//! mnemonic, which makes stored values recognizable in dumps:
//!
//! | Header | Value | Mnemonic |
//! |---|---|---|
//! | [Header::SIZE] | `0x0CC3` | `DM` |
//! | [Header::POINT] | `0x3D30` | `PT` |
//! | [Header::RECTANGLE] | `0x4530` | `RT` |
//! | [Header::COLOR] | `0x08B0` | `CL` |

use crate::Error;
use bytes::{Buf, BufMut};
use std::fmt;

/// Number of bytes a header occupies.
pub const HEADER_LEN: usize = 2;

const BASE64_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// A 16-bit type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Header(u16);

impl Header {
    /// Header of an encoded [crate::Size].
    pub const SIZE: Self = Self(0x0CC3);
    /// Header of an encoded [crate::Point].
    pub const POINT: Self = Self(0x3D30);
    /// Header of an encoded [crate::Rect].
    pub const RECTANGLE: Self = Self(0x4530);
    /// Header of an encoded [crate::Color].
    pub const COLOR: Self = Self(0x08B0);

    /// Returns the raw tag.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Writes the header big-endian.
    pub fn write(self, buf: &mut impl BufMut) {
        buf.put_u16(self.0);
    }

    /// Consumes the leading 16 bits of `buf` and verifies they equal `self`.
    pub fn check(self, buf: &mut impl Buf) -> Result<(), Error> {
        if buf.remaining() < HEADER_LEN {
            return Err(Error::EndOfBuffer);
        }
        let found = Self(buf.get_u16());
        if found != self {
            return Err(Error::HeaderMismatch {
                expected: self,
                found,
            });
        }
        Ok(())
    }

    /// Returns the first two Base64 characters of a buffer starting with this header.
    pub fn mnemonic(self) -> [char; 2] {
        let first = (self.0 >> 10) as usize;
        let second = ((self.0 >> 4) & 0x3F) as usize;
        [
            BASE64_ALPHABET[first] as char,
            BASE64_ALPHABET[second] as char,
        ]
    }
}

impl From<Header> for u16 {
    fn from(header: Header) -> Self {
        header.get()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}
