//! Colors, as header-tagged bytes or as hex text.
//!
//! # Binary format
//!
//! Encoding always writes the header followed by the full ARGB value (see
//! [Color::to_argb]):
//!
//! ```text
//! +---+---+---+---+---+---+
//! | 0 | 1 | 2 | 3 | 4 | 5 |
//! +---+---+---+---+---+---+
//! | Header|  ARGB (u32)   |
//! +---+---+---+---+---+---+
//! ```
//!
//! Decoding is looser than encoding: any payload of one to four bytes is
//! accepted and read as the low-order bytes of the value. Only a full
//! four-byte payload marks the color as carrying an explicit alpha channel.
//! Buffers written by older producers depend on this, so the asymmetry must
//! be kept.
//!
//! # Text format
//!
//! [Color::to_hex_string] writes eight uppercase hex digits. Parsing accepts
//! any hex string that fits in a `u32` and infers alpha presence from the
//! length of the text (more than six characters), not from the value.

use crate::{
    codec::{EncodeSize, Read, Tagged, Write},
    header::{Header, HEADER_LEN},
    Error,
};
use bytes::{Buf, BufMut, BytesMut};
use tracing::debug;

/// Length of an encoded color with an explicit alpha channel.
pub const MAX_LEN: usize = HEADER_LEN + std::mem::size_of::<u32>();

/// Number of hex digits above which text is taken to include alpha.
const RGB_DIGITS: usize = 6;

const OPAQUE: u8 = 0xFF;

/// A 32-bit ARGB color.
///
/// `argb` is kept exactly as decoded or parsed. When `has_alpha` is false the
/// high byte is ignored and the color is fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub argb: u32,
    pub has_alpha: bool,
}

impl Color {
    /// Creates a color from a raw value, with or without an alpha channel.
    pub const fn new(argb: u32, has_alpha: bool) -> Self {
        Self { argb, has_alpha }
    }

    /// Creates an opaque color from its low 24 bits.
    pub const fn rgb(rgb: u32) -> Self {
        Self::new(rgb, false)
    }

    /// Creates a color with an explicit alpha channel.
    pub const fn argb(argb: u32) -> Self {
        Self::new(argb, true)
    }

    /// Returns the alpha channel, `0xFF` if the color has none.
    pub const fn alpha(&self) -> u8 {
        if self.has_alpha {
            (self.argb >> 24) as u8
        } else {
            OPAQUE
        }
    }

    /// Returns the ARGB value with the alpha channel applied.
    pub const fn to_argb(&self) -> u32 {
        ((self.alpha() as u32) << 24) | (self.argb & 0x00FF_FFFF)
    }

    /// Returns the red channel.
    pub const fn red(&self) -> u8 {
        (self.argb >> 16) as u8
    }

    /// Returns the green channel.
    pub const fn green(&self) -> u8 {
        (self.argb >> 8) as u8
    }

    /// Returns the blue channel.
    pub const fn blue(&self) -> u8 {
        self.argb as u8
    }

    /// Formats [Color::to_argb] as eight uppercase hex digits.
    pub fn to_hex_string(&self) -> String {
        to_hex_string(self.to_argb())
    }

    /// Parses hex text, reporting why it was rejected.
    pub fn parse_hex(value: &str) -> Result<Self, Error> {
        let argb =
            u32::from_str_radix(value, 16).map_err(|_| Error::InvalidHex(value.to_string()))?;
        Ok(Self::new(argb, value.len() > RGB_DIGITS))
    }

    /// Parses hex text, falling back to `default` if absent or invalid.
    pub fn from_hex_string(value: Option<&str>, default: Self) -> Self {
        let Some(value) = value else {
            return default;
        };
        match Self::parse_hex(value) {
            Ok(color) => color,
            Err(err) => {
                debug!(?err, "parse failed: using default");
                default
            }
        }
    }
}

/// Formats `argb` as eight uppercase hex digits.
pub fn to_hex_string(argb: u32) -> String {
    format!("{argb:08X}")
}

/// Encodes `argb` as a color with an explicit alpha channel.
///
/// Unlike encoding a [Color], the value is written as given.
pub fn encode_color(argb: u32) -> BytesMut {
    let mut buf = BytesMut::with_capacity(MAX_LEN);
    Header::COLOR.write(&mut buf);
    buf.put_u32(argb);
    buf
}

impl Tagged for Color {
    const HEADER: Header = Header::COLOR;
}

impl Write for Color {
    fn write(&self, buf: &mut impl BufMut) {
        Self::HEADER.write(buf);
        buf.put_u32(self.to_argb());
    }
}

impl EncodeSize for Color {
    fn encode_size(&self) -> usize {
        MAX_LEN
    }
}

impl Read for Color {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        let len = buf.remaining();
        if len <= HEADER_LEN || len > MAX_LEN {
            return Err(Error::InvalidLength(len));
        }
        Self::HEADER.check(buf)?;
        let mut argb = 0u32;
        while buf.has_remaining() {
            argb = (argb << 8) | u32::from(buf.get_u8());
        }
        Ok(Self::new(argb, len == MAX_LEN))
    }
}
