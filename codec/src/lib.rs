//! Encode geometry and color values as header-tagged byte buffers.
//!
//! # Overview
//!
//! A tiny, self-describing binary format for a fixed set of value types:
//! - [Size], [Point] and [Rect]: a 16-bit [Header] followed by big-endian `i32`s
//! - [Color]: a 16-bit [Header] followed by up to four raw ARGB bytes
//!
//! Every buffer starts with the header of its type, so a buffer written for one
//! type is never mistaken for another. Decoding validates the header and the
//! payload length and never panics, whatever the input.
//!
//! Two decode paths exist:
//! - [DecodeOr::decode_or] takes a fallback and returns it for absent or
//!   malformed input. This is what settings-style callers want.
//! - [Decode::decode] returns an [Error] describing why a buffer was rejected.
//!
//! Colors also have a text form, see [Color::to_hex_string] and
//! [Color::from_hex_string].
//!
//! # Example
//!
//! ```
//! use configkit_codec::{Color, DecodeOr, Encode, Point, Rect, Size};
//!
//! let size = Size::new(800, 600);
//! let encoded = size.encode();
//! assert_eq!(encoded.len(), 10);
//! assert_eq!(Size::decode_or(Some(&encoded[..]), Size::default()), size);
//!
//! // A size is not a point
//! let fallback = Point::new(-1, -1);
//! assert_eq!(Point::decode_or(Some(&encoded[..]), fallback), fallback);
//!
//! // Rectangles also decode from a position-less buffer
//! let extent = configkit_codec::encode_extent(640, 480);
//! assert_eq!(
//!     Rect::decode_or(Some(&extent[..]), Rect::default()),
//!     Rect::from_size(640, 480)
//! );
//!
//! let red = Color::from_hex_string(Some("FF0000"), Color::default());
//! assert!(!red.has_alpha);
//! assert_eq!(red.argb, 0x00FF0000);
//! assert_eq!(red.to_hex_string(), "FFFF0000");
//! ```

pub mod buffer;
pub mod codec;
pub mod error;
pub mod header;
pub mod ints;
pub mod types;

// Re-export main types and traits
pub use codec::{encode_opt, Decode, DecodeOr, Encode, EncodeSize, Read, Tagged, Write};
pub use error::Error;
pub use header::Header;
pub use types::{
    color::{encode_color, to_hex_string, Color},
    geometry::{encode_extent, encode_point, encode_rect, encode_size, Point, Rect, Size},
};
