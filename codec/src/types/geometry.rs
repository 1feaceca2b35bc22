//! Sizes, points and rectangles.
//!
//! All three are header-tagged sequences of `i32`s (see [crate::ints]).
//! A [Rect] is always encoded with its position, but decoding also accepts
//! the position-less form written by [encode_extent].

use crate::{
    codec::{EncodeSize, Read, Tagged, Write},
    header::Header,
    ints::{encode_ints, ints_size, read_ints, write_ints},
    Error,
};
use bytes::{Buf, BufMut, BytesMut};

/// A width and a height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Creates a size of `width` by `height`.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl Tagged for Size {
    const HEADER: Header = Header::SIZE;
}

impl Write for Size {
    fn write(&self, buf: &mut impl BufMut) {
        write_ints(Self::HEADER, &[self.width, self.height], buf);
    }
}

impl EncodeSize for Size {
    fn encode_size(&self) -> usize {
        ints_size(2)
    }
}

impl Read for Size {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        match read_ints(Self::HEADER, buf)?.as_slice() {
            &[width, height] => Ok(Self::new(width, height)),
            other => Err(Error::InvalidCount(other.len())),
        }
    }
}

/// A location in a two-dimensional coordinate space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a point at (`x`, `y`).
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Tagged for Point {
    const HEADER: Header = Header::POINT;
}

impl Write for Point {
    fn write(&self, buf: &mut impl BufMut) {
        write_ints(Self::HEADER, &[self.x, self.y], buf);
    }
}

impl EncodeSize for Point {
    fn encode_size(&self) -> usize {
        ints_size(2)
    }
}

impl Read for Point {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        match read_ints(Self::HEADER, buf)?.as_slice() {
            &[x, y] => Ok(Self::new(x, y)),
            other => Err(Error::InvalidCount(other.len())),
        }
    }
}

/// An area with its upper-left corner at (`x`, `y`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle at (`x`, `y`) of `width` by `height`.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle at the origin.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Returns the upper-left corner.
    pub const fn location(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the width and height.
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl From<(Point, Size)> for Rect {
    fn from((location, size): (Point, Size)) -> Self {
        Self::new(location.x, location.y, size.width, size.height)
    }
}

impl Tagged for Rect {
    const HEADER: Header = Header::RECTANGLE;
}

impl Write for Rect {
    fn write(&self, buf: &mut impl BufMut) {
        write_ints(
            Self::HEADER,
            &[self.x, self.y, self.width, self.height],
            buf,
        );
    }
}

impl EncodeSize for Rect {
    fn encode_size(&self) -> usize {
        ints_size(4)
    }
}

impl Read for Rect {
    fn read(buf: &mut impl Buf) -> Result<Self, Error> {
        match read_ints(Self::HEADER, buf)?.as_slice() {
            &[width, height] => Ok(Self::from_size(width, height)),
            &[x, y, width, height] => Ok(Self::new(x, y, width, height)),
            other => Err(Error::InvalidCount(other.len())),
        }
    }
}

/// Encodes a [Size].
pub fn encode_size(width: i32, height: i32) -> BytesMut {
    encode_ints(Header::SIZE, &[width, height])
}

/// Encodes a [Point].
pub fn encode_point(x: i32, y: i32) -> BytesMut {
    encode_ints(Header::POINT, &[x, y])
}

/// Encodes a [Rect].
pub fn encode_rect(x: i32, y: i32, width: i32, height: i32) -> BytesMut {
    encode_ints(Header::RECTANGLE, &[x, y, width, height])
}

/// Encodes a position-less [Rect] (the 2-field form).
pub fn encode_extent(width: i32, height: i32) -> BytesMut {
    encode_ints(Header::RECTANGLE, &[width, height])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decode, DecodeOr, Encode};
    use paste::paste;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    // Size and Point share a layout
    macro_rules! impl_pair_test {
        ($type:ident, $encode:ident, $a:ident, $b:ident) => {
            paste! {
                #[test]
                fn [<test_ $type:lower _roundtrip>]() {
                    let mut rng = StdRng::seed_from_u64(0);
                    let default = $type::new(-5, -5);
                    for _ in 0..1_000 {
                        let value = $type::new(rng.gen(), rng.gen());
                        let encoded = value.encode();
                        assert_eq!(encoded.len(), 10);
                        assert_eq!(encoded, $encode(value.$a, value.$b));
                        assert_eq!($type::decode_or(Some(&encoded[..]), default), value);
                    }
                }

                #[test]
                fn [<test_ $type:lower _counts>]() {
                    let default = $type::new(-5, -5);
                    for count in [1usize, 3, 4] {
                        let values = vec![9; count];
                        let encoded = encode_ints($type::HEADER, &values);
                        assert_eq!($type::decode_or(Some(&encoded[..]), default), default);
                        assert_eq!(
                            $type::decode(&encoded[..]),
                            Err(Error::InvalidCount(count))
                        );
                    }
                    assert_eq!($type::decode_or(None, default), default);
                }
            }
        };
    }
    impl_pair_test!(Size, encode_size, width, height);
    impl_pair_test!(Point, encode_point, x, y);

    #[test]
    fn test_rect_roundtrip() {
        let mut rng = StdRng::seed_from_u64(1);
        let default = Rect::new(-1, -1, -1, -1);
        for _ in 0..1_000 {
            let value = Rect::new(rng.gen(), rng.gen(), rng.gen(), rng.gen());
            let encoded = value.encode();
            assert_eq!(encoded.len(), 18);
            assert_eq!(encoded, encode_rect(value.x, value.y, value.width, value.height));
            assert_eq!(Rect::decode_or(Some(&encoded[..]), default), value);

            let extent = encode_extent(value.width, value.height);
            assert_eq!(extent.len(), 10);
            assert_eq!(
                Rect::decode_or(Some(&extent[..]), default),
                Rect::from_size(value.width, value.height)
            );
        }
    }

    #[test]
    fn test_rect_counts() {
        let default = Rect::new(-1, -1, -1, -1);
        for count in [1usize, 3, 5, 8] {
            let encoded = encode_ints(Header::RECTANGLE, &vec![3; count]);
            assert_eq!(Rect::decode_or(Some(&encoded[..]), default), default);
        }
    }

    #[test]
    fn test_from_size() {
        let rect = Rect::from_size(640, 480);
        assert_eq!(rect.location(), Point::default());
        assert_eq!(rect.size(), Size::new(640, 480));
        assert_eq!(&rect.encode()[2..10], &[0; 8]);
        assert_eq!(Rect::from((Point::new(1, 2), Size::new(3, 4))), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn test_truncated() {
        let size = Size::new(800, 600).encode();
        let point = Point::new(10, 20).encode();
        let rect = Rect::new(1, 2, 3, 4).encode();
        for cut in 1..=3 {
            assert_eq!(
                Size::decode_or(Some(&size[..size.len() - cut]), Size::default()),
                Size::default()
            );
            assert_eq!(
                Point::decode_or(Some(&point[..point.len() - cut]), Point::default()),
                Point::default()
            );
            assert_eq!(
                Rect::decode_or(Some(&rect[..rect.len() - cut]), Rect::default()),
                Rect::default()
            );
        }
    }

    #[test]
    fn test_negative() {
        let size = Size::new(-1, i32::MIN);
        assert_eq!(Size::decode(&size.encode()[..]), Ok(size));
    }

    #[test]
    fn test_conformity() {
        assert_eq!(
            &Size::new(0x0102, 0x0304).encode()[..],
            &[0x0C, 0xC3, 0x00, 0x00, 0x01, 0x02, 0x00, 0x00, 0x03, 0x04][..]
        );
        assert_eq!(
            &Rect::new(1, 2, 3, 4).encode()[..],
            &[
                0x45, 0x30, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0, 4
            ][..]
        );
    }
}
