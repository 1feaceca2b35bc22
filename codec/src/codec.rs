//! Core codec traits

use crate::{error::Error, header::Header};
use bytes::{Buf, BufMut, BytesMut};
use tracing::debug;

/// Trait for types that can be written (encoded) to a buffer.
pub trait Write {
    /// Encodes this value by writing to a buffer.
    ///
    /// Implementations should panic if the buffer doesn't have enough capacity.
    fn write(&self, buf: &mut impl BufMut);
}

/// Trait for types that know the exact length of their encoding.
pub trait EncodeSize {
    /// Returns the encoded length of this value.
    ///
    /// This method MUST return the exact number of bytes that will be written by `write()`.
    fn encode_size(&self) -> usize;
}

/// Trait for types that can be encoded to a freshly allocated buffer.
pub trait Encode: Write + EncodeSize {
    /// Encodes a value to a `BytesMut` buffer.
    ///
    /// Panics if the `write` implementation does not write the expected number of bytes.
    ///
    /// (Provided method).
    fn encode(&self) -> BytesMut {
        let len = self.encode_size();
        let mut buffer = BytesMut::with_capacity(len);
        self.write(&mut buffer);
        assert_eq!(buffer.len(), len, "write() did not write expected bytes");
        buffer
    }
}

// Automatically implement `Encode` for types that implement `Write` and `EncodeSize`.
impl<T: Write + EncodeSize> Encode for T {}

/// Trait for types that can be read (decoded) from a buffer.
pub trait Read: Sized {
    /// Reads a value from the buffer, consuming the necessary bytes.
    ///
    /// Tagged values derive their layout from the number of bytes left, so
    /// their implementations consume the remainder of the buffer.
    fn read(buf: &mut impl Buf) -> Result<Self, Error>;
}

/// Trait for types that can be decoded from a buffer, ensuring the entire buffer is consumed.
pub trait Decode: Read {
    /// Decodes a value from a buffer, ensuring the buffer is fully consumed.
    ///
    /// (Provided method).
    fn decode(mut buf: impl Buf) -> Result<Self, Error> {
        let result = Self::read(&mut buf)?;

        // Check that the buffer is fully consumed.
        let remaining = buf.remaining();
        if remaining > 0 {
            return Err(Error::ExtraData(remaining));
        }

        Ok(result)
    }
}

// Automatically implement `Decode` for types that implement `Read`.
impl<T: Read> Decode for T {}

/// Types whose encoding starts with a [Header].
pub trait Tagged {
    /// The header every encoding of this type starts with.
    const HEADER: Header;
}

/// Default-returning decode for tagged values.
///
/// Absent input, a foreign header or a bad layout all produce `default`.
/// Use [Decode::decode] to learn why a buffer was rejected.
pub trait DecodeOr: Decode + Tagged {
    /// Decodes `value`, falling back to `default` on any failure.
    ///
    /// (Provided method).
    fn decode_or(value: Option<&[u8]>, default: Self) -> Self {
        let Some(value) = value else {
            return default;
        };
        match Self::decode(value) {
            Ok(decoded) => decoded,
            Err(err) => {
                debug!(
                    header = %Self::HEADER,
                    len = value.len(),
                    ?value,
                    ?err,
                    "decode failed: using default"
                );
                default
            }
        }
    }
}

// Automatically implement `DecodeOr` for tagged types that implement `Decode`.
impl<T: Decode + Tagged> DecodeOr for T {}

/// Encodes `value` if present.
pub fn encode_opt<T: Encode>(value: Option<&T>) -> Option<BytesMut> {
    value.map(Encode::encode)
}
