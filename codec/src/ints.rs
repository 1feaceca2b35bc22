//! Header-tagged sequences of big-endian `i32`s.
//!
//! ```text
//! +---+---+---+---+---+---+---+---+---+---+-----+
//! | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 | ... |
//! +---+---+---+---+---+---+---+---+---+---+-----+
//! | Header|   Value0 (i32)    |   Value1 (i32)  ...
//! +---+---+---+---+---+---+---+---+---+---+-----+
//! ```
//!
//! The number of values is not stored: it is the payload length divided by
//! four, so a payload that is empty or not a multiple of four is rejected.

use crate::{
    header::{Header, HEADER_LEN},
    Error,
};
use bytes::{Buf, BufMut, BytesMut};

const INT_LEN: usize = std::mem::size_of::<i32>();

/// Returns the encoded length of a sequence of `count` values.
pub const fn ints_size(count: usize) -> usize {
    HEADER_LEN + INT_LEN * count
}

/// Writes `header` followed by each of `values`.
pub fn write_ints(header: Header, values: &[i32], buf: &mut impl BufMut) {
    header.write(buf);
    for value in values {
        buf.put_i32(*value);
    }
}

/// Encodes `header` followed by each of `values` into a new buffer.
pub fn encode_ints(header: Header, values: &[i32]) -> BytesMut {
    let mut buf = BytesMut::with_capacity(ints_size(values.len()));
    write_ints(header, values, &mut buf);
    buf
}

/// Reads a sequence tagged with `header`, consuming the rest of `buf`.
pub fn read_ints(header: Header, buf: &mut impl Buf) -> Result<Vec<i32>, Error> {
    header.check(buf)?;
    let remaining = buf.remaining();
    if remaining == 0 || remaining % INT_LEN != 0 {
        return Err(Error::Misaligned(remaining));
    }
    let mut values = Vec::with_capacity(remaining / INT_LEN);
    while buf.has_remaining() {
        values.push(buf.get_i32());
    }
    Ok(values)
}

/// Decodes a sequence tagged with `header`, or `None` if `bytes` is not one.
pub fn decode_ints(header: Header, mut bytes: &[u8]) -> Option<Vec<i32>> {
    read_ints(header, &mut bytes).ok()
}
