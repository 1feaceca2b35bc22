//! Growing byte buffers in place.

use bytes::BytesMut;

/// Buffers that can be zero-extended to a minimum length.
pub trait EnsureLen {
    /// Zero-extends the buffer to `len` bytes if it is shorter. Never shrinks.
    fn ensure_len(&mut self, len: usize);
}

impl EnsureLen for Vec<u8> {
    fn ensure_len(&mut self, len: usize) {
        if self.len() < len {
            self.resize(len, 0);
        }
    }
}

impl EnsureLen for BytesMut {
    fn ensure_len(&mut self, len: usize) {
        if self.len() < len {
            self.resize(len, 0);
        }
    }
}

/// Returns `buf` grown to at least `len` bytes, allocating if absent.
pub fn expand(buf: Option<Vec<u8>>, len: usize) -> Vec<u8> {
    let mut buf = buf.unwrap_or_default();
    buf.ensure_len(len);
    buf
}
