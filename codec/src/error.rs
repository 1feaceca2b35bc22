//! Error types for codec operations

use crate::header::Header;
use thiserror::Error;

/// Error type for codec operations.
///
/// The default-returning entry points collapse every variant into "use the
/// default". This type is what they collapse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("header mismatch: expected {expected}, found {found}")]
    HeaderMismatch { expected: Header, found: Header },
    #[error("misaligned payload: {0} bytes")]
    Misaligned(usize),
    #[error("invalid integer count: {0}")]
    InvalidCount(usize),
    #[error("invalid length: {0}")]
    InvalidLength(usize),
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}
