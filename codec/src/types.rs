//! Value types with a header-tagged encoding.

pub mod color;
pub mod geometry;
