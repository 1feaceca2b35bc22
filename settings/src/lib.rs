//! Persist geometry and color settings in a key-value store.
//!
//! [Settings] layers the `configkit` codec over any [ByteStore]: sizes,
//! points, rectangles and colors are stored as header-tagged byte arrays,
//! colors can alternatively be stored as hex text, and flags as
//! `"true"`/`"false"`. Reads take a default and fall back to it when the key
//! is missing or its value does not decode.
//!
//! The store owns persistence and lifecycle. [MemoryStore] keeps everything
//! in memory and is mostly useful for tests.
//!
//! # Example
//!
//! ```rust
//! use configkit_codec::{Color, Rect, Size};
//! use configkit_settings::{Config, MemoryStore, Settings};
//!
//! let mut settings = Settings::init(
//!     MemoryStore::default(),
//!     Config {
//!         partition: "viewer".to_string(),
//!     },
//! );
//!
//! // Store some settings
//! settings.put_size("window.size", Some(Size::new(800, 600)));
//! settings.put_color_hex("background", Some(Color::rgb(0x202020)));
//! settings.put_bool("maximized", false);
//!
//! // Read them back
//! assert_eq!(
//!     settings.get_size("window.size", Size::default()),
//!     Size::new(800, 600)
//! );
//! assert_eq!(
//!     settings.get_color_hex("background", Color::default()),
//!     Color::argb(0xFF202020)
//! );
//! assert!(!settings.get_bool("maximized", true));
//!
//! // Missing keys produce the default
//! let bounds = Rect::new(0, 0, 320, 240);
//! assert_eq!(settings.get_rect("window.bounds", bounds), bounds);
//! ```

mod storage;
mod store;

pub use storage::Settings;
pub use store::{ByteStore, MemoryStore};

/// Configuration for [Settings].
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Prefix joined to every key with a `.`. An empty partition leaves keys untouched.
    pub partition: String,
}
