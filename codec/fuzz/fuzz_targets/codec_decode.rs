#![no_main]

use configkit_codec::{Color, DecodeOr, Point, Rect, Size};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic
    let _ = Size::decode_or(Some(data), Size::default());
    let _ = Point::decode_or(Some(data), Point::default());
    let _ = Rect::decode_or(Some(data), Rect::default());
    let color = Color::decode_or(Some(data), Color::default());
    if color != Color::default() {
        assert!((3..=6).contains(&data.len()));
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = Color::from_hex_string(Some(text), Color::default());
    }
});
