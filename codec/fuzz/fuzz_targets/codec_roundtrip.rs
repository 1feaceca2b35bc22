#![no_main]

use arbitrary::Arbitrary;
use configkit_codec::{
    buffer::EnsureLen, encode_extent, Color, Decode, DecodeOr, Encode, EncodeSize, Point, Rect,
    Size,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzInput {
    Size(i32, i32),
    Point(i32, i32),
    Rect(i32, i32, i32, i32),
    Extent(i32, i32),
    Color(u32),
    Hex(u32),
    Grow(Vec<u8>, u8),
}

fn roundtrip<T: Encode + DecodeOr + Copy + PartialEq + std::fmt::Debug>(value: T, default: T) {
    let encoded = value.encode();
    assert_eq!(value.encode_size(), encoded.len());
    let decoded = T::decode(&encoded[..]).expect("Failed to decode a successfully encoded input!");
    assert_eq!(value, decoded);
    assert_eq!(T::decode_or(Some(&encoded[..]), default), value);
}

fn fuzz(input: FuzzInput) {
    match input {
        FuzzInput::Size(width, height) => {
            roundtrip(Size::new(width, height), Size::default());
        }
        FuzzInput::Point(x, y) => {
            roundtrip(Point::new(x, y), Point::default());
        }
        FuzzInput::Rect(x, y, width, height) => {
            roundtrip(Rect::new(x, y, width, height), Rect::default());
        }
        FuzzInput::Extent(width, height) => {
            let encoded = encode_extent(width, height);
            let decoded = Rect::decode(&encoded[..]).expect("Failed to decode extent!");
            assert_eq!(decoded, Rect::from_size(width, height));
        }
        FuzzInput::Color(argb) => {
            let encoded = Color::argb(argb).encode();
            let decoded = Color::decode(&encoded[..]).expect("Failed to decode color!");
            assert_eq!(decoded.argb, argb);
            assert!(decoded.has_alpha);
        }
        FuzzInput::Hex(argb) => {
            let text = configkit_codec::to_hex_string(argb);
            assert_eq!(text.len(), 8);
            let parsed = Color::parse_hex(&text).expect("Failed to parse hex!");
            assert_eq!(parsed, Color::argb(argb));
        }
        FuzzInput::Grow(mut buf, len) => {
            let before = buf.clone();
            buf.ensure_len(len as usize);
            assert!(buf.len() >= len as usize);
            assert_eq!(&buf[..before.len()], &before[..]);
            assert!(buf[before.len()..].iter().all(|b| *b == 0));
        }
    }
}

fuzz_target!(|input: FuzzInput| {
    fuzz(input);
});
