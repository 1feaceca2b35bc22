//! Leverage common functionality across configkit crates.

pub mod layout;
pub use layout::ComponentSizer;

/// Converts bytes to a hexadecimal string.
pub fn hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Parses `"true"` or `"false"`, ignoring case.
///
/// Anything else, including an absent value, is `None`.
pub fn parse_bool(value: Option<&str>) -> Option<bool> {
    let value = value?;
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use configkit_codec::{Encode, Size};

    #[test]
    fn test_hex() {
        assert_eq!(hex(&[]), "");
        assert_eq!(hex(&[0x0A]), "0a");
        assert_eq!(hex(&[0x00, 0xFF, 0x10]), "00ff10");

        // Headers dump as their big-endian bytes
        let encoded = Size::new(1, 2).encode();
        assert_eq!(hex(&encoded), "0cc30000000100000002");
        assert_eq!(hex(&encoded).len(), encoded.len() * 2);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool(Some("true")), Some(true));
        assert_eq!(parse_bool(Some("TRUE")), Some(true));
        assert_eq!(parse_bool(Some("tRuE")), Some(true));
        assert_eq!(parse_bool(Some("false")), Some(false));
        assert_eq!(parse_bool(Some("False")), Some(false));
        assert_eq!(parse_bool(Some("")), None);
        assert_eq!(parse_bool(Some("yes")), None);
        assert_eq!(parse_bool(Some(" true")), None);
        assert_eq!(parse_bool(Some("1")), None);
        assert_eq!(parse_bool(None), None);
    }
}
