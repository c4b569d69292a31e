//! Hexadecimal helpers used for logging and display purposes.
//!
//! Dumps are printed colon-separated (`04:a1:7f:00`), log lines use the
//! compact form.

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Convert a byte slice to lowercase hex with `sep` between each byte.
///
/// Example: `(&[0xde, 0xad], ':')` -> `"de:ad"`
pub fn bytes_to_hex_sep(bytes: &[u8], sep: char) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(sep);
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace and `:` separators are ignored, so both `"ffffffff"` and
/// `"ff:ff:ff:ff"` parse. Returns an error message string on failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s
        .bytes()
        .filter(|c| !c.is_ascii_whitespace() && *c != b':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(pair, 16).map_err(|e| format!("invalid hex pair '{}': {}", pair, e))
        })
        .collect()
}
