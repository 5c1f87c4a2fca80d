//! Hex rendering of wire bytes for log and diagnostic output.

use std::fmt::Write;

/// Render bytes as lowercase hex without separators.
///
/// Example: `&[0x2c, 0x03]` -> `"2c03"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // write! never fails writing to a String
        let _ = write!(&mut s, "{:02x}", b);
        s
    })
}

/// Render bytes as lowercase hex with a single space between bytes, the
/// form used when tracing subnegotiations.
///
/// Example: `&[0x2c, 0x67, 0x02]` -> `"2c 67 02"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(&mut s, "{:02x}", b);
    }
    s
}
