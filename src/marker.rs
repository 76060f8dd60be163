//! Utilities for parsing and writing block height markers.
//!
//! A block's height lives out-of-band in a marker cell on the block's
//! first row, as a short token of the form `H=<digits>`. The token may
//! be embedded in surrounding text; the first occurrence wins.

/// Extract the height from a marker string like `"H=20"` or `"wk3 H=26 v2"`.
///
/// Returns `None` when no `H=<digits>` token is present or the digits
/// overflow a `u32`.
pub fn parse_height(marker: &str) -> Option<u32> {
    let bytes = marker.as_bytes();
    let mut i = 0;

    while i + 1 < bytes.len() {
        if bytes.get(i) == Some(&b'H') && bytes.get(i + 1) == Some(&b'=') {
            let mut j = i + 2;
            let mut value: u32 = 0;
            let mut saw_digit = false;

            while let Some(&b) = bytes.get(j) {
                if !b.is_ascii_digit() {
                    break;
                }
                value = value
                    .checked_mul(10)?
                    .checked_add(u32::from(b - b'0'))?;
                saw_digit = true;
                j += 1;
            }

            if saw_digit {
                return Some(value);
            }
            // "H=" with no digits: keep looking for a later token
            i = j;
        }
        i += 1;
    }

    None
}

/// Render a height as its marker token.
pub fn format_height(height: u32) -> String {
    format!("H={height}")
}
