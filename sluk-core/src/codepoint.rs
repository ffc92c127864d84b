//! Hex code-point strings decoded into characters and escape literals.

use anyhow::{anyhow, Context, Result};

/// Zero-extend a hex code to 8 digits. Codes already 8 digits or
/// longer pass through untouched.
pub fn pad_code(code: &str) -> String {
    format!("{code:0>8}")
}

/// Decode a hex code-point string into its character.
///
/// The code is padded to 8 digits first; it must then be pure ASCII
/// hex naming a valid Unicode scalar value. Surrogates, values past
/// U+10FFFF and anything non-hex are errors.
pub fn decode(code: &str) -> Result<char> {
    let padded = pad_code(code);

    if !padded.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!("invalid code point digits: {code:?}"));
    }

    let value = u32::from_str_radix(&padded, 16)
        .with_context(|| format!("code point out of range: {code:?}"))?;

    char::from_u32(value).ok_or_else(|| anyhow!("not a valid Unicode scalar: U+{value:04X}"))
}

/// Render the padded escape-literal spelling, e.g. `'\U0001F600'`.
/// The input's hex digit case is preserved.
pub fn escape_literal(code: &str) -> String {
    format!("'\\U{}'", pad_code(code))
}
