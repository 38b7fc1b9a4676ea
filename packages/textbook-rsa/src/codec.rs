use crate::errors::Error;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Converts a message into the code points of its characters.
pub fn to_code_points(message: &str) -> Vec<u32> {
    message.chars().map(u32::from).collect()
}

/// Converts code points back into a string.
///
/// Fails on the first value that is not a Unicode scalar value.
pub fn from_code_points(codes: &[BigUint]) -> Result<String, Error> {
    codes
        .iter()
        .map(|code| {
            code.to_u32()
                .and_then(char::from_u32)
                .ok_or_else(|| Error::InvalidCodePoint(code.clone()))
        })
        .collect()
}

/// Renders arbitrary values as characters for display.
///
/// Values that are not Unicode scalar values become U+FFFD.
pub fn render_lossy(values: &[BigUint]) -> String {
    values
        .iter()
        .map(|value| {
            value
                .to_u32()
                .and_then(char::from_u32)
                .unwrap_or(char::REPLACEMENT_CHARACTER)
        })
        .collect()
}
