use crate::error::HexError;

/// Map one ASCII hex digit to its 4-bit value.
/// `0-9` -> 0-9, `a-f` / `A-F` -> 10-15, anything else -> None.
pub fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode `hex` into the front of `staging`, two characters per byte.
///
/// The capacity is `staging.len()`. Length checks run before anything is
/// written; an invalid digit stops the loop, leaving the bytes decoded so far
/// in place. Returns the decoded length (`hex.len() / 2`).
pub fn decode_into(hex: &str, staging: &mut [u8]) -> Result<usize, HexError> {
    let bytes = hex.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(HexError::OddLength { len: bytes.len() });
    }

    let decoded_len = bytes.len() / 2;
    if decoded_len > staging.len() {
        return Err(HexError::CapacityExceeded {
            needed: decoded_len,
            capacity: staging.len(),
        });
    }

    for (i, (pair, slot)) in bytes.chunks_exact(2).zip(staging.iter_mut()).enumerate() {
        let hi = nibble(pair[0]).ok_or_else(|| invalid_digit(hex, i * 2))?;
        let lo = nibble(pair[1]).ok_or_else(|| invalid_digit(hex, i * 2 + 1))?;
        *slot = (hi << 4) | lo;
    }

    Ok(decoded_len)
}

// Every byte before `position` is an ASCII hex digit, so `position` is a char boundary.
fn invalid_digit(hex: &str, position: usize) -> HexError {
    let found = hex[position..]
        .chars()
        .next()
        .unwrap_or(char::REPLACEMENT_CHARACTER);
    HexError::InvalidDigit { position, found }
}
