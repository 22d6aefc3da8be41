/// Add `offset` to the first `length` grayscale bytes, saturating at 0 and 255.
///
/// `length` is capped at `gray.len()`. Returns the number of bytes adjusted.
pub fn adjust(gray: &mut [u8], length: usize, offset: i16) -> usize {
    let length = length.min(gray.len());
    for value in &mut gray[..length] {
        let shifted = *value as i32 + offset as i32;
        *value = shifted.clamp(0, u8::MAX as i32) as u8;
    }
    length
}
