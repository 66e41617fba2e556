#[cfg(feature = "named")]
/// Characters dropped from a color name before lookup.
const NAME_SEPARATORS: [char; 5] = [' ', '-', '_', '\'', '.'];

#[cfg(feature = "named")]
/// Strips separators and lowercases `name`, so that `"Alice Blue"`,
/// `"alice-blue"` and `"AliceBlue"` all produce the same key.
pub(crate) fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !NAME_SEPARATORS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Truncates a normalized component to a byte. Out-of-range input saturates.
#[inline]
pub(crate) fn truncate_to_byte(c: f32) -> u8 {
    (c * 255.) as u8
}

/// Rounds a normalized component to the nearest byte, clamped to `0..=255`.
#[inline]
pub(crate) fn round_to_byte(c: f32) -> u8 {
    (c * 255.).round().clamp(0., 255.) as u8
}
