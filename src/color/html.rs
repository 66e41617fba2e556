//! Hex color codes, as used by HTML and most color pickers.
//!
//! Codes are 6 (`RRGGBB`) or 8 (`AARRGGBB`) hex digits with an optional
//! leading `#`. The 3 and 4 digit shorthands double every digit, so `#f80`
//! means `#ff8800`. Note that alpha comes *first* here, unlike in
//! [`Color::hex`].

use std::str::FromStr;

use super::Color;
use crate::error::{ColorError, Result};
use crate::util::round_to_byte;

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn parse_code(code: &str) -> Option<Color> {
    let digits = code.strip_prefix('#').unwrap_or(code).as_bytes();

    let expanded: Vec<u8>;
    let digits = if matches!(digits.len(), 3 | 4) {
        expanded = digits.iter().flat_map(|&d| [d, d]).collect();
        &expanded[..]
    } else {
        digits
    };

    // Stored as a, r, g, b.
    let mut channels = [255; 4];
    let targets = match digits.len() {
        6 => &mut channels[1..],
        8 => &mut channels[..],
        _ => return None,
    };
    for (channel, pair) in targets.iter_mut().zip(digits.chunks_exact(2)) {
        *channel = nibble(pair[0])? << 4 | nibble(pair[1])?;
    }

    let [a, r, g, b] = channels;
    Some(Color::from_rgba8(r, g, b, a))
}

impl Color {
    /// Parses a hex color code.
    ///
    /// ```
    /// # use pufferfish_color::Color;
    /// assert_eq!(Color::html("#f00").unwrap(), Color::RED);
    /// assert_eq!(Color::html("80ffffff").unwrap().a, 128. / 255.);
    /// assert!(Color::html("#12345").is_err());
    /// ```
    pub fn html(code: &str) -> Result<Color> {
        parse_code(code).ok_or_else(|| ColorError::InvalidCode(code.to_owned()))
    }

    /// Like [`html`](Color::html), but logs the error and returns
    /// [`Color::default`] when `code` is invalid.
    pub fn html_lossy(code: &str) -> Color {
        Color::html(code).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default color");
            Color::default()
        })
    }

    /// Returns true if [`html`](Color::html) would accept `code`.
    pub fn html_is_valid(code: &str) -> bool {
        parse_code(code).is_some()
    }

    /// Formats the color as lowercase hex digits without a leading `#`.
    ///
    /// With `with_alpha` the alpha byte is prepended, giving `aarrggbb`.
    pub fn to_html(self, with_alpha: bool) -> String {
        let rgb = format!(
            "{:02x}{:02x}{:02x}",
            round_to_byte(self.r),
            round_to_byte(self.g),
            round_to_byte(self.b)
        );
        if with_alpha {
            format!("{:02x}{rgb}", round_to_byte(self.a))
        } else {
            rgb
        }
    }
}

/// Parses a hex code, falling back to a color name when the `named` feature
/// is enabled and the input does not start with `#`.
impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        if let Some(c) = parse_code(s) {
            return Ok(c);
        }
        if s.starts_with('#') {
            return Err(ColorError::InvalidCode(s.to_owned()));
        }
        parse_fallback(s)
    }
}

#[cfg(feature = "named")]
fn parse_fallback(s: &str) -> Result<Color> {
    Color::named(s)
}

#[cfg(not(feature = "named"))]
fn parse_fallback(s: &str) -> Result<Color> {
    Err(ColorError::InvalidCode(s.to_owned()))
}
