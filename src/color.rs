//! The [`Color`] value type.
//!
//! A [`Color`] is four `f32` components that are nominally in the `0..=1`
//! range. The type itself never clamps: arithmetic may freely leave the range,
//! and only the 8-bit encoders ([`to_rgba32`], [`to_html`], ...) squash values
//! back into bytes.
//!
//! ```
//! use pufferfish_color::Color;
//!
//! let orange = Color::html("#ff8000").unwrap();
//! assert_eq!(orange.to_html(false), "ff8000");
//! assert_eq!(Color::hex(0xff0000ff), Color::RED);
//!
//! let mut c = Color::RED;
//! c.set_hsv(1. / 3., 1., 1., 1.);
//! assert!(c.g > 0.99 && c.r < 0.01);
//! ```
//!
//! [`to_rgba32`]: Color::to_rgba32
//! [`to_html`]: Color::to_html

use std::fmt;

use crate::util::truncate_to_byte;

mod hsv;
mod html;
#[cfg(feature = "named")]
mod named;
#[cfg(feature = "named")]
mod names;
mod ops;

/// A linear RGBA color represented by 4 [f32]s.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The red component of the color.
    pub r: f32,
    /// The green component of the color.
    pub g: f32,
    /// The blue component of the color.
    pub b: f32,
    /// The alpha component of the color.
    pub a: f32,
}

impl Color {
    /// Creates a new color with the given components.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Color {
        Color { r, g, b, a }
    }

    /// Creates a new color with the given components and an alpha of 1.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b, a: 1. }
    }

    /// Creates a new color from 8-bit components.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color::from_rgba(
            r as f32 / 255.,
            g as f32 / 255.,
            b as f32 / 255.,
            a as f32 / 255.,
        )
    }
}

/// Opaque black, which is also what failed lossy conversions fall back to.
impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[allow(missing_docs)]
impl Color {
    pub const BLACK: Color = Color::from_rgb(0., 0., 0.);
    pub const WHITE: Color = Color::from_rgb(1., 1., 1.);
    pub const RED: Color = Color::from_rgb(1., 0., 0.);
    pub const GREEN: Color = Color::from_rgb(0., 1., 0.);
    pub const BLUE: Color = Color::from_rgb(0., 0., 1.);
    pub const YELLOW: Color = Color::from_rgb(1., 1., 0.);
    pub const CYAN: Color = Color::from_rgb(0., 1., 1.);
    pub const MAGENTA: Color = Color::from_rgb(1., 0., 1.);
    pub const TRANSPARENT: Color = Color::from_rgba(0., 0., 0., 0.);
}

// Packed 32-bit encodings. Components are truncated, not rounded, so
// `to_rgba32` and `to_html` can disagree by one step for the same color.
impl Color {
    /// Packs the color as `0xAARRGGBB`.
    pub fn to_argb32(self) -> u32 {
        u32::from_be_bytes([
            truncate_to_byte(self.a),
            truncate_to_byte(self.r),
            truncate_to_byte(self.g),
            truncate_to_byte(self.b),
        ])
    }

    /// Packs the color as `0xAABBGGRR`.
    pub fn to_abgr32(self) -> u32 {
        u32::from_be_bytes([
            truncate_to_byte(self.a),
            truncate_to_byte(self.b),
            truncate_to_byte(self.g),
            truncate_to_byte(self.r),
        ])
    }

    /// Packs the color as `0xRRGGBBAA`.
    pub fn to_rgba32(self) -> u32 {
        u32::from_be_bytes([
            truncate_to_byte(self.r),
            truncate_to_byte(self.g),
            truncate_to_byte(self.b),
            truncate_to_byte(self.a),
        ])
    }

    /// Unpacks a `0xRRGGBBAA` value. This is the inverse of
    /// [`to_rgba32`](Color::to_rgba32).
    pub fn hex(hex: u32) -> Color {
        let [r, g, b, a] = hex.to_be_bytes();
        Color::from_rgba8(r, g, b, a)
    }
}

impl Color {
    /// Replaces r, g and b with their complements. Alpha is left alone.
    pub fn invert(&mut self) {
        self.r = 1. - self.r;
        self.g = 1. - self.g;
        self.b = 1. - self.b;
    }

    /// Returns a copy of the color with r, g and b inverted.
    #[must_use]
    pub fn inverted(self) -> Color {
        let mut c = self;
        c.invert();
        c
    }

    /// Rotates r, g and b halfway around the unit range.
    pub fn contrast(&mut self) {
        self.r = (self.r + 0.5) % 1.;
        self.g = (self.g + 0.5) % 1.;
        self.b = (self.b + 0.5) % 1.;
    }

    /// Returns a copy of the color with [`contrast`](Color::contrast) applied.
    #[must_use]
    pub fn contrasted(self) -> Color {
        let mut c = self;
        c.contrast();
        c
    }

    /// Returns the unweighted average of r, g and b.
    pub fn gray(self) -> f32 {
        (self.r + self.g + self.b) / 3.
    }

    /// Linearly interpolates every component, alpha included, towards `to`.
    #[must_use]
    pub fn linear_interpolate(self, to: Color, t: f32) -> Color {
        Color::from_rgba(
            self.r + t * (to.r - self.r),
            self.g + t * (to.g - self.g),
            self.b + t * (to.b - self.b),
            self.a + t * (to.a - self.a),
        )
    }

    /// Composites `over` on top of this color.
    #[must_use]
    pub fn blend(self, over: Color) -> Color {
        let sa = 1. - over.a;
        let a = self.a * sa + over.a;
        if a == 0. {
            return Color::TRANSPARENT;
        }
        Color::from_rgba(
            (self.r * self.a * sa + over.r * over.a) / a,
            (self.g * self.a * sa + over.g * over.a) / a,
            (self.b * self.a * sa + over.b * over.a) / a,
            a,
        )
    }

    /// Moves r, g and b towards white by `amount`.
    #[must_use]
    pub fn lightened(self, amount: f32) -> Color {
        Color::from_rgba(
            self.r + (1. - self.r) * amount,
            self.g + (1. - self.g) * amount,
            self.b + (1. - self.b) * amount,
            self.a,
        )
    }

    /// Moves r, g and b towards black by `amount`.
    #[must_use]
    pub fn darkened(self, amount: f32) -> Color {
        Color::from_rgba(
            self.r * (1. - amount),
            self.g * (1. - amount),
            self.b * (1. - amount),
            self.a,
        )
    }

    /// Decodes sRGB-encoded r, g and b into linear light.
    #[must_use]
    pub fn to_linear(self) -> Color {
        fn decode(c: f32) -> f32 {
            if c < 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        Color::from_rgba(decode(self.r), decode(self.g), decode(self.b), self.a)
    }

    /// Encodes linear r, g and b with the sRGB transfer function.
    #[must_use]
    pub fn to_srgb(self) -> Color {
        fn encode(c: f32) -> f32 {
            if c < 0.003_130_8 {
                c * 12.92
            } else {
                1.055 * c.powf(1. / 2.4) - 0.055
            }
        }

        Color::from_rgba(encode(self.r), encode(self.g), encode(self.b), self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.r, self.g, self.b, self.a)
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Color::from_rgba(r, g, b, a)
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b, c.a]
    }
}

#[cfg(test)]
pub(crate) fn assert_close(a: Color, b: Color) {
    const EPS: f32 = 1e-5;
    let close = (a.r - b.r).abs() < EPS
        && (a.g - b.g).abs() < EPS
        && (a.b - b.b).abs() < EPS
        && (a.a - b.a).abs() < EPS;
    assert!(close, "{a:?} is not close to {b:?}");
}
