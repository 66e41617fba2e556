//! HSV conversions.
//!
//! Two HSV→RGB routines exist side by side. [`Color::set_hsv`] uses the
//! classic six-sector `p`/`q`/`t` scheme, while [`Color::from_hsv`] works in
//! degrees with chroma and offset. They describe the same transform but take
//! different rounding paths, so results near sector boundaries may differ in
//! the last bits.

use super::Color;

impl Color {
    fn min_max(self) -> (f32, f32) {
        let min = self.r.min(self.g).min(self.b);
        let max = self.r.max(self.g).max(self.b);
        (min, max)
    }

    /// Returns the hue as a fraction of a full turn, in `0..1`.
    ///
    /// Achromatic colors have a hue of 0.
    pub fn get_h(self) -> f32 {
        let (min, max) = self.min_max();
        let delta = max - min;
        if delta == 0. {
            return 0.;
        }

        let h = if self.r == max {
            (self.g - self.b) / delta
        } else if self.g == max {
            2. + (self.b - self.r) / delta
        } else {
            4. + (self.r - self.g) / delta
        };

        let h = h / 6.;
        if h < 0. {
            h + 1.
        } else {
            h
        }
    }

    /// Returns the HSV saturation. Black has a saturation of 0.
    pub fn get_s(self) -> f32 {
        let (min, max) = self.min_max();
        if max != 0. {
            (max - min) / max
        } else {
            0.
        }
    }

    /// Returns the HSV value, the largest of r, g and b.
    pub fn get_v(self) -> f32 {
        self.min_max().1
    }

    /// Sets the color from hue, saturation, value and alpha.
    ///
    /// `h` is a fraction of a full turn and wraps around.
    pub fn set_hsv(&mut self, h: f32, s: f32, v: f32, alpha: f32) {
        self.a = alpha;

        if s == 0. {
            self.r = v;
            self.g = v;
            self.b = v;
            return;
        }

        let h = (h * 6.) % 6.;
        let i = h.floor();
        let f = h - i;
        let p = v * (1. - s);
        let q = v * (1. - s * f);
        let t = v * (1. - s * (1. - f));

        let (r, g, b) = match i as i32 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        self.r = r;
        self.g = g;
        self.b = b;
    }

    /// Replaces the hue, keeping saturation, value and alpha.
    pub fn set_h(&mut self, h: f32) {
        self.set_hsv(h, self.get_s(), self.get_v(), self.a);
    }

    /// Replaces the saturation, keeping hue, value and alpha.
    pub fn set_s(&mut self, s: f32) {
        self.set_hsv(self.get_h(), s, self.get_v(), self.a);
    }

    /// Replaces the value, keeping hue, saturation and alpha.
    pub fn set_v(&mut self, v: f32) {
        self.set_hsv(self.get_h(), self.get_s(), v, self.a);
    }

    /// Creates a color from hue, saturation, value and alpha.
    ///
    /// `h` is a fraction of a full turn and wraps around.
    pub fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Color {
        let mut h = (h * 360.) % 360.;
        if h < 0. {
            h += 360.;
        }

        let h = h / 60.;
        let c = v * s;
        let x = c * (1. - ((h % 2.) - 1.).abs());

        let (r, g, b) = match h as i32 {
            0 => (c, x, 0.),
            1 => (x, c, 0.),
            2 => (0., c, x),
            3 => (0., x, c),
            4 => (x, 0., c),
            5 => (c, 0., x),
            _ => (0., 0., 0.),
        };

        let m = v - c;
        Color::from_rgba(m + r, m + g, m + b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::assert_close;

    mod get_tests {
        use super::*;

        #[test]
        fn test_achromatic() {
            for c in [Color::BLACK, Color::WHITE, Color::from_rgb(0.4, 0.4, 0.4)] {
                assert_eq!(c.get_h(), 0.);
                assert_eq!(c.get_s(), 0.);
            }
            assert_eq!(Color::from_rgb(0.4, 0.4, 0.4).get_v(), 0.4);
        }

        #[test]
        fn test_primaries() {
            assert_eq!(Color::RED.get_h(), 0.);
            assert!((Color::GREEN.get_h() - 1. / 3.).abs() < 1e-6);
            assert!((Color::BLUE.get_h() - 2. / 3.).abs() < 1e-6);
            assert_eq!(Color::RED.get_s(), 1.);
            assert_eq!(Color::RED.get_v(), 1.);
        }

        #[test]
        fn test_negative_hue_wraps() {
            // Red dominant with more blue than green lands just below a full turn.
            let h = Color::from_rgb(1., 0., 0.5).get_h();
            assert!((h - 11. / 12.).abs() < 1e-6);
        }

        #[test]
        fn test_saturation() {
            assert_eq!(Color::from_rgb(1., 0.5, 0.5).get_s(), 0.5);
        }
    }

    mod set_hsv_tests {
        use super::*;

        #[test]
        fn test_red() {
            let mut c = Color::TRANSPARENT;
            c.set_hsv(0., 1., 1., 1.);
            assert_close(c, Color::RED);
        }

        #[test]
        fn test_green() {
            let mut c = Color::TRANSPARENT;
            c.set_hsv(1. / 3., 1., 1., 1.);
            assert_close(c, Color::GREEN);
        }

        #[test]
        fn test_zero_saturation_ignores_hue() {
            for h in [0., 0.3, 0.77, 5.5] {
                let mut c = Color::RED;
                c.set_hsv(h, 0., 0.6, 0.2);
                assert_eq!(c, Color::from_rgba(0.6, 0.6, 0.6, 0.2));
            }
        }

        #[test]
        fn test_full_turn_wraps() {
            let mut a = Color::BLACK;
            let mut b = Color::BLACK;
            a.set_hsv(0.25, 0.8, 0.9, 1.);
            b.set_hsv(1.25, 0.8, 0.9, 1.);
            assert_close(a, b);
        }

        #[test]
        fn test_roundtrip() {
            let original = Color::from_rgba(0.2, 0.6, 0.4, 0.5);
            let mut c = Color::BLACK;
            c.set_hsv(original.get_h(), original.get_s(), original.get_v(), original.a);
            assert_close(c, original);
        }

        #[test]
        fn test_component_setters() {
            let mut c = Color::from_rgba(1., 0., 0., 0.5);
            c.set_h(2. / 3.);
            assert_close(c, Color::from_rgba(0., 0., 1., 0.5));
            c.set_s(0.);
            assert_close(c, Color::from_rgba(1., 1., 1., 0.5));
            c.set_v(0.25);
            assert_close(c, Color::from_rgba(0.25, 0.25, 0.25, 0.5));
        }
    }

    mod from_hsv_tests {
        use super::*;

        #[test]
        fn test_primaries() {
            assert_close(Color::from_hsv(0., 1., 1., 1.), Color::RED);
            assert_close(Color::from_hsv(1. / 3., 1., 1., 1.), Color::GREEN);
            assert_close(Color::from_hsv(2. / 3., 1., 1., 0.5), Color::from_rgba(0., 0., 1., 0.5));
        }

        #[test]
        fn test_negative_hue_wraps() {
            assert_close(
                Color::from_hsv(-1. / 6., 1., 1., 1.),
                Color::from_hsv(5. / 6., 1., 1., 1.),
            );
        }

        #[test]
        fn test_wrap_to_full_turn_falls_through() {
            // A hue just below zero wraps to exactly 360 degrees, past the last sector.
            let h = -1e-9;
            assert_eq!(Color::from_hsv(h, 1., 1., 1.), Color::BLACK);
            assert_eq!(
                Color::from_hsv(h, 0.5, 1., 1.),
                Color::from_rgba(0.5, 0.5, 0.5, 1.)
            );

            let mut c = Color::TRANSPARENT;
            c.set_hsv(h, 1., 1., 1.);
            assert_eq!(c, Color::RED);
        }

        #[test]
        fn test_zero_saturation() {
            assert_close(Color::from_hsv(0.4, 0., 0.7, 1.), Color::from_rgb(0.7, 0.7, 0.7));
        }

        #[test]
        fn test_agrees_with_set_hsv_inside_sectors() {
            for h in [0.05, 0.2, 0.4, 0.55, 0.7, 0.9] {
                let mut c = Color::BLACK;
                c.set_hsv(h, 0.75, 0.8, 1.);
                assert_close(Color::from_hsv(h, 0.75, 0.8, 1.), c);
            }
        }
    }
}
