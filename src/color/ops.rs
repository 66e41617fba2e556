//! Componentwise arithmetic. Alpha takes part in every operator and nothing
//! is clamped.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Color;

impl Color {
    #[inline]
    fn map2(self, rhs: Color, f: impl Fn(f32, f32) -> f32) -> Color {
        Color::from_rgba(
            f(self.r, rhs.r),
            f(self.g, rhs.g),
            f(self.b, rhs.b),
            f(self.a, rhs.a),
        )
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| a + b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

impl Sub for Color {
    type Output = Color;

    fn sub(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| a - b)
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, rhs: Color) {
        *self = *self - rhs;
    }
}

impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| a * b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    fn mul(self, rhs: f32) -> Color {
        Color::from_rgba(self.r * rhs, self.g * rhs, self.b * rhs, self.a * rhs)
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, rhs: Color) {
        *self = *self * rhs;
    }
}

impl MulAssign<f32> for Color {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div for Color {
    type Output = Color;

    fn div(self, rhs: Color) -> Color {
        self.map2(rhs, |a, b| a / b)
    }
}

/// Dividing by zero saturates to opaque white instead of producing infinities.
impl Div<f32> for Color {
    type Output = Color;

    fn div(self, rhs: f32) -> Color {
        if rhs == 0. {
            return Color::WHITE;
        }
        Color::from_rgba(self.r / rhs, self.g / rhs, self.b / rhs, self.a / rhs)
    }
}

impl DivAssign for Color {
    fn div_assign(&mut self, rhs: Color) {
        *self = *self / rhs;
    }
}

impl DivAssign<f32> for Color {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

/// Complements every component, alpha included. See [`Color::inverted`] for
/// a version that keeps alpha.
impl Neg for Color {
    type Output = Color;

    fn neg(self) -> Color {
        Color::from_rgba(1. - self.r, 1. - self.g, 1. - self.b, 1. - self.a)
    }
}

/// Components in `r, g, b, a` order.
impl Index<usize> for Color {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            3 => &self.a,
            _ => panic!("color component index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for Color {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        match index {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            3 => &mut self.a,
            _ => panic!("color component index out of range: {index}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Color = Color::from_rgba(0.5, 0.25, 1., 0.5);
    const B: Color = Color::from_rgba(0.25, 0.5, 0.5, 0.25);

    #[test]
    fn test_add_sub() {
        assert_eq!(A + B, Color::from_rgba(0.75, 0.75, 1.5, 0.75));
        assert_eq!(A - B, Color::from_rgba(0.25, -0.25, 0.5, 0.25));

        let mut c = A;
        c += B;
        c -= B;
        assert_eq!(c, A);
    }

    #[test]
    fn test_mul() {
        assert_eq!(A * B, Color::from_rgba(0.125, 0.125, 0.5, 0.125));
        assert_eq!(A * 2., Color::from_rgba(1., 0.5, 2., 1.));
        assert_eq!(2. * A, A * 2.);

        let mut c = A;
        c *= 2.;
        c *= B;
        assert_eq!(c, Color::from_rgba(0.25, 0.25, 1., 0.25));
    }

    #[test]
    fn test_div() {
        assert_eq!(A / B, Color::from_rgba(2., 0.5, 2., 2.));
        assert_eq!(A / 2., Color::from_rgba(0.25, 0.125, 0.5, 0.25));

        let mut c = A;
        c /= 0.5;
        assert_eq!(c, Color::from_rgba(1., 0.5, 2., 1.));
        c /= B;
        assert_eq!(c, Color::from_rgba(4., 1., 4., 4.));
    }

    #[test]
    fn test_div_by_zero_saturates() {
        assert_eq!(A / 0., Color::from_rgba(1., 1., 1., 1.));
        assert_eq!(Color::TRANSPARENT / 0., Color::WHITE);

        let mut c = Color::from_rgba(-3., 7., 0., 0.2);
        c /= 0.;
        assert_eq!(c, Color::WHITE);
    }

    #[test]
    fn test_componentwise_div_by_zero_is_unguarded() {
        let c = A / Color::TRANSPARENT;
        assert!(c.r.is_infinite());
    }

    #[test]
    fn test_neg() {
        assert_eq!(-A, Color::from_rgba(0.5, 0.75, 0., 0.5));
        assert_eq!(-Color::WHITE, Color::TRANSPARENT);
    }

    #[test]
    fn test_index() {
        let mut c = A;
        assert_eq!([c[0], c[1], c[2], c[3]], [0.5, 0.25, 1., 0.5]);
        c[3] = 0.;
        assert_eq!(c.a, 0.);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let _ = A[4];
    }
}
