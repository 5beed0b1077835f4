//! Plane angles, with the degree as the base unit.

use crate::{Frac, Measure, Ratio, Unit, UnitValue};

/// The [`Measure`] of plane angles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Angle {}

impl Measure for Angle {
    const SYMBOL: &'static str = "deg";
}

/// Size of a radian in degrees, `180 / π`.
pub type RadianRatio = Frac<18_000_000_000, 314_159_265>;

pub type Radian<T> = Unit<Angle, T, RadianRatio>;
/// A full turn.
pub type Round<T> = Unit<Angle, T, Frac<360, 1>>;
pub type Degree<T> = Unit<Angle, T, Frac<1, 1>>;
pub type ArcMinute<T> = Unit<Angle, T, Frac<1, 60>>;
pub type ArcSecond<T> = Unit<Angle, T, Frac<1, 3600>>;

impl<T: UnitValue, R: Ratio> Unit<Angle, T, R> {
    /// Returns the angle in radians, as an [`f64`].
    ///
    /// Unlike [`Unit::convert`], this uses the exact value of π rather than [`RadianRatio`].
    ///
    /// ```
    /// # use tabula_units::*;
    /// assert_eq!(180_i32.deg().radians(), std::f64::consts::PI);
    /// assert_eq!(1.5_f64.rad().radians(), 1.5);
    /// ```
    pub fn radians(self) -> f64 {
        if R::NUM == RadianRatio::NUM && R::DEN == RadianRatio::DEN {
            self.count().to_f64()
        } else {
            self.count().to_f64() * R::VALUE * (std::f64::consts::PI / 180.0)
        }
    }

    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    pub fn cos(self) -> f64 {
        self.radians().cos()
    }

    pub fn tan(self) -> f64 {
        self.radians().tan()
    }
}

/// Constructs angles from plain numbers: `90.0.deg()`, `1.5_f32.rad()`.
pub trait AngleExt: UnitValue {
    fn rad(self) -> Radian<Self>;
    fn rnd(self) -> Round<Self>;
    fn deg(self) -> Degree<Self>;
    fn amin(self) -> ArcMinute<Self>;
    fn asec(self) -> ArcSecond<Self>;
}

impl<T: UnitValue> AngleExt for T {
    #[inline]
    fn rad(self) -> Radian<Self> {
        Unit::new(self)
    }

    #[inline]
    fn rnd(self) -> Round<Self> {
        Unit::new(self)
    }

    #[inline]
    fn deg(self) -> Degree<Self> {
        Unit::new(self)
    }

    #[inline]
    fn amin(self) -> ArcMinute<Self> {
        Unit::new(self)
    }

    #[inline]
    fn asec(self) -> ArcSecond<Self> {
        Unit::new(self)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn conversions() {
        assert!(close(1.0_f64.rnd().to::<Degree<f64>>().count(), 360.0));
        assert!(close(PI.rad().to::<Degree<f64>>().count(), 180.0));
        assert_eq!(2_i64.deg().to::<ArcMinute<i64>>().count(), 120);
        assert_eq!(1_i64.amin().to::<ArcSecond<i64>>().count(), 60);
        assert_eq!(7200_i64.asec().to::<Degree<i64>>().count(), 2);
    }

    #[test]
    fn mixed_sum() {
        let sum = 90_i32.deg() + 30_i32.amin();
        assert_eq!(sum.count(), 5430);
        assert_eq!(sum, 5430_i32.amin());
        assert!(sum > 90_i32.deg());
    }

    #[test]
    fn trig() {
        assert!(close(90.0_f64.deg().sin(), 1.0));
        assert!(close(60_i32.deg().cos(), 0.5));
        assert!(close(45.0_f32.deg().tan(), 1.0));
        assert!(close(0.25_f64.rnd().radians(), FRAC_PI_2));
        assert!(close(1.0_f64.rad().radians(), 1.0));
    }
}
