//! Numeric traits for matrix and vector elements.

use std::{fmt, ops};

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// Floats use [`f32::min`]/[`f32::max`] (and their [`f64`] counterparts), so a `NaN` operand is
/// ignored. Integers use [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// This is the element bound of every arithmetic expression node.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types that Gauss-Jordan elimination can operate on.
///
/// Elimination divides by pivot values and compares magnitudes, so it is restricted to types with
/// a meaningful absolute value and ordering.
pub trait Real: Number + PartialOrd + fmt::Debug {
    /// Pseudo-determinants with a magnitude below this value are treated as singular by
    /// [`MatrixExpr::inverse`][crate::MatrixExpr::inverse].
    const INVERSION_EPSILON: Self;

    fn abs(self) -> Self;
}

macro_rules! zero_one {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
zero_one!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
zero_one!(0.0, 1.0: f32, f64);

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($float:ident),+) => {
        $(
            impl MinMax for $float {
                fn min(self, other: Self) -> Self {
                    $float::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    $float::max(self, other)
                }
            }

            impl Trig for $float {
                fn sin(self) -> Self {
                    $float::sin(self)
                }

                fn cos(self) -> Self {
                    $float::cos(self)
                }

                fn tan(self) -> Self {
                    $float::tan(self)
                }

                fn acos(self) -> Self {
                    $float::acos(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $float::atan2(self, other)
                }
            }

            impl Sqrt for $float {
                fn sqrt(self) -> Self {
                    $float::sqrt(self)
                }
            }

            impl Real for $float {
                const INVERSION_EPSILON: Self = 1e-4;

                fn abs(self) -> Self {
                    $float::abs(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);
