use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign},
};

use crate::ratio::{Common, Conversion, Ratio};

/// A kind of physical quantity, like [`Angle`][crate::Angle] or [`Distance`][crate::Distance].
///
/// Units of the same measure can be converted into each other and combined arithmetically.
pub trait Measure: 'static {
    /// Symbol of the unit with ratio `1/1`.
    const SYMBOL: &'static str;
}

/// Numeric types that can be used as the count of a [`Unit`].
pub trait UnitValue:
    Copy
    + PartialOrd
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// Computes `num * self / den`.
    ///
    /// Integer types round toward zero, like integer division does, and saturate at their bounds
    /// when the result does not fit.
    fn rescale(self, num: u128, den: u128) -> Self;

    fn to_f64(self) -> f64;
}

macro_rules! float_values {
    ($($t:ty),+) => {
        $(
            impl UnitValue for $t {
                #[inline]
                fn rescale(self, num: u128, den: u128) -> Self {
                    (num as f64 * self as f64 / den as f64) as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

macro_rules! int_values {
    ($($t:ty),+) => {
        $(
            impl UnitValue for $t {
                #[inline]
                fn rescale(self, num: u128, den: u128) -> Self {
                    let scaled = num as i128 * self as i128 / den as i128;
                    scaled.clamp(<$t>::MIN as i128, <$t>::MAX as i128) as $t
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )+
    };
}

float_values!(f32, f64);
int_values!(i32, i64);

/// A quantity of measure `M`, counted in units of size `R` (relative to the measure's base unit).
///
/// The unit is part of the type: a [`Meter<f64>`][crate::Meter] and a
/// [`Foot<f64>`][crate::Foot] are different types. Converting between them is explicit
/// ([`Unit::convert`], [`Unit::to`]), while arithmetic and comparisons between different units of
/// the same measure convert both operands into their [`Common`] unit.
///
/// ```
/// # use tabula_units::*;
/// let total = 1_i64.ft() + 3_i64.inch();
/// assert_eq!(total.count(), 15); // in inches
/// assert_eq!(total, 15_i64.inch());
/// assert!(1_i64.km() > 999_i64.m());
/// ```
pub struct Unit<M, T, R> {
    count: T,
    _p: PhantomData<fn() -> (M, R)>,
}

impl<M, T, R> Unit<M, T, R> {
    #[inline]
    pub const fn new(count: T) -> Self {
        Self {
            count,
            _p: PhantomData,
        }
    }

    /// Returns the number of units of size `R`.
    #[inline]
    pub fn count(&self) -> T
    where
        T: Copy,
    {
        self.count
    }
}

impl<M: Measure, T: UnitValue, R: Ratio> Unit<M, T, R> {
    /// Converts the quantity into a count of units of size `R2`.
    ///
    /// The conversion factor `R / R2` is reduced at compile time and applied as
    /// `num * count / den`, so integer conversions are exact whenever the result is an integer.
    ///
    /// ```
    /// # use tabula_units::*;
    /// let d = 3_i64.km().convert::<Frac<1, 1>>();
    /// assert_eq!(d.count(), 3000);
    /// ```
    #[inline]
    pub fn convert<R2: Ratio>(self) -> Unit<M, T, R2> {
        Unit::new(
            self.count
                .rescale(Conversion::<R, R2>::NUM, Conversion::<R, R2>::DEN),
        )
    }

    /// Converts the quantity into the unit type `U`.
    ///
    /// ```
    /// # use tabula_units::*;
    /// let feet = 1.0_f64.mi().to::<Foot<f64>>();
    /// assert!((feet.count() - 5280.0).abs() < 0.1);
    /// ```
    #[inline]
    pub fn to<U>(self) -> U
    where
        U: UnitType<Measure = M, Value = T>,
    {
        U::from_count(self.convert::<U::Ratio>().count)
    }
}

/// Implemented by every [`Unit`], to name one as a type parameter.
pub trait UnitType: Copy {
    type Measure: Measure;
    type Value: UnitValue;
    type Ratio: Ratio;

    fn from_count(count: Self::Value) -> Self;
}

impl<M: Measure, T: UnitValue, R: Ratio> UnitType for Unit<M, T, R> {
    type Measure = M;
    type Value = T;
    type Ratio = R;

    #[inline]
    fn from_count(count: T) -> Self {
        Self::new(count)
    }
}

impl<M, T: Clone, R> Clone for Unit<M, T, R> {
    fn clone(&self) -> Self {
        Self::new(self.count.clone())
    }
}

impl<M, T: Copy, R> Copy for Unit<M, T, R> {}

impl<M, T: Default, R> Default for Unit<M, T, R> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<M, T: Hash, R> Hash for Unit<M, T, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
    }
}

/// Prints the count and the unit size, like `1.5 (1000/1 m)`.
impl<M: Measure, T: fmt::Debug, R: Ratio> fmt::Debug for Unit<M, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.count.fmt(f)?;
        write!(f, " ({}/{} {})", R::NUM, R::DEN, M::SYMBOL)
    }
}

impl<M, T: Neg<Output = T>, R> Neg for Unit<M, T, R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.count)
    }
}

macro_rules! common_unit_op {
    ($trait:ident, $method:ident, $op:tt) => {
        /// Converts both operands into their common unit.
        impl<M, T, R1, R2> $trait<Unit<M, T, R2>> for Unit<M, T, R1>
        where
            M: Measure,
            T: UnitValue,
            R1: Ratio,
            R2: Ratio,
        {
            type Output = Unit<M, T, Common<R1, R2>>;

            #[inline]
            fn $method(self, rhs: Unit<M, T, R2>) -> Self::Output {
                let lhs = self.convert::<Common<R1, R2>>().count;
                let rhs = rhs.convert::<Common<R1, R2>>().count;
                Unit::new(lhs $op rhs)
            }
        }
    };
}

common_unit_op!(Add, add, +);
common_unit_op!(Sub, sub, -);
common_unit_op!(Rem, rem, %);

macro_rules! converting_assign {
    ($trait:ident, $method:ident, $op:tt) => {
        /// Converts the right operand into the unit of the left one.
        impl<M, T, R1, R2> $trait<Unit<M, T, R2>> for Unit<M, T, R1>
        where
            M: Measure,
            T: UnitValue,
            R1: Ratio,
            R2: Ratio,
        {
            #[inline]
            fn $method(&mut self, rhs: Unit<M, T, R2>) {
                self.count = self.count $op rhs.convert::<R1>().count;
            }
        }
    };
}

converting_assign!(AddAssign, add_assign, +);
converting_assign!(SubAssign, sub_assign, -);

macro_rules! scalar_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<M, T: UnitValue, R> $trait<T> for Unit<M, T, R> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                Self::new(self.count $op rhs)
            }
        }
    };
}

scalar_op!(Mul, mul, *);
scalar_op!(Div, div, /);
scalar_op!(Rem, rem, %);

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<M, R> Mul<Unit<M, $t, R>> for $t {
                type Output = Unit<M, $t, R>;

                #[inline]
                fn mul(self, rhs: Unit<M, $t, R>) -> Self::Output {
                    Unit::new(self * rhs.count)
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64, i32, i64);

impl<M, T, R1, R2> PartialEq<Unit<M, T, R2>> for Unit<M, T, R1>
where
    M: Measure,
    T: UnitValue,
    R1: Ratio,
    R2: Ratio,
{
    fn eq(&self, other: &Unit<M, T, R2>) -> bool {
        self.convert::<Common<R1, R2>>().count == other.convert::<Common<R1, R2>>().count
    }
}

impl<M, T, R1, R2> PartialOrd<Unit<M, T, R2>> for Unit<M, T, R1>
where
    M: Measure,
    T: UnitValue,
    R1: Ratio,
    R2: Ratio,
{
    fn partial_cmp(&self, other: &Unit<M, T, R2>) -> Option<Ordering> {
        self.convert::<Common<R1, R2>>()
            .count
            .partial_cmp(&other.convert::<Common<R1, R2>>().count)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Centimeter, DistanceExt, Frac, Meter};

    use super::*;

    #[test]
    fn rescale() {
        assert_eq!(7_i32.rescale(1, 2), 3);
        assert_eq!((-7_i64).rescale(1, 2), -3);
        assert_eq!(1.5_f32.rescale(3, 2), 2.25);
    }

    #[test]
    fn rescale_saturates() {
        assert_eq!(3_i32.rescale(1_000_000_000, 1), i32::MAX);
        assert_eq!((-3_i32).rescale(1_000_000_000, 1), i32::MIN);
        assert_eq!(3_i32.km().to::<crate::Micrometer<i32>>().count(), i32::MAX);
        assert_eq!(3_i64.km().to::<crate::Micrometer<i64>>().count(), 3_000_000_000);
    }

    #[test]
    fn arithmetic() {
        let a = 5_i64.m();
        assert_eq!((-a).count(), -5);
        assert_eq!((a * 3).count(), 15);
        assert_eq!((3_i64 * a).count(), 15);
        assert_eq!((a / 2).count(), 2);
        assert_eq!((a % 2).count(), 1);
        assert_eq!((7_i64.m() % 4_i64.m()).count(), 3);
        assert_eq!((1_i64.m() - 30_i64.cm()).count(), 70);
    }

    #[test]
    fn assign_keeps_unit() {
        let mut a: Meter<i64> = 5_i64.m();
        a += 1_i64.km();
        assert_eq!(a.count(), 1005);
        a -= 500_i64.cm();
        assert_eq!(a.count(), 1000);

        // Integer conversion truncates toward zero.
        a += 99_i64.cm();
        assert_eq!(a.count(), 1000);
    }

    #[test]
    fn compare() {
        assert_eq!(1_i64.km(), 1000_i64.m());
        assert_ne!(1_i64.km(), 1001_i64.m());
        assert!(2.0_f64.ft() < 1.0_f64.m());
        assert!(12_i64.inch() <= 1_i64.ft());
        assert!(1_i64.mi() > 1_i64.km());
    }

    #[test]
    fn convert() {
        let cm: Centimeter<f64> = 1.5_f64.m().to();
        assert_eq!(cm.count(), 150.0);
        assert_eq!(cm.convert::<Frac<1000, 1>>().count(), 0.0015);
        assert_eq!(2_i32.km().to::<Meter<i32>>().count(), 2000);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{:?}", 1.5_f64.km()), "1.5 (1000/1 m)");
        assert_eq!(format!("{:?}", 3_i32.cm()), "3 (1/100 m)");
    }
}
