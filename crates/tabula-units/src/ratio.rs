//! Compile-time rational numbers used as unit scales.

use std::marker::PhantomData;

/// A positive rational number known at compile time.
///
/// A unit's ratio is its size relative to the base unit of its measure: the metre has the ratio
/// `1/1`, the kilometre `1000/1`.
pub trait Ratio: 'static {
    const NUM: u64;
    const DEN: u64;

    /// The ratio as a floating-point number.
    const VALUE: f64 = Self::NUM as f64 / Self::DEN as f64;
}

/// The ratio `NUM / DEN`. The fraction does not need to be reduced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Frac<const NUM: u64, const DEN: u64>;

impl<const NUM: u64, const DEN: u64> Ratio for Frac<NUM, DEN> {
    const NUM: u64 = NUM;
    const DEN: u64 = DEN;
}

/// The largest ratio that both `A` and `B` are integer multiples of.
///
/// Defined as the gcd of the numerators over the lcm of the denominators. Adding quantities in
/// units `A` and `B` yields a quantity in this unit, which represents both operands exactly when
/// their counts are integers.
///
/// ```
/// # use tabula_units::*;
/// // Feet and inches have inches in common.
/// type FootInch = Common<Frac<3048, 10000>, Frac<254, 10000>>;
/// assert_eq!((FootInch::NUM, FootInch::DEN), (254, 10000));
///
/// // Degrees and arc minutes have arc minutes in common.
/// type DegMin = Common<Frac<1, 1>, Frac<1, 60>>;
/// assert_eq!((DegMin::NUM, DegMin::DEN), (1, 60));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Common<A, B>(PhantomData<(A, B)>);

impl<A: Ratio, B: Ratio> Ratio for Common<A, B> {
    const NUM: u64 = gcd(A::NUM as u128, B::NUM as u128) as u64;
    const DEN: u64 = lcm(A::DEN as u128, B::DEN as u128) as u64;
}

/// The reduced factor converting a count in unit `F` into a count in unit `T`, `F / T`.
pub(crate) struct Conversion<F, T>(PhantomData<(F, T)>);

impl<F: Ratio, T: Ratio> Conversion<F, T> {
    const RAW_NUM: u128 = F::NUM as u128 * T::DEN as u128;
    const RAW_DEN: u128 = F::DEN as u128 * T::NUM as u128;
    const GCD: u128 = gcd(Self::RAW_NUM, Self::RAW_DEN);

    pub(crate) const NUM: u128 = Self::RAW_NUM / Self::GCD;
    pub(crate) const DEN: u128 = Self::RAW_DEN / Self::GCD;
}

pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

pub const fn lcm(a: u128, b: u128) -> u128 {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gcd_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), 12);
        assert_eq!(lcm(10000, 10000), 10000);
    }

    #[test]
    fn conversion_is_reduced() {
        type KmToM = Conversion<Frac<1000, 1>, Frac<1, 1>>;
        assert_eq!((KmToM::NUM, KmToM::DEN), (1000, 1));

        type FtToIn = Conversion<Frac<3048, 10000>, Frac<254, 10000>>;
        assert_eq!((FtToIn::NUM, FtToIn::DEN), (12, 1));

        type InToFt = Conversion<Frac<254, 10000>, Frac<3048, 10000>>;
        assert_eq!((InToFt::NUM, InToFt::DEN), (1, 12));
    }

    #[test]
    fn value() {
        assert_eq!(Frac::<1, 4>::VALUE, 0.25);
        assert_eq!(Common::<Frac<1, 2>, Frac<1, 3>>::VALUE, 1.0 / 6.0);
    }
}
