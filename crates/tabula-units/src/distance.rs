//! Lengths, with the metre as the base unit.

use crate::{Frac, Measure, Unit, UnitValue};

/// The [`Measure`] of lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distance {}

impl Measure for Distance {
    const SYMBOL: &'static str = "m";
}

pub type Kilometer<T> = Unit<Distance, T, Frac<1000, 1>>;
pub type Hectometer<T> = Unit<Distance, T, Frac<100, 1>>;
pub type Decameter<T> = Unit<Distance, T, Frac<10, 1>>;
pub type Meter<T> = Unit<Distance, T, Frac<1, 1>>;
pub type Decimeter<T> = Unit<Distance, T, Frac<1, 10>>;
pub type Centimeter<T> = Unit<Distance, T, Frac<1, 100>>;
pub type Millimeter<T> = Unit<Distance, T, Frac<1, 1000>>;
pub type Micrometer<T> = Unit<Distance, T, Frac<1, 1_000_000>>;

pub type Inch<T> = Unit<Distance, T, Frac<254, 10000>>;
pub type Foot<T> = Unit<Distance, T, Frac<3048, 10000>>;
pub type Yard<T> = Unit<Distance, T, Frac<9144, 10000>>;
pub type Mile<T> = Unit<Distance, T, Frac<160934, 100>>;

/// Constructs distances from plain numbers: `5_i64.km()`, `2.5.ft()`.
pub trait DistanceExt: UnitValue {
    fn km(self) -> Kilometer<Self>;
    fn hm(self) -> Hectometer<Self>;
    fn dam(self) -> Decameter<Self>;
    fn m(self) -> Meter<Self>;
    fn dm(self) -> Decimeter<Self>;
    fn cm(self) -> Centimeter<Self>;
    fn mm(self) -> Millimeter<Self>;
    fn um(self) -> Micrometer<Self>;
    fn inch(self) -> Inch<Self>;
    fn ft(self) -> Foot<Self>;
    fn yd(self) -> Yard<Self>;
    fn mi(self) -> Mile<Self>;
}

macro_rules! suffixes {
    ($($method:ident => $unit:ident),+ $(,)?) => {
        impl<T: UnitValue> DistanceExt for T {
            $(
                #[inline]
                fn $method(self) -> $unit<Self> {
                    Unit::new(self)
                }
            )+
        }
    };
}

suffixes!(
    km => Kilometer,
    hm => Hectometer,
    dam => Decameter,
    m => Meter,
    dm => Decimeter,
    cm => Centimeter,
    mm => Millimeter,
    um => Micrometer,
    inch => Inch,
    ft => Foot,
    yd => Yard,
    mi => Mile,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric() {
        assert_eq!(1_i64.km().to::<Meter<i64>>().count(), 1000);
        assert_eq!(1_i64.hm().to::<Decameter<i64>>().count(), 10);
        assert_eq!(1_i64.dm().to::<Millimeter<i64>>().count(), 100);
        assert_eq!(3_i64.mm().to::<Micrometer<i64>>().count(), 3000);
        assert_eq!(1_i64.m(), 100_i64.cm());
    }

    #[test]
    fn imperial() {
        assert_eq!(1_i64.ft().to::<Inch<i64>>().count(), 12);
        assert_eq!(1_i64.yd().to::<Foot<i64>>().count(), 3);
        assert_eq!(1_i64.yd(), 36_i64.inch());
        assert_eq!(1_i64.inch().to::<Micrometer<i64>>().count(), 25400);

        let mile = 1.0_f64.mi().to::<Meter<f64>>();
        assert!((mile.count() - 1609.34).abs() < 1e-9);
    }

    #[test]
    fn mixed_systems() {
        let total = 1_i64.m() + 1_i64.inch();
        // Common unit of 1/1 and 254/10000 m is 1/10000 m.
        assert_eq!(total.count(), 10254);
        assert!(1.0_f64.yd() < 1.0_f64.m());
    }
}
