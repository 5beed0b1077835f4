//! Physical quantities whose unit is part of their type.
//!
//! A [`Unit<M, T, R>`] is a count of type `T` of some unit of measure `M` (like [`Angle`] or
//! [`Distance`]), where `R` is the size of that unit relative to the measure's base unit as a
//! compile-time fraction (see [`Ratio`]). Conversion factors between units are reduced at
//! compile time, so converting between integer units is exact whenever possible.
//!
//! Quantities are constructed with the extension traits [`AngleExt`] and [`DistanceExt`], which
//! add suffix-like methods to [`f32`], [`f64`], [`i32`] and [`i64`]:
//!
//! ```
//! use tabula_units::*;
//!
//! let width = 2_i64.m() + 35_i64.cm();
//! assert_eq!(width.to::<Centimeter<i64>>().count(), 235);
//!
//! let angle = 90.0_f64.deg();
//! assert!((angle.sin() - 1.0).abs() < 1e-9);
//! ```

mod angle;
mod distance;
mod ratio;
mod unit;

pub use angle::*;
pub use distance::*;
pub use ratio::{gcd, lcm, Common, Frac, Ratio};
pub use unit::{Measure, Unit, UnitType, UnitValue};
