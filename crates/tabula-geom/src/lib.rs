//! Homogeneous coordinates and rigid transforms on top of [`tabula_linalg`].
//!
//! A point or direction in `N`-dimensional space is represented as a [`Homogeneous`] vector with
//! `N + 1` elements, where the extra `w` element is `1` for points and `0` for directions. A
//! [`Transform`] is an `(N + 1)`x`(N + 1)` matrix combining a rotation block and a translation
//! column, and maps homogeneous vectors with a single matrix product:
//!
//! ```
//! use tabula_geom::*;
//! use tabula_linalg::{assert_approx_eq, vec2};
//! use tabula_units::AngleExt;
//!
//! let transform = Transform2::from_translation_rotation(vec2(1.0, 0.0), 90.0_f64.deg());
//!
//! // Points are rotated, then translated.
//! assert_approx_eq!(transform.transform_point(vec2(1.0, 0.0)), vec2(1.0, 1.0));
//! // Directions are only rotated.
//! assert_approx_eq!(transform.transform_direction(vec2(1.0, 0.0)), vec2(0.0, 1.0));
//! ```
//!
//! Stable Rust cannot compute `N + 1` in a type, so both types carry `H` as a separate const
//! parameter. Using a type with `H != N + 1` fails to compile.

mod homogeneous;
mod transform;

use tabula_linalg::{Real, Sqrt, Trig};

pub use homogeneous::{HVec2, HVec3, Homogeneous};
pub use transform::{Transform, Transform2, Transform3};

/// Element types that geometric types can be built from.
pub trait Scalar: Real + Trig + Sqrt {
    /// Converts from an [`f64`], rounding if necessary.
    ///
    /// Angles are evaluated in [`f64`] and then converted with this method.
    fn from_f64(value: f64) -> Self;
}

impl Scalar for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Compile-time check that `H == N + 1`.
struct Extent<const N: usize, const H: usize>;

impl<const N: usize, const H: usize> Extent<N, H> {
    const VALID: () = assert!(H == N + 1, "homogeneous dimension must be N + 1");
}
