//! Approximate equality for floating-point values and the containers holding them.
//!
//! Exact comparisons of computed matrices are rarely useful: an inverse obtained through
//! elimination differs from the exact result by a few rounding errors. [`ApproxEq`] compares
//! values with an absolute, relative, or ULP-based tolerance, and the [`assert_approx_eq!`] and
//! [`assert_approx_ne!`] macros turn that into test assertions.
//!
//! [`assert_approx_eq!`]: crate::assert_approx_eq
//! [`assert_approx_ne!`]: crate::assert_approx_ne

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types (slices, arrays, vectors and matrices) compare equal if they have the same
/// shape and all of their elements compare equal.
///
/// For the subtleties of comparing floating-point numbers, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Tolerance type of absolute and relative comparisons; the underlying float type.
    type Tolerance: DefaultTolerances + Copy;

    /// Returns `true` if the absolute difference of `self` and `other` is at most
    /// `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if the absolute difference of `self` and `other` is at most
    /// `rel_tolerance` times the larger magnitude of the two.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if at most `ulps_tolerance` representable values lie between `self` and
    /// `other` ([*units in the last place*]).
    ///
    /// `NaN` is never equal to anything. `-0.0` and `+0.0` are equal; other values with differing
    /// signs never are.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used by the assertion macros when no comparison is configured.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Until then, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select the comparisons to perform; the values are
/// considered equal if *any* selected comparison considers them equal.
///
/// Without any configuration, an absolute comparison with [`DEFAULT_ABS_TOLERANCE`] and a
/// relative comparison with [`DEFAULT_REL_TOLERANCE`] are performed.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the absolute difference of the values against `abs`.
    ///
    /// Works well for values close to zero, possibly with opposing signs.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the absolute difference of the values against `rel` times the larger of their
    /// magnitudes.
    ///
    /// Works well for values that are not close to zero. Any non-zero value needs a relative
    /// tolerance of at least 1.0 to compare equal to 0.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compares the values by the number of representable values between them.
    ///
    /// Adapts to the magnitude of the compared values, but floats of opposing signs are billions
    /// of ULPs apart, even when both are close to zero.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&mut self) -> bool {
        let (left, right) = (self.left, self.right);
        self.abs.take().map_or(false, |abs| left.abs_diff_eq(right, abs))
            || self.rel.take().map_or(false, |rel| left.rel_diff_eq(right, rel))
            || self.ulps.take().map_or(false, |ulps| left.ulps_diff_eq(right, ulps))
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on destructors, so the location is captured in `new`.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            "assertion `left {op} right` failed at {location}: {args}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that selects the comparison and its
/// tolerance. Also see [`assert_approx_ne!`].
///
/// ```
/// # use tabula_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
///
/// let inv = Mat2d::from_rows([[4.0, 7.0], [2.0, 6.0]]).inverse()?;
/// assert_approx_eq!(inv, Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]])).abs(1e-12);
/// # Ok::<_, LinalgError>(())
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// ```
/// # use tabula_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// assert_approx_ne!(1.0, 1.0 + f64::EPSILON + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "pivot row")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "pivot row {}", 3);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn epsilon() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
    }

    #[test]
    fn negative() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).ulps(0);
        assert_approx_eq!(-0.0, 0.0).ulps(0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f64::NAN, f64::NAN).abs(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).rel(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).ulps(100);
        assert_approx_ne!(f32::NAN, 0.0).abs(1.0);
    }

    #[test]
    fn inf() {
        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_ne!(f32::INFINITY, f32::MAX).abs(10000.0);
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).rel(10000.0);
    }

    #[test]
    fn containers() {
        assert_approx_eq!([1.0, 2.0], [1.0, 2.0 + f64::EPSILON]);
        assert_approx_eq!(&[1.0f32][..], &[1.0f32][..]);
        assert_approx_ne!(&[1.0f32, 2.0][..], &[1.0f32][..]);
    }
}
