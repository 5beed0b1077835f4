use super::ApproxEq;

macro_rules! float_impls {
    ($($float:ty),+) => {
        $(
            impl ApproxEq for $float {
                type Tolerance = Self;

                fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        // `inf == inf` and `inf != -inf`; NaN is unequal to everything.
                        return self == other;
                    }
                    (self - other).abs() <= abs_tolerance
                }

                fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return self == other;
                    }
                    let largest = self.abs().max(other.abs());
                    (self - other).abs() <= largest * rel_tolerance
                }

                fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
                    if self.is_sign_negative() != other.is_sign_negative() {
                        return self == other; // `-0.0 == +0.0`
                    }
                    if self.is_nan() || other.is_nan() {
                        return false;
                    }
                    self.to_bits().abs_diff(other.to_bits()) <= ulps_tolerance.into()
                }
            }
        )+
    };
}

float_impls!(f32, f64);

impl<'a, T: ApproxEq + ?Sized> ApproxEq for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(*self, *other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(*self, *other, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        T::ulps_diff_eq(*self, *other, ulps_tolerance)
    }
}

/// Slices compare equal if they have the same length and their elements compare equal.
impl<T: ApproxEq> ApproxEq for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self[..].abs_diff_eq(&other[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self[..].rel_diff_eq(&other[..], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], ulps_tolerance)
    }
}
