//! Eager by-value operators on [`Vector`].
//!
//! Borrowed vectors (`&v`) use the lazy expression operators instead.

use std::ops::{
    Add, AddAssign, BitOr, BitXor, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub,
    SubAssign,
};

use crate::{approx::ApproxEq, ops::impl_expr_ops, Number};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const N: usize> Add<Vector<T, N>> for Vector<T, N>
where
    T: Add,
{
    type Output = Vector<T::Output, N>;

    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l + r)
    }
}

/// Element-wise addition.
impl<T, const N: usize> AddAssign<Vector<T, N>> for Vector<T, N>
where
    T: AddAssign,
{
    fn add_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs += rhs);
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> Sub<Vector<T, N>> for Vector<T, N>
where
    T: Sub,
{
    type Output = Vector<T::Output, N>;

    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        self.zip(rhs).map(|(l, r)| l - r)
    }
}

/// Element-wise subtraction.
impl<T, const N: usize> SubAssign<Vector<T, N>> for Vector<T, N>
where
    T: SubAssign,
{
    fn sub_assign(&mut self, rhs: Vector<T, N>) {
        self.as_mut_slice()
            .iter_mut()
            .zip(rhs.into_array())
            .for_each(|(lhs, rhs)| *lhs -= rhs);
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul + Copy,
{
    type Output = Vector<T::Output, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: MulAssign + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs *= rhs);
    }
}

/// Vector-Scalar division (scaling).
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div + Copy,
{
    type Output = Vector<T::Output, N>;

    fn div(self, rhs: T) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division (scaling).
impl<T, const N: usize> DivAssign<T> for Vector<T, N>
where
    T: DivAssign + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        self.as_mut_slice().iter_mut().for_each(|lhs| *lhs /= rhs);
    }
}

/// Dot product: `a | b`.
impl<T: Number, const N: usize> BitOr<Vector<T, N>> for Vector<T, N> {
    type Output = T;

    fn bitor(self, rhs: Vector<T, N>) -> T {
        self.dot(rhs)
    }
}

/// Cross product: `a ^ b`.
impl<T: Number> BitXor<Vector<T, 3>> for Vector<T, 3> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.cross(rhs)
    }
}

impl_expr_ops!(['a, T, const N: usize,] &'a Vector<T, N>);
