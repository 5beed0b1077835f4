use std::ops::{AddAssign, Index, IndexMut, Mul, MulAssign, SubAssign};

use itertools::iproduct;

use crate::{
    approx::ApproxEq, ops::impl_expr_ops, Const, LinalgError, MatrixExpr, Matrix, Number,
    SameDim, Vector,
};

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance.clone()))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance.clone()))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

/// Matrix * Column Vector, evaluated eagerly.
impl<T, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Self::Output {
        Vector::from_fn(|row| (0..C).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

macro_rules! elementwise_assign {
    ($trait:ident, $method:ident, $op:tt, $desc:literal) => {
        impl<T, Rhs, const R: usize, const C: usize> $trait<Rhs> for Matrix<T, R, C>
        where
            T: Number,
            Rhs: MatrixExpr<Elem = T>,
            Const<R>: SameDim<Rhs::Rows>,
            Const<C>: SameDim<Rhs::Cols>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: Rhs) {
                if self.shape() != rhs.shape() {
                    panic!("{}", LinalgError::mismatch($desc, self.shape(), rhs.shape()));
                }
                for (row, col) in iproduct!(0..R, 0..C) {
                    self[(row, col)] = self[(row, col)] $op rhs.element(row, col);
                }
            }
        }
    };
}

elementwise_assign!(AddAssign, add_assign, +, "addition");
elementwise_assign!(SubAssign, sub_assign, -, "subtraction");

/// `a *= b` computes `a = a * b` through a temporary.
impl<T, Rhs, const R: usize, const C: usize> MulAssign<Rhs> for Matrix<T, R, C>
where
    T: Number,
    Rhs: MatrixExpr<Elem = T>,
    Const<C>: SameDim<Rhs::Rows> + SameDim<Rhs::Cols>,
{
    #[track_caller]
    fn mul_assign(&mut self, rhs: Rhs) {
        if let Err(e) = self.postmultiply(rhs) {
            panic!("{e}");
        }
    }
}

impl_expr_ops!(['a, T, const R: usize, const C: usize,] &'a Matrix<T, R, C>);
