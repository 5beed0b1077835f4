//! Row operations and Gauss-Jordan elimination, plus the algorithms built on top of them.

use itertools::iproduct;

use crate::{
    Allocate, Dynamic, LinalgError, MatrixExpr, MatrixMut, Number, One, Owned, Real, Result,
    Shape, Zero,
};

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(LinalgError::IndexOutOfRange { index, len })
    }
}

pub(crate) fn ensure_square(shape: Shape) -> Result<()> {
    if shape.is_square() {
        Ok(())
    } else {
        Err(LinalgError::NotSquareMatrix {
            rows: shape.rows,
            cols: shape.cols,
        })
    }
}

/// Copies every cell of `src` into `dst`. The shapes must already agree.
pub(crate) fn copy_cells<D, S>(dst: &mut D, src: &S)
where
    D: MatrixMut + ?Sized,
    S: MatrixExpr<Elem = D::Elem> + ?Sized,
{
    debug_assert_eq!(dst.shape(), src.shape());
    for (row, col) in iproduct!(0..src.rows(), 0..src.columns()) {
        *dst.element_mut(row, col) = src.element(row, col);
    }
}

pub(crate) fn swap_rows<M: MatrixMut + ?Sized>(mat: &mut M, a: usize, b: usize) {
    if a == b {
        return;
    }
    for col in 0..mat.columns() {
        let tmp = mat.element(a, col);
        *mat.element_mut(a, col) = mat.element(b, col);
        *mat.element_mut(b, col) = tmp;
    }
}

pub(crate) fn scale_row<M>(mat: &mut M, row: usize, factor: M::Elem)
where
    M: MatrixMut + ?Sized,
    M::Elem: Number,
{
    for col in 0..mat.columns() {
        let elem = mat.element_mut(row, col);
        *elem = *elem * factor;
    }
}

pub(crate) fn combine_rows<M>(
    mat: &mut M,
    target: usize,
    target_factor: M::Elem,
    source: usize,
    source_factor: M::Elem,
) where
    M: MatrixMut + ?Sized,
    M::Elem: Number,
{
    for col in 0..mat.columns() {
        let value =
            mat.element(target, col) * target_factor + mat.element(source, col) * source_factor;
        *mat.element_mut(target, col) = value;
    }
}

pub(crate) fn gauss_elimination<M>(mat: &mut M) -> M::Elem
where
    M: MatrixMut + ?Sized,
    M::Elem: Real,
{
    let rows = mat.rows();
    let mut pseudo_det = M::Elem::ONE;
    let mut swaps = 0usize;

    for j in 0..rows.min(mat.columns()) {
        // Partial pivoting: pick the largest candidate at or below row `j`.
        let mut pivot_row = j;
        let mut max = mat.element(j, j).abs();
        for i in j + 1..rows {
            let candidate = mat.element(i, j).abs();
            if candidate > max {
                max = candidate;
                pivot_row = i;
            }
        }

        let pivot = mat.element(pivot_row, j);
        if pivot == M::Elem::ZERO {
            return M::Elem::ZERO;
        }

        pseudo_det = pseudo_det * pivot;
        scale_row(mat, pivot_row, M::Elem::ONE / pivot);
        if pivot_row != j {
            swap_rows(mat, pivot_row, j);
            swaps += 1;
        }

        for i in (0..rows).filter(|&i| i != j) {
            let factor = mat.element(i, j);
            if factor != M::Elem::ZERO {
                combine_rows(mat, i, M::Elem::ONE, j, -factor);
            }
        }
    }

    if swaps % 2 == 0 {
        pseudo_det
    } else {
        -pseudo_det
    }
}

pub(crate) fn trace<E>(expr: &E) -> Result<E::Elem>
where
    E: MatrixExpr + ?Sized,
    E::Elem: Number,
{
    ensure_square(expr.shape())?;
    Ok((0..expr.rows()).fold(E::Elem::ZERO, |acc, i| acc + expr.element(i, i)))
}

pub(crate) fn determinant<E>(expr: &E) -> Result<E::Elem>
where
    E: MatrixExpr,
    E::Elem: Real,
    (E::Rows, E::Cols): Allocate<E::Elem>,
{
    let shape = expr.shape();
    ensure_square(shape)?;
    let mut scratch = <(E::Rows, E::Cols) as Allocate<E::Elem>>::allocate(shape.rows, shape.cols);
    copy_cells(&mut scratch, expr);
    Ok(gauss_elimination(&mut scratch))
}

pub(crate) fn inverse<E>(expr: &E) -> Result<Owned<E>>
where
    E: MatrixExpr,
    E::Elem: Real,
    (E::Rows, E::Cols): Allocate<E::Elem>,
{
    let shape = expr.shape();
    ensure_square(shape)?;

    let mut left = <(E::Rows, E::Cols) as Allocate<E::Elem>>::allocate(shape.rows, shape.cols);
    copy_cells(&mut left, expr);
    let mut right = <(E::Rows, E::Cols) as Allocate<E::Elem>>::allocate(shape.rows, shape.cols);
    for i in 0..shape.rows {
        *right.element_mut(i, i) = E::Elem::ONE;
    }

    let mut augmented = Augmented { left, right };
    let pseudo_det = gauss_elimination(&mut augmented);
    if pseudo_det.abs() < E::Elem::INVERSION_EPSILON {
        log::debug!("rejecting inversion of {shape} matrix with pseudo-determinant {pseudo_det:?}");
        return Err(LinalgError::SingularMatrix);
    }

    Ok(augmented.right)
}

/// Two matrices with the same number of rows, viewed side by side as `[left | right]`.
///
/// Row operations on an [`Augmented`] matrix apply to both halves at once, which is how
/// [`MatrixExpr::inverse`] reduces `[A | I]` to `[I | A⁻¹]`.
///
/// ```
/// # use tabula_linalg::*;
/// let mut aug = Augmented::new(Mat2d::from_rows([[2.0, 0.0], [0.0, 1.0]]), Mat2d::IDENTITY)?;
/// assert_eq!(aug.shape(), Shape::new(2, 4));
///
/// aug.gauss_elimination();
/// let (left, right) = aug.into_parts();
/// assert_eq!(left, Mat2d::IDENTITY);
/// assert_eq!(right, Matrix::from_diagonal([0.5, 1.0]));
/// # Ok::<_, LinalgError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Augmented<L, R> {
    left: L,
    right: R,
}

impl<L, R> Augmented<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
{
    /// Joins `left` and `right`, which must have the same number of rows.
    pub fn new(left: L, right: R) -> Result<Self> {
        if left.rows() != right.rows() {
            return Err(LinalgError::mismatch(
                "augmentation",
                left.shape(),
                right.shape(),
            ));
        }
        Ok(Self { left, right })
    }

    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> MatrixExpr for Augmented<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
{
    type Elem = L::Elem;
    type Rows = L::Rows;
    type Cols = Dynamic;

    fn rows(&self) -> usize {
        self.left.rows()
    }

    fn columns(&self) -> usize {
        self.left.columns() + self.right.columns()
    }

    fn element(&self, row: usize, col: usize) -> Self::Elem {
        match col.checked_sub(self.left.columns()) {
            None => self.left.element(row, col),
            Some(col) => self.right.element(row, col),
        }
    }
}

impl<L, R> MatrixMut for Augmented<L, R>
where
    L: MatrixMut,
    R: MatrixMut<Elem = L::Elem>,
{
    fn element_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem {
        match col.checked_sub(self.left.columns()) {
            None => self.left.element_mut(row, col),
            Some(col) => self.right.element_mut(row, col),
        }
    }
}
