//! The expression interface shared by storage, views and lazy operation nodes.

use std::fmt;

use itertools::iproduct;

use crate::{
    algo, Allocate, Const, Dim, Dynamic, LinalgError, MatrixN, Number, Owned, Real, Result,
    SameDim, Scaled, Shape, Square, Transpose, View, ViewMut, Zero,
};

/// A matrix-shaped value whose elements can be read one at a time.
///
/// Implemented by the storage backends ([`Matrix`], [`MatrixN`], [`Vector`]), by windows into
/// them ([`View`], [`ViewMut`]) and by the lazy operation nodes ([`Sum`], [`Difference`],
/// [`Product`], [`Scaled`], [`Transpose`]). References to expressions are expressions too, so a
/// node can either own its operands or borrow them.
///
/// Nothing is computed until [`MatrixExpr::element`] is called: evaluating an expression tree
/// means pulling every element of its root once, which is what [`MatrixMut::assign`] and
/// [`MatrixExpr::eval`] do.
///
/// ```
/// # use tabula_linalg::*;
/// let a = Mat2::from_rows([[1, 2], [3, 4]]);
/// let b = Mat2::IDENTITY;
///
/// // Builds a tree of nodes borrowing `a` and `b`, nothing is computed yet.
/// let expr = &a * &b + &a;
/// assert_eq!(expr.element(1, 0), 6);
///
/// let sum: Mat2<i32> = expr.eval();
/// assert_eq!(sum, Matrix::from_rows([[2, 4], [6, 8]]));
/// ```
///
/// [`Matrix`]: crate::Matrix
/// [`Vector`]: crate::Vector
/// [`Sum`]: crate::Sum
/// [`Difference`]: crate::Difference
/// [`Product`]: crate::Product
pub trait MatrixExpr {
    /// The element type, shared by every node of an expression tree.
    type Elem: Copy;
    /// The row dimension.
    type Rows: Dim;
    /// The column dimension.
    type Cols: Dim;

    /// Returns the number of rows.
    fn rows(&self) -> usize;

    /// Returns the number of columns.
    fn columns(&self) -> usize;

    /// Computes the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// May panic if `(row, col)` is out of bounds.
    fn element(&self, row: usize, col: usize) -> Self::Elem;

    #[inline]
    fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.columns())
    }

    #[inline]
    fn is_square(&self) -> bool {
        self.rows() == self.columns()
    }

    /// Returns a lazy transpose of this expression.
    fn transpose(self) -> Transpose<Self>
    where
        Self: Sized,
    {
        Transpose::new(self)
    }

    /// Returns a lazy expression multiplying every element by `factor`.
    fn scale(self, factor: Self::Elem) -> Scaled<Self>
    where
        Self: Sized,
    {
        Scaled::new(self, factor)
    }

    /// Returns an `R`x`C` read-only window into this expression, starting at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the window does not fit inside the expression. Use [`View::new`] for a
    /// fallible version.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// let view = mat.view::<2, 2>(0, 1);
    /// assert_eq!(view.element(1, 0), 5);
    /// ```
    #[track_caller]
    fn view<const R: usize, const C: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> View<'_, Self, Const<R>, Const<C>> {
        match View::new(self, row, col, R, C) {
            Ok(view) => view,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns a read-only window with a runtime size.
    ///
    /// # Panics
    ///
    /// Panics if the window does not fit inside the expression.
    #[track_caller]
    fn view_dyn(
        &self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> View<'_, Self, Dynamic, Dynamic> {
        match View::new(self, row, col, rows, cols) {
            Ok(view) => view,
            Err(e) => panic!("{e}"),
        }
    }

    /// Evaluates the expression into owned storage.
    ///
    /// Expressions with a fully static shape evaluate into a stack [`Matrix`][crate::Matrix],
    /// all others into a heap [`MatrixN`].
    fn eval(&self) -> Owned<Self>
    where
        Self: Sized,
        (Self::Rows, Self::Cols): Allocate<Self::Elem>,
    {
        let mut out =
            <(Self::Rows, Self::Cols) as Allocate<Self::Elem>>::allocate(self.rows(), self.columns());
        algo::copy_cells(&mut out, self);
        out
    }

    /// Evaluates the expression into a heap-allocated [`MatrixN`], regardless of its shape.
    fn to_matrix_n(&self) -> MatrixN<Self::Elem>
    where
        Self: Sized,
        Self::Elem: Zero,
    {
        MatrixN::from_expr(self)
    }

    /// Returns the sum of the diagonal elements.
    ///
    /// Returns [`LinalgError::NotSquareMatrix`] if a dynamically-sized expression is not square.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), Ok(6));
    /// ```
    fn trace(&self) -> Result<Self::Elem>
    where
        Self: Sized,
        Self::Elem: Number,
        (Self::Rows, Self::Cols): Square,
    {
        algo::trace(self)
    }

    /// Computes the determinant through Gauss-Jordan elimination of a copy of `self`.
    ///
    /// Returns [`LinalgError::NotSquareMatrix`] if a dynamically-sized expression is not square.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let swap = Mat2d::from_rows([
    ///     [0.0, 1.0],
    ///     [1.0, 0.0],
    /// ]);
    /// assert_eq!(swap.determinant(), Ok(-1.0));
    /// ```
    fn determinant(&self) -> Result<Self::Elem>
    where
        Self: Sized,
        Self::Elem: Real,
        (Self::Rows, Self::Cols): Square + Allocate<Self::Elem>,
    {
        algo::determinant(self)
    }

    /// Computes the inverse by eliminating the augmented matrix `[self | I]`.
    ///
    /// Returns [`LinalgError::SingularMatrix`] if the magnitude of the pseudo-determinant found
    /// by the elimination is below [`Real::INVERSION_EPSILON`], and
    /// [`LinalgError::NotSquareMatrix`] if a dynamically-sized expression is not square.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mat = Mat2d::from_rows([
    ///     [2.0, 0.0],
    ///     [0.0, 4.0],
    /// ]);
    /// assert_eq!(mat.inverse()?, Matrix::from_diagonal([0.5, 0.25]));
    /// # Ok::<_, LinalgError>(())
    /// ```
    fn inverse(&self) -> Result<Owned<Self>>
    where
        Self: Sized,
        Self::Elem: Real,
        (Self::Rows, Self::Cols): Square + Allocate<Self::Elem>,
    {
        algo::inverse(self)
    }

    /// Returns an adapter that formats the expression one row per line.
    fn display(&self) -> DisplayExpr<'_, Self> {
        DisplayExpr(self)
    }
}

/// A [`MatrixExpr`] backed by writable storage.
pub trait MatrixMut: MatrixExpr {
    /// Returns a mutable reference to the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is out of bounds.
    fn element_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem;

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: Self::Elem) {
        *self.element_mut(row, col) = value;
    }

    /// Evaluates `expr` into `self`, calling [`MatrixExpr::element`] once per cell.
    ///
    /// `expr` cannot borrow `self` (the borrow checker rejects `a.assign(&a * &b)`). Products
    /// that read their own destination go through [`Matrix::postmultiply`] and
    /// [`Matrix::premultiply`], or `*=`.
    ///
    /// [`Matrix::postmultiply`]: crate::Matrix::postmultiply
    /// [`Matrix::premultiply`]: crate::Matrix::premultiply
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let a = Mat2::from_rows([[1, 2], [3, 4]]);
    /// let mut out = Mat2::ZERO;
    /// out.assign(a.transpose())?;
    /// assert_eq!(out, Matrix::from_rows([[1, 3], [2, 4]]));
    /// # Ok::<_, LinalgError>(())
    /// ```
    fn assign<E>(&mut self, expr: E) -> Result<()>
    where
        Self: Sized,
        E: MatrixExpr<Elem = Self::Elem>,
        Self::Rows: SameDim<E::Rows>,
        Self::Cols: SameDim<E::Cols>,
    {
        if self.shape() != expr.shape() {
            return Err(LinalgError::mismatch(
                "assignment",
                self.shape(),
                expr.shape(),
            ));
        }
        algo::copy_cells(self, &expr);
        Ok(())
    }

    /// Writes `values` into the matrix in row-major order.
    ///
    /// Excess values are ignored. If there are fewer values than cells, the remaining cells keep
    /// their previous contents.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mut mat = Mat2::IDENTITY;
    /// mat.fill_row_major([7, 8, 9]);
    /// assert_eq!(mat, Matrix::from_rows([[7, 8], [9, 1]]));
    /// ```
    fn fill_row_major<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Self::Elem>,
    {
        let cols = self.columns();
        let len = self.rows() * cols;
        for (index, value) in values.into_iter().take(len).enumerate() {
            *self.element_mut(index / cols, index % cols) = value;
        }
    }

    /// Returns an `R`x`C` read-write window into this matrix, starting at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the window does not fit inside the matrix.
    #[track_caller]
    fn view_mut<const R: usize, const C: usize>(
        &mut self,
        row: usize,
        col: usize,
    ) -> ViewMut<'_, Self, Const<R>, Const<C>> {
        match ViewMut::new(self, row, col, R, C) {
            Ok(view) => view,
            Err(e) => panic!("{e}"),
        }
    }

    /// Returns a read-write window with a runtime size.
    ///
    /// # Panics
    ///
    /// Panics if the window does not fit inside the matrix.
    #[track_caller]
    fn view_dyn_mut(
        &mut self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> ViewMut<'_, Self, Dynamic, Dynamic> {
        match ViewMut::new(self, row, col, rows, cols) {
            Ok(view) => view,
            Err(e) => panic!("{e}"),
        }
    }

    /// Swaps rows `a` and `b`.
    fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        algo::check_index(a, self.rows())?;
        algo::check_index(b, self.rows())?;
        algo::swap_rows(self, a, b);
        Ok(())
    }

    /// Multiplies every element of `row` by `factor`.
    fn scale_row(&mut self, row: usize, factor: Self::Elem) -> Result<()>
    where
        Self::Elem: Number,
    {
        algo::check_index(row, self.rows())?;
        algo::scale_row(self, row, factor);
        Ok(())
    }

    /// Replaces `target` with `target * target_factor + source * source_factor`.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mut mat = Mat2::from_rows([[1, 2], [3, 4]]);
    /// mat.combine_rows(1, 1, 0, -3)?;
    /// assert_eq!(mat, Matrix::from_rows([[1, 2], [0, -2]]));
    /// assert!(mat.combine_rows(2, 1, 0, 1).is_err());
    /// # Ok::<_, LinalgError>(())
    /// ```
    fn combine_rows(
        &mut self,
        target: usize,
        target_factor: Self::Elem,
        source: usize,
        source_factor: Self::Elem,
    ) -> Result<()>
    where
        Self::Elem: Number,
    {
        algo::check_index(target, self.rows())?;
        algo::check_index(source, self.rows())?;
        algo::combine_rows(self, target, target_factor, source, source_factor);
        Ok(())
    }

    /// Reduces `self` in place with Gauss-Jordan elimination and partial pivoting.
    ///
    /// Returns the signed pseudo-determinant: the product of all pivots, negated for an odd number
    /// of row swaps. For a square matrix this is its determinant. If a pivot column contains only
    /// zeros, elimination stops early and `0` is returned.
    ///
    /// Works on any shape; pivots are taken from columns `0..min(rows, columns)`.
    fn gauss_elimination(&mut self) -> Self::Elem
    where
        Self::Elem: Real,
    {
        algo::gauss_elimination(self)
    }
}

impl<E: MatrixExpr + ?Sized> MatrixExpr for &E {
    type Elem = E::Elem;
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn columns(&self) -> usize {
        (**self).columns()
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> Self::Elem {
        (**self).element(row, col)
    }
}

impl<E: MatrixExpr + ?Sized> MatrixExpr for &mut E {
    type Elem = E::Elem;
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> usize {
        (**self).rows()
    }

    #[inline]
    fn columns(&self) -> usize {
        (**self).columns()
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> Self::Elem {
        (**self).element(row, col)
    }
}

impl<M: MatrixMut + ?Sized> MatrixMut for &mut M {
    #[inline]
    fn element_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem {
        (**self).element_mut(row, col)
    }
}

/// Formats a [`MatrixExpr`] one row per line, with elements separated by spaces.
///
/// Returned by [`MatrixExpr::display`].
pub struct DisplayExpr<'a, E: ?Sized>(&'a E);

impl<'a, E> fmt::Display for DisplayExpr<'a, E>
where
    E: MatrixExpr + ?Sized,
    E::Elem: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.0.columns();
        for (row, col) in iproduct!(0..self.0.rows(), 0..cols) {
            if col != 0 {
                f.write_str(" ")?;
            }
            self.0.element(row, col).fmt(f)?;
            if col + 1 == cols {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Mat2, Mat2x3, Matrix, MatrixN};

    use super::*;

    #[test]
    fn reference_is_expression() {
        let mat = Mat2::from_rows([[1, 2], [3, 4]]);
        let r = &mat;
        assert_eq!(r.shape(), Shape::new(2, 2));
        assert_eq!((&r).element(1, 0), 3);
    }

    #[test]
    fn display() {
        let mat = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(mat.display().to_string(), "1 2 3\n4 5 6\n");
        assert_eq!(mat.transpose().display().to_string(), "1 4\n2 5\n3 6\n");
    }

    #[test]
    fn assign_mismatch() {
        let mut dst = MatrixN::<i32>::zeros(2, 2);
        let src = MatrixN::<i32>::zeros(3, 2);
        assert_eq!(
            dst.assign(&src),
            Err(LinalgError::mismatch(
                "assignment",
                Shape::new(2, 2),
                Shape::new(3, 2)
            ))
        );
    }

    #[test]
    fn fill_row_major() {
        let mut mat = Matrix::<i32, 2, 3>::ZERO;
        mat.fill_row_major(1..);
        assert_eq!(mat, Matrix::from_rows([[1, 2, 3], [4, 5, 6]]));

        let mut short = MatrixN::from_row_major(2, 2, [9, 9, 9, 9]);
        short.fill_row_major([1]);
        assert_eq!(short.as_slice(), &[1, 9, 9, 9]);
    }

    #[test]
    fn row_operations() {
        let mut mat = Mat2::from_rows([[1, 2], [3, 4]]);
        mat.swap_rows(0, 1).unwrap();
        assert_eq!(mat, Matrix::from_rows([[3, 4], [1, 2]]));
        mat.scale_row(1, 10).unwrap();
        assert_eq!(mat, Matrix::from_rows([[3, 4], [10, 20]]));

        assert_eq!(
            mat.swap_rows(0, 2),
            Err(LinalgError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            mat.scale_row(5, 1),
            Err(LinalgError::IndexOutOfRange { index: 5, len: 2 })
        );
    }
}
