//! Windows into other expressions.

use std::marker::PhantomData;

use crate::{ops::impl_expr_ops, Dim, LinalgError, MatrixExpr, MatrixMut, Result, Shape};

/// Checks that the window `start..start + len` fits into `0..total`.
fn check_window(start: usize, len: usize, total: usize) -> Result<()> {
    match start.checked_add(len) {
        Some(end) if end <= total => Ok(()),
        Some(end) if len != 0 => Err(LinalgError::IndexOutOfRange {
            index: end - 1,
            len: total,
        }),
        _ => Err(LinalgError::IndexOutOfRange {
            index: start,
            len: total,
        }),
    }
}

/// Validates a `rows`x`cols` window at `(row, col)` into `subject`.
fn check_view<E, R, C>(subject: &E, row: usize, col: usize, rows: usize, cols: usize) -> Result<()>
where
    E: MatrixExpr + ?Sized,
    R: Dim,
    C: Dim,
{
    let expected = Shape::new(R::STATIC.unwrap_or(rows), C::STATIC.unwrap_or(cols));
    if expected != Shape::new(rows, cols) {
        return Err(LinalgError::mismatch("view", expected, Shape::new(rows, cols)));
    }
    check_window(row, rows, subject.rows())?;
    check_window(col, cols, subject.columns())
}

/// A read-only rectangular window into another expression.
///
/// Element `(i, j)` of the view is element `(row + i, col + j)` of the subject. The size of the
/// window is either static (`R`, `C` are [`Const`][crate::Const]) or [`Dynamic`][crate::Dynamic].
///
/// ```
/// # use tabula_linalg::*;
/// let mat = Mat3::from_fn(|row, col| row * 3 + col);
/// let view = View::<_, Const<2>, Const<2>>::new(&mat, 1, 1, 2, 2)?;
/// assert_eq!(view.eval(), Matrix::from_rows([[4, 5], [7, 8]]));
///
/// assert!(View::<_, Const<2>, Const<2>>::new(&mat, 2, 0, 2, 2).is_err());
/// # Ok::<_, LinalgError>(())
/// ```
#[derive(Debug)]
pub struct View<'a, E: ?Sized, R, C> {
    subject: &'a E,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    _dims: PhantomData<(R, C)>,
}

impl<'a, E: ?Sized, R, C> Clone for View<'a, E, R, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E: ?Sized, R, C> Copy for View<'a, E, R, C> {}

impl<'a, E, R, C> View<'a, E, R, C>
where
    E: MatrixExpr + ?Sized,
    R: Dim,
    C: Dim,
{
    /// Creates a `rows`x`cols` view into `subject`, starting at `(row, col)`.
    ///
    /// Returns [`LinalgError::IndexOutOfRange`] if the window does not fit inside `subject`, and
    /// [`LinalgError::ShapeMismatch`] if `rows`/`cols` contradict a static `R`/`C`.
    pub fn new(subject: &'a E, row: usize, col: usize, rows: usize, cols: usize) -> Result<Self> {
        check_view::<E, R, C>(subject, row, col, rows, cols)?;
        Ok(Self::new_unchecked(subject, row, col, rows, cols))
    }

    /// Creates a view whose bounds have already been validated.
    pub(crate) fn new_unchecked(
        subject: &'a E,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            subject,
            row,
            col,
            rows,
            cols,
            _dims: PhantomData,
        }
    }

    /// Returns the `(row, column)` position of the view's top left corner in the subject.
    pub fn offset(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<'a, E, R, C> MatrixExpr for View<'a, E, R, C>
where
    E: MatrixExpr + ?Sized,
    R: Dim,
    C: Dim,
{
    type Elem = E::Elem;
    type Rows = R;
    type Cols = C;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn columns(&self) -> usize {
        self.cols
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> Self::Elem {
        debug_assert!(row < self.rows && col < self.cols);
        self.subject.element(self.row + row, self.col + col)
    }
}

/// A read-write rectangular window into a matrix.
///
/// Writes through the view go straight to the subject's storage.
///
/// ```
/// # use tabula_linalg::*;
/// let mut mat = Mat3::<i32>::ZERO;
/// let mut corner = mat.view_mut::<2, 2>(1, 1);
/// corner.assign(Mat2::IDENTITY)?;
/// corner.set(0, 1, 7);
/// assert_eq!(mat, Matrix::from_rows([
///     [0, 0, 0],
///     [0, 1, 7],
///     [0, 0, 1],
/// ]));
/// # Ok::<_, LinalgError>(())
/// ```
#[derive(Debug)]
pub struct ViewMut<'a, M: ?Sized, R, C> {
    subject: &'a mut M,
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
    _dims: PhantomData<(R, C)>,
}

impl<'a, M, R, C> ViewMut<'a, M, R, C>
where
    M: MatrixMut + ?Sized,
    R: Dim,
    C: Dim,
{
    /// Creates a `rows`x`cols` read-write view into `subject`, starting at `(row, col)`.
    ///
    /// Fails under the same conditions as [`View::new`].
    pub fn new(
        subject: &'a mut M,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Result<Self> {
        check_view::<M, R, C>(subject, row, col, rows, cols)?;
        Ok(Self::new_unchecked(subject, row, col, rows, cols))
    }

    pub(crate) fn new_unchecked(
        subject: &'a mut M,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Self {
        Self {
            subject,
            row,
            col,
            rows,
            cols,
            _dims: PhantomData,
        }
    }

    pub fn offset(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Reborrows this view as a read-only [`View`].
    pub fn as_view(&self) -> View<'_, M, R, C> {
        View::new_unchecked(self.subject, self.row, self.col, self.rows, self.cols)
    }
}

impl<'a, M, R, C> MatrixExpr for ViewMut<'a, M, R, C>
where
    M: MatrixMut + ?Sized,
    R: Dim,
    C: Dim,
{
    type Elem = M::Elem;
    type Rows = R;
    type Cols = C;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn columns(&self) -> usize {
        self.cols
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> Self::Elem {
        debug_assert!(row < self.rows && col < self.cols);
        self.subject.element(self.row + row, self.col + col)
    }
}

impl<'a, M, R, C> MatrixMut for ViewMut<'a, M, R, C>
where
    M: MatrixMut + ?Sized,
    R: Dim,
    C: Dim,
{
    #[inline]
    fn element_mut(&mut self, row: usize, col: usize) -> &mut Self::Elem {
        assert!(
            row < self.rows && col < self.cols,
            "view index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        self.subject.element_mut(self.row + row, self.col + col)
    }
}

impl_expr_ops!(['a, E: ?Sized, R, C,] View<'a, E, R, C>);
impl_expr_ops!(['a, 'b, M: ?Sized, R, C,] &'b ViewMut<'a, M, R, C>);
