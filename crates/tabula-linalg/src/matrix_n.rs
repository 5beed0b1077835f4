//! The heap-allocated storage backend.

use std::{
    fmt,
    ops::{AddAssign, Index, IndexMut, MulAssign, SubAssign},
};

use crate::{
    approx::ApproxEq, ops::impl_expr_ops, Dynamic, LinalgError, MatrixExpr, MatrixMut, Number,
    One, Product, Result, SameDim, Shape, Zero,
};

/// A heap-allocated matrix whose shape is only known at runtime.
///
/// Elements are stored in one row-major [`Vec`]. The buffer is owned exclusively: [`Clone`]
/// deep-copies it, and [`std::mem::take`] moves it out, leaving an empty 0x0 matrix behind.
///
/// [`MatrixN`] takes part in expressions just like [`Matrix`][crate::Matrix] does, but its
/// dimensions are [`Dynamic`], so shape mismatches are detected at runtime: operators panic, and
/// the `new` constructors of the nodes (eg. [`Sum::new`][crate::Sum::new]) return an error.
///
/// ```
/// # use tabula_linalg::*;
/// let a = MatrixN::from_row_major(2, 3, [
///     1, 2, 3,
///     4, 5, 6,
/// ]);
/// let b = MatrixN::from_fn(3, 1, |row, _| row as i32);
/// let c = MatrixN::from_expr(&a * &b);
/// assert_eq!(c.shape(), Shape::new(2, 1));
/// assert_eq!(c.as_slice(), &[8, 17]);
/// ```
#[derive(Clone, Default, Hash, PartialEq, Eq)]
pub struct MatrixN<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> MatrixN<T> {
    /// Creates a `rows`x`cols` matrix with every element set to 0.
    pub fn zeros(rows: usize, cols: usize) -> Self
    where
        T: Zero + Clone,
    {
        Self {
            data: vec![T::ZERO; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Self
    where
        T: Zero + One + Clone,
    {
        let mut this = Self::zeros(n, n);
        for i in 0..n {
            this[(i, i)] = T::ONE;
        }
        this
    }

    /// Creates a `rows`x`cols` matrix from values in row-major order.
    ///
    /// Excess values are ignored, and missing values are zero.
    pub fn from_row_major<I>(rows: usize, cols: usize, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Zero + Clone,
    {
        let len = rows * cols;
        let mut data: Vec<T> = values.into_iter().take(len).collect();
        data.resize(len, T::ZERO);
        Self { data, rows, cols }
    }

    /// Creates a `rows`x`cols` matrix by invoking a closure with the position of each element.
    pub fn from_fn<F>(rows: usize, cols: usize, mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let data = (0..rows * cols).map(|i| cb(i / cols, i % cols)).collect();
        Self { data, rows, cols }
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Returns `true` if the matrix has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the current buffer can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns the elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            self.data.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Changes the shape of the matrix to `rows`x`cols` and resets every element to zero.
    ///
    /// The buffer is only reallocated when the new element count exceeds [`MatrixN::capacity`];
    /// shrinking keeps the existing allocation around (see [`MatrixN::shrink_to_fit`]).
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mut mat = MatrixN::<f32>::zeros(4, 4);
    /// let capacity = mat.capacity();
    /// mat.resize(2, 3);
    /// assert_eq!(mat.shape(), Shape::new(2, 3));
    /// assert_eq!(mat.capacity(), capacity);
    /// ```
    pub fn resize(&mut self, rows: usize, cols: usize)
    where
        T: Zero + Clone,
    {
        let len = rows * cols;
        if len > self.data.capacity() {
            log::trace!(
                "reallocating {}x{} matrix buffer for {rows}x{cols}",
                self.rows,
                self.cols
            );
            self.data = Vec::with_capacity(len);
        }
        self.data.clear();
        self.data.resize(len, T::ZERO);
        self.rows = rows;
        self.cols = cols;
    }

    /// Releases unused capacity of the buffer.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Consumes the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Zero + Copy> MatrixN<T> {
    /// Evaluates `expr` into a new matrix of the same shape.
    ///
    /// Never fails: the shape of the result is taken from `expr`.
    pub fn from_expr<E>(expr: E) -> Self
    where
        E: MatrixExpr<Elem = T>,
    {
        Self::from_fn(expr.rows(), expr.columns(), |row, col| expr.element(row, col))
    }
}

impl<T: Number> MatrixN<T> {
    /// Replaces `self` with `self * rhs`, reusing the buffer of `self`.
    ///
    /// The product is evaluated into a temporary first. `rhs` must be square, with as many rows
    /// as `self` has columns.
    pub fn postmultiply<E>(&mut self, rhs: E) -> Result<()>
    where
        E: MatrixExpr<Elem = T>,
        Dynamic: SameDim<E::Rows>,
    {
        if rhs.columns() != self.cols {
            return Err(LinalgError::mismatch(
                "multiplication",
                self.shape(),
                rhs.shape(),
            ));
        }
        let product = Product::new(&*self, rhs)?;
        log::trace!(
            "evaluating {} postmultiplication through a temporary",
            product.shape()
        );
        let tmp = Self::from_expr(product);
        self.data.copy_from_slice(&tmp.data);
        Ok(())
    }

    /// Replaces `self` with `lhs * self`, reusing the buffer of `self`.
    ///
    /// `lhs` must be square, with as many columns as `self` has rows.
    pub fn premultiply<E>(&mut self, lhs: E) -> Result<()>
    where
        E: MatrixExpr<Elem = T>,
        E::Cols: SameDim<Dynamic>,
    {
        if lhs.rows() != self.rows {
            return Err(LinalgError::mismatch(
                "multiplication",
                lhs.shape(),
                self.shape(),
            ));
        }
        let product = Product::new(lhs, &*self)?;
        log::trace!(
            "evaluating {} premultiplication through a temporary",
            product.shape()
        );
        let tmp = Self::from_expr(product);
        self.data.copy_from_slice(&tmp.data);
        Ok(())
    }
}

impl<T> Index<(usize, usize)> for MatrixN<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for MatrixN<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl<T: Copy> MatrixExpr for MatrixN<T> {
    type Elem = T;
    type Rows = Dynamic;
    type Cols = Dynamic;

    #[inline]
    fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    fn columns(&self) -> usize {
        self.cols
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

impl<T: Copy> MatrixMut for MatrixN<T> {
    #[inline]
    fn element_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }
}

macro_rules! elementwise_assign {
    ($trait:ident, $method:ident, $op:tt, $desc:literal) => {
        impl<T, Rhs> $trait<Rhs> for MatrixN<T>
        where
            T: Number,
            Rhs: MatrixExpr<Elem = T>,
        {
            #[track_caller]
            fn $method(&mut self, rhs: Rhs) {
                if self.shape() != rhs.shape() {
                    panic!("{}", LinalgError::mismatch($desc, self.shape(), rhs.shape()));
                }
                let cols = self.cols;
                for (i, elem) in self.data.iter_mut().enumerate() {
                    *elem = *elem $op rhs.element(i / cols, i % cols);
                }
            }
        }
    };
}

elementwise_assign!(AddAssign, add_assign, +, "addition");
elementwise_assign!(SubAssign, sub_assign, -, "subtraction");

impl<T, Rhs> MulAssign<Rhs> for MatrixN<T>
where
    T: Number,
    Rhs: MatrixExpr<Elem = T>,
    Dynamic: SameDim<Rhs::Rows>,
{
    #[track_caller]
    fn mul_assign(&mut self, rhs: Rhs) {
        if let Err(e) = self.postmultiply(rhs) {
            panic!("{e}");
        }
    }
}

impl<T: ApproxEq> ApproxEq for MatrixN<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.shape() == other.shape()
            && (self.data.iter())
                .zip(&other.data)
                .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance.clone()))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.shape() == other.shape()
            && (self.data.iter())
                .zip(&other.data)
                .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance.clone()))
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.shape() == other.shape()
            && (self.data.iter())
                .zip(&other.data)
                .all(|(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<T: fmt::Debug> fmt::Debug for MatrixN<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        if self.cols != 0 {
            for row in self.data.chunks(self.cols) {
                list.entry(&row);
            }
        }
        list.finish()
    }
}

impl<T: fmt::Display + Copy> fmt::Display for MatrixN<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(), f)
    }
}

impl_expr_ops!(['a, T,] &'a MatrixN<T>);

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, Mat2, Matrix};

    use super::*;

    #[test]
    fn constructors() {
        let id = MatrixN::<i32>::identity(3);
        assert_eq!(id.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
        assert_eq!(MatrixN::from_expr(Mat2::<i32>::IDENTITY), MatrixN::identity(2));

        let short = MatrixN::from_row_major(2, 2, [1, 2, 3]);
        assert_eq!(short.as_slice(), &[1, 2, 3, 0]);
        let long = MatrixN::from_row_major(1, 2, [1, 2, 3]);
        assert_eq!(long.as_slice(), &[1, 2]);

        let empty = MatrixN::<f64>::default();
        assert!(empty.is_empty());
        assert_eq!(empty.shape(), Shape::new(0, 0));
    }

    #[test]
    fn indexing() {
        let mut mat = MatrixN::from_fn(2, 3, |row, col| row * 3 + col);
        assert_eq!(mat[(1, 2)], 5);
        mat[(0, 1)] = 10;
        assert_eq!(mat.get(0, 1), Some(&10));
        assert_eq!(mat.get(0, 3), None);
        assert_eq!(mat.get(2, 0), None);
        *mat.get_mut(1, 0).unwrap() = 7;
        assert_eq!(mat.as_slice(), &[0, 10, 2, 7, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "out of bounds for 2x2 matrix")]
    fn index_out_of_range() {
        let mat = MatrixN::<i32>::zeros(2, 2);
        let _ = mat[(0, 2)];
    }

    #[test]
    fn resize() {
        let mut mat = MatrixN::from_row_major(3, 3, 1..);
        let capacity = mat.capacity();

        mat.resize(2, 2);
        assert_eq!(mat.as_slice(), &[0, 0, 0, 0]);
        assert_eq!(mat.capacity(), capacity);

        mat.resize(4, 4);
        assert_eq!(mat.shape(), Shape::new(4, 4));
        assert!(mat.capacity() >= 16);

        mat.resize(1, 1);
        mat.shrink_to_fit();
        assert!(mat.capacity() < 16);
    }

    #[test]
    fn take_and_clone() {
        let mut mat = MatrixN::from_row_major(2, 2, [1, 2, 3, 4]);
        let copy = mat.clone();
        let moved = std::mem::take(&mut mat);
        assert!(mat.is_empty());
        assert_eq!(moved, copy);
        assert_eq!(moved.into_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn in_place_products() {
        let mut mat = MatrixN::from_row_major(2, 2, [1, 2, 3, 4]);
        let orig = mat.clone();
        mat *= &orig;
        assert_eq!(mat.as_slice(), &[7, 10, 15, 22]);

        let swap = Mat2::from_rows([[0, 1], [1, 0]]);
        mat.premultiply(&swap).unwrap();
        assert_eq!(mat.as_slice(), &[15, 22, 7, 10]);

        let wide = MatrixN::<i32>::zeros(2, 3);
        assert_eq!(
            mat.postmultiply(&wide),
            Err(LinalgError::mismatch(
                "multiplication",
                Shape::new(2, 2),
                Shape::new(2, 3)
            ))
        );
        assert!(mat.premultiply(&wide).is_err());
    }

    #[test]
    fn add_sub_assign() {
        let mut mat = MatrixN::from_row_major(2, 2, [1.0, 2.0, 3.0, 4.0]);
        mat += Matrix::from_rows([[1.0, 1.0], [1.0, 1.0]]);
        mat -= &MatrixN::identity(2);
        assert_approx_eq!(mat.as_slice(), &[1.0, 3.0, 4.0, 4.0][..]);
    }

    #[test]
    #[should_panic(expected = "shape mismatch in addition: 2x2 vs 3x3")]
    fn add_assign_mismatch() {
        let mut mat = MatrixN::<f32>::zeros(2, 2);
        mat += MatrixN::<f32>::identity(3);
    }

    #[test]
    fn approx() {
        let a = MatrixN::from_row_major(1, 2, [1.0f32, 2.0]);
        let b = MatrixN::from_row_major(1, 2, [1.0f32, 2.000001]);
        assert_approx_eq!(a, b).abs(1e-5);
        assert!(!a.abs_diff_eq(&MatrixN::zeros(2, 1), 1.0));
    }

    #[test]
    fn fmt() {
        let mat = MatrixN::from_row_major(2, 2, [1, 2, 3, 4]);
        assert_eq!(format!("{mat:?}"), "[[1, 2], [3, 4]]");
        assert_eq!(mat.to_string(), "1 2\n3 4\n");
        assert_eq!(format!("{:?}", MatrixN::<u8>::default()), "[]");
    }
}
