use std::{
    array, fmt,
    mem::{self, ManuallyDrop, MaybeUninit},
};

use crate::{
    Const, MatrixExpr, MatrixMut, Number, One, Product, Result, SameDim, Trig, Vector, View,
    ViewMut, Zero,
};

mod ops;

/// A 1x1 matrix.
pub type Mat1<T> = Matrix<T, 1, 1>;
/// A 1x1 matrix with [`f32`] elements.
pub type Mat1f = Mat1<f32>;
/// A 1x1 matrix with [`f64`] elements.
pub type Mat1d = Mat1<f64>;
/// A 2x2 matrix.
pub type Mat2<T> = Matrix<T, 2, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A matrix with 2 rows and 3 columns.
pub type Mat2x3<T> = Matrix<T, 2, 3>;
/// A matrix with 2 rows and 4 columns.
pub type Mat2x4<T> = Matrix<T, 2, 4>;
/// A matrix with 3 rows and 2 columns.
pub type Mat3x2<T> = Matrix<T, 3, 2>;
/// A matrix with 3 rows and 4 columns.
pub type Mat3x4<T> = Matrix<T, 3, 4>;
/// A matrix with 4 rows and 2 columns.
pub type Mat4x2<T> = Matrix<T, 4, 2>;
/// A matrix with 4 rows and 3 columns.
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A stack-allocated, column-major matrix with `R` rows and `C` columns.
///
/// This is the fixed-size storage backend: its shape is part of its type, so adding a `Mat3` to a
/// `Mat2` fails to compile. For shapes only known at runtime, use [`MatrixN`][crate::MatrixN].
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] take the elements as nested arrays (or
///   arrays of [`Vector`]s).
/// - [`Matrix::from_row_major`] fills the matrix from a flat list of values, like an initializer
///   list; missing trailing values are zero.
/// - [`Matrix::from_fn`] invokes a closure with the row and column of each element.
/// - [`Matrix::from_diagonal`] builds a square matrix that is zero outside its diagonal.
/// - [`Matrix::from_expr`] evaluates any [`MatrixExpr`] of a compatible shape.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are the usual constants.
///
/// # Element Access
///
/// [`Matrix`] is indexed with `(row, column)` tuples, 0-based. Out-of-bounds indices panic, like
/// they do for slices; [`Matrix::get`] and [`Matrix::get_mut`] return [`Option`]s instead.
///
/// ```
/// # use tabula_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// # Arithmetic
///
/// Arithmetic on references builds lazy expressions (see [`MatrixExpr`]); the result is
/// materialized by [`MatrixExpr::eval`], [`Matrix::from_expr`] or [`MatrixMut::assign`]. A
/// matrix times a [`Vector`] by value is computed eagerly.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

/// Compile-time bounds check for [`Matrix::block`].
struct BlockBounds<
    const R: usize,
    const C: usize,
    const I: usize,
    const J: usize,
    const BR: usize,
    const BC: usize,
>;

impl<
        const R: usize,
        const C: usize,
        const I: usize,
        const J: usize,
        const BR: usize,
        const BC: usize,
    > BlockBounds<R, C, I, J, BR, BC>
{
    const VALID: () = assert!(I + BR <= R && J + BC <= C, "block exceeds matrix bounds");
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The smallest dimension of the matrix (`R` or `C`).
    const MIN_DIMENSION: usize = if R > C { C } else { R };

    /// Creates a new [`Matrix`] in which the elements are wrapped in [`MaybeUninit`].
    const fn new_uninit() -> Matrix<MaybeUninit<T>, R, C> {
        // Safety: `uninit` is a valid value for the `MaybeUninit<T>` elements
        unsafe { MaybeUninit::<Matrix<MaybeUninit<T>, R, C>>::uninit().assume_init() }
    }

    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        let mut out = Self::new_uninit();
        for (r, row) in rows.into_iter().enumerate() {
            for (c, elem) in row.into().into_array().into_iter().enumerate() {
                out.0[c][r] = MaybeUninit::new(elem);
            }
        }
        // Safety: the loop above writes to each element.
        unsafe { out.assume_init() }
    }

    /// Creates a [`Matrix`] from an array of columns.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the row and column of each element.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Creates a [`Matrix`] from values listed in row-major order.
    ///
    /// Values past the `R * C`th are ignored. If fewer values are given, the remaining elements
    /// are zero.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mat = Mat2x3::from_row_major([1, 2, 3, 4]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 0, 0],
    /// ]));
    /// ```
    pub fn from_row_major<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Zero,
    {
        let mut this = Self::ZERO;
        for (index, value) in values.into_iter().take(R * C).enumerate() {
            this[(index / C, index % C)] = value;
        }
        this
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mat = Matrix::from_rows([[0, 1, 2]]).map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([[0, 2, 4]]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(|v| f(v))))
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns the columns of the matrix.
    pub fn as_columns(&self) -> &[[T; R]; C] {
        &self.0
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` will be initialized with [`T::ZERO`][`Zero::ZERO`].
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2>
    where
        T: Zero,
    {
        Matrix::from_fn(|row, col| {
            if col < C && row < R {
                mem::replace(&mut self[(row, col)], T::ZERO)
            } else {
                T::ZERO
            }
        })
    }

    /// Returns a read-only `BR`x`BC` block of this matrix, starting at row `I` and column `J`.
    ///
    /// The block must fit inside the matrix, which is checked at compile time:
    ///
    /// ```compile_fail
    /// # use tabula_linalg::*;
    /// let mat = Mat3f::IDENTITY;
    /// let block = mat.block::<2, 2, 2, 2>();
    /// ```
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mat: Mat4<usize> = Matrix::from_fn(|row, col| row * 4 + col);
    /// let block = mat.block::<1, 2, 2, 2>().eval();
    /// assert_eq!(block, Matrix::from_rows([
    ///     [ 6,  7],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn block<const I: usize, const J: usize, const BR: usize, const BC: usize>(
        &self,
    ) -> View<'_, Self, Const<BR>, Const<BC>>
    where
        T: Copy,
    {
        #[allow(clippy::let_unit_value)]
        let () = BlockBounds::<R, C, I, J, BR, BC>::VALID;
        View::new_unchecked(self, I, J, BR, BC)
    }

    /// Returns a read-write `BR`x`BC` block of this matrix, starting at row `I` and column `J`.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mut mat = Mat3::<i32>::ZERO;
    /// mat.block_mut::<0, 2, 3, 1>().assign(vec3(1, 2, 3))?;
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 0, 1],
    ///     [0, 0, 2],
    ///     [0, 0, 3],
    /// ]));
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn block_mut<const I: usize, const J: usize, const BR: usize, const BC: usize>(
        &mut self,
    ) -> ViewMut<'_, Self, Const<BR>, Const<BC>>
    where
        T: Copy,
    {
        #[allow(clippy::let_unit_value)]
        let () = BlockBounds::<R, C, I, J, BR, BC>::VALID;
        ViewMut::new_unchecked(self, I, J, BR, BC)
    }

    /// Returns `self`, but with the element at `(row, col)` replaced with `elem`, without dropping
    /// the old element at that position.
    const fn with_leaky_elem(self, row: usize, col: usize, elem: T) -> Self {
        unsafe {
            // Leaks whatever was at `(col,row)` before.
            union UnWrapper<T, const R: usize, const C: usize> {
                wrapped: ManuallyDrop<Matrix<ManuallyDrop<T>, R, C>>,
                unwrapped: ManuallyDrop<Matrix<T, R, C>>,
            }

            let mut wrapped = ManuallyDrop::into_inner(
                UnWrapper {
                    unwrapped: ManuallyDrop::new(self),
                }
                .wrapped,
            );
            wrapped.0[col][row] = ManuallyDrop::new(elem);

            ManuallyDrop::into_inner(
                UnWrapper {
                    wrapped: ManuallyDrop::new(wrapped),
                }
                .unwrapped,
            )
        }
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Evaluates `expr` into a new [`Matrix`].
    ///
    /// # Panics
    ///
    /// Panics if a dynamically-sized `expr` does not have `R` rows and `C` columns. Use
    /// [`Matrix::try_from_expr`] to handle that case.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let heap = MatrixN::from_row_major(2, 2, [1, 2, 3, 4]);
    /// let mat: Mat2<i32> = Matrix::from_expr(&heap * 2);
    /// assert_eq!(mat, Matrix::from_rows([[2, 4], [6, 8]]));
    /// ```
    #[track_caller]
    pub fn from_expr<E>(expr: E) -> Self
    where
        E: MatrixExpr<Elem = T>,
        Const<R>: SameDim<E::Rows>,
        Const<C>: SameDim<E::Cols>,
    {
        match Self::try_from_expr(expr) {
            Ok(this) => this,
            Err(e) => panic!("{e}"),
        }
    }

    /// Evaluates `expr` into a new [`Matrix`], failing with
    /// [`LinalgError::ShapeMismatch`][crate::LinalgError::ShapeMismatch] if the shapes differ.
    pub fn try_from_expr<E>(expr: E) -> Result<Self>
    where
        E: MatrixExpr<Elem = T>,
        Const<R>: SameDim<E::Rows>,
        Const<C>: SameDim<E::Cols>,
    {
        let mut this = Self::ZERO;
        this.assign(expr)?;
        Ok(this)
    }
}

impl<T: Number, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Replaces `self` with `self * rhs`.
    ///
    /// The product is evaluated into a temporary first, since every one of its elements reads a
    /// full row of `self`. `rhs` has to be a `C`x`C` matrix.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mut mat = Mat2::from_rows([[1, 2], [3, 4]]);
    /// let swap = Mat2::from_rows([[0, 1], [1, 0]]);
    /// mat.postmultiply(&swap)?;
    /// assert_eq!(mat, Matrix::from_rows([[2, 1], [4, 3]]));
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn postmultiply<E>(&mut self, rhs: E) -> Result<()>
    where
        E: MatrixExpr<Elem = T>,
        Const<C>: SameDim<E::Rows> + SameDim<E::Cols>,
    {
        log::trace!("evaluating {R}x{C} postmultiplication through a temporary");
        let product = Self::try_from_expr(Product::new(&*self, rhs)?)?;
        *self = product;
        Ok(())
    }

    /// Replaces `self` with `lhs * self`.
    ///
    /// `lhs` has to be an `R`x`R` matrix.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mut mat = Mat2::from_rows([[1, 2], [3, 4]]);
    /// let swap = Mat2::from_rows([[0, 1], [1, 0]]);
    /// mat.premultiply(&swap)?;
    /// assert_eq!(mat, Matrix::from_rows([[3, 4], [1, 2]]));
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn premultiply<E>(&mut self, lhs: E) -> Result<()>
    where
        E: MatrixExpr<Elem = T>,
        E::Cols: SameDim<Const<R>>,
        Const<R>: SameDim<E::Rows>,
    {
        log::trace!("evaluating {R}x{C} premultiplication through a temporary");
        let product = Self::try_from_expr(Product::new(lhs, &*self)?)?;
        *self = product;
        Ok(())
    }
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = unsafe {
        // `[T::ZERO; N]` requires `T: Copy`, so the elements are written one by one.
        let mut mat = Self::new_uninit();
        let mut col = 0;
        while col < C {
            let mut row = 0;
            while row < R {
                mat.0[col][row] = MaybeUninit::new(T::ZERO);
                row += 1;
            }
            col += 1;
        }

        // Safety: the loop above has initialized every element.
        mat.assume_init()
    };
}

impl<T, const R: usize, const C: usize> Matrix<MaybeUninit<T>, R, C> {
    /// Removes the [`MaybeUninit`] wrapper from each matrix element.
    ///
    /// See [`MaybeUninit::assume_init`] for the safety invariant the caller needs to uphold.
    const unsafe fn assume_init(self) -> Matrix<T, R, C> {
        // Safety: `MaybeUninit<T>` and `T` have the same layout.
        union UnWrapper<T, const R: usize, const C: usize> {
            uninit: ManuallyDrop<Matrix<MaybeUninit<T>, R, C>>,
            init: ManuallyDrop<Matrix<T, R, C>>,
        }

        ManuallyDrop::into_inner(
            UnWrapper {
                uninit: ManuallyDrop::new(self),
            }
            .init,
        )
    }
}

impl<T: Zero + One, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The identity matrix: 1 on the diagonal, 0 everywhere else.
    ///
    /// Non-square identity matrices have ones on their leading diagonal.
    pub const IDENTITY: Self = {
        let mut this = Self::ZERO;
        let mut i = 0;
        while i < Self::MIN_DIMENSION {
            this = this.with_leaky_elem(i, i, T::ONE);
            i += 1;
        }
        this
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.into_diagonal(), [1, 4]);
    /// ```
    pub fn into_diagonal(self) -> Vector<T, N>
    where
        T: Copy,
    {
        array::from_fn(|i| self[(i, i)]).into()
    }

    /// Creates a square matrix from its diagonal, with zeroes everywhere else.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        let mut this = Self::ZERO;
        for (i, elem) in diag.into().into_array().into_iter().enumerate() {
            this[(i, i)] = elem;
        }
        this
    }
}

impl<T: Number + Trig> Matrix<T, 2, 2> {
    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    pub fn rotation_counterclockwise(radians: T) -> Self {
        Self::from_columns([
            [radians.cos(), radians.sin()],
            [-radians.sin(), radians.cos()],
        ])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Rows stay on one line, even with `{:#?}`.
                f.write_str("[")?;
                for col in 0..C {
                    if col != 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                f.write_str("]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C>
where
    T: fmt::Display + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(), f)
    }
}

impl<T: Copy, const R: usize, const C: usize> MatrixExpr for Matrix<T, R, C> {
    type Elem = T;
    type Rows = Const<R>;
    type Cols = Const<C>;

    #[inline]
    fn rows(&self) -> usize {
        R
    }

    #[inline]
    fn columns(&self) -> usize {
        C
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        self[(row, col)]
    }
}

impl<T: Copy, const R: usize, const C: usize> MatrixMut for Matrix<T, R, C> {
    #[inline]
    fn element_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[(row, col)]
    }
}
