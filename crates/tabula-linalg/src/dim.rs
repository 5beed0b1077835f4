//! Type-level matrix dimensions.
//!
//! Every [`MatrixExpr`] carries its row and column count in its type, either as a [`Const`]
//! (known at compile time) or as [`Dynamic`] (only known at runtime). Binary operations combine
//! the dimensions of their operands through [`SameDim`]: two different [`Const`] dimensions have
//! no combination, which turns a statically-known shape mismatch into a type error.
//!
//! ```compile_fail
//! # use tabula_linalg::*;
//! let a = Mat3f::IDENTITY;
//! let b = Mat2f::IDENTITY;
//! let sum = &a + &b; // 3x3 + 2x2 does not type-check
//! ```

use std::fmt;

use crate::{Matrix, MatrixExpr, MatrixMut, MatrixN, Zero};

/// A matrix dimension, either fixed at compile time or dynamic.
pub trait Dim: Copy + Default + fmt::Debug + 'static {
    /// The dimension, if it is known at compile time.
    const STATIC: Option<usize>;
}

/// A dimension of size `N`, known at compile time.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

/// A dimension whose size is only known at runtime.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
pub struct Dynamic;

impl<const N: usize> Dim for Const<N> {
    const STATIC: Option<usize> = Some(N);
}

impl Dim for Dynamic {
    const STATIC: Option<usize> = None;
}

/// Dimensions that may be equal to `D`.
///
/// `Output` is the dimension of the result. Whenever either side is [`Dynamic`], the result is
/// [`Dynamic`] too and the sizes are compared at runtime instead.
pub trait SameDim<D: Dim>: Dim {
    type Output: Dim;
}

impl<const N: usize> SameDim<Const<N>> for Const<N> {
    type Output = Const<N>;
}
impl<const N: usize> SameDim<Dynamic> for Const<N> {
    type Output = Dynamic;
}
impl<const N: usize> SameDim<Const<N>> for Dynamic {
    type Output = Dynamic;
}
impl SameDim<Dynamic> for Dynamic {
    type Output = Dynamic;
}

/// `(rows, columns)` dimension pairs that may describe a square matrix.
///
/// Not implemented for two distinct [`Const`] dimensions, so square-only algorithms cannot be
/// called on a non-square stack matrix. Pairs involving [`Dynamic`] are checked at runtime.
pub trait Square {}

impl<const N: usize> Square for (Const<N>, Const<N>) {}
impl<const N: usize> Square for (Const<N>, Dynamic) {}
impl<const N: usize> Square for (Dynamic, Const<N>) {}
impl Square for (Dynamic, Dynamic) {}

/// The runtime `(rows, columns)` pair of a matrix expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Number of elements of a matrix with this shape.
    pub const fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Maps a `(rows, columns)` dimension pair to owned storage of that shape.
///
/// Fully static shapes are stored in a stack [`Matrix`], everything else in a heap [`MatrixN`].
pub trait Allocate<T> {
    type Buffer: MatrixMut<Elem = T> + Clone + fmt::Debug;

    /// Creates a zero-filled buffer of the given runtime shape.
    ///
    /// For static dimensions, the arguments must match the compile-time dimensions.
    fn allocate(rows: usize, cols: usize) -> Self::Buffer;
}

impl<T, const R: usize, const C: usize> Allocate<T> for (Const<R>, Const<C>)
where
    T: Zero + Copy + fmt::Debug,
{
    type Buffer = Matrix<T, R, C>;

    fn allocate(rows: usize, cols: usize) -> Self::Buffer {
        debug_assert_eq!((rows, cols), (R, C));
        Matrix::ZERO
    }
}

impl<T, const R: usize> Allocate<T> for (Const<R>, Dynamic)
where
    T: Zero + Copy + fmt::Debug,
{
    type Buffer = MatrixN<T>;

    fn allocate(rows: usize, cols: usize) -> Self::Buffer {
        MatrixN::zeros(rows, cols)
    }
}

impl<T, const C: usize> Allocate<T> for (Dynamic, Const<C>)
where
    T: Zero + Copy + fmt::Debug,
{
    type Buffer = MatrixN<T>;

    fn allocate(rows: usize, cols: usize) -> Self::Buffer {
        MatrixN::zeros(rows, cols)
    }
}

impl<T> Allocate<T> for (Dynamic, Dynamic)
where
    T: Zero + Copy + fmt::Debug,
{
    type Buffer = MatrixN<T>;

    fn allocate(rows: usize, cols: usize) -> Self::Buffer {
        MatrixN::zeros(rows, cols)
    }
}

/// The owned matrix type an expression `E` evaluates into.
pub type Owned<E> = <(<E as MatrixExpr>::Rows, <E as MatrixExpr>::Cols) as Allocate<
    <E as MatrixExpr>::Elem,
>>::Buffer;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statics() {
        assert_eq!(Const::<3>::STATIC, Some(3));
        assert_eq!(Dynamic::STATIC, None);
        assert_eq!(<Const<2> as SameDim<Const<2>>>::Output::STATIC, Some(2));
        assert_eq!(<Const<2> as SameDim<Dynamic>>::Output::STATIC, None);
    }

    #[test]
    fn shape() {
        let shape = Shape::new(2, 3);
        assert_eq!(shape.to_string(), "2x3");
        assert_eq!(shape.len(), 6);
        assert!(!shape.is_square());
        assert!(Shape::new(0, 0).is_empty());
    }

    #[test]
    fn allocate() {
        let stack = <(Const<2>, Const<2>) as Allocate<f32>>::allocate(2, 2);
        assert_eq!(stack, Matrix::<f32, 2, 2>::ZERO);

        let heap = <(Dynamic, Const<3>) as Allocate<f64>>::allocate(4, 3);
        assert_eq!(heap.shape(), Shape::new(4, 3));
    }
}
