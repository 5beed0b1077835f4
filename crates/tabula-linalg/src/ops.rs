//! Lazy operation nodes and the operator overloads that build them.
//!
//! Every node stores its operands and computes elements on demand; nothing is materialized until
//! the expression is assigned somewhere. Operators are implemented for references to the storage
//! types (`&Matrix`, `&MatrixN`, `&Vector`), for views, and for the nodes themselves, so chains
//! like `&a + &b * &c` build a tree without intermediate storage.
//!
//! Operators cannot return a [`Result`]; if runtime dimensions disagree they panic with the
//! [`LinalgError::ShapeMismatch`] message. The `new` constructors of the nodes are the fallible
//! equivalents.

use std::ops;

use crate::{LinalgError, MatrixExpr, Number, Result, SameDim, Zero};

macro_rules! elementwise_node {
    ($(#[$attr:meta])* $name:ident, $op:ident, $method:ident, $desc:literal) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug)]
        pub struct $name<L, R> {
            lhs: L,
            rhs: R,
        }

        impl<L, R> $name<L, R>
        where
            L: MatrixExpr,
            R: MatrixExpr<Elem = L::Elem>,
            L::Rows: SameDim<R::Rows>,
            L::Cols: SameDim<R::Cols>,
        {
            /// Creates the node, checking that both operands have the same shape.
            pub fn new(lhs: L, rhs: R) -> Result<Self> {
                if lhs.shape() != rhs.shape() {
                    return Err(LinalgError::mismatch($desc, lhs.shape(), rhs.shape()));
                }
                Ok(Self { lhs, rhs })
            }
        }

        impl<L, R> $name<L, R> {
            pub fn into_operands(self) -> (L, R) {
                (self.lhs, self.rhs)
            }
        }

        impl<L, R> MatrixExpr for $name<L, R>
        where
            L: MatrixExpr,
            R: MatrixExpr<Elem = L::Elem>,
            L::Elem: ops::$op<Output = L::Elem>,
            L::Rows: SameDim<R::Rows>,
            L::Cols: SameDim<R::Cols>,
        {
            type Elem = L::Elem;
            type Rows = <L::Rows as SameDim<R::Rows>>::Output;
            type Cols = <L::Cols as SameDim<R::Cols>>::Output;

            #[inline]
            fn rows(&self) -> usize {
                self.lhs.rows()
            }

            #[inline]
            fn columns(&self) -> usize {
                self.lhs.columns()
            }

            #[inline]
            fn element(&self, row: usize, col: usize) -> Self::Elem {
                ops::$op::$method(self.lhs.element(row, col), self.rhs.element(row, col))
            }
        }
    };
}

elementwise_node!(
    /// Lazy element-wise sum of two expressions of the same shape.
    Sum, Add, add, "addition"
);
elementwise_node!(
    /// Lazy element-wise difference of two expressions of the same shape.
    Difference, Sub, sub, "subtraction"
);

/// Lazy matrix product.
///
/// Elements are not cached: every call to [`MatrixExpr::element`] recomputes the full inner
/// product over the shared dimension. Evaluate the product once (via [`MatrixExpr::eval`] or an
/// assignment) before reading its elements repeatedly.
///
/// ```
/// # use tabula_linalg::*;
/// let a = Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]);
/// let b = Mat3x2::from_rows([[1, 0], [0, 1], [1, 1]]);
/// let product = Product::new(&a, &b)?;
/// assert_eq!(product.shape(), Shape::new(2, 2));
/// assert_eq!(product.element(1, 1), 11);
/// # Ok::<_, LinalgError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Product<L, R> {
    lhs: L,
    rhs: R,
}

impl<L, R> Product<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Cols: SameDim<R::Rows>,
{
    /// Creates the node, checking that the columns of `lhs` match the rows of `rhs`.
    pub fn new(lhs: L, rhs: R) -> Result<Self> {
        if lhs.columns() != rhs.rows() {
            return Err(LinalgError::mismatch(
                "multiplication",
                lhs.shape(),
                rhs.shape(),
            ));
        }
        Ok(Self { lhs, rhs })
    }
}

impl<L, R> Product<L, R> {
    pub fn into_operands(self) -> (L, R) {
        (self.lhs, self.rhs)
    }
}

impl<L, R> MatrixExpr for Product<L, R>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Elem: Number,
    L::Cols: SameDim<R::Rows>,
{
    type Elem = L::Elem;
    type Rows = L::Rows;
    type Cols = R::Cols;

    #[inline]
    fn rows(&self) -> usize {
        self.lhs.rows()
    }

    #[inline]
    fn columns(&self) -> usize {
        self.rhs.columns()
    }

    fn element(&self, row: usize, col: usize) -> Self::Elem {
        (0..self.lhs.columns()).fold(L::Elem::ZERO, |acc, k| {
            acc + self.lhs.element(row, k) * self.rhs.element(k, col)
        })
    }
}

/// Lazy product of an expression and a scalar.
///
/// Also produced by negation (scaling by `-1`) and by division by a scalar (scaling by its
/// reciprocal).
#[derive(Clone, Copy, Debug)]
pub struct Scaled<E: MatrixExpr> {
    expr: E,
    factor: E::Elem,
}

impl<E: MatrixExpr> Scaled<E> {
    pub fn new(expr: E, factor: E::Elem) -> Self {
        Self { expr, factor }
    }

    pub fn factor(&self) -> E::Elem {
        self.factor
    }
}

impl<E> MatrixExpr for Scaled<E>
where
    E: MatrixExpr,
    E::Elem: ops::Mul<Output = E::Elem>,
{
    type Elem = E::Elem;
    type Rows = E::Rows;
    type Cols = E::Cols;

    #[inline]
    fn rows(&self) -> usize {
        self.expr.rows()
    }

    #[inline]
    fn columns(&self) -> usize {
        self.expr.columns()
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> Self::Elem {
        self.expr.element(row, col) * self.factor
    }
}

/// Lazy transpose: swaps the row and column of every access.
#[derive(Clone, Copy, Debug)]
pub struct Transpose<E> {
    expr: E,
}

impl<E> Transpose<E> {
    pub fn new(expr: E) -> Self {
        Self { expr }
    }

    /// Returns the transposed expression.
    pub fn into_inner(self) -> E {
        self.expr
    }
}

impl<E: MatrixExpr> MatrixExpr for Transpose<E> {
    type Elem = E::Elem;
    type Rows = E::Cols;
    type Cols = E::Rows;

    #[inline]
    fn rows(&self) -> usize {
        self.expr.columns()
    }

    #[inline]
    fn columns(&self) -> usize {
        self.expr.rows()
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> Self::Elem {
        self.expr.element(col, row)
    }
}

/// Implements `+`, `-`, `*` (with another expression), unary `-`, and `*`/`/` with a scalar for
/// an expression type.
///
/// Generic parameters of the type are passed in brackets, each followed by a comma.
macro_rules! impl_expr_ops {
    ([$($g:tt)*] $ty:ty) => {
        impl<$($g)* Rhs> ::std::ops::Add<Rhs> for $ty
        where
            Self: $crate::MatrixExpr,
            Rhs: $crate::MatrixExpr<Elem = <Self as $crate::MatrixExpr>::Elem>,
            <Self as $crate::MatrixExpr>::Elem:
                ::std::ops::Add<Output = <Self as $crate::MatrixExpr>::Elem>,
            <Self as $crate::MatrixExpr>::Rows: $crate::SameDim<Rhs::Rows>,
            <Self as $crate::MatrixExpr>::Cols: $crate::SameDim<Rhs::Cols>,
        {
            type Output = $crate::Sum<Self, Rhs>;

            #[track_caller]
            fn add(self, rhs: Rhs) -> Self::Output {
                match $crate::Sum::new(self, rhs) {
                    Ok(node) => node,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<$($g)* Rhs> ::std::ops::Sub<Rhs> for $ty
        where
            Self: $crate::MatrixExpr,
            Rhs: $crate::MatrixExpr<Elem = <Self as $crate::MatrixExpr>::Elem>,
            <Self as $crate::MatrixExpr>::Elem:
                ::std::ops::Sub<Output = <Self as $crate::MatrixExpr>::Elem>,
            <Self as $crate::MatrixExpr>::Rows: $crate::SameDim<Rhs::Rows>,
            <Self as $crate::MatrixExpr>::Cols: $crate::SameDim<Rhs::Cols>,
        {
            type Output = $crate::Difference<Self, Rhs>;

            #[track_caller]
            fn sub(self, rhs: Rhs) -> Self::Output {
                match $crate::Difference::new(self, rhs) {
                    Ok(node) => node,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<$($g)* Rhs> ::std::ops::Mul<Rhs> for $ty
        where
            Self: $crate::MatrixExpr,
            Rhs: $crate::MatrixExpr<Elem = <Self as $crate::MatrixExpr>::Elem>,
            <Self as $crate::MatrixExpr>::Elem: $crate::Number,
            <Self as $crate::MatrixExpr>::Cols: $crate::SameDim<Rhs::Rows>,
        {
            type Output = $crate::Product<Self, Rhs>;

            #[track_caller]
            fn mul(self, rhs: Rhs) -> Self::Output {
                match $crate::Product::new(self, rhs) {
                    Ok(node) => node,
                    Err(e) => panic!("{e}"),
                }
            }
        }

        impl<$($g)*> ::std::ops::Neg for $ty
        where
            Self: $crate::MatrixExpr,
            <Self as $crate::MatrixExpr>::Elem: $crate::Number,
        {
            type Output = $crate::Scaled<Self>;

            fn neg(self) -> Self::Output {
                $crate::Scaled::new(self, -<<Self as $crate::MatrixExpr>::Elem as $crate::One>::ONE)
            }
        }

        $crate::ops::impl_scalar_ops!([$($g)*] $ty, f32);
        $crate::ops::impl_scalar_ops!([$($g)*] $ty, f64);
        $crate::ops::impl_scalar_ops!([$($g)*] $ty, i32);
        $crate::ops::impl_scalar_ops!([$($g)*] $ty, i64);
        $crate::ops::impl_scalar_div!([$($g)*] $ty, f32);
        $crate::ops::impl_scalar_div!([$($g)*] $ty, f64);
    };
}

macro_rules! impl_scalar_ops {
    ([$($g:tt)*] $ty:ty, $scalar:ty) => {
        impl<$($g)*> ::std::ops::Mul<$scalar> for $ty
        where
            Self: $crate::MatrixExpr<Elem = $scalar>,
        {
            type Output = $crate::Scaled<Self>;

            fn mul(self, rhs: $scalar) -> Self::Output {
                $crate::Scaled::new(self, rhs)
            }
        }

        impl<$($g)*> ::std::ops::Mul<$ty> for $scalar
        where
            $ty: $crate::MatrixExpr<Elem = $scalar>,
        {
            type Output = $crate::Scaled<$ty>;

            fn mul(self, rhs: $ty) -> Self::Output {
                $crate::Scaled::new(rhs, self)
            }
        }
    };
}

macro_rules! impl_scalar_div {
    ([$($g:tt)*] $ty:ty, $scalar:ty) => {
        impl<$($g)*> ::std::ops::Div<$scalar> for $ty
        where
            Self: $crate::MatrixExpr<Elem = $scalar>,
        {
            type Output = $crate::Scaled<Self>;

            fn div(self, rhs: $scalar) -> Self::Output {
                $crate::Scaled::new(self, 1.0 / rhs)
            }
        }
    };
}

pub(crate) use {impl_expr_ops, impl_scalar_div, impl_scalar_ops};

impl_expr_ops!([L, R,] Sum<L, R>);
impl_expr_ops!([L, R,] Difference<L, R>);
impl_expr_ops!([L, R,] Product<L, R>);
impl_expr_ops!([E: MatrixExpr,] Scaled<E>);
impl_expr_ops!([E,] Transpose<E>);
