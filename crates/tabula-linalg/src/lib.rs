//! Compile-time-sized matrices and vectors with lazily evaluated expressions.
//!
//! # Overview
//!
//! Arithmetic on borrowed matrices does not compute anything. `&a + &b * &c` builds a small tree
//! of expression nodes ([`Sum`], [`Product`], ...) that implement [`MatrixExpr`] and compute
//! individual elements on demand. The tree is evaluated once, cell by cell, when it is assigned
//! to a storage type ([`MatrixMut::assign`], [`Matrix::from_expr`], [`MatrixExpr::eval`]), so
//! chained operations never allocate intermediate matrices.
//!
//! There are two storage backends:
//!
//! - [`Matrix`] stores its elements inline, with both dimensions fixed at compile time.
//! - [`MatrixN`] stores its elements in a heap buffer and has a runtime shape.
//!
//! Both can be mixed freely in one expression. Dimensions are tracked in the type system
//! ([`Const`] or [`Dynamic`], see [`dim`]), so combining two stack matrices of different shapes
//! fails to compile, while mismatches involving a heap matrix are detected at runtime.
//!
//! # Errors
//!
//! Fallible operations return [`Result`] with a [`LinalgError`]. Operators cannot return a
//! `Result` and panic with the same message instead; every operator has a fallible equivalent
//! (like [`Sum::new`] or [`Matrix::try_from_expr`]).
//!
//! # Data layout
//!
//! [`Matrix`] is column-major and unpadded, [`Vector`] is a plain array, and both implement
//! [`bytemuck::Pod`] when their element type does. [`MatrixN`] stores its elements in row-major
//! order.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade at `trace` and `debug` level only, and never
//! installs a logger itself.

pub mod approx;
mod algo;
pub mod dim;
mod error;
mod expr;
mod matrix;
mod matrix_n;
mod ops;
mod traits;
mod vector;
mod view;

pub use algo::Augmented;
pub use dim::*;
pub use error::{LinalgError, Result};
pub use expr::*;
pub use matrix::*;
pub use matrix_n::MatrixN;
pub use ops::{Difference, Product, Scaled, Sum, Transpose};
pub use traits::*;
pub use vector::*;
pub use view::{View, ViewMut};
