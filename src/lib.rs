//! Compile-time-sized linear algebra with lazy expression evaluation, plus geometry and units.
//!
//! This crate bundles the `tabula` family of crates:
//!
//! - [`linalg`]: stack and heap matrices, vectors, lazy expression nodes, Gauss-Jordan
//!   elimination, determinants and inverses.
//! - [`geom`]: homogeneous coordinates and rigid transforms.
//! - [`units`]: physical quantities whose unit is part of their type.
//!
//! Most programs only need the [`prelude`]:
//!
//! ```
//! use tabula::prelude::*;
//!
//! let a = Mat2d::from_rows([
//!     [1.0, 2.0],
//!     [3.0, 4.0],
//! ]);
//! let b = Mat2d::IDENTITY;
//!
//! // Nothing is computed until the expression is assigned to storage.
//! let sum = Matrix::from_expr(&a + &b * 2.0);
//! assert_eq!(sum, Matrix::from_rows([[3.0, 2.0], [3.0, 6.0]]));
//! assert_approx_eq!(a.determinant()?, -2.0);
//!
//! let transform = Transform2::from_translation_rotation(vec2(0.0, 1.0), 0.25_f64.rnd());
//! assert_approx_eq!(transform.transform_point(vec2(1.0, 0.0)), vec2(0.0, 2.0));
//! # Ok::<_, LinalgError>(())
//! ```

pub use tabula_geom as geom;
pub use tabula_linalg as linalg;
pub use tabula_units as units;

/// Re-exports the commonly used types, traits and macros of all member crates.
pub mod prelude {
    pub use tabula_geom::{HVec2, HVec3, Homogeneous, Transform, Transform2, Transform3};
    pub use tabula_linalg::{
        approx::ApproxEq, assert_approx_eq, assert_approx_ne, cross, dot, vec1, vec2, vec3,
        vec4, Const, Dynamic, LinalgError, Mat2, Mat2d, Mat2f, Mat3, Mat3d, Mat3f, Mat4, Mat4d,
        Mat4f, Matrix, MatrixExpr, MatrixMut, MatrixN, Shape, Vec2, Vec2d, Vec2f, Vec3, Vec3d,
        Vec3f, Vec4, Vec4d, Vec4f, Vector,
    };
    pub use tabula_units::{
        Angle, AngleExt, ArcMinute, ArcSecond, Degree, Distance, DistanceExt, Foot, Inch,
        Kilometer, Meter, Mile, Radian, Round, Unit, Yard,
    };
}
