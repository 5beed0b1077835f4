use std::{
    fmt,
    ops::{Mul, MulAssign},
};

use tabula_linalg::{
    approx::ApproxEq, Const, Matrix, MatrixExpr, MatrixMut, Number, Result, Vec2, Vec3, Vector,
    View, ViewMut,
};
use tabula_units::{Angle, Radian, Ratio, Unit, UnitValue};

use crate::{Extent, Homogeneous, Scalar};

/// A transform of 2D space, stored as a 3x3 matrix.
pub type Transform2<T> = Transform<T, 2, 3>;
/// A transform of 3D space, stored as a 4x4 matrix.
pub type Transform3<T> = Transform<T, 3, 4>;

/// An affine transform of `N`-dimensional space, stored as an `H`x`H` matrix with `H = N + 1`.
///
/// The matrix has the layout
///
/// ```text
/// [ R  t ]
/// [ 0  1 ]
/// ```
///
/// where `R` is the `N`x`N` rotation block and `t` the `N`x`1` translation column. Applying a
/// transform to a point first rotates and then translates it.
///
/// Transforms compose with `*`: `(a * b).transform_point(p)` is
/// `a.transform_point(b.transform_point(p))`.
#[derive(Clone, Copy, PartialEq)]
pub struct Transform<T, const N: usize, const H: usize> {
    matrix: Matrix<T, H, H>,
}

impl<T: Number, const N: usize, const H: usize> Transform<T, N, H> {
    /// Returns the transform that maps every point onto itself.
    pub fn identity() -> Self {
        Self::from_matrix(Matrix::IDENTITY)
    }

    /// Wraps an `H`x`H` matrix.
    pub fn from_matrix(matrix: Matrix<T, H, H>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Extent::<N, H>::VALID;
        Self { matrix }
    }

    /// Creates a pure translation.
    pub fn from_translation(translation: Vector<T, N>) -> Self {
        let mut this = Self::identity();
        this.set_translation(translation);
        this
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix<T, H, H> {
        &self.matrix
    }

    #[inline]
    pub fn into_matrix(self) -> Matrix<T, H, H> {
        self.matrix
    }

    /// Returns the `N`x`N` rotation block at the top left of the matrix.
    pub fn rotation_block(&self) -> View<'_, Matrix<T, H, H>, Const<N>, Const<N>> {
        self.matrix.block::<0, 0, N, N>()
    }

    pub fn rotation_block_mut(&mut self) -> ViewMut<'_, Matrix<T, H, H>, Const<N>, Const<N>> {
        self.matrix.block_mut::<0, 0, N, N>()
    }

    /// Returns the `N`x`1` translation block in the last column of the matrix.
    pub fn translation_block(&self) -> View<'_, Matrix<T, H, H>, Const<N>, Const<1>> {
        self.matrix.block::<0, N, N, 1>()
    }

    pub fn translation_block_mut(&mut self) -> ViewMut<'_, Matrix<T, H, H>, Const<N>, Const<1>> {
        self.matrix.block_mut::<0, N, N, 1>()
    }

    pub fn translation(&self) -> Vector<T, N> {
        Vector::from_fn(|row| self.matrix[(row, N)])
    }

    pub fn set_translation(&mut self, translation: Vector<T, N>) {
        for row in 0..N {
            self.matrix[(row, N)] = translation[row];
        }
    }

    /// Returns column `index` of the rotation block: the image of the `index`-th unit vector.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[track_caller]
    pub fn axis(&self, index: usize) -> Vector<T, N> {
        assert!(index < N, "axis {index} out of range for a {N}D transform");
        Vector::from_fn(|row| self.matrix[(row, index)])
    }

    /// Inverts a rigid transform as `[Rᵀ | -Rᵀt]`.
    ///
    /// This only computes the inverse if the rotation block is orthonormal (a pure rotation,
    /// without scaling or shearing). Use [`Transform::inverse`] for arbitrary transforms.
    ///
    /// ```
    /// # use tabula_geom::*;
    /// # use tabula_linalg::*;
    /// let t = Transform3::from_translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(t.quick_inverse().translation(), vec3(-1.0, -2.0, -3.0));
    /// ```
    pub fn quick_inverse(&self) -> Self {
        let rt = Matrix::<T, N, N>::from_expr(self.rotation_block().transpose());
        let t = Vector::from_expr(&rt * self.translation_block());
        Self::from_matrix(Matrix::from_fn(|row, col| match (row < N, col < N) {
            (true, true) => rt[(row, col)],
            (true, false) => -t[row],
            (false, true) => T::ZERO,
            (false, false) => T::ONE,
        }))
    }

    /// Applies the transform to a point, including the translation.
    pub fn transform_point(&self, point: Vector<T, N>) -> Vector<T, N> {
        (*self * Homogeneous::point(point)).vector()
    }

    /// Applies the transform to a direction, ignoring the translation.
    pub fn transform_direction(&self, direction: Vector<T, N>) -> Vector<T, N> {
        (*self * Homogeneous::direction(direction)).vector()
    }
}

impl<T: Scalar, const N: usize, const H: usize> Transform<T, N, H> {
    /// Inverts the transform with Gauss-Jordan elimination.
    ///
    /// Returns [`LinalgError::SingularMatrix`][tabula_linalg::LinalgError::SingularMatrix] if
    /// the matrix cannot be inverted.
    pub fn inverse(&self) -> Result<Self> {
        Ok(Self::from_matrix(self.matrix.inverse()?))
    }
}

impl<T: Scalar> Transform<T, 2, 3> {
    /// Creates a transform that rotates counterclockwise by `angle`, then translates.
    pub fn from_translation_rotation<U, R>(translation: Vec2<T>, angle: Unit<Angle, U, R>) -> Self
    where
        U: UnitValue,
        R: Ratio,
    {
        let mut this = Self::from_translation(translation);
        this.set_rotation_angle(angle);
        this
    }

    /// Replaces the rotation block with a counterclockwise rotation by `angle`.
    pub fn set_rotation_angle<U, R>(&mut self, angle: Unit<Angle, U, R>)
    where
        U: UnitValue,
        R: Ratio,
    {
        let (sin, cos) = sin_cos(angle);
        self.matrix[(0, 0)] = cos;
        self.matrix[(1, 0)] = sin;
        self.matrix[(0, 1)] = -sin;
        self.matrix[(1, 1)] = cos;
    }

    /// Returns the counterclockwise rotation angle of the transform.
    pub fn rotation_angle(&self) -> Radian<f64>
    where
        T: Into<f64>,
    {
        let cos: f64 = self.matrix[(0, 0)].into();
        let sin: f64 = self.matrix[(1, 0)].into();
        Radian::new(sin.atan2(cos))
    }

    /// The image of the X axis.
    pub fn ru(&self) -> Vec2<T> {
        self.axis(0)
    }

    /// The image of the Y axis.
    pub fn rv(&self) -> Vec2<T> {
        self.axis(1)
    }
}

impl<T: Scalar> Transform<T, 3, 4> {
    /// Creates a counterclockwise rotation around the X axis (from Y towards Z).
    pub fn from_rotation_x<U: UnitValue, R: Ratio>(angle: Unit<Angle, U, R>) -> Self {
        let (s, c) = sin_cos(angle);
        Self::rotation([[T::ONE, T::ZERO, T::ZERO], [T::ZERO, c, -s], [T::ZERO, s, c]])
    }

    /// Creates a counterclockwise rotation around the Y axis (from Z towards X).
    pub fn from_rotation_y<U: UnitValue, R: Ratio>(angle: Unit<Angle, U, R>) -> Self {
        let (s, c) = sin_cos(angle);
        Self::rotation([[c, T::ZERO, s], [T::ZERO, T::ONE, T::ZERO], [-s, T::ZERO, c]])
    }

    /// Creates a counterclockwise rotation around the Z axis (from X towards Y).
    pub fn from_rotation_z<U: UnitValue, R: Ratio>(angle: Unit<Angle, U, R>) -> Self {
        let (s, c) = sin_cos(angle);
        Self::rotation([[c, -s, T::ZERO], [s, c, T::ZERO], [T::ZERO, T::ZERO, T::ONE]])
    }

    fn rotation(rows: [[T; 3]; 3]) -> Self {
        let mut this = Self::identity();
        this.matrix.block_mut::<0, 0, 3, 3>().fill_row_major(rows.into_iter().flatten());
        this
    }

    /// The image of the X axis.
    pub fn ru(&self) -> Vec3<T> {
        self.axis(0)
    }

    /// The image of the Y axis.
    pub fn rv(&self) -> Vec3<T> {
        self.axis(1)
    }

    /// The image of the Z axis.
    pub fn rw(&self) -> Vec3<T> {
        self.axis(2)
    }
}

fn sin_cos<T: Scalar, U: UnitValue, R: Ratio>(angle: Unit<Angle, U, R>) -> (T, T) {
    let radians = angle.radians();
    (T::from_f64(radians.sin()), T::from_f64(radians.cos()))
}

impl<T: Number, const N: usize, const H: usize> Default for Transform<T, N, H> {
    fn default() -> Self {
        Self::identity()
    }
}

/// Composition: `a * b` applies `b` first.
impl<T: Number, const N: usize, const H: usize> Mul for Transform<T, N, H> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_matrix(Matrix::from_expr(&self.matrix * &rhs.matrix))
    }
}

impl<T: Number, const N: usize, const H: usize> MulAssign for Transform<T, N, H> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Number, const N: usize, const H: usize> Mul<Homogeneous<T, N, H>> for Transform<T, N, H> {
    type Output = Homogeneous<T, N, H>;

    fn mul(self, rhs: Homogeneous<T, N, H>) -> Self::Output {
        Homogeneous::from(self.matrix * rhs.into_vector())
    }
}

impl<T: ApproxEq, const N: usize, const H: usize> ApproxEq for Transform<T, N, H> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.matrix.abs_diff_eq(&other.matrix, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.matrix.rel_diff_eq(&other.matrix, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.matrix.ulps_diff_eq(&other.matrix, ulps_tolerance)
    }
}

impl<T: fmt::Debug, const N: usize, const H: usize> fmt::Debug for Transform<T, N, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("matrix", &self.matrix)
            .finish()
    }
}

impl<T: fmt::Display + Copy, const N: usize, const H: usize> fmt::Display for Transform<T, N, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.matrix.display().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use tabula_linalg::{assert_approx_eq, vec2, vec3, LinalgError, Mat3d};
    use tabula_units::AngleExt;

    use super::*;

    #[test]
    fn identity() {
        let t = Transform3::<f64>::default();
        assert_eq!(t.matrix(), &Matrix::IDENTITY);
        assert_eq!(t.transform_point(vec3(1.0, 2.0, 3.0)), vec3(1.0, 2.0, 3.0));
        assert_eq!(t.translation(), Vector::ZERO);
    }

    #[test]
    fn blocks() {
        let mut t = Transform2::<f64>::identity();
        t.translation_block_mut()
            .assign(vec2(4.0, 5.0))
            .unwrap();
        assert_eq!(t.translation(), vec2(4.0, 5.0));
        assert_eq!(t.translation_block().element(1, 0), 5.0);

        t.rotation_block_mut().scale_row(0, 2.0).unwrap();
        assert_eq!(t.ru(), vec2(2.0, 0.0));
        assert_eq!(t.rv(), vec2(0.0, 1.0));
        assert_eq!(t.rotation_block().eval(), Matrix::from_diagonal([2.0, 1.0]));
    }

    #[test]
    fn rotation_2d() {
        let t = Transform2::from_translation_rotation(vec2(0.0, 0.0), 90.0_f64.deg());
        assert_approx_eq!(t.transform_point(vec2(1.0, 0.0)), vec2(0.0, 1.0));
        assert_approx_eq!(t.ru(), vec2(0.0, 1.0));
        assert_approx_eq!(t.rotation_angle().to::<tabula_units::Degree<f64>>().count(), 90.0)
            .abs(1e-6);

        let mut t = Transform2::<f32>::identity();
        t.set_rotation_angle(0.5_f64.rnd());
        assert_approx_eq!(t.transform_direction(vec2(0.0, 1.0)), vec2(0.0, -1.0)).abs(1e-6);
    }

    #[test]
    fn rotation_3d() {
        let quarter = 90_i32.deg();
        let z = Transform3::<f64>::from_rotation_z(quarter);
        assert_approx_eq!(z.transform_direction(Vec3::<f64>::X), Vec3::<f64>::Y);
        let x = Transform3::<f64>::from_rotation_x(quarter);
        assert_approx_eq!(x.transform_direction(Vec3::<f64>::Y), Vec3::<f64>::Z);
        let y = Transform3::<f64>::from_rotation_y(quarter);
        assert_approx_eq!(y.transform_direction(Vec3::<f64>::Z), Vec3::<f64>::X);
        assert_approx_eq!(y.rw(), Vec3::<f64>::X);
    }

    #[test]
    fn composition() {
        let rotate = Transform2::from_translation_rotation(vec2(0.0, 0.0), 90.0_f64.deg());
        let translate = Transform2::from_translation(vec2(1.0, 0.0));

        // Rotate, then translate.
        let both = translate * rotate;
        assert_approx_eq!(both.transform_point(vec2(1.0, 0.0)), vec2(1.0, 1.0));

        let mut acc = Transform2::identity();
        acc *= rotate;
        acc *= rotate;
        assert_approx_eq!(acc.transform_point(vec2(1.0, 0.0)), vec2(-1.0, 0.0));
    }

    #[test]
    fn inverses() {
        let t = Transform3::<f64>::from_rotation_x(30.0_f64.deg())
            * Transform3::from_rotation_z(-45.0_f64.deg())
            * Transform3::from_translation(vec3(1.0, -2.0, 0.5));

        let quick = t.quick_inverse();
        let full = t.inverse().unwrap();
        assert_approx_eq!(quick, full).abs(1e-9);
        assert_approx_eq!(t * quick, Transform3::identity()).abs(1e-9);

        let p = vec3(0.25, 3.0, -1.0);
        assert_approx_eq!(quick.transform_point(t.transform_point(p)), p).abs(1e-9);
    }

    #[test]
    fn singular() {
        let mut m = Mat3d::IDENTITY;
        m.set(1, 1, 0.0);
        let t = Transform2::from_matrix(m);
        assert_eq!(t.inverse(), Err(LinalgError::SingularMatrix));
    }

    #[test]
    fn fmt() {
        let t = Transform2::from_translation(vec2(2, 3));
        assert_eq!(t.to_string(), "1 0 2\n0 1 3\n0 0 1\n");
    }
}
