use std::{array, fmt};

use crate::{
    Const, LinalgError, Mat2, MatrixExpr, MatrixMut, MinMax, Number, One, Result, SameDim, Sqrt,
    Trig, Zero,
};

mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1<T> = Vector<T, 1>;
/// A 1-dimensional vector with [`f32`] elements.
pub type Vec1f = Vec1<f32>;
/// A 1-dimensional vector with [`f64`] elements.
pub type Vec1d = Vec1<f64>;
/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;

/// An `N`-element column vector.
///
/// A [`Vector`] is an `N`x`1` [`MatrixExpr`], so it can be multiplied with matrices and take part
/// in lazy expressions when borrowed (`&m * &v`). By value, it also supports eager element-wise
/// `+` and `-`, scaling with `*` and `/`, the dot product `a | b` and, for 3-vectors, the cross
/// product `a ^ b`.
///
/// # Construction
///
/// - [`vec2`], [`vec3`] and [`vec4`] take the elements directly.
/// - [`Vector::splat`] copies one value into every element, [`Vector::from_fn`] invokes a closure
///   with the index of each element.
/// - [`Vector::from_expr`] evaluates an `N`x`1` expression.
/// - Arrays convert into vectors through [`From`].
/// - [`Vector::ZERO`] is all zeroes. Vectors of up to 4 dimensions have the unit vectors
///   `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W`.
///
/// # Element Access
///
/// - Vectors of up to 4 dimensions have the fields `x`, `y`, `z` and `w`.
/// - [`Index`] and [`IndexMut`] work like they do on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::into_array`] expose the underlying
///   array.
/// - [`bytemuck::Pod`] is implemented when the element type implements it.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element set to [`T::ZERO`][Zero::ZERO].
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 1> {
    pub const X: Self = Self([T::ONE]);
}

impl<T: Zero + One> Vector<T, 2> {
    pub const X: Self = Self([T::ONE, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// assert_eq!(Vector::splat(2), vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector by invoking a closure with the index of each element.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one holding pairs of their elements.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let v = vec2(1, 2).zip(vec2("1", "2"));
    /// assert_eq!(v, vec2((1, "1"), (2, "2")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut others = other.0.into_iter();
        Vector(self.0.map(|elem| match others.next() {
            Some(other) => (elem, other),
            None => unreachable!("both vectors have {N} elements"),
        }))
    }

    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), Vec3f::Z);
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
    {
        self / self.length()
    }

    /// Computes the dot product of `self` and `other`; also available as `self | other`.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// assert_eq!(a | b, 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have a non-zero length for the result to be meaningful.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::X), TAU / 4.0);
    /// assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y), TAU / 2.0);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> T
    where
        T: Number + Trig + Sqrt,
    {
        (self.dot(other) / (self.length() * other.length())).acos()
    }

    /// Element-wise minimum of `self` and `other`.
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Element-wise maximum of `self` and `other`.
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Clamps each element of `self` to the range given by the elements of `min` and `max`.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let v = vec3(-1.0, 2.0, 9.0);
    /// assert_eq!(v.clamp(Vector::splat(0.0), Vector::splat(5.0)), vec3(0.0, 2.0, 5.0));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

impl<T: Zero + Copy, const N: usize> Vector<T, N> {
    /// Evaluates an `N`x`1` expression into a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if a dynamically-sized `expr` is not `N`x`1`. See [`Vector::try_from_expr`].
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// let m = Mat2::from_rows([[0, 1], [1, 0]]);
    /// let v = Vector::from_expr(&m * &vec2(3, 4));
    /// assert_eq!(v, vec2(4, 3));
    /// ```
    #[track_caller]
    pub fn from_expr<E>(expr: E) -> Self
    where
        E: MatrixExpr<Elem = T>,
        Const<N>: SameDim<E::Rows>,
        Const<1>: SameDim<E::Cols>,
    {
        match Self::try_from_expr(expr) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// Evaluates an `N`x`1` expression into a [`Vector`], failing if the shapes disagree.
    pub fn try_from_expr<E>(expr: E) -> Result<Self>
    where
        E: MatrixExpr<Elem = T>,
        Const<N>: SameDim<E::Rows>,
        Const<1>: SameDim<E::Cols>,
    {
        let mut v = Self::ZERO;
        v.assign(expr)?;
        Ok(v)
    }
}

impl<T> Vector<T, 1> {
    /// Removes the last element, yielding a vector with zero elements.
    pub fn truncate(self) -> Vector<T, 0> {
        [].into()
    }

    /// Appends `value`, yielding a 2-dimensional vector.
    pub fn extend(self, value: T) -> Vector<T, 2> {
        let [x] = self.0;
        Vector([x, value])
    }
}

impl<T> Vector<T, 2> {
    /// Removes the last element, yielding a 1-dimensional vector.
    pub fn truncate(self) -> Vector<T, 1> {
        let [x, _] = self.0;
        Vector([x])
    }

    /// Appends `value`, yielding a 3-dimensional vector.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// assert_eq!(vec2(-1.0, 2.0).extend(5.0), vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }

    /// Rotates `self` clockwise in the 2D plane (with the Y axis pointing up).
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 4.0), Vec2f::X);
    /// ```
    pub fn rotate_clockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_clockwise(radians) * self
    }

    /// Rotates `self` counterclockwise in the 2D plane (with the Y axis pointing up).
    pub fn rotate_counterclockwise(self, radians: T) -> Self
    where
        T: Number + Trig,
    {
        Mat2::rotation_counterclockwise(radians) * self
    }

    /// Computes the signed clockwise rotation in radians needed to align `self` with `other`.
    ///
    /// Assumes the Y axis points up; swap the arguments if it points down.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// use std::f32::consts::TAU;
    ///
    /// assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::X), TAU / 4.0);
    /// assert_approx_eq!(Vec2f::X.signed_angle_to(Vec2f::Y), -TAU / 4.0);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> T
    where
        T: Number + Trig,
    {
        -self.perp_dot(other).atan2(self.dot(other))
    }

    /// Computes the [perpendicular dot product] of `self` and `other`: the Z coordinate of the
    /// cross product of both vectors extended with `z = 0`.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.x * other.y - self.y * other.x
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element, yielding a 2-dimensional vector.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends `value`, yielding a 4-dimensional vector.
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Computes the cross product of `self` and `other`; also available as `self ^ other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the operands inverts it.
    ///
    /// ```
    /// # use tabula_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y ^ Vec3f::X, -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element, yielding a 3-dimensional vector.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

/// Computes the dot product of two column-vector expressions.
///
/// Returns [`LinalgError::ShapeMismatch`] if either operand has more than one column, or if they
/// have a different number of rows.
///
/// ```
/// # use tabula_linalg::*;
/// let m = Mat3::from_fn(|row, col| (row * 3 + col) as i32);
/// let column = m.view::<3, 1>(0, 2);
/// assert_eq!(dot(column, vec3(1, 1, 1))?, 2 + 5 + 8);
/// # Ok::<_, LinalgError>(())
/// ```
pub fn dot<L, R>(lhs: L, rhs: R) -> Result<L::Elem>
where
    L: MatrixExpr,
    R: MatrixExpr<Elem = L::Elem>,
    L::Elem: Number,
    L::Rows: SameDim<R::Rows>,
    L::Cols: SameDim<Const<1>>,
    R::Cols: SameDim<Const<1>>,
{
    if lhs.columns() != 1 || rhs.columns() != 1 || lhs.rows() != rhs.rows() {
        return Err(LinalgError::mismatch(
            "dot product",
            lhs.shape(),
            rhs.shape(),
        ));
    }
    Ok((0..lhs.rows()).fold(L::Elem::ZERO, |acc, i| {
        acc + lhs.element(i, 0) * rhs.element(i, 0)
    }))
}

/// Computes the cross product of two 3x1 expressions.
///
/// ```
/// # use tabula_linalg::*;
/// let a = vec3(1, 0, 0);
/// let b = vec3(0, 2, 0);
/// assert_eq!(cross(&a, &b + &b), vec3(0, 0, 4));
/// ```
pub fn cross<L, R>(lhs: L, rhs: R) -> Vector<L::Elem, 3>
where
    L: MatrixExpr<Rows = Const<3>, Cols = Const<1>>,
    R: MatrixExpr<Elem = L::Elem, Rows = Const<3>, Cols = Const<1>>,
    L::Elem: Number,
{
    let a = Vector::<_, 3>::from_fn(|i| lhs.element(i, 0));
    let b = Vector::<_, 3>::from_fn(|i| rhs.element(i, 0));
    a.cross(b)
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Formats the vector as a tuple: `(1, 2, 3)`.
impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T: Copy, const N: usize> MatrixExpr for Vector<T, N> {
    type Elem = T;
    type Rows = Const<N>;
    type Cols = Const<1>;

    #[inline]
    fn rows(&self) -> usize {
        N
    }

    #[inline]
    fn columns(&self) -> usize {
        1
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        assert_eq!(col, 0, "column index out of bounds for a vector");
        self.0[row]
    }
}

impl<T: Copy, const N: usize> MatrixMut for Vector<T, N> {
    #[inline]
    fn element_mut(&mut self, row: usize, col: usize) -> &mut T {
        assert_eq!(col, 0, "column index out of bounds for a vector");
        &mut self.0[row]
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub const fn vec1<T>(x: T) -> Vec1<T> {
    Vector([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use crate::{assert_approx_eq, Matrix, MatrixN, Shape};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X.x, 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::Y.y, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);

        let mut v = vec2(0, 1);
        v.x = 777;
        v[1] = 9;
        assert_eq!(v, [777, 9]);
        assert_eq!(v.as_slice(), &[777, 9]);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.1}", vec2(0.25, 1.0)), "(0.2, 1.0)");
    }

    #[test]
    fn expression() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.shape(), Shape::new(3, 1));
        assert_eq!(v.transpose().eval(), Matrix::from_rows([[1, 2, 3]]));

        // Outer product.
        let outer = (&v * v.transpose()).eval();
        assert_eq!(outer[(2, 1)], 6);

        let heap = MatrixN::from_row_major(3, 1, [1, 1, 1]);
        assert_eq!(Vector::from_expr(&v + &heap), vec3(2, 3, 4));
        assert!(Vector::<i32, 2>::try_from_expr(&heap).is_err());
    }

    #[test]
    #[should_panic(expected = "column index out of bounds")]
    fn element_column() {
        vec2(1, 2).element(0, 1);
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vec2f::Y.rotate_clockwise(TAU / 2.0), -Vec2f::Y);
        assert_approx_eq!(Vec2f::X.rotate_clockwise(TAU / 2.0), -Vec2f::X);
        assert_approx_eq!(Vec2f::X.rotate_counterclockwise(TAU / 4.0), Vec2f::Y);
    }

    #[test]
    fn dot_products() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(1, 3, -5)), 35);
        assert_eq!(Vec2f::X | Vec2f::Y, 0.0);

        let heap = MatrixN::from_row_major(2, 1, [2, 3]);
        assert_eq!(dot(&heap, vec2(1, 1)), Ok(5));
        assert_eq!(
            dot(&heap, MatrixN::<i32>::zeros(3, 1)),
            Err(LinalgError::mismatch(
                "dot product",
                Shape::new(2, 1),
                Shape::new(3, 1)
            ))
        );
    }

    #[test]
    fn cross_products() {
        assert_eq!(Vec3f::Z ^ Vec3f::X, Vec3f::Y);
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(-2.0, 0.5, 4.0);
        let c = a ^ b;
        assert_approx_eq!(c | a, 0.0);
        assert_approx_eq!(c | b, 0.0);
        assert_eq!(cross(a, b), c);
        assert_eq!(cross(&a * 2.0, &b), Vector::from_expr(&c * 2.0));
    }

    #[test]
    fn abs_angle() {
        assert_approx_eq!(Vec3f::X.abs_angle_to(Vec3f::Y), TAU / 4.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y), 0.0);
        assert_approx_eq!(Vec3f::Y.abs_angle_to(-Vec3f::X), TAU / 4.0);
        assert_approx_eq!(vec2(0.0, 2.0).abs_angle_to(vec2(-3.0, 0.0)), TAU / 4.0);
        assert_approx_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)), TAU / 4.0);
    }

    #[test]
    fn signed_angle() {
        assert_approx_eq!(Vec2f::Y.signed_angle_to(Vec2f::Y), 0.0);
        assert_approx_eq!(
            Vec2f::Y
                .rotate_counterclockwise(100.0f32.to_radians())
                .signed_angle_to(Vec2f::Y),
            100.0f32.to_radians()
        );
        assert_approx_eq!(Vec2f::Y.signed_angle_to(-Vec2f::Y), -TAU / 2.0);
        assert_eq!(Vec2f::X.perp_dot(Vec2f::Y), 1.0);
    }

    #[test]
    fn resize() {
        assert_eq!(vec1(-1.0).extend(5.0), vec2(-1.0, 5.0));
        assert_eq!(vec3(1, 2, 3).extend(4).truncate(), vec3(1, 2, 3));
        assert_eq!(vec2(1, 2).truncate(), vec1(1));
        assert_eq!(vec1(1).truncate(), []);
    }
}
