use std::{
    fmt,
    ops::{Add, BitOr, Div, Index, IndexMut, Mul, Sub},
};

use tabula_linalg::{
    approx::ApproxEq, vec2, Const, MatrixExpr, MatrixMut, Number, Sqrt, Vector, View,
};

use crate::Extent;

/// A point or direction in 2D space, in homogeneous coordinates.
pub type HVec2<T> = Homogeneous<T, 2, 3>;
/// A point or direction in 3D space, in homogeneous coordinates.
pub type HVec3<T> = Homogeneous<T, 3, 4>;

/// An `N`-dimensional vector extended with a `w` element, stored as `H = N + 1` elements.
///
/// Points have `w = 1` and are affected by translations, directions have `w = 0` and are not.
/// Addition and subtraction work on all elements including `w`, so the difference of two points
/// is a direction and the sum of a point and a direction is a point. Scaling only affects the
/// spatial elements.
///
/// ```
/// # use tabula_geom::*;
/// # use tabula_linalg::*;
/// let a = HVec2::point(vec2(1.0, 2.0));
/// let b = HVec2::point(vec2(4.0, 6.0));
///
/// let dir = b - a;
/// assert_eq!(dir.w(), 0.0);
/// assert_eq!(dir.norm(), 5.0);
/// assert_eq!(a + dir, b);
/// ```
#[derive(Clone, Copy, PartialEq, Hash)]
#[repr(transparent)]
pub struct Homogeneous<T, const N: usize, const H: usize>(Vector<T, H>);

impl<T: Copy, const N: usize, const H: usize> Homogeneous<T, N, H> {
    /// Extends `spatial` with the given `w` element.
    pub fn new(spatial: Vector<T, N>, w: T) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Extent::<N, H>::VALID;
        Self(Vector::from_fn(|i| if i < N { spatial[i] } else { w }))
    }

    #[inline]
    pub fn w(&self) -> T {
        self.0[N]
    }

    #[inline]
    pub fn set_w(&mut self, w: T) {
        self.0[N] = w;
    }

    /// Returns a copy of the spatial part, dropping `w`.
    pub fn vector(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self.0[i])
    }

    /// Returns a lazy `N`x`1` view of the spatial part.
    ///
    /// ```
    /// # use tabula_geom::*;
    /// # use tabula_linalg::*;
    /// let p = HVec3::point(vec3(1, 2, 3));
    /// assert_eq!(dot(p.spatial(), vec3(1, 1, 1))?, 6);
    /// # Ok::<_, LinalgError>(())
    /// ```
    pub fn spatial(&self) -> View<'_, Vector<T, H>, Const<N>, Const<1>> {
        self.0.view::<N, 1>(0, 0)
    }

    /// Returns all `H` elements, `w` last.
    #[inline]
    pub fn as_vector(&self) -> &Vector<T, H> {
        &self.0
    }

    #[inline]
    pub fn into_vector(self) -> Vector<T, H> {
        self.0
    }
}

impl<T: Number, const N: usize, const H: usize> Homogeneous<T, N, H> {
    /// Creates a point (`w = 1`).
    pub fn point(position: Vector<T, N>) -> Self {
        Self::new(position, T::ONE)
    }

    /// Creates a direction (`w = 0`).
    pub fn direction(direction: Vector<T, N>) -> Self {
        Self::new(direction, T::ZERO)
    }

    #[inline]
    pub fn is_direction(&self) -> bool {
        self.w() == T::ZERO
    }

    /// Divides the spatial part by `w`, or returns [`None`] for directions.
    ///
    /// ```
    /// # use tabula_geom::*;
    /// # use tabula_linalg::*;
    /// let h = HVec2::new(vec2(4.0, 2.0), 2.0);
    /// assert_eq!(h.projected(), Some(vec2(2.0, 1.0)));
    /// assert_eq!(HVec2::direction(vec2(4.0, 2.0)).projected(), None);
    /// ```
    pub fn projected(&self) -> Option<Vector<T, N>> {
        if self.is_direction() {
            None
        } else {
            Some(self.vector() / self.w())
        }
    }

    /// Scales the vector so that `w` becomes `1`. Directions are left unchanged.
    pub fn homogenize(&mut self) {
        if let Some(position) = self.projected() {
            *self = Self::point(position);
        }
    }

    /// Squared length of the spatial part.
    pub fn square_norm(&self) -> T {
        self.vector().length2()
    }

    /// Length of the spatial part.
    pub fn norm(&self) -> T
    where
        T: Sqrt,
    {
        self.vector().length()
    }
}

impl<T: Number> Homogeneous<T, 2, 3> {
    /// Returns the spatial part rotated by a quarter turn counterclockwise, `(-y, x)`, keeping `w`.
    ///
    /// ```
    /// # use tabula_geom::*;
    /// # use tabula_linalg::*;
    /// let d = HVec2::direction(vec2(3, 1));
    /// assert_eq!(d.normal(), HVec2::direction(vec2(-1, 3)));
    /// assert_eq!(d | d.normal(), 0);
    /// ```
    pub fn normal(&self) -> Self {
        Self::new(vec2(-self.0[1], self.0[0]), self.w())
    }
}

impl<T, const N: usize, const H: usize> From<Vector<T, H>> for Homogeneous<T, N, H> {
    fn from(value: Vector<T, H>) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Extent::<N, H>::VALID;
        Self(value)
    }
}

impl<T, const N: usize, const H: usize> From<Homogeneous<T, N, H>> for Vector<T, H> {
    fn from(value: Homogeneous<T, N, H>) -> Self {
        value.0
    }
}

impl<T, const N: usize, const H: usize> Index<usize> for Homogeneous<T, N, H> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize, const H: usize> IndexMut<usize> for Homogeneous<T, N, H> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

/// Element-wise, including `w`.
impl<T: Number, const N: usize, const H: usize> Add for Homogeneous<T, N, H> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// Element-wise, including `w`.
impl<T: Number, const N: usize, const H: usize> Sub for Homogeneous<T, N, H> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

/// Scales the spatial part, leaving `w` unchanged.
impl<T: Number, const N: usize, const H: usize> Mul<T> for Homogeneous<T, N, H> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.vector() * rhs, self.w())
    }
}

/// Scales the spatial part, leaving `w` unchanged.
impl<T: Number, const N: usize, const H: usize> Div<T> for Homogeneous<T, N, H> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.vector() / rhs, self.w())
    }
}

macro_rules! scalar_lhs_mul {
    ($($t:ty),+) => {
        $(
            impl<const N: usize, const H: usize> Mul<Homogeneous<$t, N, H>> for $t {
                type Output = Homogeneous<$t, N, H>;

                fn mul(self, rhs: Homogeneous<$t, N, H>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

scalar_lhs_mul!(f32, f64);

/// Dot product of the spatial parts.
impl<T: Number, const N: usize, const H: usize> BitOr for Homogeneous<T, N, H> {
    type Output = T;

    fn bitor(self, rhs: Self) -> T {
        self.vector().dot(rhs.vector())
    }
}

impl<T: Copy, const N: usize, const H: usize> MatrixExpr for Homogeneous<T, N, H> {
    type Elem = T;
    type Rows = Const<H>;
    type Cols = Const<1>;

    #[inline]
    fn rows(&self) -> usize {
        H
    }

    #[inline]
    fn columns(&self) -> usize {
        1
    }

    #[inline]
    fn element(&self, row: usize, col: usize) -> T {
        self.0.element(row, col)
    }
}

impl<T: Copy, const N: usize, const H: usize> MatrixMut for Homogeneous<T, N, H> {
    #[inline]
    fn element_mut(&mut self, row: usize, col: usize) -> &mut T {
        self.0.element_mut(row, col)
    }
}

impl<T: ApproxEq, const N: usize, const H: usize> ApproxEq for Homogeneous<T, N, H> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

impl<T: fmt::Debug, const N: usize, const H: usize> fmt::Debug for Homogeneous<T, N, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Homogeneous").field(&self.0).finish()
    }
}

/// Formats the spatial part and `w` separated by a semicolon: `(1, 2; 1)`.
impl<T: fmt::Display, const N: usize, const H: usize> fmt::Display for Homogeneous<T, N, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.as_slice().iter().enumerate() {
            match i {
                0 => {}
                i if i == N => f.write_str("; ")?,
                _ => f.write_str(", ")?,
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}
