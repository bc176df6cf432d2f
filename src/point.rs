//! Points.

use crate::{
    num::{self, Scalar},
    vector::Vector3,
};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;

/// A location in 3-dimensional affine space.
///
/// The difference of two points is a [`Vector3`], and a point offset by a
/// vector is again a point. Like vectors, points must not have NaN
/// components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// SAFETY: Same layout argument as for `Vector3`.
unsafe impl<T: Scalar + Zeroable> Zeroable for Point3<T> {}
unsafe impl<T: Scalar + Pod> Pod for Point3<T> {}

impl<T: Scalar> Point3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let point = Self { x, y, z };
        point.check_no_nans();
        point
    }

    #[inline]
    pub fn origin() -> Self {
        Self {
            x: T::ZERO,
            y: T::ZERO,
            z: T::ZERO,
        }
    }

    /// Computes the point halfway between the two given points.
    #[inline]
    pub fn center_of(point_a: &Self, point_b: &Self) -> Self {
        (point_a + point_b) / T::TWO
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Reinterprets the point as its displacement from the origin without
    /// copying.
    #[inline]
    pub fn as_vector(&self) -> &Vector3<T>
    where
        T: Pod,
    {
        bytemuck::cast_ref(self)
    }

    /// Converts the point to component type `U` with an `as` cast of each
    /// component.
    #[inline]
    pub fn cast<U: Scalar>(&self) -> Point3<U>
    where
        T: AsPrimitive<U>,
    {
        Point3::new(
            AsPrimitive::<U>::as_(self.x),
            AsPrimitive::<U>::as_(self.y),
            AsPrimitive::<U>::as_(self.z),
        )
    }

    /// Converts the point to its displacement from the origin, casting each
    /// component to `U`.
    #[inline]
    pub fn to_vector<U: Scalar>(&self) -> Vector3<U>
    where
        T: AsPrimitive<U>,
    {
        Vector3::new(
            AsPrimitive::<U>::as_(self.x),
            AsPrimitive::<U>::as_(self.y),
            AsPrimitive::<U>::as_(self.z),
        )
    }

    /// Returns the point with the smaller of the two points' components along
    /// each axis.
    #[inline]
    pub fn min_with(&self, other: &Self) -> Self {
        Self::new(
            num::partial_min(self.x, other.x),
            num::partial_min(self.y, other.y),
            num::partial_min(self.z, other.z),
        )
    }

    /// Returns the point with the larger of the two points' components along
    /// each axis.
    #[inline]
    pub fn max_with(&self, other: &Self) -> Self {
        Self::new(
            num::partial_max(self.x, other.x),
            num::partial_max(self.y, other.y),
            num::partial_max(self.z, other.z),
        )
    }

    #[inline]
    pub fn distance_between(point_a: &Self, point_b: &Self) -> T::Real {
        (point_a - point_b).length()
    }

    #[inline]
    pub fn squared_distance_between(point_a: &Self, point_b: &Self) -> T::Real {
        (point_a - point_b).length_squared()
    }

    #[inline]
    pub(crate) fn check_no_nans(&self) {
        precondition!(!self.has_nans(), "NaN component in point {self}");
    }

    #[inline]
    fn scaled_by_real(&self, factor: T::Real) -> Self {
        Self::new(
            num::scale_promoted(self.x, factor),
            num::scale_promoted(self.y, factor),
            num::scale_promoted(self.z, factor),
        )
    }
}

/// Computes the componentwise minimum of two points.
#[inline]
pub fn min<T: Scalar>(point_a: &Point3<T>, point_b: &Point3<T>) -> Point3<T> {
    point_a.min_with(point_b)
}

/// Computes the componentwise maximum of two points.
#[inline]
pub fn max<T: Scalar>(point_a: &Point3<T>, point_b: &Point3<T>) -> Point3<T> {
    point_a.max_with(point_b)
}

/// Interprets the vector as a displacement from the origin.
impl<T: Scalar> From<Vector3<T>> for Point3<T> {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> From<Point3<T>> for [T; 3] {
    #[inline]
    fn from(point: Point3<T>) -> Self {
        [point.x, point.y, point.z]
    }
}

impl_binop!(Add, add, Point3<T>, Vector3<T>, Point3<T>, |a, b| {
    b.check_no_nans();
    Point3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Point3<T>, Vector3<T>, Point3<T>, |a, b| {
    b.check_no_nans();
    Point3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Sub, sub, Point3<T>, Point3<T>, Vector3<T>, |a, b| {
    a.check_no_nans();
    b.check_no_nans();
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

// Used by `center_of`.
impl_binop!(Add, add, Point3<T>, Point3<T>, Point3<T>, |a, b| {
    a.check_no_nans();
    b.check_no_nans();
    Point3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Mul, mul, Point3<T>, T, Point3<T>, |a, b| {
    Point3::new(*b * a.x, *b * a.y, *b * a.z)
});

impl_binop!(Div, div, Point3<T>, T, Point3<T>, |a, b| {
    a.scaled_by_real(num::promoted_reciprocal(*b))
});

impl_binop_assign!(AddAssign, add_assign, Point3<T>, Vector3<T>, |a, b| {
    b.check_no_nans();
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Point3<T>, Vector3<T>, |a, b| {
    b.check_no_nans();
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(AddAssign, add_assign, Point3<T>, Point3<T>, |a, b| {
    b.check_no_nans();
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Point3<T>, T, |a, b| {
    a.x *= *b;
    a.y *= *b;
    a.z *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Point3<T>, T, |a, b| {
    *a = a.scaled_by_real(num::promoted_reciprocal(*b));
});

impl_scalar_lhs_mul!(Point3; f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl_neg!(Point3);

impl_component_index!(Point3);

impl_component_display!(Point3);

impl_abs_diff_eq!(Point3<T>, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon) && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Point3<T>, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});
