//! Displacement vectors.

use crate::{
    num::{self, Scalar},
    point::Point3,
};
use bytemuck::{Pod, Zeroable};
use num_traits::{AsPrimitive, Float};

/// A 3-dimensional displacement: a magnitude and a direction, but no
/// location.
///
/// No component may be NaN. This is verified whenever a vector is created
/// through [`Vector3::new`] or produced by an operator, as long as
/// [precondition checks](crate::precondition) are enabled. Integral
/// components can never be NaN.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// SAFETY: `Vector3` is `repr(C)` with three fields of the same `Pod` type, so
// it has no padding and every bit pattern is valid.
unsafe impl<T: Scalar + Zeroable> Zeroable for Vector3<T> {}
unsafe impl<T: Scalar + Pod> Pod for Vector3<T> {}

impl<T: Scalar> Vector3<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let vector = Self { x, y, z };
        vector.check_no_nans();
        vector
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            x: T::ZERO,
            y: T::ZERO,
            z: T::ZERO,
        }
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub fn same(value: T) -> Self {
        Self::new(value, value, value)
    }

    /// Whether any component is NaN.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Computes the squared length of the vector. Components are promoted
    /// before squaring, so integral vectors never overflow here.
    #[inline]
    pub fn length_squared(&self) -> T::Real {
        let (x, y, z) = (self.x.to_real(), self.y.to_real(), self.z.to_real());
        x * x + y * y + z * z
    }

    /// Computes the length of the vector in the promoted floating point type.
    #[inline]
    pub fn length(&self) -> T::Real {
        Float::sqrt(self.length_squared())
    }

    /// Converts the vector to component type `U` with an `as` cast of each
    /// component.
    #[inline]
    pub fn cast<U: Scalar>(&self) -> Vector3<U>
    where
        T: AsPrimitive<U>,
    {
        Vector3::new(
            AsPrimitive::<U>::as_(self.x),
            AsPrimitive::<U>::as_(self.y),
            AsPrimitive::<U>::as_(self.z),
        )
    }

    #[inline]
    pub(crate) fn check_no_nans(&self) {
        precondition!(!self.has_nans(), "NaN component in vector {self}");
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

/// Interprets the point as its displacement from the origin.
impl<T: Scalar> From<Point3<T>> for Vector3<T> {
    #[inline]
    fn from(point: Point3<T>) -> Self {
        Self::new(point.x, point.y, point.z)
    }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop!(Add, add, Vector3<T>, Vector3<T>, Vector3<T>, |a, b| {
    a.check_no_nans();
    b.check_no_nans();
    Vector3::new(a.x + b.x, a.y + b.y, a.z + b.z)
});

impl_binop!(Sub, sub, Vector3<T>, Vector3<T>, Vector3<T>, |a, b| {
    a.check_no_nans();
    b.check_no_nans();
    Vector3::new(a.x - b.x, a.y - b.y, a.z - b.z)
});

impl_binop!(Mul, mul, Vector3<T>, T, Vector3<T>, |a, b| {
    Vector3::new(*b * a.x, *b * a.y, *b * a.z)
});

impl_binop!(Div, div, Vector3<T>, T, Vector3<T>, |a, b| {
    a.scaled_by_real(num::promoted_reciprocal(*b))
});

impl_binop_assign!(AddAssign, add_assign, Vector3<T>, Vector3<T>, |a, b| {
    b.check_no_nans();
    a.x += b.x;
    a.y += b.y;
    a.z += b.z;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3<T>, Vector3<T>, |a, b| {
    b.check_no_nans();
    a.x -= b.x;
    a.y -= b.y;
    a.z -= b.z;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3<T>, T, |a, b| {
    precondition!(!b.is_nan(), "NaN scale factor for vector {a}");
    a.x *= *b;
    a.y *= *b;
    a.z *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3<T>, T, |a, b| {
    *a = a.scaled_by_real(num::promoted_reciprocal(*b));
});

impl_scalar_lhs_mul!(Vector3; f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl_neg!(Vector3);

impl_component_index!(Vector3);

impl_component_display!(Vector3);

impl_abs_diff_eq!(Vector3<T>, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon) && a.y.abs_diff_eq(&b.y, epsilon) && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3<T>, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});
