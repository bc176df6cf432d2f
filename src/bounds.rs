//! Axis-aligned bounding boxes.

use crate::{
    num::{self, Scalar},
    point::{self, Point3},
    vector::Vector3,
};
use num_traits::AsPrimitive;
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A box with faces aligned with the coordinate system axes, delimited by a
/// minimum and a maximum corner.
///
/// A box normally has `min <= max` along every axis. The exception is the
/// empty box returned by [`Bounds3::empty`] (and [`Default`]), which has `min`
/// at the largest and `max` at the smallest finite value of `T`. Taking the
/// union of the empty box with anything yields the other operand, so boxes
/// can be grown from nothing without tracking emptiness separately.
///
/// Measures like [`Bounds3::surface_area`] and [`Bounds3::volume`] do not
/// special-case the empty box and give meaningless results for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds3<T> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Scalar> Bounds3<T> {
    /// Creates the empty box.
    #[inline]
    pub fn empty() -> Self {
        let lowest = T::lowest();
        let highest = T::highest();
        Self {
            min: Point3::new(highest, highest, highest),
            max: Point3::new(lowest, lowest, lowest),
        }
    }

    /// Creates the degenerate box containing only the given point.
    #[inline]
    pub fn from_point(point: Point3<T>) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Creates the smallest box containing both given points. The points can
    /// be any two opposite corners.
    #[inline]
    pub fn new(point_a: Point3<T>, point_b: Point3<T>) -> Self {
        Self {
            min: point::min(&point_a, &point_b),
            max: point::max(&point_a, &point_b),
        }
    }

    /// Creates the smallest box containing all the given points, which is the
    /// empty box if there are none.
    pub fn aabb_for_points(points: &[Point3<T>]) -> Self {
        points
            .iter()
            .fold(Self::empty(), |aabb, point| union_point(&aabb, point))
    }

    /// Returns the box corner with the given index. Bit 0 of the index selects
    /// the minimum (0) or maximum (1) x-coordinate, bit 1 the y-coordinate and
    /// bit 2 the z-coordinate. Corner 0 is thus `min` and corner 7 is `max`.
    #[inline]
    pub fn corner(&self, corner_idx: usize) -> Point3<T> {
        precondition!(corner_idx < 8, "corner index {corner_idx} out of range");
        Point3::new(
            self[corner_idx & 1].x,
            self[(corner_idx >> 1) & 1].y,
            self[(corner_idx >> 2) & 1].z,
        )
    }

    /// Returns all eight corners, ordered by [`Bounds3::corner`] index.
    pub fn all_corners(&self) -> [Point3<T>; 8] {
        [0, 1, 2, 3, 4, 5, 6, 7].map(|idx| self.corner(idx))
    }

    /// Returns the vector from `min` to `max`.
    #[inline]
    pub fn diagonal(&self) -> Vector3<T> {
        self.max - self.min
    }

    pub fn surface_area(&self) -> T {
        let d = self.diagonal();
        T::TWO * (d.x * d.y + d.x * d.z + d.y * d.z)
    }

    pub fn volume(&self) -> T {
        let d = self.diagonal();
        d.x * d.y * d.z
    }

    /// Returns the index of the axis (0 for x, 1 for y, 2 for z) along which
    /// the box is longest.
    ///
    /// x wins only if it is strictly longer than both y and z, and y wins
    /// whenever it is strictly longer than z. A tie between x and y therefore
    /// resolves to y if y exceeds z, and to z otherwise.
    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }

    /// Linearly interpolates between `min` and `max` independently along each
    /// axis, using the matching component of `t` as the fraction.
    pub fn lerp(&self, t: &Point3<T::Real>) -> Point3<T> {
        Point3::new(
            num::lerp(t.x, self.min.x, self.max.x),
            num::lerp(t.y, self.min.y, self.max.y),
            num::lerp(t.z, self.min.z, self.max.z),
        )
    }

    /// Computes the position of `point` relative to the box, so that `min`
    /// maps to 0 and `max` to 1 along each axis. Along axes where the box has
    /// no positive extent, the raw displacement from `min` is returned
    /// instead.
    pub fn offset(&self, point: &Point3<T>) -> Vector3<T> {
        let mut offset = point - self.min;
        for dim in 0..3 {
            if self.max[dim] > self.min[dim] {
                offset[dim] /= self.max[dim] - self.min[dim];
            }
        }
        offset
    }

    /// Computes a sphere bounding the box, returned as its center and radius.
    ///
    /// The center is the midpoint of `min` and `max`. The radius is the
    /// distance from the center to `max`, or zero if the center does not lie
    /// inside the box (which is the case for the empty box).
    pub fn bounding_sphere(&self) -> (Point3<T>, T::Real) {
        let center = Point3::center_of(&self.min, &self.max);
        let radius = if self.contains_point(&center) {
            Point3::distance_between(&center, &self.max)
        } else {
            <T::Real as Scalar>::ZERO
        };
        (center, radius)
    }

    /// Whether the given point is inside this box. A point exactly on the
    /// surface of the box is considered inside.
    pub fn contains_point(&self, point: &Point3<T>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Computes the smallest box containing both this box and the given
    /// point.
    #[inline]
    pub fn union_with_point(&self, point: &Point3<T>) -> Self {
        Self {
            min: point::min(&self.min, point),
            max: point::max(&self.max, point),
        }
    }

    /// Computes the smallest box containing both this and the given box.
    #[inline]
    pub fn union_with(&self, other: &Self) -> Self {
        Self {
            min: point::min(&self.min, &other.min),
            max: point::max(&self.max, &other.max),
        }
    }

    /// Converts the box to component type `U` by casting both corners.
    ///
    /// The cast corners go through [`Bounds3::new`], so they are reordered
    /// if needed. In particular, the empty box does not stay empty.
    pub fn cast<U: Scalar>(&self) -> Bounds3<U>
    where
        T: AsPrimitive<U>,
    {
        Bounds3::new(self.min.cast(), self.max.cast())
    }
}

impl<T: Scalar> Default for Bounds3<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Computes the smallest box containing both the given box and point.
#[inline]
pub fn union_point<T: Scalar>(aabb: &Bounds3<T>, point: &Point3<T>) -> Bounds3<T> {
    aabb.union_with_point(point)
}

/// Computes the smallest box containing both given boxes.
#[inline]
pub fn union<T: Scalar>(aabb_1: &Bounds3<T>, aabb_2: &Bounds3<T>) -> Bounds3<T> {
    aabb_1.union_with(aabb_2)
}

/// Index 0 gives `min` and index 1 gives `max`.
impl<T: Scalar> Index<usize> for Bounds3<T> {
    type Output = Point3<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        precondition!(index <= 1, "corner point index {index} out of range");
        if index == 0 { &self.min } else { &self.max }
    }
}

impl<T: Scalar> IndexMut<usize> for Bounds3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        precondition!(index <= 1, "corner point index {index} out of range");
        if index == 0 {
            &mut self.min
        } else {
            &mut self.max
        }
    }
}

impl<T: Scalar> fmt::Display for Bounds3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} - {} ]", self.min, self.max)
    }
}

impl_abs_diff_eq!(Bounds3<T>, |a, b, epsilon| {
    a.min.abs_diff_eq(&b.min, epsilon) && a.max.abs_diff_eq(&b.max, epsilon)
});

impl_relative_eq!(Bounds3<T>, |a, b, epsilon, max_relative| {
    a.min.relative_eq(&b.min, epsilon, max_relative)
        && a.max.relative_eq(&b.max, epsilon, max_relative)
});
