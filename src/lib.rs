//! Affine points, displacement vectors and axis-aligned bounding boxes.
//!
//! The types are generic over their component type, which can be any
//! primitive floating point or integral type (see [`Scalar`]). Lengths,
//! distances and the reciprocals used for division are always computed in
//! floating point, even for integral components.
//!
//! Invalid input (NaN components, zero divisors and out-of-range indices) is
//! treated as a broken precondition rather than a recoverable error. See
//! [`precondition`] for when violations are detected.

#[macro_use]
pub mod precondition;
#[macro_use]
mod macros;

pub mod bounds;
pub mod num;
pub mod point;
pub mod vector;

pub use bounds::{Bounds3, union, union_point};
pub use num::Scalar;
pub use point::Point3;
pub use vector::Vector3;

pub type Vector3f = Vector3<f32>;
pub type Vector3i = Vector3<i32>;
pub type Point3f = Point3<f32>;
pub type Point3i = Point3<i32>;
pub type Bounds3f = Bounds3<f32>;
pub type Bounds3i = Bounds3<i32>;
