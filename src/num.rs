//! Numbers and numerics.

use num_traits as nt;
use std::fmt::{Debug, Display};

/// Gathers traits useful for working with the component type of points,
/// vectors and bounds. Implemented for the primitive floating point and
/// integral types.
///
/// Floating point and integral types get separate implementations, so that
/// behavior like the NaN test is spelled out per numeric kind rather than
/// inferred from a single generic code path.
pub trait Scalar:
    Copy + PartialOrd + Debug + Display + Default + nt::NumAssign + 'static
{
    /// Floating point type that lengths, distances and reciprocals are
    /// computed in. This is `f32` for `f32` and all integral types, and `f64`
    /// for `f64`.
    type Real: Scalar + nt::Float;

    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;

    /// Whether the value is the floating point not-a-number sentinel. Always
    /// `false` for integral types.
    fn is_nan(self) -> bool;

    /// Converts the value to the promoted floating point type.
    fn to_real(self) -> Self::Real;

    /// Converts a value of the promoted floating point type back to this type,
    /// truncating towards zero and saturating for integral types.
    fn from_real(real: Self::Real) -> Self;

    /// The smallest finite value of the type (the most negative one for
    /// floating point types).
    fn lowest() -> Self;

    /// The largest finite value of the type.
    fn highest() -> Self;
}

macro_rules! impl_scalar_for_float {
    ($($f:ty),*) => {$(
        impl Scalar for $f {
            type Real = $f;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;

            #[inline]
            fn is_nan(self) -> bool {
                <$f>::is_nan(self)
            }

            #[inline]
            fn to_real(self) -> Self::Real {
                self
            }

            #[inline]
            fn from_real(real: Self::Real) -> Self {
                real
            }

            #[inline]
            fn lowest() -> Self {
                <$f>::MIN
            }

            #[inline]
            fn highest() -> Self {
                <$f>::MAX
            }
        }
    )*};
}

macro_rules! impl_scalar_for_integer {
    ($($i:ty),*) => {$(
        impl Scalar for $i {
            type Real = f32;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;

            #[inline]
            fn is_nan(self) -> bool {
                false
            }

            #[inline]
            #[allow(clippy::cast_lossless)]
            fn to_real(self) -> Self::Real {
                self as f32
            }

            #[inline]
            fn from_real(real: Self::Real) -> Self {
                real as $i
            }

            #[inline]
            fn lowest() -> Self {
                <$i>::MIN
            }

            #[inline]
            fn highest() -> Self {
                <$i>::MAX
            }
        }
    )*};
}

impl_scalar_for_float!(f32, f64);
impl_scalar_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Linearly interpolates between `a` (at `t = 0`) and `b` (at `t = 1`). The
/// interpolation is evaluated in the promoted floating point type.
#[inline]
pub fn lerp<T: Scalar>(t: T::Real, a: T, b: T) -> T {
    T::from_real((<T::Real as Scalar>::ONE - t) * a.to_real() + t * b.to_real())
}

/// Computes `1 / divisor` in the promoted floating point type.
#[inline]
pub(crate) fn promoted_reciprocal<T: Scalar>(divisor: T) -> T::Real {
    precondition!(divisor != T::ZERO, "division by zero");
    <T::Real as Scalar>::ONE / divisor.to_real()
}

/// Multiplies `value` with a promoted floating point factor and converts the
/// product back.
#[inline]
pub(crate) fn scale_promoted<T: Scalar>(value: T, factor: T::Real) -> T {
    T::from_real(value.to_real() * factor)
}

#[inline]
pub(crate) fn partial_min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline]
pub(crate) fn partial_max<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn float_nan_is_detected() {
        assert!(Scalar::is_nan(f32::NAN));
        assert!(Scalar::is_nan(f64::NAN));
        assert!(!Scalar::is_nan(1.0_f32));
        assert!(!Scalar::is_nan(f64::INFINITY));
    }

    #[test]
    fn integers_are_never_nan() {
        assert!(!Scalar::is_nan(0_i32));
        assert!(!Scalar::is_nan(i64::MIN));
        assert!(!Scalar::is_nan(u8::MAX));
    }

    #[test]
    fn extrema_are_finite_limits_of_the_type() {
        assert_eq!(<f32 as Scalar>::lowest(), f32::MIN);
        assert_eq!(<f32 as Scalar>::highest(), f32::MAX);
        assert!(<f64 as Scalar>::lowest().is_finite());
        assert_eq!(<i32 as Scalar>::lowest(), i32::MIN);
        assert_eq!(<i32 as Scalar>::highest(), i32::MAX);
        assert_eq!(<u16 as Scalar>::lowest(), 0);
    }

    #[test]
    fn integers_are_promoted_to_f32() {
        let real: f32 = 7_i32.to_real();
        assert_eq!(real, 7.0);
        assert_eq!(i32::from_real(3.9), 3);
        assert_eq!(i32::from_real(-3.9), -3);
    }

    #[test]
    fn f64_is_not_narrowed() {
        let value = 1.0_f64 + 1e-12;
        assert_eq!(value.to_real(), value);
    }

    #[test]
    fn lerp_hits_endpoints_and_midpoint() {
        assert_abs_diff_eq!(lerp(0.0, 2.0_f32, 6.0), 2.0);
        assert_abs_diff_eq!(lerp(1.0, 2.0_f32, 6.0), 6.0);
        assert_abs_diff_eq!(lerp(0.5, 2.0_f32, 6.0), 4.0);
        assert_eq!(lerp(0.5, 0_i32, 9), 4);
    }

    #[test]
    fn promoted_reciprocal_of_integer_is_fractional() {
        assert_abs_diff_eq!(promoted_reciprocal(4_i32), 0.25);
        assert_eq!(scale_promoted(7_i32, 0.5), 3);
    }

    #[test]
    fn partial_min_max_prefer_first_on_ties() {
        assert_eq!(partial_min(1, 2), 1);
        assert_eq!(partial_max(1, 2), 2);
        assert_eq!(partial_min(0.0_f32, -0.0).to_bits(), 0.0_f32.to_bits());
        assert_eq!(partial_max(0.0_f32, -0.0).to_bits(), 0.0_f32.to_bits());
    }

    #[cfg(checked_preconditions)]
    #[test]
    #[should_panic(expected = "division by zero")]
    fn promoted_reciprocal_of_zero_violates_precondition() {
        let _ = promoted_reciprocal(0_i32);
    }
}
