//! Utility macros for implementing operators on the generic geometric types.
//!
//! Every macro implements the operation for a type parameter `T: Scalar`, so
//! the type arguments must be written in terms of `T`.

macro_rules! impl_binop {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, $to:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<'a, T: $crate::num::Scalar> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T: $crate::num::Scalar> ::std::ops::$op<$tr> for &$tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl<'a, T: $crate::num::Scalar> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                (&self).$method(rhs)
            }
        }

        impl<T: $crate::num::Scalar> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                (&self).$method(&rhs)
            }
        }
    };
}

macro_rules! impl_binop_assign {
    ($op:ident, $method:ident, $tl:ty, $tr:ty, |$lhs:ident, $rhs:ident| $body:block) => {
        impl<T: $crate::num::Scalar> ::std::ops::$op<&$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: &$tr) {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<T: $crate::num::Scalar> ::std::ops::$op<$tr> for $tl {
            #[inline]
            fn $method(&mut self, rhs: $tr) {
                self.$method(&rhs);
            }
        }
    };
}

/// Implements negation for component types that support it (so not for
/// unsigned integers).
macro_rules! impl_neg {
    ($t:ident) => {
        impl<T> ::std::ops::Neg for &$t<T>
        where
            T: $crate::num::Scalar + ::std::ops::Neg<Output = T>,
        {
            type Output = $t<T>;

            #[inline]
            fn neg(self) -> Self::Output {
                $t::new(-self.x, -self.y, -self.z)
            }
        }

        impl<T> ::std::ops::Neg for $t<T>
        where
            T: $crate::num::Scalar + ::std::ops::Neg<Output = T>,
        {
            type Output = $t<T>;

            #[inline]
            fn neg(self) -> Self::Output {
                -&self
            }
        }
    };
}

/// Implements `scalar * value` for each listed primitive scalar type. This
/// can not be done generically because the scalar is the foreign `Self` type.
macro_rules! impl_scalar_lhs_mul {
    ($t:ident; $($s:ty),*) => {$(
        impl ::std::ops::Mul<&$t<$s>> for $s {
            type Output = $t<$s>;

            #[inline]
            fn mul(self, rhs: &$t<$s>) -> Self::Output {
                rhs * self
            }
        }

        impl ::std::ops::Mul<$t<$s>> for $s {
            type Output = $t<$s>;

            #[inline]
            fn mul(self, rhs: $t<$s>) -> Self::Output {
                rhs * self
            }
        }
    )*};
}

/// Implements `[index]` access to the `x`, `y` and `z` components.
macro_rules! impl_component_index {
    ($t:ident) => {
        impl<T: $crate::num::Scalar> ::std::ops::Index<usize> for $t<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                precondition!(index <= 2, "component index {index} out of range");
                match index {
                    0 => &self.x,
                    1 => &self.y,
                    _ => &self.z,
                }
            }
        }

        impl<T: $crate::num::Scalar> ::std::ops::IndexMut<usize> for $t<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut Self::Output {
                precondition!(index <= 2, "component index {index} out of range");
                match index {
                    0 => &mut self.x,
                    1 => &mut self.y,
                    _ => &mut self.z,
                }
            }
        }
    };
}

/// Implements `[ x, y, z ]` text rendering.
macro_rules! impl_component_display {
    ($t:ident) => {
        impl<T: $crate::num::Scalar> ::std::fmt::Display for $t<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
            }
        }
    };
}

macro_rules! impl_abs_diff_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident| $body:block) => {
        impl<T> ::approx::AbsDiffEq for $t
        where
            T: $crate::num::Scalar + ::approx::AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> Self::Epsilon {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                $body
            }
        }
    };
}

macro_rules! impl_relative_eq {
    ($t:ty, |$arg1:ident, $arg2:ident, $arg3:ident, $arg4:ident| $body:block) => {
        impl<T> ::approx::RelativeEq for $t
        where
            T: $crate::num::Scalar + ::approx::RelativeEq<Epsilon = T>,
        {
            fn default_max_relative() -> Self::Epsilon {
                T::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                let $arg1 = self;
                let $arg2 = other;
                let $arg3 = epsilon;
                let $arg4 = max_relative;
                $body
            }
        }
    };
}
