//! Precondition checking.
//!
//! Operations on points, vectors and bounds have three kinds of
//! preconditions: components must not be NaN, divisors must not be zero and
//! indices must be in range. Whether violations are detected is decided once
//! for the whole crate at build time:
//!
//! - Checks are on whenever `debug_assertions` is enabled.
//! - The `unchecked` feature turns them off in debug builds.
//! - The `checked` feature turns them on in optimized builds.
//!
//! A detected violation is logged at error level and then panics. An
//! undetected violation does not cause undefined behavior, but the resulting
//! values are unspecified.

/// Whether precondition violations are detected in this build.
pub const ENABLED: bool = cfg!(checked_preconditions);

/// Reports a violation if `$condition` is false. The condition is not
/// evaluated when checks are disabled.
macro_rules! precondition {
    ($condition:expr, $($message:tt)+) => {
        if $crate::precondition::ENABLED && !$condition {
            $crate::precondition::violated(::std::format_args!($($message)+));
        }
    };
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn violated(message: std::fmt::Arguments<'_>) -> ! {
    log::error!("Precondition violated: {message}");
    panic!("Precondition violated: {message}");
}
