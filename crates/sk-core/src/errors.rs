//! Error types for stridekit.
//!
//! The raw kernels never fail: empty vectors are no-ops and NaN propagates
//! through the arithmetic. Errors only come from the validating layer
//! (checked views, accumulator constructors), which use the `ensure!` and
//! `fail!` macros defined here.

use thiserror::Error;

/// The top-level error type used throughout stridekit.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A strided vector addresses memory outside its buffer.
    #[error("index ({index}) out of range [0, {size})")]
    IndexOutOfRange {
        /// The physical index that was out of range.
        index: isize,
        /// The number of elements in the buffer.
        size: usize,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout stridekit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use sk_core::{ensure, errors::Error};
/// fn window(w: usize) -> sk_core::errors::Result<usize> {
///     ensure!(w > 0, "window size must be positive, got {w}");
///     Ok(w)
/// }
/// assert!(window(3).is_ok());
/// assert!(window(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use sk_core::{fail, errors::Error};
/// fn always_err() -> sk_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
