//! # sk-core
//!
//! Core types shared by the stridekit crates: primitive aliases, the error
//! hierarchy, strided vector addressing, and the [`Storage`] capability
//! trait the kernels are generic over.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Element storage backends.
pub mod storage;

/// Strided vector addressing.
pub mod strided;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used by the statistics accumulators.
pub type Real = f64;

/// Alias used for lengths, window sizes and physical indices.
pub type Size = usize;

/// Signed step between consecutive logical elements of a strided vector.
pub type Stride = isize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use storage::{Interleaved, Storage};
pub use strided::{stride2offset, Strided};
