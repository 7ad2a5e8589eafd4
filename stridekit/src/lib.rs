//! # stridekit
//!
//! Strided BLAS level-1 style kernels and incremental moving-window
//! statistics.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `sk-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! stridekit = "0.1"
//! ```
//!
//! ```rust
//! use stridekit::blas::{drotg, grev};
//! use stridekit::stats::MovingMeanStdev;
//!
//! // every other element, walked backwards
//! let mut x = vec![1.0, 0.0, 2.0, 0.0, 3.0];
//! grev(3, &mut x, -2);
//! assert_eq!(x, vec![3.0, 0.0, 2.0, 0.0, 1.0]);
//!
//! let g = drotg(3.0, 4.0);
//! assert!((g.r - 5.0).abs() < 1e-12);
//!
//! let mut acc = MovingMeanStdev::new(2)?;
//! acc.update(1.0);
//! assert_eq!(acc.update(3.0).mean, 2.0);
//! # Ok::<(), stridekit::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, addressing, storage, and error definitions.
pub use sk_core as core;

/// Strided vector kernels: reverse, fill, swap, Givens rotations.
pub use sk_blas as blas;

/// Moving-window statistics and Grubbs' outlier test.
pub use sk_stats as stats;
