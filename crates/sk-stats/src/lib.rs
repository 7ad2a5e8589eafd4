//! # sk-stats
//!
//! Incremental statistics over a moving window of the most recent `W`
//! samples: mean and corrected standard deviation, minimum and maximum, and
//! Grubbs' outlier test built on both.
//!
//! Each accumulator owns a [`RingBuffer`](ring::RingBuffer) of `W` slots and
//! updates in O(1) per sample, falling back to an O(W) pass only when the
//! sample leaving the window invalidates the running state. A NaN sample
//! makes every result NaN for exactly the `W` windows that contain it.
//!
//! Diagnostic events (poisoning, recomputation, rejections) are emitted
//! through `tracing` at `debug` and `trace` level.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Moving Grubbs' test.
pub mod mgrubbs;

/// Moving mean and standard deviation.
pub mod mmeanstdev;

/// Moving minimum and maximum.
pub mod mminmax;

/// Circular sample buffer.
pub mod ring;

/// Student's t-distribution.
pub mod student_t;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use mgrubbs::{grubbs_critical_value, Alternative, GrubbsOptions, GrubbsResults, MovingGrubbs};
pub use mmeanstdev::{MeanStdev, MovingMeanStdev};
pub use mminmax::{MinMax, MovingMinMax};
pub use ring::RingBuffer;
pub use student_t::StudentTDistribution;
