//! # sk-blas
//!
//! BLAS level-1 style kernels over strided vectors: reversal, fill, swap,
//! Givens rotation construction and application.
//!
//! Every kernel comes in two forms. The plain form takes
//! `(n, ..., stride)` and derives the starting offset from the stride sign;
//! the `_ndarray` form takes an explicit offset. Kernels that mutate a
//! buffer return it. A zero-length vector is always a no-op.
//!
//! The kernels do not validate addressing; an out-of-range element panics
//! through the storage's indexing. Use [`StridedVecMut`] to validate a
//! layout once and operate through it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Strided fill (`gfill`, `cfill`, `zfill`).
pub mod fill;

/// Strided reversal (`grev`).
pub mod rev;

/// Plane rotation application (`drot`, `srot`).
pub mod rot;

/// Givens rotation construction (`drotg`, `srotg`).
pub mod rotg;

/// Strided swap (`gswap`).
pub mod swap;

/// Bounds-checked strided views.
pub mod view;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use fill::{cfill, cfill_ndarray, gfill, gfill_ndarray, zfill, zfill_ndarray};
pub use rev::{grev, grev_ndarray};
pub use rot::{drot, drot_ndarray, rot, rot_ndarray, srot, srot_ndarray};
pub use rotg::{
    drotg, drotg_assign, rotation_from_z, rotg, rotg_assign, srotg, srotg_assign,
    GivensRotation,
};
pub use swap::{gswap, gswap_ndarray};
pub use view::StridedVecMut;
