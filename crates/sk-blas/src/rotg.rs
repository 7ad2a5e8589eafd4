//! Construction of a Givens plane rotation.
//!
//! Given the components `(a, b)` of a 2-vector, [`rotg`] computes the
//! rotation `(c, s)` and the magnitude `r` such that
//!
//! ```text
//! [  c  s ] [ a ]   [ r ]
//! [ -s  c ] [ b ] = [ 0 ]
//! ```
//!
//! together with the reconstruction value `z` used by BLAS to store `c` and
//! `s` in a single slot (see [`rotation_from_z`]).

use num_traits::Float;
use sk_core::{Size, Storage, Stride};

/// The output of [`rotg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GivensRotation<T> {
    /// Signed magnitude of `(a, b)`.
    pub r: T,
    /// Reconstruction value from which `c` and `s` can be recovered.
    pub z: T,
    /// Cosine of the rotation angle.
    pub c: T,
    /// Sine of the rotation angle.
    pub s: T,
}

impl<T: Copy> GivensRotation<T> {
    /// The result as `[r, z, c, s]`.
    pub fn to_array(self) -> [T; 4] {
        [self.r, self.z, self.c, self.s]
    }
}

/// Construct a Givens plane rotation.
///
/// The sign of `r` follows `a` when `|a| > |b|` and `b` otherwise, so equal
/// magnitudes favour `b`. Both inputs are scaled by `|a| + |b|` before
/// squaring to avoid premature overflow and underflow. When `a` and `b` are
/// both zero the identity rotation `(r, z, c, s) = (0, 0, 1, 0)` is
/// returned. NaN inputs produce an all-NaN result.
///
/// ```
/// use sk_blas::rotg;
///
/// let g = rotg(0.3_f64, 0.4);
/// assert!((g.r - 0.5).abs() < 1e-15);
/// assert!((g.c - 0.6).abs() < 1e-15);
/// assert!((g.s - 0.8).abs() < 1e-15);
/// ```
pub fn rotg<T: Float>(a: T, b: T) -> GivensRotation<T> {
    let aa = a.abs();
    let ab = b.abs();
    let sign = if aa > ab {
        T::one().copysign(a)
    } else {
        T::one().copysign(b)
    };
    let scale = aa + ab;
    if scale == T::zero() {
        return GivensRotation {
            r: T::zero(),
            z: T::zero(),
            c: T::one(),
            s: T::zero(),
        };
    }
    let sa = a / scale;
    let sb = b / scale;
    let r = scale * (sa * sa + sb * sb).sqrt() * sign;
    let c = a / r;
    let s = b / r;
    let z = if aa > ab {
        s
    } else if c != T::zero() {
        T::one() / c
    } else {
        T::one()
    };
    GivensRotation { r, z, c, s }
}

/// Double-precision [`rotg`].
pub fn drotg(a: f64, b: f64) -> GivensRotation<f64> {
    rotg(a, b)
}

/// Single-precision [`rotg`].
pub fn srotg(a: f32, b: f32) -> GivensRotation<f32> {
    rotg(a, b)
}

/// Construct a Givens rotation and write `r`, `z`, `c`, `s` to `out` at
/// `offset`, `offset + stride`, `offset + 2*stride` and `offset + 3*stride`.
/// Returns `out`.
///
/// # Panics
/// Panics if any of the four slots lies outside `out`.
pub fn rotg_assign<T, S>(a: T, b: T, out: &mut S, stride: Stride, offset: Size) -> &mut S
where
    T: Float,
    S: Storage<Elem = T> + ?Sized,
{
    let g = rotg(a, b);
    let mut io = offset as isize;
    for v in g.to_array() {
        out.set(io as usize, v);
        io += stride;
    }
    out
}

/// Double-precision [`rotg_assign`].
pub fn drotg_assign<S>(a: f64, b: f64, out: &mut S, stride: Stride, offset: Size) -> &mut S
where
    S: Storage<Elem = f64> + ?Sized,
{
    rotg_assign(a, b, out, stride, offset)
}

/// Single-precision [`rotg_assign`].
pub fn srotg_assign<S>(a: f32, b: f32, out: &mut S, stride: Stride, offset: Size) -> &mut S
where
    S: Storage<Elem = f32> + ?Sized,
{
    rotg_assign(a, b, out, stride, offset)
}

/// Recover `(c, s)` from the reconstruction value `z`.
///
/// - `|z| < 1`: `s = z`, `c = sqrt(1 - z^2)`
/// - `|z| == 1`: `c = 0`, `s = 1`
/// - `|z| > 1`: `c = 1/z`, `s = sqrt(1 - c^2)`
pub fn rotation_from_z<T: Float>(z: T) -> (T, T) {
    let az = z.abs();
    if az < T::one() {
        ((T::one() - z * z).sqrt(), z)
    } else if az == T::one() {
        (T::zero(), T::one())
    } else {
        let c = T::one() / z;
        (c, (T::one() - c * c).sqrt())
    }
}
