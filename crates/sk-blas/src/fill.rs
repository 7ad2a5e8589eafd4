//! Fill a strided vector with a constant.
//!
//! [`gfill`] works on any element type. [`cfill`] and [`zfill`] are the
//! single- and double-precision complex variants; they accept both slices of
//! `Complex<T>` and [`Interleaved`](sk_core::Interleaved) component buffers.

use num_complex::{Complex32, Complex64};
use sk_core::strided::stride2offset;
use sk_core::{Size, Storage, Stride};

/// Fill a strided vector with `alpha`, deriving the offset from the stride
/// sign. Returns `x`.
///
/// ```
/// use sk_blas::gfill;
///
/// let mut x = vec![1.0, 2.0, 3.0, 4.0];
/// gfill(2, 5.0, &mut x, 2);
/// assert_eq!(x, vec![5.0, 2.0, 5.0, 4.0]);
/// ```
pub fn gfill<S: Storage + ?Sized>(n: Size, alpha: S::Elem, x: &mut S, stride: Stride) -> &mut S {
    gfill_ndarray(n, alpha, x, stride, stride2offset(n, stride))
}

/// Fill a strided vector with `alpha`, starting at `offset`. Returns `x`.
///
/// Elements outside the addressed positions are neither read nor written.
///
/// # Panics
/// Panics if the vector addresses an element outside `x`.
pub fn gfill_ndarray<S: Storage + ?Sized>(
    n: Size,
    alpha: S::Elem,
    x: &mut S,
    stride: Stride,
    offset: Size,
) -> &mut S {
    let mut ix = offset as isize;
    for _ in 0..n {
        x.set(ix as usize, alpha);
        ix += stride;
    }
    x
}

/// Fill a single-precision complex strided vector with `alpha`.
pub fn cfill<S>(n: Size, alpha: Complex32, x: &mut S, stride: Stride) -> &mut S
where
    S: Storage<Elem = Complex32> + ?Sized,
{
    gfill(n, alpha, x, stride)
}

/// Fill a single-precision complex strided vector with `alpha`, starting at
/// `offset`.
pub fn cfill_ndarray<S>(
    n: Size,
    alpha: Complex32,
    x: &mut S,
    stride: Stride,
    offset: Size,
) -> &mut S
where
    S: Storage<Elem = Complex32> + ?Sized,
{
    gfill_ndarray(n, alpha, x, stride, offset)
}

/// Fill a double-precision complex strided vector with `alpha`.
pub fn zfill<S>(n: Size, alpha: Complex64, x: &mut S, stride: Stride) -> &mut S
where
    S: Storage<Elem = Complex64> + ?Sized,
{
    gfill(n, alpha, x, stride)
}

/// Fill a double-precision complex strided vector with `alpha`, starting at
/// `offset`.
pub fn zfill_ndarray<S>(
    n: Size,
    alpha: Complex64,
    x: &mut S,
    stride: Stride,
    offset: Size,
) -> &mut S
where
    S: Storage<Elem = Complex64> + ?Sized,
{
    gfill_ndarray(n, alpha, x, stride, offset)
}
