//! In-place reversal of a strided vector.

use sk_core::strided::stride2offset;
use sk_core::{Size, Storage, Stride};

/// Pairs swapped per iteration of the unit-stride loop.
const M: usize = 3;

/// Reverse a strided vector in place.
///
/// The starting offset is derived from the sign of `stride`. Returns `x`.
///
/// # Panics
/// Panics if the vector addresses an element outside `x`.
///
/// ```
/// use sk_blas::grev;
///
/// let mut x = vec![1.0, -2.0, 3.0, -4.0, 5.0, -6.0];
/// grev(3, &mut x, 2);
/// assert_eq!(x, vec![5.0, -2.0, 3.0, -4.0, 1.0, -6.0]);
/// ```
pub fn grev<S: Storage + ?Sized>(n: Size, x: &mut S, stride: Stride) -> &mut S {
    grev_ndarray(n, x, stride, stride2offset(n, stride))
}

/// Reverse a strided vector in place, starting at an explicit `offset`.
///
/// Logical elements `k` and `n - 1 - k` are exchanged for every
/// `k < n / 2`; the middle element of an odd-length vector is left alone.
/// Returns `x`.
///
/// # Panics
/// Panics if the vector addresses an element outside `x`.
pub fn grev_ndarray<S: Storage + ?Sized>(
    n: Size,
    x: &mut S,
    stride: Stride,
    offset: Size,
) -> &mut S {
    if n == 0 {
        return x;
    }
    let pairs = n / 2;
    let mut ix = offset as isize;
    let mut iy = ix + (n as isize - 1) * stride;

    if stride.abs() == 1 {
        let rem = pairs % M;
        for _ in 0..rem {
            x.swap_elems(ix as usize, iy as usize);
            ix += stride;
            iy -= stride;
        }
        for _ in (rem..pairs).step_by(M) {
            x.swap_elems(ix as usize, iy as usize);
            x.swap_elems((ix + stride) as usize, (iy - stride) as usize);
            x.swap_elems((ix + 2 * stride) as usize, (iy - 2 * stride) as usize);
            ix += M as isize * stride;
            iy -= M as isize * stride;
        }
        return x;
    }

    for _ in 0..pairs {
        x.swap_elems(ix as usize, iy as usize);
        ix += stride;
        iy -= stride;
    }
    x
}
