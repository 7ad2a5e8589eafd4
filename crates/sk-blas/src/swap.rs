//! Interchange two strided vectors.

use sk_core::strided::stride2offset;
use sk_core::{Size, Storage, Stride};

/// Interchange `x` and `y` element-wise, deriving both offsets from the
/// stride signs. Returns `y`.
///
/// ```
/// use sk_blas::gswap;
///
/// let mut x = vec![1.0, 2.0, 3.0];
/// let mut y = vec![4.0, 5.0, 6.0];
/// gswap(3, &mut x, 1, &mut y, -1);
/// assert_eq!(x, vec![6.0, 5.0, 4.0]);
/// assert_eq!(y, vec![3.0, 2.0, 1.0]);
/// ```
pub fn gswap<'y, X, Y>(
    n: Size,
    x: &mut X,
    stride_x: Stride,
    y: &'y mut Y,
    stride_y: Stride,
) -> &'y mut Y
where
    X: Storage + ?Sized,
    Y: Storage<Elem = X::Elem> + ?Sized,
{
    gswap_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
    )
}

/// Interchange `x` and `y` element-wise using explicit offsets. Returns `y`.
///
/// # Panics
/// Panics if either vector addresses an element outside its buffer.
pub fn gswap_ndarray<'y, X, Y>(
    n: Size,
    x: &mut X,
    stride_x: Stride,
    offset_x: Size,
    y: &'y mut Y,
    stride_y: Stride,
    offset_y: Size,
) -> &'y mut Y
where
    X: Storage + ?Sized,
    Y: Storage<Elem = X::Elem> + ?Sized,
{
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        let tmp = x.get(ix as usize);
        x.set(ix as usize, y.get(iy as usize));
        y.set(iy as usize, tmp);
        ix += stride_x;
        iy += stride_y;
    }
    y
}
