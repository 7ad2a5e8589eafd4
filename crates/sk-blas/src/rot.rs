//! Application of a plane rotation to a pair of strided vectors.

use num_traits::Float;
use sk_core::strided::stride2offset;
use sk_core::{Size, Storage, Stride};

/// Apply the plane rotation `(c, s)` to `x` and `y`:
///
/// ```text
/// x_i <- c * x_i + s * y_i
/// y_i <- c * y_i - s * x_i
/// ```
///
/// Offsets are derived from the stride signs. Returns `y`.
pub fn rot<'y, T, X, Y>(
    n: Size,
    x: &mut X,
    stride_x: Stride,
    y: &'y mut Y,
    stride_y: Stride,
    c: T,
    s: T,
) -> &'y mut Y
where
    T: Float,
    X: Storage<Elem = T> + ?Sized,
    Y: Storage<Elem = T> + ?Sized,
{
    rot_ndarray(
        n,
        x,
        stride_x,
        stride2offset(n, stride_x),
        y,
        stride_y,
        stride2offset(n, stride_y),
        c,
        s,
    )
}

/// [`rot`] with explicit offsets.
///
/// # Panics
/// Panics if either vector addresses an element outside its buffer.
#[allow(clippy::too_many_arguments)]
pub fn rot_ndarray<'y, T, X, Y>(
    n: Size,
    x: &mut X,
    stride_x: Stride,
    offset_x: Size,
    y: &'y mut Y,
    stride_y: Stride,
    offset_y: Size,
    c: T,
    s: T,
) -> &'y mut Y
where
    T: Float,
    X: Storage<Elem = T> + ?Sized,
    Y: Storage<Elem = T> + ?Sized,
{
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        let xv = x.get(ix as usize);
        let yv = y.get(iy as usize);
        x.set(ix as usize, c * xv + s * yv);
        y.set(iy as usize, c * yv - s * xv);
        ix += stride_x;
        iy += stride_y;
    }
    y
}

/// Double-precision [`rot`].
pub fn drot<'y, X, Y>(
    n: Size,
    x: &mut X,
    stride_x: Stride,
    y: &'y mut Y,
    stride_y: Stride,
    c: f64,
    s: f64,
) -> &'y mut Y
where
    X: Storage<Elem = f64> + ?Sized,
    Y: Storage<Elem = f64> + ?Sized,
{
    rot(n, x, stride_x, y, stride_y, c, s)
}

/// Double-precision [`rot_ndarray`].
#[allow(clippy::too_many_arguments)]
pub fn drot_ndarray<'y, X, Y>(
    n: Size,
    x: &mut X,
    stride_x: Stride,
    offset_x: Size,
    y: &'y mut Y,
    stride_y: Stride,
    offset_y: Size,
    c: f64,
    s: f64,
) -> &'y mut Y
where
    X: Storage<Elem = f64> + ?Sized,
    Y: Storage<Elem = f64> + ?Sized,
{
    rot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, c, s)
}

/// Single-precision [`rot`].
pub fn srot<'y, X, Y>(
    n: Size,
    x: &mut X,
    stride_x: Stride,
    y: &'y mut Y,
    stride_y: Stride,
    c: f32,
    s: f32,
) -> &'y mut Y
where
    X: Storage<Elem = f32> + ?Sized,
    Y: Storage<Elem = f32> + ?Sized,
{
    rot(n, x, stride_x, y, stride_y, c, s)
}

/// Single-precision [`rot_ndarray`].
#[allow(clippy::too_many_arguments)]
pub fn srot_ndarray<'y, X, Y>(
    n: Size,
    x: &mut X,
    stride_x: Stride,
    offset_x: Size,
    y: &'y mut Y,
    stride_y: Stride,
    offset_y: Size,
    c: f32,
    s: f32,
) -> &'y mut Y
where
    X: Storage<Elem = f32> + ?Sized,
    Y: Storage<Elem = f32> + ?Sized,
{
    rot_ndarray(n, x, stride_x, offset_x, y, stride_y, offset_y, c, s)
}
