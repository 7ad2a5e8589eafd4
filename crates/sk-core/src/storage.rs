//! Element storage backends.
//!
//! Kernels are generic over [`Storage`], a minimal indexed get/set
//! capability. It is implemented for slices, arrays, `Vec`, nalgebra's
//! `DVector`, and [`Interleaved`], which exposes a flat buffer of
//! `[re, im, re, im, ...]` components as complex elements.

use nalgebra::{DVector, Scalar};
use num_complex::Complex;

use crate::errors::Result;

/// Indexed element storage.
///
/// Indices are physical element positions. Out-of-range indices panic.
pub trait Storage {
    /// Element type.
    type Elem: Copy;

    /// Number of addressable elements.
    fn len(&self) -> usize;

    /// Whether the storage has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read element `index`.
    fn get(&self, index: usize) -> Self::Elem;

    /// Overwrite element `index`.
    fn set(&mut self, index: usize, value: Self::Elem);

    /// Exchange elements `a` and `b`.
    #[inline]
    fn swap_elems(&mut self, a: usize, b: usize) {
        let tmp = self.get(a);
        self.set(a, self.get(b));
        self.set(b, tmp);
    }
}

impl<T: Copy> Storage for [T] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn swap_elems(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T: Copy, const N: usize> Storage for [T; N] {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn swap_elems(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T: Copy> Storage for Vec<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn swap_elems(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T: Scalar + Copy> Storage for DVector<T> {
    type Elem = T;

    #[inline]
    fn len(&self) -> usize {
        self.nrows()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) {
        self[index] = value;
    }

    #[inline]
    fn swap_elems(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

/// A flat buffer of interleaved real and imaginary components viewed as
/// complex elements.
///
/// Element `i` is `Complex::new(data[2i], data[2i + 1])`. Swaps and writes
/// always move both components together.
#[derive(Debug)]
pub struct Interleaved<'a, T> {
    data: &'a mut [T],
}

impl<'a, T: Copy> Interleaved<'a, T> {
    /// Wrap an interleaved buffer.
    ///
    /// Fails if the buffer holds an odd number of components.
    pub fn new(data: &'a mut [T]) -> Result<Self> {
        crate::ensure!(
            data.len() % 2 == 0,
            "interleaved buffer must hold an even number of components, got {}",
            data.len()
        );
        Ok(Self { data })
    }

    /// The underlying component buffer.
    pub fn as_components(&self) -> &[T] {
        self.data
    }

    /// Release the underlying component buffer.
    pub fn into_components(self) -> &'a mut [T] {
        self.data
    }
}

impl<T: Copy> Storage for Interleaved<'_, T> {
    type Elem = Complex<T>;

    #[inline]
    fn len(&self) -> usize {
        self.data.len() / 2
    }

    #[inline]
    fn get(&self, index: usize) -> Complex<T> {
        let k = 2 * index;
        Complex::new(self.data[k], self.data[k + 1])
    }

    #[inline]
    fn set(&mut self, index: usize, value: Complex<T>) {
        let k = 2 * index;
        self.data[k] = value.re;
        self.data[k + 1] = value.im;
    }

    #[inline]
    fn swap_elems(&mut self, a: usize, b: usize) {
        let (ka, kb) = (2 * a, 2 * b);
        self.data.swap(ka, kb);
        self.data.swap(ka + 1, kb + 1);
    }
}
