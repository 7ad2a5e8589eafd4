//! Bounds-checked strided vector views.
//!
//! The raw kernels trust their caller. [`StridedVecMut`] validates the
//! `(len, stride, offset)` triple against the buffer once, at
//! construction, and then dispatches to those kernels.

use num_traits::Float;
use sk_core::errors::{Error, Result};
use sk_core::{ensure, Size, Storage, Strided, Stride};

use crate::fill::gfill_ndarray;
use crate::rev::grev_ndarray;
use crate::rot::rot_ndarray;
use crate::swap::gswap_ndarray;

/// A mutable strided vector over a [`Storage`] buffer whose addressing is
/// known to be in bounds.
#[derive(Debug)]
pub struct StridedVecMut<'a, S: Storage + ?Sized> {
    data: &'a mut S,
    layout: Strided,
}

impl<'a, S: Storage + ?Sized> StridedVecMut<'a, S> {
    /// View `len` elements of `data` starting at `offset` and stepping by
    /// `stride`.
    pub fn new(data: &'a mut S, len: Size, stride: Stride, offset: Size) -> Result<Self> {
        Self::with_layout(data, Strided::new(len, stride, offset))
    }

    /// View `len` elements of `data` with the offset derived from the
    /// stride sign.
    pub fn from_stride(data: &'a mut S, len: Size, stride: Stride) -> Result<Self> {
        Self::with_layout(data, Strided::from_stride(len, stride))
    }

    /// View `data` through an existing addressing descriptor.
    pub fn with_layout(data: &'a mut S, layout: Strided) -> Result<Self> {
        layout.check(data.len())?;
        Ok(Self { data, layout })
    }

    /// The addressing descriptor.
    pub fn layout(&self) -> Strided {
        self.layout
    }

    /// Number of logical elements.
    pub fn len(&self) -> Size {
        self.layout.len
    }

    /// Whether the view has no elements.
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Logical element `i`.
    pub fn get(&self, i: Size) -> Result<S::Elem> {
        self.logical(i).map(|idx| self.data.get(idx))
    }

    /// Overwrite logical element `i`.
    pub fn set(&mut self, i: Size, value: S::Elem) -> Result<()> {
        let idx = self.logical(i)?;
        self.data.set(idx, value);
        Ok(())
    }

    /// Copy the logical elements out in order.
    pub fn to_vec(&self) -> Vec<S::Elem> {
        self.layout.indices().map(|idx| self.data.get(idx)).collect()
    }

    /// Reverse the logical elements in place.
    pub fn reverse(&mut self) -> &mut Self {
        let Strided {
            len,
            stride,
            offset,
        } = self.layout;
        grev_ndarray(len, &mut *self.data, stride, offset);
        self
    }

    /// Overwrite every logical element with `value`.
    pub fn fill(&mut self, value: S::Elem) -> &mut Self {
        let Strided {
            len,
            stride,
            offset,
        } = self.layout;
        gfill_ndarray(len, value, &mut *self.data, stride, offset);
        self
    }

    /// Interchange the contents of two views of equal length.
    pub fn swap_with<T>(&mut self, other: &mut StridedVecMut<'_, T>) -> Result<()>
    where
        T: Storage<Elem = S::Elem> + ?Sized,
    {
        self.ensure_same_len(other.len())?;
        let (a, b) = (self.layout, other.layout);
        gswap_ndarray(
            a.len,
            &mut *self.data,
            a.stride,
            a.offset,
            &mut *other.data,
            b.stride,
            b.offset,
        );
        Ok(())
    }

    /// Release the underlying buffer.
    pub fn into_inner(self) -> &'a mut S {
        self.data
    }

    fn logical(&self, i: Size) -> Result<usize> {
        if i >= self.layout.len {
            return Err(Error::IndexOutOfRange {
                index: i as isize,
                size: self.layout.len,
            });
        }
        Ok(self.layout.index(i))
    }

    fn ensure_same_len(&self, other: Size) -> Result<()> {
        ensure!(
            self.len() == other,
            "strided vectors must have the same length ({} vs {other})",
            self.len()
        );
        Ok(())
    }
}

impl<'a, S> StridedVecMut<'a, S>
where
    S: Storage + ?Sized,
    S::Elem: Float,
{
    /// Apply the plane rotation `(c, s)` to this view and `other`.
    pub fn rotate_with<T>(
        &mut self,
        other: &mut StridedVecMut<'_, T>,
        c: S::Elem,
        s: S::Elem,
    ) -> Result<()>
    where
        T: Storage<Elem = S::Elem> + ?Sized,
    {
        self.ensure_same_len(other.len())?;
        let (a, b) = (self.layout, other.layout);
        rot_ndarray(
            a.len,
            &mut *self.data,
            a.stride,
            a.offset,
            &mut *other.data,
            b.stride,
            b.offset,
            c,
            s,
        );
        Ok(())
    }
}
