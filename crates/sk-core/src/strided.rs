//! Strided vector addressing.
//!
//! A strided vector is described by a logical length `n`, a signed `stride`
//! and the physical `offset` of its first logical element. Logical element
//! `i` lives at physical index `offset + i * stride`.
//!
//! Kernels come in two flavours: the plain form derives the offset from the
//! sign of the stride with [`stride2offset`], the `_ndarray` form takes the
//! offset explicitly.

use crate::errors::{Error, Result};
use crate::{Size, Stride};

/// Starting offset of a strided vector whose first logical element is at
/// the lowest address for positive strides and the highest for negative
/// ones.
///
/// Returns `0` when `stride > 0` and `(1 - n) * stride` when `stride < 0`.
/// An empty vector always starts at `0`.
///
/// ```
/// use sk_core::strided::stride2offset;
/// assert_eq!(stride2offset(4, 2), 0);
/// assert_eq!(stride2offset(4, -2), 6);
/// assert_eq!(stride2offset(0, -3), 0);
/// ```
#[inline]
pub fn stride2offset(n: Size, stride: Stride) -> Size {
    if stride > 0 || n == 0 {
        return 0;
    }
    ((1 - n as isize) * stride) as usize
}

/// Physical index of logical element `i`.
///
/// The caller guarantees the result is non-negative.
#[inline(always)]
pub fn physical_index(offset: Size, stride: Stride, i: Size) -> usize {
    (offset as isize + i as isize * stride) as usize
}

/// Addressing descriptor of a strided vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strided {
    /// Number of logical elements.
    pub len: Size,
    /// Step between consecutive logical elements.
    pub stride: Stride,
    /// Physical index of logical element 0.
    pub offset: Size,
}

impl Strided {
    /// Descriptor with an explicit offset.
    pub fn new(len: Size, stride: Stride, offset: Size) -> Self {
        Self {
            len,
            stride,
            offset,
        }
    }

    /// Descriptor whose offset is derived from the stride sign.
    pub fn from_stride(len: Size, stride: Stride) -> Self {
        Self::new(len, stride, stride2offset(len, stride))
    }

    /// Contiguous unit-stride descriptor.
    pub fn contiguous(len: Size) -> Self {
        Self::new(len, 1, 0)
    }

    /// Number of logical elements.
    pub fn len(&self) -> Size {
        self.len
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Physical index of logical element `i`, which may be negative when the
    /// descriptor does not fit its buffer.
    #[inline]
    pub fn signed_index(&self, i: Size) -> isize {
        self.offset as isize + i as isize * self.stride
    }

    /// Physical index of logical element `i`.
    ///
    /// # Panics
    /// Panics in debug builds if the index is negative.
    #[inline]
    pub fn index(&self, i: Size) -> usize {
        let idx = self.signed_index(i);
        debug_assert!(idx >= 0, "negative physical index {idx}");
        idx as usize
    }

    /// Physical index of the first logical element, or `None` if empty.
    pub fn first(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.index(0))
    }

    /// Physical index of the last logical element, or `None` if empty.
    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.index(self.len - 1))
    }

    /// Physical indices in logical order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |i| self.index(i))
    }

    /// Check that every addressed element lies inside a buffer of
    /// `capacity` elements.
    ///
    /// Only the two extreme logical elements are inspected, so the cost is
    /// independent of the vector length.
    pub fn check(&self, capacity: Size) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        crate::ensure!(
            self.stride != 0 || self.len == 1,
            "stride must be nonzero for a vector of {} elements",
            self.len
        );
        let first = self.signed_index(0);
        let last = self.signed_index(self.len - 1);
        let (lo, hi) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };
        if lo < 0 {
            return Err(Error::IndexOutOfRange {
                index: lo,
                size: capacity,
            });
        }
        if hi as usize >= capacity {
            return Err(Error::IndexOutOfRange {
                index: hi,
                size: capacity,
            });
        }
        Ok(())
    }
}
