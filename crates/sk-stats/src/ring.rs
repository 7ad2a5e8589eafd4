//! Fixed-capacity circular buffer shared by the moving-window accumulators.
//!
//! Slots start out as `0.0`. The accumulators read [`RingBuffer::outgoing`]
//! before calling [`RingBuffer::push`], so the value leaving the window is
//! always available to the update rule.

use sk_core::{ensure, Real, Result, Size};

/// Circular buffer holding the last `window` samples.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    slots: Vec<Real>,
    next: Size,
    seen: u64,
}

impl RingBuffer {
    /// A buffer of `window` zeroed slots.
    pub fn new(window: Size) -> Result<Self> {
        ensure!(window > 0, "window size must be positive, got {window}");
        Ok(Self {
            slots: vec![0.0; window],
            next: 0,
            seen: 0,
        })
    }

    /// Number of slots.
    pub fn window(&self) -> Size {
        self.slots.len()
    }

    /// Slot the next sample is written to.
    pub fn next_slot(&self) -> Size {
        self.next
    }

    /// Value that the next [`push`](Self::push) overwrites.
    ///
    /// Only meaningful once the buffer [`is_full`](Self::is_full); before
    /// that it is an initial `0.0`.
    pub fn outgoing(&self) -> Real {
        self.slots[self.next]
    }

    /// Total number of samples pushed since construction or the last reset.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    /// Number of slots holding real samples.
    pub fn filled(&self) -> Size {
        self.seen.min(self.slots.len() as u64) as Size
    }

    /// Whether every slot holds a real sample.
    pub fn is_full(&self) -> bool {
        self.filled() == self.slots.len()
    }

    /// Write `x` into the next slot and advance.
    pub fn push(&mut self, x: Real) {
        self.slots[self.next] = x;
        self.next = (self.next + 1) % self.slots.len();
        self.seen += 1;
    }

    /// Every slot except the one about to be overwritten, oldest first.
    pub fn survivors(&self) -> impl Iterator<Item = Real> + '_ {
        let w = self.slots.len();
        (1..w).map(move |k| self.slots[(self.next + k) % w])
    }

    /// The samples currently in the window, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Real> + '_ {
        let w = self.slots.len();
        let start = if self.is_full() { self.next } else { 0 };
        (0..self.filled()).map(move |k| self.slots[(start + k) % w])
    }

    /// Zero every slot and forget all samples.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|v| *v = 0.0);
        self.next = 0;
        self.seen = 0;
    }
}
