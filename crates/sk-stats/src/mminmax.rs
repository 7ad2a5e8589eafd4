//! Moving minimum and maximum.
//!
//! Signed zeros are ordered: `-0.0` wins the minimum over `+0.0` and `+0.0`
//! wins the maximum over `-0.0`. When the sample leaving the window is bit
//! for bit the current minimum or maximum, the extrema are recomputed from
//! the window; otherwise only the incoming sample is compared.

use sk_core::{Real, Result, Size};
use tracing::{debug, trace};

use crate::ring::RingBuffer;

/// Extrema of a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    /// Smallest sample.
    pub min: Real,
    /// Largest sample.
    pub max: Real,
}

#[derive(Debug, Clone)]
pub(crate) struct Extrema {
    n: Size,
    min: Real,
    max: Real,
}

fn lower(x: Real, min: Real) -> bool {
    x < min || (x == min && x.is_sign_negative())
}

fn higher(x: Real, max: Real) -> bool {
    x > max || (x == max && x.is_sign_positive())
}

impl Extrema {
    pub(crate) fn new() -> Self {
        Self {
            n: 0,
            min: Real::INFINITY,
            max: Real::NEG_INFINITY,
        }
    }

    fn absorb(&mut self, x: Real) {
        if lower(x, self.min) {
            self.min = x;
        }
        if higher(x, self.max) {
            self.max = x;
        }
    }

    fn poison(&mut self, w: Size) {
        self.n = w;
        self.min = Real::NAN;
        self.max = Real::NAN;
    }

    /// Fold `x` into the extrema before `ring` is advanced.
    pub(crate) fn step(&mut self, x: Real, ring: &RingBuffer) {
        let w = ring.window();
        if x.is_nan() {
            if !self.min.is_nan() {
                debug!(window = w, "NaN sample, moving min/max poisoned");
            }
            self.poison(w);
        } else if self.n < w {
            self.n += 1;
            self.absorb(x);
        } else if w == 1 {
            self.min = x;
            self.max = x;
        } else {
            let old = ring.outgoing();
            let evicts_extremum =
                old.to_bits() == self.min.to_bits() || old.to_bits() == self.max.to_bits();
            if old.is_nan() || (!self.min.is_nan() && evicts_extremum) {
                self.recompute(x, ring);
            } else if !self.min.is_nan() {
                self.absorb(x);
            }
        }
    }

    fn recompute(&mut self, x: Real, ring: &RingBuffer) {
        self.min = x;
        self.max = x;
        for v in ring.survivors() {
            if v.is_nan() {
                trace!("window still holds a NaN sample");
                self.poison(ring.window());
                return;
            }
            self.absorb(v);
        }
        trace!(min = self.min, max = self.max, "moving min/max recomputed");
    }

    pub(crate) fn value(&self) -> MinMax {
        MinMax {
            min: self.min,
            max: self.max,
        }
    }
}

/// Moving minimum and maximum over the last `window` samples.
#[derive(Debug, Clone)]
pub struct MovingMinMax {
    ring: RingBuffer,
    extrema: Extrema,
}

impl MovingMinMax {
    /// An empty accumulator. Fails if `window` is zero.
    pub fn new(window: Size) -> Result<Self> {
        Ok(Self {
            ring: RingBuffer::new(window)?,
            extrema: Extrema::new(),
        })
    }

    /// Add a sample and return the extrema of the updated window.
    pub fn update(&mut self, x: Real) -> MinMax {
        self.extrema.step(x, &self.ring);
        self.ring.push(x);
        self.extrema.value()
    }

    /// Current extrema, or `None` before the first sample.
    pub fn value(&self) -> Option<MinMax> {
        (self.ring.seen() > 0).then(|| self.extrema.value())
    }

    /// Window size.
    pub fn window(&self) -> Size {
        self.ring.window()
    }

    /// Forget all samples.
    pub fn reset(&mut self) {
        self.ring.reset();
        self.extrema = Extrema::new();
    }
}
