//! Moving arithmetic mean and corrected standard deviation.
//!
//! Welford's algorithm over a sliding window. While the window fills, each
//! sample is a one-pass update; once full, the outgoing sample is swapped
//! for the incoming one in O(1).
//!
//! A NaN sample poisons the accumulator: the mean and `M2` become NaN and
//! stay NaN until that sample slides out of the window, at which point the
//! state is rebuilt from the surviving slots. Infinite samples recover the
//! same way.

use sk_core::{Real, Result, Size};
use tracing::{debug, trace};

use crate::ring::RingBuffer;

/// Mean and corrected (`N - 1`) standard deviation of a window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanStdev {
    /// Arithmetic mean.
    pub mean: Real,
    /// Corrected sample standard deviation; `0` for a single sample.
    pub stdev: Real,
}

/// Running first and second moments of the current window.
#[derive(Debug, Clone)]
pub(crate) struct Moments {
    n: Size,
    mean: Real,
    m2: Real,
}

impl Moments {
    pub(crate) fn new() -> Self {
        Self {
            n: 0,
            mean: 0.0,
            m2: 0.0,
        }
    }

    pub(crate) fn count(&self) -> Size {
        self.n
    }

    pub(crate) fn is_poisoned(&self) -> bool {
        self.mean.is_nan()
    }

    /// Fold `x` into the moments. `ring` must not have been advanced yet:
    /// its next slot still holds the sample leaving the window.
    pub(crate) fn step(&mut self, x: Real, ring: &RingBuffer) {
        let w = ring.window();
        if x.is_nan() {
            if !self.is_poisoned() {
                debug!(window = w, "NaN sample, moving mean/stdev poisoned");
            }
            self.poison(w);
        } else if self.n < w {
            self.n += 1;
            let delta = x - self.mean;
            self.mean += delta / self.n as Real;
            self.m2 += delta * (x - self.mean);
        } else if w == 1 {
            self.mean = x;
            self.m2 = 0.0;
        } else {
            let old = ring.outgoing();
            if !old.is_finite() || x.is_infinite() {
                self.recompute(x, ring);
            } else if self.mean.is_finite() && self.m2.is_finite() {
                let delta = x - old;
                let d1 = old - self.mean;
                self.mean += delta / w as Real;
                let d2 = x - self.mean;
                self.m2 += delta * (d1 + d2);
                if self.m2 < 0.0 {
                    self.m2 = 0.0;
                }
            }
            // otherwise a non-finite sample is still inside the window and
            // the state already reflects it
        }
    }

    fn poison(&mut self, w: Size) {
        self.n = w;
        self.mean = Real::NAN;
        self.m2 = Real::NAN;
    }

    fn recompute(&mut self, x: Real, ring: &RingBuffer) {
        self.n = 1;
        self.mean = x;
        self.m2 = 0.0;
        for v in ring.survivors() {
            if v.is_nan() {
                trace!("window still holds a NaN sample");
                self.poison(ring.window());
                return;
            }
            self.n += 1;
            let delta = v - self.mean;
            self.mean += delta / self.n as Real;
            self.m2 += delta * (v - self.mean);
        }
        trace!(mean = self.mean, m2 = self.m2, "moving mean/stdev recomputed");
    }

    pub(crate) fn value(&self) -> MeanStdev {
        // a window of one sample has no spread, even a NaN one
        let stdev = if self.n > 1 {
            (self.m2 / (self.n - 1) as Real).sqrt()
        } else {
            0.0
        };
        MeanStdev {
            mean: self.mean,
            stdev,
        }
    }
}

/// Moving mean and standard deviation over the last `window` samples.
///
/// ```
/// use sk_stats::MovingMeanStdev;
///
/// let mut acc = MovingMeanStdev::new(3)?;
/// assert_eq!(acc.update(2.0).mean, 2.0);
/// acc.update(-5.0);
/// let v = acc.update(3.0);
/// assert_eq!(v.mean, 0.0);
/// assert!((v.stdev - 19.0_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), sk_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MovingMeanStdev {
    ring: RingBuffer,
    moments: Moments,
}

impl MovingMeanStdev {
    /// An empty accumulator. Fails if `window` is zero.
    pub fn new(window: Size) -> Result<Self> {
        Ok(Self {
            ring: RingBuffer::new(window)?,
            moments: Moments::new(),
        })
    }

    /// Add a sample and return the statistics of the updated window.
    pub fn update(&mut self, x: Real) -> MeanStdev {
        self.moments.step(x, &self.ring);
        self.ring.push(x);
        self.moments.value()
    }

    /// Current statistics, or `None` before the first sample.
    pub fn value(&self) -> Option<MeanStdev> {
        (self.ring.seen() > 0).then(|| self.moments.value())
    }

    /// Window size.
    pub fn window(&self) -> Size {
        self.ring.window()
    }

    /// Number of samples the current statistics cover. Pinned to the
    /// window size while poisoned.
    pub fn count(&self) -> Size {
        self.moments.count()
    }

    /// Forget all samples.
    pub fn reset(&mut self) {
        self.ring.reset();
        self.moments = Moments::new();
    }
}
