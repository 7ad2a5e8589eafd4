//! Moving-window Grubbs' test for outliers.
//!
//! Every full window is tested for a single outlier under the assumption
//! that the data are normally distributed. The test statistic is
//!
//! ```text
//! G = max(max - mean, mean - min) / sd      (two-sided)
//! G = (mean - min) / sd                     (minimum)
//! G = (max - mean) / sd                     (maximum)
//! ```
//!
//! and the null hypothesis of no outliers is rejected when `G` exceeds
//!
//! ```text
//! G_crit = (W - 1) / sqrt(W) * sqrt(t^2 / (W - 2 + t^2))
//! ```
//!
//! where `t` is the upper `alpha / (2W)` (two-sided) or `alpha / W`
//! (one-sided) quantile of Student's t-distribution with `W - 2` degrees of
//! freedom. The critical value depends only on the window and the options,
//! so it is computed once at construction.

use std::fmt;

use sk_core::{ensure, fail, Real, Result, Size};
use tracing::debug;

use crate::mmeanstdev::Moments;
use crate::mminmax::Extrema;
use crate::ring::RingBuffer;
use crate::student_t::StudentTDistribution;

/// Alternative hypothesis of the test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// Either the minimum or the maximum is an outlier.
    #[default]
    TwoSided,
    /// The minimum is an outlier.
    Min,
    /// The maximum is an outlier.
    Max,
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alternative::TwoSided => "two-sided",
            Alternative::Min => "min",
            Alternative::Max => "max",
        })
    }
}

/// Test configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrubbsOptions {
    /// Significance level, in `(0, 1)`.
    pub alpha: Real,
    /// Alternative hypothesis.
    pub alternative: Alternative,
}

impl Default for GrubbsOptions {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            alternative: Alternative::TwoSided,
        }
    }
}

impl GrubbsOptions {
    /// Set the significance level.
    pub fn with_alpha(mut self, alpha: Real) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the alternative hypothesis.
    pub fn with_alternative(mut self, alternative: Alternative) -> Self {
        self.alternative = alternative;
        self
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.alpha > 0.0 && self.alpha < 1.0,
            "significance level must be in (0, 1), got {}",
            self.alpha
        );
        Ok(())
    }
}

/// Outcome of testing one window.
#[derive(Debug, Clone, PartialEq)]
pub struct GrubbsResults {
    /// Whether the null hypothesis of no outliers is rejected.
    pub rejected: bool,
    /// Significance level.
    pub alpha: Real,
    /// Critical value of the test statistic.
    pub critical_value: Real,
    /// Test statistic.
    pub statistic: Real,
    /// Degrees of freedom, `W - 2`.
    pub df: Size,
    /// Window mean.
    pub mean: Real,
    /// Corrected window standard deviation.
    pub sd: Real,
    /// Window minimum.
    pub min: Real,
    /// Window maximum.
    pub max: Real,
    /// Alternative hypothesis.
    pub alternative: Alternative,
}

impl fmt::Display for GrubbsResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grubbs' Test")?;
        writeln!(f)?;
        let alt = match self.alternative {
            Alternative::TwoSided => "the minimum or maximum value is an outlier",
            Alternative::Min => "the minimum value is an outlier",
            Alternative::Max => "the maximum value is an outlier",
        };
        writeln!(f, "Alternative hypothesis: {alt}")?;
        writeln!(f)?;
        writeln!(f, "    critical value: {:.4}", self.critical_value)?;
        writeln!(f, "    statistic: {:.4}", self.statistic)?;
        writeln!(f, "    df: {}", self.df)?;
        writeln!(f)?;
        let verdict = if self.rejected { "Reject" } else { "Fail to reject" };
        write!(
            f,
            "Test Decision: {verdict} null in favor of alternative at {}% significance level",
            (self.alpha * 1e4).round() / 100.0
        )
    }
}

/// Critical value of Grubbs' statistic for a window of `window` samples.
///
/// ```
/// use sk_stats::{grubbs_critical_value, Alternative};
///
/// let g = grubbs_critical_value(10, 0.05, Alternative::TwoSided)?;
/// assert!((g - 2.290).abs() < 1e-3);
/// # Ok::<(), sk_core::Error>(())
/// ```
pub fn grubbs_critical_value(window: Size, alpha: Real, alternative: Alternative) -> Result<Real> {
    ensure!(window >= 3, "window size must be at least 3, got {window}");
    GrubbsOptions { alpha, alternative }.validate()?;
    let w = window as Real;
    let p = match alternative {
        Alternative::TwoSided => 1.0 - alpha / (2.0 * w),
        Alternative::Min | Alternative::Max => 1.0 - alpha / w,
    };
    if p >= 1.0 {
        fail!("alpha {alpha} is too small for a window of {window}: quantile probability rounds to 1");
    }
    let t = StudentTDistribution::new(w - 2.0)?.inverse_cdf(p)?;
    let t2 = t * t;
    Ok((w - 1.0) / w.sqrt() * (t2 / (w - 2.0 + t2)).sqrt())
}

/// Grubbs' test run over a moving window.
///
/// Yields nothing until the window has filled, then one [`GrubbsResults`]
/// per sample.
///
/// ```
/// use sk_stats::MovingGrubbs;
///
/// let mut test = MovingGrubbs::new(5)?;
/// let mut last = None;
/// for x in [1.0, 2.0, 3.0, 4.0, 100.0] {
///     last = test.update(x);
/// }
/// assert!(last.unwrap().rejected);
/// # Ok::<(), sk_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct MovingGrubbs {
    ring: RingBuffer,
    moments: Moments,
    extrema: Extrema,
    options: GrubbsOptions,
    critical_value: Real,
}

impl MovingGrubbs {
    /// Two-sided test at the 5% level.
    pub fn new(window: Size) -> Result<Self> {
        Self::with_options(window, GrubbsOptions::default())
    }

    /// Test with explicit options. Fails if `window < 3` or `alpha` is
    /// outside `(0, 1)`.
    pub fn with_options(window: Size, options: GrubbsOptions) -> Result<Self> {
        let critical_value = grubbs_critical_value(window, options.alpha, options.alternative)?;
        debug!(
            window,
            alpha = options.alpha,
            alternative = %options.alternative,
            critical_value,
            "moving Grubbs' test configured"
        );
        Ok(Self {
            ring: RingBuffer::new(window)?,
            moments: Moments::new(),
            extrema: Extrema::new(),
            options,
            critical_value,
        })
    }

    /// Add a sample. Returns the test outcome for the updated window once
    /// `window` samples have been seen.
    pub fn update(&mut self, x: Real) -> Option<GrubbsResults> {
        self.moments.step(x, &self.ring);
        self.extrema.step(x, &self.ring);
        self.ring.push(x);
        let results = self.results()?;
        if results.rejected {
            debug!(
                statistic = results.statistic,
                critical_value = results.critical_value,
                min = results.min,
                max = results.max,
                "Grubbs' test rejected the null hypothesis"
            );
        }
        Some(results)
    }

    /// Outcome for the current window, or `None` while it is filling.
    pub fn results(&self) -> Option<GrubbsResults> {
        if !self.ring.is_full() {
            return None;
        }
        let ms = self.moments.value();
        let mm = self.extrema.value();
        let statistic = match self.options.alternative {
            Alternative::TwoSided => (mm.max - ms.mean).max(ms.mean - mm.min) / ms.stdev,
            Alternative::Min => (ms.mean - mm.min) / ms.stdev,
            Alternative::Max => (mm.max - ms.mean) / ms.stdev,
        };
        Some(GrubbsResults {
            rejected: statistic > self.critical_value,
            alpha: self.options.alpha,
            critical_value: self.critical_value,
            statistic,
            df: self.ring.window() - 2,
            mean: ms.mean,
            sd: ms.stdev,
            min: mm.min,
            max: mm.max,
            alternative: self.options.alternative,
        })
    }

    /// Window size.
    pub fn window(&self) -> Size {
        self.ring.window()
    }

    /// Test configuration.
    pub fn options(&self) -> GrubbsOptions {
        self.options
    }

    /// Critical value every window is compared against.
    pub fn critical_value(&self) -> Real {
        self.critical_value
    }

    /// Forget all samples.
    pub fn reset(&mut self) {
        self.ring.reset();
        self.moments = Moments::new();
        self.extrema = Extrema::new();
    }
}
