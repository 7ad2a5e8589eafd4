//! Student's t-distribution.
//!
//! Wraps the `statrs` crate's Student-t implementation.

use sk_core::{ensure, Error, Real, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Standard Student's t-distribution with `df` degrees of freedom.
#[derive(Debug, Clone)]
pub struct StudentTDistribution {
    dist: StudentsT,
    df: Real,
}

impl StudentTDistribution {
    /// Create a Student-t distribution with the given degrees of freedom.
    pub fn new(df: Real) -> Result<Self> {
        ensure!(df > 0.0, "degrees of freedom must be positive, got {df}");
        // location=0, scale=1 (standard t-distribution)
        let dist = StudentsT::new(0.0, 1.0, df)
            .map_err(|e| Error::InvalidArgument(format!("student t({df}): {e}")))?;
        Ok(Self { dist, df })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> Real {
        self.df
    }

    /// Cumulative distribution function P(T ≤ x).
    pub fn cdf(&self, x: Real) -> Real {
        self.dist.cdf(x)
    }

    /// Inverse CDF (quantile function).
    pub fn inverse_cdf(&self, p: Real) -> Result<Real> {
        ensure!((0.0..=1.0).contains(&p), "p must be in [0, 1], got {p}");
        Ok(self.dist.inverse_cdf(p))
    }
}
