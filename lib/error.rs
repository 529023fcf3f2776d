//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! The root-search errors deliberately distinguish the three ways a search can
//! come up empty — interval exhausted without a bracket, bracket converged
//! onto a discontinuity, fewer roots than requested — since a caller may react
//! differently to each (e.g. retry with a finer scan step versus accept that
//! the spectrum ends).
//!
//! [anyhow]: https://crates.io/crates/anyhow

use thiserror::Error;

/// Returned from the root-finding primitives in [`root`][crate::root].
#[derive(Debug, Error)]
pub enum RootError {
    /// Returned when an incremental scan exhausts its interval without ever
    /// bracketing a sign change.
    #[error("no sign change found while scanning [{0}, {1}]")]
    NoSignChange(f64, f64),

    /// Returned when bisection converges inside a bracket but the residual
    /// magnitude check fails, indicating a sign-changing discontinuity (a
    /// vertical asymptote) rather than a true zero.
    #[error("bracket [{0}, {1}] converged onto a sign-changing discontinuity")]
    Discontinuity(f64, f64),

    /// Returned when an ordered search runs out of interval before counting
    /// off the requested number of roots.
    #[error("found only {found} of {requested} requested roots before the interval was exhausted")]
    IncompleteSpectrum {
        /// Number of roots asked for.
        requested: usize,
        /// Number of valid roots actually encountered.
        found: usize,
    },
}

/// Returned from the bound-state solver functions in [`solve`][crate::solve].
#[derive(Debug, Error)]
pub enum BoundError {
    /// Returned when a non-positive tolerance value is encountered.
    #[error("tolerance values must be greater than 0; got {0}")]
    BadTolerance(f64),

    /// Returned when a non-positive scan step is encountered.
    #[error("scan step must be greater than 0; got {0}")]
    BadStep(f64),

    /// Returned when a non-positive domain length is encountered.
    #[error("domain length must be greater than 0; got {0}")]
    BadDomain(f64),

    /// Returned when the grid has too few steps to propagate over.
    #[error("grid must have at least 4 steps; got {0}")]
    BadGrid(usize),

    /// Returned when a zero mode index is requested; modes count from 1.
    #[error("mode index must be at least 1; got {0}")]
    BadMode(usize),

    /// [`RootError`]
    #[error("energy search error: {0}")]
    Root(#[from] RootError),
}

impl BoundError {
    pub(crate) fn check_tolerance(tol: f64) -> Result<(), Self> {
        (tol > 0.0).then_some(()).ok_or(Self::BadTolerance(tol))
    }

    pub(crate) fn check_step(delta: f64) -> Result<(), Self> {
        (delta > 0.0).then_some(()).ok_or(Self::BadStep(delta))
    }

    pub(crate) fn check_domain(length: f64) -> Result<(), Self> {
        (length > 0.0).then_some(()).ok_or(Self::BadDomain(length))
    }

    pub(crate) fn check_grid(n: usize) -> Result<(), Self> {
        (n >= 4).then_some(()).ok_or(Self::BadGrid(n))
    }

    pub(crate) fn check_mode(N: usize) -> Result<(), Self> {
        (N >= 1).then_some(()).ok_or(Self::BadMode(N))
    }
}
