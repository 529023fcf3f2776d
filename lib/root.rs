//! Closed root-search methods on scalar functions, tolerant of sign-changing
//! discontinuities.
//!
//! The quantization condition probed by the shooting method is only available
//! implicitly, as the mismatch of two one-sided Numerov integrations, and it
//! generally carries vertical asymptotes with sign changes in addition to its
//! true zeros. The search combines an incremental bracketing scan with
//! bisection refinement, plus a residual magnitude check that tells a zero
//! from an asymptote: when the bracket has shrunk below tolerance, a true root
//! leaves the function small while a pole leaves it large.
//!
//! Closed methods are used (rather than open ones like Newton or secant steps)
//! because the scan must visit roots *in order*; see [`scan_nth`].
//!
//! ```
//! use xbound::root::scan_first;
//!
//! let f = |x: f64| (x + 3.0) * (x - 0.5) * (x - 2.0);
//! let r = scan_first(f, 0.0, 3.0, 1e-3, 1e-6, 1e2).unwrap();
//! assert!((r - 0.5).abs() < 1e-5);
//! ```

use crate::{ DEF_DELTA_X, DEF_FACTOR_TY, DEF_TOL_X, error::RootError };

pub type RootResult<T> = Result<T, RootError>;

/// Knobs for the root search over energy.
///
/// `delta_x` trades cost for completeness: it must be small relative to the
/// spacing of adjacent roots or closely spaced roots are stepped over. This is
/// a caller-supplied trade-off and is not validated here.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerances {
    /// Root-value tolerance (default: `1e-6`).
    pub tol_x: f64,
    /// Discontinuity-rejection multiplier (default: `1e2`).
    ///
    /// A converged bracket midpoint `c` is accepted as a root only if
    /// `|f(c)| < tol_x * factor_ty`; the threshold is empirical and may need
    /// per-problem validation.
    pub factor_ty: f64,
    /// Incremental scan step (default: `1e-4`).
    pub delta_x: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            tol_x: DEF_TOL_X,
            factor_ty: DEF_FACTOR_TY,
            delta_x: DEF_DELTA_X,
        }
    }
}

/// Refine a root of `f` inside `[a, b]` by bisection, rejecting sign-changing
/// discontinuities.
///
/// Endpoints are checked first: if `|f(a)| < tol_x` (resp. `b`), that endpoint
/// is returned immediately. Otherwise the bracket is bisected until either the
/// midpoint value or the bracket width falls below `tol_x`. The converged
/// midpoint is accepted only if `|f(c)| < tol_x * factor_ty`; near a pole the
/// function magnitude stays large even as the bracket shrinks, and
/// [`RootError::Discontinuity`] is returned instead.
///
/// The caller is responsible for supplying a bracketing interval: behavior is
/// undefined if `f(a)` and `f(b)` share sign and neither endpoint is near
/// zero.
pub fn bisect<F>(f: F, a: f64, b: f64, tol_x: f64, factor_ty: f64)
    -> RootResult<f64>
where F: Fn(f64) -> f64
{
    let mut f0 = f(a);
    if f0.abs() < tol_x { return Ok(a); }
    if f(b).abs() < tol_x { return Ok(b); }
    let (mut a, mut b) = (a, b);
    let mut c = (a + b) / 2.0;
    let mut fc = f(c);
    while fc.abs() >= tol_x && (c - b).abs() >= tol_x {
        if fc * f0 < 0.0 {
            b = c;
        } else {
            a = c;
            f0 = fc;
        }
        c = (a + b) / 2.0;
        fc = f(c);
    }
    if fc.abs() < tol_x * factor_ty {
        Ok(c)
    } else {
        Err(RootError::Discontinuity(a, b))
    }
}

/// Return the first valid root of `f` found scanning forward from `a` in
/// steps of `delta_x`, never exceeding `b`.
///
/// Each sign change detected by the scan is handed to [`bisect`]; a bracket
/// rejected as a discontinuity is consumed and the scan resumes from its right
/// edge, so poles of `f` are skipped rather than mistaken for roots. If the
/// interval is exhausted without a surviving bracket,
/// [`RootError::NoSignChange`] is returned.
pub fn scan_first<F>(
    f: F,
    a: f64,
    b: f64,
    delta_x: f64,
    tol_x: f64,
    factor_ty: f64,
) -> RootResult<f64>
where F: Fn(f64) -> f64
{
    let mut c0 = a;
    let mut f0 = f(c0);
    let mut c1 = c0 + delta_x;
    loop {
        if c1 > b { return Err(RootError::NoSignChange(a, b)); }
        let mut f1 = f(c1);
        while f0 * f1 > 0.0 {
            c0 = c1;
            f0 = f1;
            c1 += delta_x;
            if c1 > b { return Err(RootError::NoSignChange(a, b)); }
            f1 = f(c1);
        }
        match bisect(&f, c0, c1, tol_x, factor_ty) {
            Ok(c) => { return Ok(c); },
            Err(RootError::Discontinuity(..)) => {
                c0 = c1;
                f0 = f1;
                c1 += delta_x;
            },
            Err(e) => { return Err(e); },
        }
    }
}

/// Return the `n`-th valid root of `f` in `[a, b]` in increasing order
/// (`n >= 1`).
///
/// [`scan_first`] is invoked repeatedly, each time restarting just past the
/// previously accepted root, so the `k`-th result is strictly greater than the
/// `(k-1)`-th and no separate sorting step is needed; all lower roots are
/// necessarily visited on the way, making the `n`-th root cost O(n) scans of
/// the lower interval. Fewer than `n` roots in the interval yields
/// [`RootError::IncompleteSpectrum`].
pub fn scan_nth<F>(
    f: F,
    a: f64,
    b: f64,
    n: usize,
    delta_x: f64,
    tol_x: f64,
    factor_ty: f64,
) -> RootResult<f64>
where F: Fn(f64) -> f64
{
    if n == 0 {
        return Err(RootError::IncompleteSpectrum { requested: 0, found: 0 });
    }
    let mut c0 = a;
    let mut found: usize = 0;
    let mut c = f64::NAN;
    while c0 < b && found < n {
        match scan_first(&f, c0, b, delta_x, tol_x, factor_ty) {
            Ok(r) => {
                found += 1;
                c = r;
                c0 = r + delta_x;
            },
            Err(RootError::NoSignChange(..)) => {
                return Err(
                    RootError::IncompleteSpectrum { requested: n, found });
            },
            Err(e) => { return Err(e); },
        }
    }
    if found == n {
        Ok(c)
    } else {
        Err(RootError::IncompleteSpectrum { requested: n, found })
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use approx::assert_abs_diff_eq;
    use super::*;

    const TOL: f64 = 1e-6;
    const FACT: f64 = 1e2;

    #[test]
    fn bisect_converges_on_cubic() {
        let f = |x: f64| (x + 3.0) * (x - 0.5) * (x - 2.0);
        let r = bisect(f, 0.0, 1.0, TOL, FACT).unwrap();
        assert!(f(r).abs() < TOL * FACT);
        assert_abs_diff_eq!(r, 0.5, epsilon = TOL);
    }

    #[test]
    fn bisect_returns_endpoint_roots() {
        let f = |x: f64| x - 1.0;
        let r = bisect(f, 1.0, 2.0, TOL, FACT).unwrap();
        assert_abs_diff_eq!(r, 1.0, epsilon = TOL);
    }

    #[test]
    fn bisect_rejects_pole() {
        // 1/x changes sign at a pole, not a root
        let f = |x: f64| x.recip();
        let res = bisect(f, -1.0, 1.0, TOL, FACT);
        assert!(matches!(res, Err(RootError::Discontinuity(..))));
    }

    #[test]
    fn scan_skips_pole_and_finds_root() {
        // tan has a pole at pi/2 and a root at pi
        let r = scan_first(f64::tan, 1.0, 4.0, 1e-3, TOL, FACT).unwrap();
        assert_abs_diff_eq!(r, PI, epsilon = 1e-5);
    }

    #[test]
    fn scan_reports_exhaustion() {
        let f = |x: f64| 1.0 + x.powi(2);
        let res = scan_first(f, 0.0, 2.0, 1e-2, TOL, FACT);
        assert!(matches!(res, Err(RootError::NoSignChange(..))));
    }

    #[test]
    fn scan_nth_orders_roots() {
        // sin has roots at pi, 2pi, 3pi on [0.5, 10]
        let roots: Vec<f64>
            = (1..=3).map(|n| {
                scan_nth(f64::sin, 0.5, 10.0, n, 1e-3, TOL, FACT).unwrap()
            })
            .collect();
        assert_abs_diff_eq!(roots[0], PI, epsilon = 1e-5);
        assert_abs_diff_eq!(roots[1], 2.0 * PI, epsilon = 1e-5);
        assert_abs_diff_eq!(roots[2], 3.0 * PI, epsilon = 1e-5);
        assert!(roots[0] < roots[1] && roots[1] < roots[2]);
    }

    #[test]
    fn scan_nth_reports_incomplete() {
        let res = scan_nth(f64::sin, 0.5, 7.0, 5, 1e-3, TOL, FACT);
        match res {
            Err(RootError::IncompleteSpectrum { requested, found }) => {
                assert_eq!(requested, 5);
                assert_eq!(found, 2);
            },
            other => panic!("expected IncompleteSpectrum, got {:?}", other),
        }
    }
}
