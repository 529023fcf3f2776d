//! Top-level bound-state solver: turns a potential function and a mode index
//! into the corresponding energy eigenvalue and wavefunction.
//!
//! The potential enters as an opaque callable of position; everything else
//! (energy ceiling, domain, grid, tolerances) arrives through [`Config`].
//! Internally the potential is shifted by its minimum over the grid so the
//! energy scan always starts just above zero regardless of the potential's
//! reference level, which conditions the Numerov propagation; the shift is
//! removed from the returned energy.
//!
//! The scan over energy is strictly sequential from low to high; the ordering
//! guarantee of [`scan_nth`][crate::root::scan_nth] depends on it. Separate
//! queries share no state and may run on separate threads freely.

use std::cmp;
use crate::{
    error::BoundError,
    root::{ self, Tolerances },
    shoot::{ self, WavefunctionTrace },
};

pub type BoundResult<T> = Result<T, BoundError>;

/// Caller-supplied parameters for one bound-state query.
#[derive(Copy, Clone, Debug)]
pub struct Config {
    /// Upper bound on the energy search (absolute, same reference level as
    /// the potential).
    pub ceiling: f64,
    /// Total length of the coordinate domain `[-L/2, L/2]`.
    pub domain_length: f64,
    /// Number of uniform grid steps.
    pub grid_count: usize,
    /// Index of the desired bound state, counting from 1.
    pub mode_index: usize,
    /// Root-search tolerances.
    pub tolerances: Tolerances,
}

impl Config {
    fn validate(&self) -> BoundResult<()> {
        BoundError::check_tolerance(self.tolerances.tol_x)?;
        BoundError::check_tolerance(self.tolerances.factor_ty)?;
        BoundError::check_step(self.tolerances.delta_x)?;
        BoundError::check_domain(self.domain_length)?;
        BoundError::check_grid(self.grid_count)?;
        BoundError::check_mode(self.mode_index)?;
        Ok(())
    }
}

/// A single bound-state solution.
///
/// This struct is usually only returned by [`solve_bound_state`]; you
/// probably won't ever instantiate it yourself. The wavefunction is allowed
/// to be missing in the case that `compute_wf = false` is passed.
#[derive(Clone, Debug)]
pub struct Solution {
    /// Energy
    pub e: f64,
    /// Wavefunction
    pub wf: Option<WavefunctionTrace>,
}

impl Solution {
    /// Compare two `Solution`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }
}

/// Find the `mode_index`-th bound state of the potential `V` below the energy
/// ceiling.
///
/// The kinetic functional `K(e, x) = e - V(x) + V_min` is scanned from just
/// above zero up to the shifted ceiling with the mismatch of
/// [`shoot_two_sided`][shoot::shoot_two_sided] as the quantization
/// criterion; roots are enumerated in increasing order so the returned energy
/// is always the `mode_index`-th eigenvalue. On success and with
/// `compute_wf = true`, the full trace is reconstructed once at the accepted
/// energy and renormalized.
///
/// Fewer than `mode_index` bound states below the ceiling yields
/// [`RootError::IncompleteSpectrum`][crate::error::RootError], wrapped in
/// [`BoundError::Root`].
pub fn solve_bound_state<F>(V: F, cfg: &Config, compute_wf: bool)
    -> BoundResult<Solution>
where F: Fn(f64) -> f64
{
    cfg.validate()?;
    let L = cfg.domain_length;
    let n = cfg.grid_count;
    let N = cfg.mode_index;
    let tols = cfg.tolerances;
    let h = L / n as f64;

    let V_min = (0..=n)
        .map(|i| V(-L / 2.0 + h * i as f64))
        .fold(f64::INFINITY, f64::min);
    let K = |e: f64, x: f64| e - V(x) + V_min;

    let mismatch = |e: f64| shoot::shoot_two_sided(&K, L, e, N, n);
    let e_shifted = root::scan_nth(
        mismatch,
        tols.tol_x,
        cfg.ceiling - V_min,
        N,
        tols.delta_x,
        tols.tol_x,
        tols.factor_ty,
    )?;

    let wf = compute_wf.then(|| {
        let mut tr = shoot::shoot_wavefunction(&K, L, e_shifted, N, n);
        tr.renormalize();
        tr
    });
    Ok(Solution { e: e_shifted + V_min, wf })
}

/// Generate the two-sided shooting trace of the potential `V` at a fixed,
/// not necessarily eigen, energy.
///
/// This is the raw shooting attempt a presentation layer can display while an
/// energy is dialed in by hand: away from an eigenvalue the trace shows the
/// discontinuity in slope (or value) at the matching point. No conditioning
/// shift is applied and the trace is left unnormalized.
pub fn shooting_trace<F>(V: F, L: f64, E: f64, N: usize, n: usize)
    -> WavefunctionTrace
where F: Fn(f64) -> f64
{
    let K = |e: f64, x: f64| e - V(x);
    shoot::shoot_wavefunction(K, L, E, N, n)
}
