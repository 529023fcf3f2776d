//! Two-sided Numerov propagation for the shooting method.
//!
//! The wavefunction is integrated inward from both boundaries of the domain
//! `[-L/2, L/2]` with the Numerov three-point scheme and the two one-sided
//! solutions are compared at an interior matching point. The matching point is
//! placed at the classical turning point nearest the left boundary (where the
//! kinetic functional first becomes non-negative), keeping the join inside the
//! classically allowed region so that the exponentially growing
//! forbidden-region solutions never have to be matched against each other.
//!
//! [`shoot_two_sided`] reduces a propagation at fixed energy to a single
//! scalar mismatch whose zeros (as a function of energy) are the bound-state
//! eigenvalues; [`shoot_wavefunction`] repeats the propagation recording the
//! full trace, and is meant to be called once per accepted eigenvalue.

use ndarray as nd;
use crate::utils::wf_renormalize;

/// Initial amplitude seeded one step inside each boundary.
const SEED: f64 = 1e-10;

/// Locate the interior matching point for two-sided propagation: the position
/// where the kinetic functional `K` first becomes positive, scanning from
/// `-L/2` in steps of `h`.
///
/// Degenerate cases: if the whole domain is classically forbidden the
/// matching point collapses to `L/2`; if the left boundary itself is already
/// allowed it collapses to `-L/2`.
pub fn turning_point<K>(K: K, L: f64, h: f64) -> f64
where K: Fn(f64) -> f64
{
    let mut x = -L / 2.0;
    while x < L / 2.0 && K(x) <= 0.0 { x += h; }
    if x >= L / 2.0 {
        L / 2.0
    } else if x == -L / 2.0 {
        -L / 2.0
    } else {
        x - h
    }
}

// sign of the right-hand seed value; fixed by the parity of the requested
// mode: odd N (even-parity wavefunction) seeds positive, even N negative
fn seed_sign(N: usize) -> f64 {
    if N % 2 == 0 { -1.0 } else { 1.0 }
}

// one Numerov step; the window (phi0, phi1) holds the previous two values and
// the coefficients sample K at x - s, x, x + s for step s (s < 0 going right
// to left)
fn numerov_step<K>(K: &K, x: f64, s: f64, phi0: f64, phi1: f64) -> f64
where K: Fn(f64) -> f64
{
    let h2 = s.powi(2);
    let term0 = 1.0 + h2 * K(x - s) / 12.0;
    let term1 = 2.0 - 5.0 * h2 * K(x) / 6.0;
    let term2 = 1.0 + h2 * K(x + s) / 12.0;
    (term1 * phi1 - term0 * phi0) / term2
}

/// Calculate the matching criterion of the two-sided shooting method for a
/// single energy.
///
/// `K` is the kinetic functional `(E, x) -> E - V(x)` (possibly shifted for
/// conditioning), `L` the domain length, `N >= 1` the mode index whose parity
/// fixes the right-hand boundary seed, and `n` the number of grid steps.
///
/// Both sides are propagated to the [turning point][turning_point]; the
/// right-hand trace is rescaled so the two sides meet with equal amplitude at
/// the join, and the returned scalar
/// `(2 phi_d1 - (phi_i0 + phi_d0)) / (phi_d0 - phi_i0)` vanishes exactly when
/// the one-sided solutions and their discrete derivatives agree there. This
/// is algebraically equivalent to comparing logarithmic derivatives but stays
/// smooth when the amplitude at the join is near zero.
pub fn shoot_two_sided<K>(K: K, L: f64, E: f64, N: usize, n: usize) -> f64
where K: Fn(f64, f64) -> f64
{
    let h = L / n as f64;
    let Kx = |x: f64| K(E, x);
    let xm = turning_point(&Kx, L, h);

    // left side: seed (0, SEED) at (-L/2, -L/2 + h)
    let mut phi0 = 0.0;
    let mut phi1 = SEED;
    let mut x = -L / 2.0 + 2.0 * h;
    while x <= xm {
        let next = numerov_step(&Kx, x, h, phi0, phi1);
        phi0 = phi1;
        phi1 = next;
        x += h;
    }
    let phi_i1 = phi1;
    let phi_i0 = phi0;

    // right side, propagated leftward down to the matching point
    let mut phi0 = 0.0;
    let mut phi1 = SEED * seed_sign(N);
    let mut x = L / 2.0 - 2.0 * h;
    while x > xm {
        let next = numerov_step(&Kx, x, -h, phi0, phi1);
        phi0 = phi1;
        phi1 = next;
        x -= h;
    }
    let phi_d1 = phi_i1;
    let phi_d0 = phi0 * phi_i1 / phi1;

    (2.0 * phi_d1 - (phi_i0 + phi_d0)) / (phi_d0 - phi_i0)
}

/// A wavefunction sampled over the full coordinate grid, as produced by
/// [`shoot_wavefunction`].
///
/// The coordinate and amplitude arrays always have equal length, cover
/// `[-L/2, L/2]` in increasing order with uniform spacing, and are continuous
/// across the matching point by construction.
#[derive(Clone, Debug)]
pub struct WavefunctionTrace {
    x: nd::Array1<f64>,
    phi: nd::Array1<f64>,
    // index of the last left-propagated sample
    m: usize,
    h: f64,
}

impl WavefunctionTrace {
    /// Get a reference to the coordinate array.
    pub fn get_x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get a reference to the amplitude array.
    pub fn get_phi(&self) -> &nd::Array1<f64> { &self.phi }

    /// Get the grid spacing.
    pub fn get_h(&self) -> f64 { self.h }

    /// Index of the last sample produced by the left-hand propagation; the
    /// sample at `matching_index() + 1` is the first produced by the
    /// right-hand propagation.
    pub fn matching_index(&self) -> usize { self.m }

    /// Get the number of samples.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.phi.len() }

    /// Iterate over `(position, amplitude)` pairs in increasing position
    /// order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.phi.iter().copied())
    }

    /// Renormalize the amplitudes in place to unit norm.
    pub fn renormalize(&mut self) {
        wf_renormalize(&mut self.phi, self.h);
    }
}

/// Perform the same two-sided propagation as [`shoot_two_sided`], recording
/// every `(position, amplitude)` pair on both sides.
///
/// The right-hand sequence is grown independently and rescaled as a whole by
/// the same ratio used for the scalar criterion, so the concatenated trace is
/// continuous at the matching point. Amplitudes are left unnormalized; see
/// [`WavefunctionTrace::renormalize`].
pub fn shoot_wavefunction<K>(K: K, L: f64, E: f64, N: usize, n: usize)
    -> WavefunctionTrace
where K: Fn(f64, f64) -> f64
{
    let h = L / n as f64;
    let Kx = |x: f64| K(E, x);
    let xm = turning_point(&Kx, L, h);

    let mut xs: Vec<f64> = Vec::with_capacity(n + 2);
    let mut phis: Vec<f64> = Vec::with_capacity(n + 2);
    xs.push(-L / 2.0);
    phis.push(0.0);
    xs.push(-L / 2.0 + h);
    phis.push(SEED);
    let mut phi0 = 0.0;
    let mut phi1 = SEED;
    let mut x = -L / 2.0 + 2.0 * h;
    while x <= xm {
        let next = numerov_step(&Kx, x, h, phi0, phi1);
        xs.push(x);
        phis.push(next);
        phi0 = phi1;
        phi1 = next;
        x += h;
    }
    let m = phis.len() - 1;

    // right side, accumulated rightmost-first and reversed after rescaling
    let mut xs_d: Vec<f64> = Vec::with_capacity(n + 2);
    let mut phis_d: Vec<f64> = Vec::with_capacity(n + 2);
    xs_d.push(L / 2.0);
    phis_d.push(0.0);
    xs_d.push(L / 2.0 - h);
    phis_d.push(SEED * seed_sign(N));
    let mut phi0 = 0.0;
    let mut phi1 = SEED * seed_sign(N);
    let mut x = L / 2.0 - 2.0 * h;
    while x > xm {
        let next = numerov_step(&Kx, x, -h, phi0, phi1);
        xs_d.push(x);
        phis_d.push(next);
        phi0 = phi1;
        phi1 = next;
        x -= h;
    }
    // scale so the right side meets the left side's last value at the join
    let scale = phis[m] / phi1;
    phis_d.iter_mut().for_each(|p| { *p *= scale; });

    xs.extend(xs_d.into_iter().rev());
    phis.extend(phis_d.into_iter().rev());
    WavefunctionTrace {
        x: nd::Array1::from(xs),
        phi: nd::Array1::from(phis),
        m,
        h,
    }
}
