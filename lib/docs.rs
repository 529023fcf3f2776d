//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Numerov propagation](#numerov-propagation)
//! - [Matching point](#matching-point)
//! - [Ordered root search](#ordered-root-search)
//! - [Units](#units)
//!
//! # Background
//! Solution of the one-dimensional time-independent Schrödinger equation
//! (TISE) for bound states amounts to solving equations of the form
//! ```text
//! ∂²φ
//! --- = -K(x) φ(x)
//! ∂x²
//! ```
//! where, for the TISE in Rydberg atomic units with mₑ = 1/2,
//! ```text
//! K(x) = E - V(x)
//! ```
//! with *V*(*x*) a conservative potential. A bound state is an eigenpair
//! (*E*, *φ*) with *φ* decaying at both edges of the domain; on a finite
//! domain [-*L*/2, *L*/2] the boundary conditions degrade to
//! *φ*(±*L*/2) = 0. Since one of the unknowns is the energy itself, the
//! problem is attacked with a shooting method: integrate the ODE for a trial
//! *E* from the boundaries inward and search over *E* until the resulting
//! solution is consistent. The set of trial energies at which this happens is
//! exactly the spectrum of the implicit quantization condition (e.g. the
//! transcendental equation of the finite square well), which never has to be
//! written down explicitly.
//!
//! # Numerov propagation
//! For second-order equations with no first-derivative term, Numerov's
//! three-point scheme advances the solution with an *O*(*h*⁶) local error:
//! ```text
//!           (2 - 5h²K₁/6) φ₁ - (1 + h²K₀/12) φ₀
//! φ₂ = -----------------------------------------
//!                   (1 + h²K₂/12)
//! ```
//! Each side is seeded with an exact zero on the boundary and an arbitrary
//! small amplitude (10⁻¹⁰) one step inside; the overall scale of a linear
//! ODE's solution is free, so the seed magnitude only fixes normalization.
//! The *sign* of the right-hand seed is not free: it must agree with the
//! parity of the target mode (mode 1, 3, ... are even wavefunctions, 2, 4,
//! ... odd), otherwise the two one-sided solutions could never be joined
//! smoothly even at an eigenvalue.
//!
//! # Matching point
//! In the classically forbidden region (*K* < 0) the discretized equation
//! supports exponentially growing and decaying solutions, and integration
//! couples preferentially to the growing one. Integrating from both ends and
//! joining the two branches in the classically allowed region sidesteps the
//! instability: each branch only ever crosses the forbidden region in the
//! direction in which the physical solution *grows*. The join is placed at
//! the leftmost classical turning point, found by scanning the grid from the
//! left boundary until *K* becomes positive. The two branches are compared
//! through
//! ```text
//! (2 φd₁ - (φi₀ + φd₀)) / (φd₀ - φi₀)
//! ```
//! after rescaling the right-hand branch to share the left branch's amplitude
//! at the join. This scalar vanishes exactly when amplitudes and discrete
//! derivatives agree, and is algebraically equivalent to the usual difference
//! of logarithmic derivatives while avoiding division by a possibly tiny
//! amplitude.
//!
//! # Ordered root search
//! The mismatch, viewed as a function of *E*, changes sign at every
//! eigenvalue but also across its poles. Closed root-search methods are used
//! so that the scan can proceed monotonically from the bottom of the
//! spectrum: an incremental scan with step Δ*E* brackets every sign change,
//! bisection refines each bracket, and a residual magnitude check
//! discriminates roots from poles (at a converged bracket a root leaves
//! |*f*| below tolerance while a pole leaves it large). Rejected brackets are
//! simply skipped. Restarting the scan just past each accepted root yields
//! the spectrum in strictly increasing order with no sorting, at the cost of
//! rescanning the lower spectrum for every additional state; Δ*E* must be
//! kept below the smallest eigenvalue spacing of interest or closely spaced
//! states are stepped over.
//!
//! # Units
//! All of the above is adimensionalized. The [`units`][crate::units] module
//! provides scaling factors for the Rydberg atomic unit system (lengths in
//! Bohr radii, energies in Rydbergs, mₑ = 1/2), under which the infinite
//! square well of width *a* has the spectrum *E*ₙ = *n*²π²/*a*² and the
//! harmonic potential *ω*²*x*²/4 has *E*ₙ = (*n* - 1/2) *ω*.
