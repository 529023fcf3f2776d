#![allow(non_snake_case)]

//! Provides functions and higher-level constructs for automated solution of the
//! one-dimensional, time-independent Schrödinger equation for bound states via
//! the shooting method with Numerov propagation.
//!
//! Eigenvalues are located by an ordered root search on the shooting mismatch
//! as a function of energy: an incremental forward scan brackets candidate
//! roots, bisection refines them, and a secondary magnitude check rejects
//! sign-changing discontinuities (poles of the implicit quantization function)
//! so that only true eigenvalues are counted. Restarting the scan just past
//! each accepted root enumerates the spectrum in strictly increasing order, so
//! the N-th value returned is always the N-th bound state.
//!
//! See [`docs`] for theoretical background.
//!
//! ```
//! use xbound::root::Tolerances;
//! use xbound::solve::{ Config, solve_bound_state };
//!
//! // infinite square well of width 1 (hard walls at the domain edges)
//! let cfg = Config {
//!     ceiling: 50.0,
//!     domain_length: 1.0,
//!     grid_count: 500,
//!     mode_index: 1,
//!     tolerances: Tolerances { delta_x: 0.05, ..Tolerances::default() },
//! };
//! let sol = solve_bound_state(|_| 0.0, &cfg, false).unwrap();
//! assert!((sol.e - std::f64::consts::PI.powi(2)).abs() < 0.05);
//! ```

pub mod error;
pub mod root;
pub mod shoot;
pub mod solve;
pub mod units;
pub mod utils;

pub mod docs;

pub(crate) const DEF_TOL_X: f64 = 1e-6;
pub(crate) const DEF_DELTA_X: f64 = 1e-4;
pub(crate) const DEF_FACTOR_TY: f64 = 1e2;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;
