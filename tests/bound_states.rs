use std::f64::consts::PI;
use approx::assert_abs_diff_eq;
use xbound::{
    error::{ BoundError, RootError },
    root::Tolerances,
    solve::{ Config, solve_bound_state, shooting_trace },
    utils::wf_norm,
};

fn well_cfg(n: usize, mode: usize) -> Config {
    // with hard walls at the domain edges each eigenvalue has a pole of the
    // mismatch about 4Eh/a above it; delta_x must be finer than that gap
    // (~0.08 at E_1 for n = 500) or the bracket cancels and the root is
    // stepped over
    Config {
        ceiling: 100.0,
        domain_length: 1.0,
        grid_count: n,
        mode_index: mode,
        tolerances: Tolerances { delta_x: 0.05, ..Tolerances::default() },
    }
}

fn qho_cfg(ceiling: f64, n: usize, mode: usize) -> Config {
    Config {
        ceiling,
        domain_length: 20.0,
        grid_count: n,
        mode_index: mode,
        tolerances: Tolerances { delta_x: 0.05, ..Tolerances::default() },
    }
}

// analytic spectrum of the infinite square well of width a in Rydberg atomic
// units: E_n = n^2 pi^2 / a^2

#[test]
fn infinite_well_ground_state_converges() {
    let coarse = solve_bound_state(|_| 0.0, &well_cfg(100, 1), false).unwrap();
    let fine = solve_bound_state(|_| 0.0, &well_cfg(500, 1), false).unwrap();
    assert_abs_diff_eq!(coarse.e, PI.powi(2), epsilon = 5e-2);
    assert_abs_diff_eq!(fine.e, PI.powi(2), epsilon = 5e-3);
}

#[test]
fn infinite_well_spectrum_is_monotonic_and_accurate() {
    let energies: Vec<f64>
        = (1..=3).map(|N| {
            solve_bound_state(|_| 0.0, &well_cfg(500, N), false).unwrap().e
        })
        .collect();
    for (N, e) in (1..=3).zip(&energies) {
        let expected = (N as f64 * PI).powi(2);
        assert_abs_diff_eq!(*e, expected, epsilon = expected * 1e-3);
    }
    assert!(energies[0] < energies[1] && energies[1] < energies[2]);
}

#[test]
fn harmonic_oscillator_low_spectrum() {
    // V = w^2 x^2 / 4 with w = 1 has E_N = N - 1/2
    let V = |x: f64| x.powi(2) / 4.0;
    let energies: Vec<f64>
        = (1..=3).map(|N| {
            solve_bound_state(V, &qho_cfg(5.0, 600, N), false).unwrap().e
        })
        .collect();
    assert_abs_diff_eq!(energies[0], 0.5, epsilon = 5e-2);
    assert_abs_diff_eq!(energies[1], 1.5, epsilon = 5e-2);
    assert_abs_diff_eq!(energies[2], 2.5, epsilon = 5e-2);
    assert!(energies[0] < energies[1] && energies[1] < energies[2]);
}

#[test]
fn potential_offset_is_unshifted_in_result() {
    // same oscillator sunk by 3 Rydbergs; the eigenvalue must follow
    let V = |x: f64| x.powi(2) / 4.0 - 3.0;
    let sol = solve_bound_state(V, &qho_cfg(-1.0, 600, 1), false).unwrap();
    assert_abs_diff_eq!(sol.e, -2.5, epsilon = 5e-2);
}

#[test]
fn wavefunction_is_continuous_and_normalized() {
    let V = |x: f64| x.powi(2) / 4.0;
    let sol = solve_bound_state(V, &qho_cfg(5.0, 600, 1), true).unwrap();
    let tr = sol.wf.expect("wavefunction was requested");
    let m = tr.matching_index();
    let phi = tr.get_phi();
    assert!((phi[m] - phi[m + 1]).abs() < 1e-6);
    assert_abs_diff_eq!(phi[0], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(phi[phi.len() - 1], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(wf_norm(phi, tr.get_h()), 1.0, epsilon = 1e-6);
}

#[test]
fn finite_well_binds_below_the_infinite_well() {
    // width-1 well of depth 50 inside a length-3 domain; the finite walls let
    // the wavefunction leak out, lowering the ground state below pi^2
    let V = |x: f64| if x.abs() < 0.5 { 0.0 } else { 50.0 };
    let cfg = Config {
        ceiling: 50.0,
        domain_length: 3.0,
        grid_count: 600,
        mode_index: 1,
        tolerances: Tolerances { delta_x: 0.2, ..Tolerances::default() },
    };
    let sol = solve_bound_state(V, &cfg, true).unwrap();
    assert!(sol.e > 0.0 && sol.e < PI.powi(2));
    let tr = sol.wf.unwrap();
    let phi = tr.get_phi();
    let edge = phi[10].abs();
    let peak = phi.iter().fold(0.0_f64, |acc, p| acc.max(p.abs()));
    assert!(edge < 0.1 * peak);
}

#[test]
fn requesting_past_the_spectrum_is_incomplete() {
    // only E = 0.5 and 1.5 lie below a ceiling of 2
    let V = |x: f64| x.powi(2) / 4.0;
    let res = solve_bound_state(V, &qho_cfg(2.0, 600, 5), false);
    match res {
        Err(BoundError::Root(RootError::IncompleteSpectrum {
            requested,
            found,
        })) => {
            assert_eq!(requested, 5);
            assert_eq!(found, 2);
        },
        other => panic!("expected IncompleteSpectrum, got {:?}", other),
    }
}

#[test]
fn fixed_energy_trace_spans_the_domain() {
    let tr = shooting_trace(|x: f64| x.powi(2) / 4.0, 20.0, 0.3, 1, 400);
    assert_abs_diff_eq!(tr.get_x()[0], -10.0, epsilon = 1e-9);
    assert_abs_diff_eq!(tr.get_x()[tr.len() - 1], 10.0, epsilon = 1e-9);
    assert_eq!(tr.len(), tr.get_x().len());
}
