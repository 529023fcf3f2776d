use std::f64::consts::PI;
use xbound::root::Tolerances;
use xbound::solve::{ Config, solve_bound_state };

// solve for the lowest modes of the infinite square well and compare with the
// analytic spectrum E_n = n^2 pi^2 / a^2 (Rydberg atomic units)

fn main() {
    const A: f64 = 1.0; // well width; walls sit at the domain edges

    for N in 1..=4 {
        let cfg = Config {
            ceiling: 200.0,
            domain_length: A,
            grid_count: 500,
            mode_index: N,
            tolerances: Tolerances { delta_x: 0.05, ..Tolerances::default() },
        };
        let sol = solve_bound_state(|_| 0.0, &cfg, false).unwrap();
        let expected = (N as f64 * PI / A).powi(2);
        println!("N = {}: expected {:.6}, computed {:.6}", N, expected, sol.e);
    }
}
