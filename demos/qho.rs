use xbound::root::Tolerances;
use xbound::solve::{ Config, solve_bound_state };
use xbound::units::{ self, Units };

// solve for eigenstates of the quantum harmonic oscillator, V = w^2 x^2 / 4,
// whose spectrum in Rydberg atomic units is E_N = (N - 1/2) w

fn main() {
    const OMEGA: f64 = 1.0;

    let u = Units::rydberg();
    let V = |x: f64| (OMEGA * x).powi(2) / 4.0;
    for N in 1..=4 {
        let cfg = Config {
            ceiling: 6.0,
            domain_length: 20.0,
            grid_count: 600,
            mode_index: N,
            tolerances: Tolerances { delta_x: 0.05, ..Tolerances::default() },
        };
        let sol = solve_bound_state(V, &cfg, true).unwrap();
        let expected = OMEGA * (N as f64 - 0.5);
        let e_ev: f64 = u.from_nat_energy::<f64, f64>(sol.e) / units::e;
        let tr = sol.wf.as_ref().unwrap();
        println!(
            "N = {}: expected {:.4} Ry, computed {:.4} Ry = {:.3} eV \
            ({} grid samples)",
            N, expected, sol.e, e_ev, tr.len(),
        );
    }
}
