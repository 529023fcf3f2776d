#![allow(non_upper_case_globals)]

//! Convenience constructs to handle minutiae associated with conversion to and
//! from Rydberg atomic units.
//!
//! The solver itself is unit-agnostic (it consumes already-adimensionalized
//! potentials and energies), but the natural adimensionalization for
//! electronic problems is the Rydberg atomic unit system: lengths in Bohr
//! radii, energies in Rydbergs, and the electron mass carried as `mₑ = 1/2` so
//! that the stationary equation reduces to `φ'' + (E - V)φ = 0` with no
//! leftover prefactors.
//!
//! Concrete physical constants are taken from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// speed of light in vacuum (m s^-1)
pub const c: f64 = 2.99792458e8;
//             +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31

/// Rydberg constant for an infinite-mass nucleus (m^-1)
pub const Rinf: f64 = 10973731.568160;
//                       +/- 0.000021

/// Bohr radius (m)
pub const a0: f64 = 5.29177210903e-11;
//              +/- 0.00000000080e-11

/// Hartree energy (J) = 2\*Rinf\*h\*c
pub const Eh: f64 = 4.3597447222071e-18;
//              +/- 0.0000000000085e-18

/// Rydberg energy (J) = Rinf\*h\*c
pub const Ry: f64 = Eh / 2.0;

/// A pair of natural length and energy scaling factors relative to some base
/// unit system.
///
/// Constructor methods produce scaling constants whose numerical values are
/// represented in the base unit system; `to_nat_*`/`from_nat_*` move
/// quantities across the boundary between the base system and the
/// adimensionalized one handed to the solver.
#[derive(Copy, Clone, Debug)]
pub struct Units {
    /// Particle mass.
    pub m: f64,
    /// Base length scale.
    pub a: f64,
    /// Associated energy scale.
    pub e: f64,
}

impl Units {
    /// Construct from a mass and length scale given in
    /// meters/kilograms/seconds (MKS) units.
    pub fn from_mks(mass: f64, a: f64) -> Self {
        let e_unit = hbar.powi(2) / 2.0 / mass / a.powi(2);
        Self { m: mass, a, e: e_unit }
    }

    /// Construct the Rydberg atomic unit system for an electron: lengths in
    /// Bohr radii, energies in Rydbergs.
    pub fn rydberg() -> Self {
        Self { m: me, a: a0, e: Ry }
    }

    /// Convert a quantity with dimensions of length in the base unit system
    /// to natural units.
    pub fn to_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a.recip()
    }

    /// Convert a dimensionless quantity to one with length units in the base
    /// unit system.
    pub fn from_nat_length<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.a
    }

    /// Convert a quantity with dimensions of energy in the base unit system
    /// to natural units.
    pub fn to_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e.recip()
    }

    /// Convert a dimensionless quantity to one with energy units in the base
    /// unit system.
    pub fn from_nat_energy<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        x * self.e
    }
}

#[cfg(test)]
mod tests {
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use super::*;

    #[test]
    fn mks_electron_at_bohr_radius_is_rydberg() {
        // hbar^2 / (2 me a0^2) is the Rydberg energy
        let u = Units::from_mks(me, a0);
        assert_relative_eq!(u.e, Ry, max_relative = 1e-9);
    }

    #[test]
    fn nat_conversions_invert() {
        let u = Units::rydberg();
        let len: f64 = u.from_nat_length(u.to_nat_length::<f64, f64>(3.5e-10));
        let en: f64 = u.from_nat_energy(u.to_nat_energy::<f64, f64>(2.0e-18));
        assert_relative_eq!(len, 3.5e-10, max_relative = 1e-12);
        assert_relative_eq!(en, 2.0e-18, max_relative = 1e-12);
        assert_abs_diff_eq!(
            u.to_nat_length::<f64, f64>(a0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            u.to_nat_energy::<f64, f64>(Ry), 1.0, epsilon = 1e-12);
    }
}
