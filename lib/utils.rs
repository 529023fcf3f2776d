//! Miscellaneous numeric tools for real-valued wavefunctions.

use ndarray as nd;
use num_traits::Float;
use crate::Arr1;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S, A>(y: &Arr1<S>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = y.len();
    let two = A::one() + A::one();
    let mid = y.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, &yk| acc + yk);
    (dx / two) * (y[0] + two * mid + y[n - 1])
}

/// Calculate the norm of a real-valued wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S, A>(q: &Arr1<S>, dx: A) -> A
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let n: usize = q.len();
    let two = A::one() + A::one();
    let mid = q.iter().skip(1).take(n - 2)
        .fold(A::zero(), |acc, &qk| acc + qk * qk);
    (dx / two) * (q[0] * q[0] + two * mid + q[n - 1] * q[n - 1])
}

/// Renormalize a wavefunction in place.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_renormalize<S, A>(q: &mut Arr1<S>, dx: A)
where
    S: nd::DataMut<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk = *qk / norm; });
}

/// Return a normalized copy of a wavefunction.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S, A>(q: &Arr1<S>, dx: A) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Float,
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray as nd;
    use super::*;

    #[test]
    fn trapz_linear() {
        let y: nd::Array1<f64> = nd::Array1::linspace(0.0, 1.0, 101);
        assert_abs_diff_eq!(trapz(&y, 0.01), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn renormalize_to_unit_norm() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 2001);
        let dx = x[1] - x[0];
        let mut q = x.mapv(|xk| (-xk.powi(2)).exp());
        wf_renormalize(&mut q, dx);
        assert_abs_diff_eq!(wf_norm(&q, dx), 1.0, epsilon = 1e-9);
    }
}
