use super::tableau::{
    A21, A31, A32, A41, A42, A43, A51, A52, A53, A54, A61, A62, A63, A64, A65, B1, B3, B4, B5, B6,
    C2, C3, C4, C5, D1, D3, D4, D5, D6, D7, E1, E3, E4, E5, E6, E7,
};

/// Safety factor applied to every step-size update.
const SAFETY: f64 = 0.9;

/// Largest reduction applied after a rejected step.
const MIN_SHRINK: f64 = 0.2;

/// Accepted steps only grow when the scaled error is below this value.
const GROW_BELOW: f64 = 0.5;

/// Floor on the scaled error when growing, limiting growth to `SAFETY * 5`.
const MIN_GROW_ERROR: f64 = 1.0 / 3125.0;

/// Outcome of one attempted step.
pub(super) struct Trial<const N: usize> {
    /// State at the end of the step.
    pub(super) y: [f64; N],

    /// Derivative at the end of the step, reused as the next first stage.
    pub(super) dydt: [f64; N],

    /// Scaled local error estimate; the step is acceptable when `<= 1`.
    pub(super) error: f64,

    /// Interpolant over the step.
    pub(super) dense: Dense<N>,
}

/// Attempts a single Dormand–Prince step of size `h` from `(t, y)`.
///
/// `dydt` is the derivative at `(t, y)`. Six new derivative evaluations are
/// made. The error is scaled per component by
/// `abs_tol + rel_tol * (|y| + h |dydt|)` and reduced with the max norm.
///
/// # Errors
///
/// Returns the first error produced by `rhs`.
pub(super) fn attempt<const N: usize, F, E>(
    rhs: &mut F,
    t: f64,
    y: &[f64; N],
    dydt: &[f64; N],
    h: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<Trial<N>, E>
where
    F: FnMut(f64, &[f64; N]) -> Result<[f64; N], E>,
{
    let k1 = dydt;
    let k2 = rhs(t + C2 * h, &combine(y, h, &[(A21, k1)]))?;
    let k3 = rhs(t + C3 * h, &combine(y, h, &[(A31, k1), (A32, &k2)]))?;
    let k4 = rhs(
        t + C4 * h,
        &combine(y, h, &[(A41, k1), (A42, &k2), (A43, &k3)]),
    )?;
    let k5 = rhs(
        t + C5 * h,
        &combine(y, h, &[(A51, k1), (A52, &k2), (A53, &k3), (A54, &k4)]),
    )?;
    let k6 = rhs(
        t + h,
        &combine(
            y,
            h,
            &[(A61, k1), (A62, &k2), (A63, &k3), (A64, &k4), (A65, &k5)],
        ),
    )?;

    let y_next = combine(y, h, &[(B1, k1), (B3, &k3), (B4, &k4), (B5, &k5), (B6, &k6)]);
    let k7 = rhs(t + h, &y_next)?;

    let local_error = combine(
        &[0.0; N],
        h,
        &[(E1, k1), (E3, &k3), (E4, &k4), (E5, &k5), (E6, &k6), (E7, &k7)],
    );
    let finite = |v: &[f64; N]| v.iter().all(|x| x.is_finite());
    let error = if finite(&y_next) && finite(&k7) {
        error_norm(y, dydt, &local_error, h, abs_tol, rel_tol)
    } else {
        f64::NAN
    };

    let dense = Dense::new(t, h, y, &y_next, [k1, &k3, &k4, &k5, &k6, &k7]);

    Ok(Trial {
        y: y_next,
        dydt: k7,
        error,
        dense,
    })
}

/// Returns `base + h * Σ coef * k`.
fn combine<const N: usize>(base: &[f64; N], h: f64, terms: &[(f64, &[f64; N])]) -> [f64; N] {
    let mut out = *base;
    for (coef, k) in terms {
        for (o, ki) in out.iter_mut().zip(k.iter()) {
            *o += h * coef * ki;
        }
    }
    out
}

/// Max-norm of the local error, scaled per component.
///
/// Returns NaN if any component's scaled error is not finite, so that the
/// step is rejected.
fn error_norm<const N: usize>(
    y: &[f64; N],
    dydt: &[f64; N],
    local_error: &[f64; N],
    h: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> f64 {
    let mut norm = 0.0_f64;
    for ((yi, di), ei) in y.iter().zip(dydt).zip(local_error) {
        if *ei == 0.0 {
            continue;
        }
        let scale = abs_tol + rel_tol * (yi.abs() + h.abs() * di.abs());
        let scaled = ei.abs() / scale;
        if !scaled.is_finite() {
            return f64::NAN;
        }
        norm = norm.max(scaled);
    }
    norm
}

/// Step size to retry with after a rejection.
pub(super) fn shrink(h: f64, error: f64) -> f64 {
    if error.is_finite() {
        h * (SAFETY * error.powf(-1.0 / 3.0)).max(MIN_SHRINK)
    } else {
        h * MIN_SHRINK
    }
}

/// Step size to continue with after an accepted step.
pub(super) fn grow(h: f64, error: f64) -> f64 {
    if error < GROW_BELOW {
        h * SAFETY * error.max(MIN_GROW_ERROR).powf(-0.2)
    } else {
        h
    }
}

/// Continuous extension of an accepted step.
///
/// Fourth-order accurate anywhere in `[t_start, t_start + h]` and exact at
/// both ends.
#[derive(Debug, Clone, Copy)]
pub(super) struct Dense<const N: usize> {
    t_start: f64,
    h: f64,
    r: [[f64; N]; 5],
}

impl<const N: usize> Dense<N> {
    fn new(t_start: f64, h: f64, y: &[f64; N], y_next: &[f64; N], k: [&[f64; N]; 6]) -> Self {
        let [k1, k3, k4, k5, k6, k7] = k;
        let mut r = [[0.0; N]; 5];

        for i in 0..N {
            let diff = y_next[i] - y[i];
            let spline = h * k1[i] - diff;
            r[0][i] = y[i];
            r[1][i] = diff;
            r[2][i] = spline;
            r[3][i] = diff - h * k7[i] - spline;
            r[4][i] = h
                * (D1 * k1[i] + D3 * k3[i] + D4 * k4[i] + D5 * k5[i] + D6 * k6[i] + D7 * k7[i]);
        }

        Self { t_start, h, r }
    }

    /// Interpolates the state at `t`, which should lie within the step.
    pub(super) fn at(&self, t: f64) -> [f64; N] {
        let theta = ((t - self.t_start) / self.h).clamp(0.0, 1.0);
        let theta1 = 1.0 - theta;
        let [r1, r2, r3, r4, r5] = &self.r;

        let mut out = [0.0; N];
        for (i, o) in out.iter_mut().enumerate() {
            *o = r1[i] + theta * (r2[i] + theta1 * (r3[i] + theta * (r4[i] + theta1 * r5[i])));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn decay(_t: f64, y: &[f64; 1]) -> Result<[f64; 1], Infallible> {
        Ok([-y[0]])
    }

    #[test]
    fn single_step_matches_exponential() {
        let y = [1.0];
        let dydt = [-1.0];

        let trial = attempt(&mut decay, 0.0, &y, &dydt, 0.1, 1e-6, 1e-6).unwrap();

        assert_relative_eq!(trial.y[0], (-0.1_f64).exp(), epsilon = 1e-8);
        assert_relative_eq!(trial.dydt[0], -trial.y[0]);
        assert!(trial.error < 1.0);
    }

    #[test]
    fn large_step_is_rejected() {
        let trial = attempt(&mut decay, 0.0, &[1.0], &[-1.0], 5.0, 1e-10, 1e-10).unwrap();
        assert!(trial.error > 1.0);
    }

    #[test]
    fn dense_output_hits_endpoints_and_midpoint() {
        let trial = attempt(&mut decay, 0.0, &[1.0], &[-1.0], 0.2, 1e-6, 1e-6).unwrap();

        assert_relative_eq!(trial.dense.at(0.0)[0], 1.0);
        assert_relative_eq!(trial.dense.at(0.2)[0], trial.y[0], epsilon = 1e-15);
        assert_relative_eq!(trial.dense.at(0.1)[0], (-0.1_f64).exp(), epsilon = 1e-6);
    }

    #[test]
    fn error_norm_ignores_exact_components() {
        let norm = error_norm(&[0.0, 1.0], &[0.0, 0.0], &[0.0, 1e-3], 0.1, 0.0, 1e-3);
        assert_relative_eq!(norm, 1.0);
    }

    #[test]
    fn nan_error_is_propagated() {
        let norm = error_norm(&[1.0], &[0.0], &[f64::NAN], 0.1, 1e-6, 1e-6);
        assert!(norm.is_nan());
    }

    #[test]
    fn infinite_error_is_not_finite() {
        let norm = error_norm(&[1.0], &[f64::NEG_INFINITY], &[f64::INFINITY], 0.1, 1e-6, 1e-6);
        assert!(norm.is_nan());
    }

    #[test]
    fn step_through_infinite_derivative_is_rejected() {
        let mut blow_up = |t: f64, _y: &[f64; 1]| -> Result<[f64; 1], Infallible> {
            Ok([if t == 0.0 { f64::NEG_INFINITY } else { -1.0 }])
        };

        let trial = attempt(&mut blow_up, 0.0, &[1.0], &[f64::NEG_INFINITY], 0.1, 1e-6, 1e-6).unwrap();
        assert!(trial.error.is_nan());
    }

    #[test]
    fn controller_bounds() {
        // Huge errors shrink by at most a factor of five.
        assert_relative_eq!(shrink(1.0, 1e12), MIN_SHRINK);
        assert_relative_eq!(shrink(1.0, f64::NAN), MIN_SHRINK);

        // Tiny errors grow by at most SAFETY * 5.
        assert_relative_eq!(grow(1.0, 0.0), SAFETY * 5.0, epsilon = 1e-12);

        // Moderate errors keep the step.
        assert_relative_eq!(grow(1.0, 0.8), 1.0);
    }
}
