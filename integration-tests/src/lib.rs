//! Shared fixtures for the end-to-end tests.

use debtox_model::{Parameters, SolverSettings, State};

/// A daphnid whose effect thresholds are out of reach.
#[must_use]
pub fn unaffected_daphnid() -> Parameters {
    Parameters {
        fbv: 0.02,
        krv: 1.0,
        kap: 0.8,
        yp: 0.8,
        l0: 0.1,
        lp: 5.0,
        lm: 20.0,
        rb: 0.05,
        rm: 5.0,
        f: 1.0,
        hb: 0.0,
        lf: 0.0,
        tlag: 0.0,
        kd: 0.1,
        zb: 1e6,
        bb: 0.5,
        zs: 1e6,
        bs: 0.5,
        lj: 0.0,
        lm_ref: 20.0,
        mf: 1.0,
        a: 1.0,
    }
}

/// A newborn with no damage.
#[must_use]
pub fn newborn() -> State {
    State::new(0.0, 0.1, 0.0, 1.0)
}

/// Tight tolerances with at most one day per step.
#[must_use]
pub fn tight_solver() -> SolverSettings {
    SolverSettings {
        initial_step: 0.01,
        abs_tol: 1e-10,
        rel_tol: 1e-10,
        max_step: 1.0,
    }
}

/// Whole days from zero through `end`.
#[must_use]
pub fn days(end: u32) -> Vec<f64> {
    (0..=end).map(f64::from).collect()
}
