//! Shared fixtures for unit tests.

use crate::params::Parameters;

/// Daphnia-like parameters with effects switched off by high thresholds.
pub(crate) fn daphnia() -> Parameters {
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
