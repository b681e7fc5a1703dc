//! DEBtox model parameters.
//!
//! Twenty-two scalars covering the energy budget, life history, toxicokinetics,
//! and effects. Built once per run and read-only during integration.

use thiserror::Error;

use crate::constants::{N_PARAMS, PARAM_NAMES};

/// Scalar model parameters.
///
/// Field order matches [`PARAM_NAMES`] and the flat vector accepted by
/// [`Parameters::from_slice`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Dry weight to volume ratio [mg/mm³].
    pub fbv: f64,
    /// Partition coefficient between repro buffer and structure [-].
    pub krv: f64,
    /// Allocation fraction to soma (kappa) [-].
    pub kap: f64,
    /// Product of yields for assimilation and reserve [-].
    pub yp: f64,

    /// Body length at start [mm].
    pub l0: f64,
    /// Body length at puberty [mm].
    pub lp: f64,
    /// Maximum body length [mm].
    pub lm: f64,
    /// Von Bertalanffy growth rate constant [1/d].
    pub rb: f64,
    /// Maximum reproduction rate [#/d].
    pub rm: f64,
    /// Scaled functional response [-].
    pub f: f64,
    /// Background hazard rate [1/d].
    pub hb: f64,

    /// Body length at half-saturation feeding [mm]; disabled when `<= 0`.
    pub lf: f64,
    /// Lag time before development starts [d].
    pub tlag: f64,

    /// Dominant rate constant [1/d].
    pub kd: f64,
    /// Effect threshold for energy-budget effects [C].
    pub zb: f64,
    /// Effect strength for energy-budget effects [1/C].
    pub bb: f64,
    /// Effect threshold for survival [C].
    pub zs: f64,
    /// Effect strength for survival [1/(C d)].
    pub bs: f64,

    /// Body length at metamorphosis [mm]; disabled when `<= 0`.
    pub lj: f64,
    /// Reference maximum length for surface:volume scaling [mm].
    pub lm_ref: f64,
    /// Multiplication factor applied to time-varying exposure [-].
    pub mf: f64,
    /// Weibull shape of the background hazard [-].
    pub a: f64,
}

/// Errors that can occur when building or validating parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParameterError {
    #[error("expected {expected} values, got {got}")]
    WrongCount { expected: usize, got: usize },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must lie strictly between 0 and 1, got {value}")]
    NotAFraction { name: &'static str, value: f64 },

    #[error("Lp ({lp}) must be below Lm ({lm})")]
    PubertyNotBelowMaximum { lp: f64, lm: f64 },
}

impl Parameters {
    /// Builds parameters from a flat slice in [`PARAM_NAMES`] order.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::WrongCount`] if `values` does not hold exactly
    /// [`N_PARAMS`] elements. Values are not otherwise checked; see
    /// [`Parameters::validate`].
    pub fn from_slice(values: &[f64]) -> Result<Self, ParameterError> {
        let Ok(v) = <[f64; N_PARAMS]>::try_from(values) else {
            return Err(ParameterError::WrongCount {
                expected: N_PARAMS,
                got: values.len(),
            });
        };

        Ok(Self {
            fbv: v[0],
            krv: v[1],
            kap: v[2],
            yp: v[3],
            l0: v[4],
            lp: v[5],
            lm: v[6],
            rb: v[7],
            rm: v[8],
            f: v[9],
            hb: v[10],
            lf: v[11],
            tlag: v[12],
            kd: v[13],
            zb: v[14],
            bb: v[15],
            zs: v[16],
            bs: v[17],
            lj: v[18],
            lm_ref: v[19],
            mf: v[20],
            a: v[21],
        })
    }

    /// Returns the parameters as a flat vector in [`PARAM_NAMES`] order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.fbv,
            self.krv,
            self.kap,
            self.yp,
            self.l0,
            self.lp,
            self.lm,
            self.rb,
            self.rm,
            self.f,
            self.hb,
            self.lf,
            self.tlag,
            self.kd,
            self.zb,
            self.bb,
            self.zs,
            self.bs,
            self.lj,
            self.lm_ref,
            self.mf,
            self.a,
        ]
    }

    /// Checks that every value is finite and that every quantity the model
    /// divides by is nonzero.
    ///
    /// `L0`, `Lm`, `yP` and `a` must be positive, `kap` must lie in `(0, 1)`,
    /// and `Lp` must be below `Lm`.
    ///
    /// # Errors
    ///
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (&name, value) in PARAM_NAMES.iter().zip(self.to_vec()) {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }

        for (name, value) in [
            ("L0", self.l0),
            ("Lm", self.lm),
            ("yP", self.yp),
            ("a", self.a),
        ] {
            if value <= 0.0 {
                return Err(ParameterError::NotPositive { name, value });
            }
        }

        if self.kap <= 0.0 || self.kap >= 1.0 {
            return Err(ParameterError::NotAFraction {
                name: "kap",
                value: self.kap,
            });
        }

        if self.lp >= self.lm {
            return Err(ParameterError::PubertyNotBelowMaximum {
                lp: self.lp,
                lm: self.lm,
            });
        }

        Ok(())
    }
}
