//! Everything a run needs, in one plain-data bundle.
//!
//! With the `serde` feature enabled, a [`RunConfig`] can be read from any
//! serde format. Loading files is left to the caller.

use debtox_solvers::transient::dopri5::{Config, ConfigError};

use crate::{
    derivative::DerivativeModel,
    feedback::FeedbackSwitches,
    moa::ModeOfAction,
    params::Parameters,
    run::{RunError, Trajectory, integrate},
    scenario::{Exposure, Scenarios, TimeVarying},
    state::State,
};

/// Unvalidated solver controls.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverSettings {
    pub initial_step: f64,
    pub abs_tol: f64,
    pub rel_tol: f64,
    pub max_step: f64,
}

impl SolverSettings {
    /// Validates the settings into a solver config.
    ///
    /// # Errors
    ///
    /// Returns an error for the reasons listed on [`Config::new`].
    pub fn to_config(&self) -> Result<Config, ConfigError> {
        Config::new(self.initial_step, self.abs_tol, self.rel_tol, self.max_step)
    }
}

/// Inputs for a single run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Output times, strictly increasing.
    pub times: Vec<f64>,

    /// State at the first output time.
    pub initial: State,

    pub parameters: Parameters,

    #[cfg_attr(feature = "serde", serde(default))]
    pub feedbacks: FeedbackSwitches,

    #[cfg_attr(feature = "serde", serde(default))]
    pub moa: ModeOfAction,

    /// Fixed concentration, or the scenario identifier when exposure is
    /// time-varying.
    pub concentration: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub scenarios: Scenarios,

    #[cfg_attr(feature = "serde", serde(default))]
    pub time_varying: TimeVarying,

    pub solver: SolverSettings,
}

impl RunConfig {
    /// Builds the derivative model, selecting the exposure scenario.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario cannot be selected or a parameter is
    /// invalid.
    pub fn model(&self) -> Result<DerivativeModel, RunError> {
        let exposure = Exposure::select(self.concentration, &self.time_varying, &self.scenarios)?;
        let model = DerivativeModel::new(self.parameters, self.feedbacks, self.moa, exposure)?;
        Ok(model)
    }

    /// Runs the integration.
    ///
    /// # Errors
    ///
    /// Returns an error if any input is invalid or the solver diverges.
    pub fn simulate(&self) -> Result<Trajectory, RunError> {
        let model = self.model()?;
        let config = self.solver.to_config()?;
        integrate(&model, self.initial, &self.times, &config)
    }
}
