//! DEBtox toxicokinetic-toxicodynamic model.
//!
//! Integrates the growth, reproduction, and survival of an organism exposed to
//! a chemical stressor, using the Dormand–Prince solver from `debtox-solvers`.
//!
//! # Overview
//!
//! - [`Parameters`], [`FeedbackSwitches`], and [`ModeOfAction`] describe the
//!   organism and the toxicant's action.
//! - [`Exposure::select`] resolves the external concentration for a run from a
//!   fixed value or a [`Scenarios`] collection.
//! - [`DerivativeModel`] evaluates the rates of change, and [`DebProblem`]
//!   adapts it to the solver.
//! - [`integrate`] advances a [`State`] over the requested times and returns a
//!   [`Trajectory`].
//! - [`RunConfig`] bundles all of the above for a single call.
//!
//! # Example
//!
//! ```ignore
//! use debtox_model::{DerivativeModel, Exposure, State, integrate};
//! use debtox_solvers::transient::dopri5::Config;
//!
//! let model = DerivativeModel::new(params, feedbacks, moa, Exposure::Constant(0.0))?;
//! let config = Config::new(0.01, 1e-10, 1e-10, 1.0)?;
//! let times: Vec<f64> = (0..=21).map(f64::from).collect();
//!
//! let trajectory = integrate(&model, State::new(0.0, 0.1, 0.0, 1.0), &times, &config)?;
//! ```

pub mod constants;
pub mod processes;
pub mod scenario;

mod config;
mod derivative;
mod feedback;
mod moa;
mod params;
mod problem;
mod run;
mod state;

#[cfg(test)]
mod testing;

pub use config::{RunConfig, SolverSettings};
pub use derivative::{DerivativeModel, Input};
pub use feedback::FeedbackSwitches;
pub use moa::ModeOfAction;
pub use params::{ParameterError, Parameters};
pub use problem::DebProblem;
pub use run::{RunError, Trajectory, integrate, integrate_observed};
pub use scenario::{
    Breakpoint, Exposure, Interpolation, Lookup, Scenario, ScenarioError, ScenarioTable,
    Scenarios, TimeVarying,
};
pub use state::{Rates, State};
