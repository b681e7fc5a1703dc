//! Integrating a DEBtox model over a time grid.

use thiserror::Error;

use debtox_core::Observer;
use debtox_solvers::transient::dopri5::{self, Action, Config, ConfigError, Event, Stats, Status};

use crate::{
    constants::STATE_SIZE, derivative::DerivativeModel, params::ParameterError,
    problem::DebProblem, scenario::ScenarioError, state::State,
};

/// Model states at the requested output times.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: Vec<State>,
    stats: Stats,
}

impl Trajectory {
    /// Returns the output times.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the state at each output time.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Returns the solver's work counters.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterates over `(time, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &State)> {
        self.times.iter().copied().zip(&self.states)
    }

    /// Returns the final `(time, state)` pair.
    #[must_use]
    pub fn last(&self) -> Option<(f64, &State)> {
        self.times.last().copied().zip(self.states.last())
    }

    /// Returns one `[damage, length, reproduction, survival]` row per time.
    #[must_use]
    pub fn to_rows(&self) -> Vec<[f64; STATE_SIZE]> {
        self.states.iter().map(State::to_array).collect()
    }
}

/// Errors that can occur when setting up or integrating a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("invalid parameter")]
    Parameter(#[from] ParameterError),

    #[error("invalid exposure scenario")]
    Scenario(#[from] ScenarioError),

    #[error("invalid solver settings")]
    Config(#[from] ConfigError),

    #[error("integration diverged at t = {reached}")]
    Divergence {
        reached: f64,
        #[source]
        source: dopri5::Error,
    },

    #[error("integration failed")]
    Solver(#[source] dopri5::Error),

    #[error("stopped by observer after {recorded} of {requested} output times")]
    Stopped { recorded: usize, requested: usize },
}

impl From<dopri5::Error> for RunError {
    fn from(err: dopri5::Error) -> Self {
        match err.reached() {
            Some(reached) => Self::Divergence {
                reached,
                source: err,
            },
            None => Self::Solver(err),
        }
    }
}

/// Integrates `model` from `initial`, recording the state at each time.
///
/// # Errors
///
/// Returns an error if the time grid or initial state is invalid, or if the
/// solver diverges. No partial trajectory is returned.
pub fn integrate(
    model: &DerivativeModel,
    initial: State,
    times: &[f64],
    config: &Config,
) -> Result<Trajectory, RunError> {
    integrate_observed(model, initial, times, config, ())
}

/// Integrates `model` while forwarding solver events to `observer`.
///
/// # Errors
///
/// As for [`integrate`], and [`RunError::Stopped`] if the observer stops the
/// solver before every time is recorded.
pub fn integrate_observed<Obs>(
    model: &DerivativeModel,
    initial: State,
    times: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Trajectory, RunError>
where
    Obs: Observer<Event<STATE_SIZE>, Action>,
{
    log::debug!(
        "integrating {} output times from {:?} to {:?}",
        times.len(),
        times.first(),
        times.last()
    );

    let solution = dopri5::solve(
        model,
        &DebProblem,
        initial.to_array(),
        times,
        config,
        observer,
    )
    .map_err(|err| {
        if let Some(t) = err.reached() {
            log::warn!("integration diverged at t = {t}: {err}");
        }
        RunError::from(err)
    })?;

    let stats = solution.stats;
    if solution.status == Status::StoppedByObserver {
        log::debug!(
            "integration stopped by observer after {} output times",
            solution.points.len()
        );
        return Err(RunError::Stopped {
            recorded: solution.points.len(),
            requested: times.len(),
        });
    }

    log::debug!(
        "integration complete: {} accepted steps, {} rejected, {} evaluations",
        stats.accepted,
        stats.rejected,
        stats.evaluations
    );

    let (times, states) = solution
        .points
        .into_iter()
        .map(|point| (point.t, State::from(point.y)))
        .unzip();

    Ok(Trajectory {
        times,
        states,
        stats,
    })
}
