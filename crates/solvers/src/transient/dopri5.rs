//! Adaptive Dormand–Prince 5(4) solver with dense output.
//!
//! The solver advances an [`OdeProblem`] with an explicit embedded
//! Runge–Kutta pair, choosing its own step sizes from a local error estimate,
//! and reports the state only at caller-requested output times. Output times
//! need not coincide with internal steps: the state between steps comes from
//! the method's continuous extension.
//!
//! # Algorithm
//!
//! 1. Record the initial state at the first requested time.
//! 2. Until every requested time is recorded:
//!    - Clip the trial step to `max_step`, and shorten it so the integration
//!      never passes the last requested time.
//!    - Attempt the step. If the scaled error exceeds one, shrink the step
//!      (`h *= max(0.9 err^(-1/3), 0.2)`) and retry.
//!    - On acceptance, grow the next step when the error is small
//!      (`h *= 0.9 max(err, 5^-5)^(-1/5)` for `err < 0.5`).
//!    - Record every requested time covered by the accepted step by
//!      interpolation.
//!
//! The error of component `i` is scaled by
//! `abs_tol + rel_tol * (|y_i| + h |dy_i/dt|)`, evaluated at the start of the
//! step, and the max norm over components is used.
//!
//! # Failure
//!
//! A step whose result or error estimate is not finite is rejected. Integration
//! fails when one step is rejected `max_rejections` times in a row or the step
//! size drops below `16 ε max(1, |t|)`. No partial solution is returned in that
//! case.
//!
//! # Observer Events
//!
//! - [`Event::Recorded`] — after each output point is stored
//! - [`Event::Accepted`] — after each accepted step
//! - [`Event::Rejected`] — after each rejected attempt
//!
//! Observers can return [`Action::StopEarly`] from any event to end the solve
//! with the points recorded so far.
//!
//! # Example
//!
//! ```ignore
//! use debtox_solvers::transient::dopri5;
//!
//! let config = dopri5::Config::new(0.01, 1e-10, 1e-8, 0.5)?;
//! let solution = dopri5::solve_unobserved(&model, &problem, y0, &times, &config)?;
//!
//! for point in &solution.points {
//!     println!("t={}: {:?}", point.t, point.y);
//! }
//! ```
//!
//! [`OdeProblem`]: debtox_core::OdeProblem

mod action;
mod config;
mod error;
mod event;
mod solution;
mod stepper;
mod tableau;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Stats, Status};

use debtox_core::{Model, Observer, OdeProblem, Point};

use crate::transient::evaluate;

/// Relative size of the smallest step the solver will attempt.
const STEP_FLOOR: f64 = 16.0 * f64::EPSILON;

/// Derivative evaluations made by each attempted step.
const STAGES_PER_ATTEMPT: usize = 6;

/// Integrates an ODE problem, recording the state at each requested time.
///
/// `times` must be finite and strictly increasing. The first recorded point is
/// `initial` at `times[0]`.
///
/// # Observer
///
/// The observer receives an [`Event`] for every recorded point and every
/// accepted or rejected step, and may return [`Action::StopEarly`] to end the
/// integration early.
///
/// # Errors
///
/// Returns an error if the time grid or initial state is invalid, if the model
/// or problem fails, or if the step-size controller cannot meet the tolerances.
pub fn solve<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    initial: [f64; N],
    times: &[f64],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<N>, Error>
where
    M: Model,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
    Obs: Observer<Event<N>, Action>,
{
    validate_times(times)?;
    validate_state(&initial)?;

    let mut rhs = |t: f64, y: &[f64; N]| -> Result<[f64; N], Error> {
        let eval = evaluate(model, problem, Point::new(t, *y))?;
        Ok(eval.derivative)
    };

    let last = times[times.len() - 1];
    let mut points = Vec::with_capacity(times.len());
    let mut stats = Stats::default();

    let mut t = times[0];
    let mut y = initial;
    let mut dydt = rhs(t, &y)?;
    stats.evaluations += 1;
    let mut h = config.initial_step();

    let first = Point::new(t, y);
    points.push(first);
    if let Some(Action::StopEarly) = observer.observe(&Event::Recorded {
        index: 0,
        point: first,
    }) {
        return Ok(stopped(points, stats));
    }

    let mut next = 1;

    while next < times.len() {
        let mut rejections = 0;
        let (trial, h_used) = loop {
            h = h.min(config.max_step());
            if t + h > last {
                h = last - t;
            }

            if h < STEP_FLOOR * t.abs().max(1.0) {
                return Err(Error::StepSizeUnderflow { t, h });
            }

            let trial = stepper::attempt(
                &mut rhs,
                t,
                &y,
                &dydt,
                h,
                config.abs_tol(),
                config.rel_tol(),
            )?;
            stats.evaluations += STAGES_PER_ATTEMPT;

            if trial.error <= 1.0 {
                break (trial, h);
            }

            rejections += 1;
            stats.rejected += 1;

            let event = Event::Rejected {
                t,
                h,
                error: trial.error,
            };
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(stopped(points, stats));
            }

            if rejections >= config.max_rejections() {
                return Err(Error::TooManyRejections {
                    t,
                    h,
                    attempts: rejections,
                });
            }

            h = stepper::shrink(h, trial.error);
        };

        let t_start = t;
        t = if last - (t_start + h_used) < STEP_FLOOR * last.abs().max(1.0) {
            last
        } else {
            t_start + h_used
        };
        y = trial.y;
        dydt = trial.dydt;
        h = stepper::grow(h_used, trial.error);
        stats.accepted += 1;

        let event = Event::Accepted {
            step: stats.accepted,
            t_start,
            point: Point::new(t, y),
            h: h_used,
            error: trial.error,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(stopped(points, stats));
        }

        while next < times.len() && times[next] - t <= f64::EPSILON {
            let target = times[next];
            let state = if target >= t {
                y
            } else {
                trial.dense.at(target)
            };
            let point = Point::new(target, state);
            points.push(point);

            let event = Event::Recorded { index: next, point };
            next += 1;
            if let Some(Action::StopEarly) = observer.observe(&event) {
                return Ok(stopped(points, stats));
            }
        }
    }

    Ok(Solution {
        status: Status::Complete,
        points,
        stats,
    })
}

/// Integrates an ODE problem without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the time grid or initial state is invalid, if the model
/// or problem fails, or if the step-size controller cannot meet the tolerances.
pub fn solve_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    initial: [f64; N],
    times: &[f64],
    config: &Config,
) -> Result<Solution<N>, Error>
where
    M: Model,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial, times, config, ())
}

/// Builds the solution returned when an observer stops the solver.
fn stopped<const N: usize>(points: Vec<Point<N>>, stats: Stats) -> Solution<N> {
    Solution {
        status: Status::StoppedByObserver,
        points,
        stats,
    }
}

/// Validates that output times are non-empty, finite, and strictly increasing.
fn validate_times(times: &[f64]) -> Result<(), Error> {
    if times.is_empty() {
        return Err(Error::NoTimes);
    }

    if let Some((index, &value)) = times.iter().enumerate().find(|(_, t)| !t.is_finite()) {
        return Err(Error::NonFiniteTime { index, value });
    }

    if let Some(index) = times.windows(2).position(|pair| pair[1] <= pair[0]) {
        return Err(Error::NonIncreasingTimes {
            index: index + 1,
            previous: times[index],
            value: times[index + 1],
        });
    }

    Ok(())
}

/// Validates that every initial state component is finite.
fn validate_state<const N: usize>(initial: &[f64; N]) -> Result<(), Error> {
    match initial.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        Some((index, &value)) => Err(Error::NonFiniteState { index, value }),
        None => Ok(()),
    }
}
