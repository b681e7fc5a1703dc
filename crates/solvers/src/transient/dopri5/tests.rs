use std::{cell::Cell, convert::Infallible, f64::consts::PI};

use approx::assert_relative_eq;
use thiserror::Error;

use debtox_core::{Model, OdeProblem, Point};

use super::{Action, Config, Error, Event, Status, solve, solve_unobserved};

/// Model whose output is `rhs(t, y)`.
struct Ode<F, const N: usize> {
    rhs: F,
}

impl<F, const N: usize> Model for Ode<F, N>
where
    F: Fn(f64, &[f64; N]) -> [f64; N],
{
    type Input = Point<N>;
    type Output = [f64; N];
    type Error = Infallible;

    fn call(&self, input: &Point<N>) -> Result<[f64; N], Self::Error> {
        Ok((self.rhs)(input.t, &input.y))
    }
}

/// Problem that passes points straight through to the model.
struct Direct;

impl<const N: usize> OdeProblem<N> for Direct {
    type Input = Point<N>;
    type Output = [f64; N];
    type Error = Infallible;

    fn input(&self, point: &Point<N>) -> Result<Self::Input, Self::Error> {
        Ok(*point)
    }

    fn derivative(&self, _input: &Point<N>, output: &[f64; N]) -> Result<[f64; N], Self::Error> {
        Ok(*output)
    }
}

fn decay() -> Ode<impl Fn(f64, &[f64; 1]) -> [f64; 1], 1> {
    Ode {
        rhs: |_t: f64, y: &[f64; 1]| [-y[0]],
    }
}

fn grid(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + step * i as f64).collect()
}

fn tight() -> Config {
    Config::new(0.01, 1e-10, 1e-10, f64::INFINITY).unwrap()
}

#[test]
fn exponential_decay_matches_closed_form() {
    let times = grid(0.0, 0.5, 11);

    let solution = solve_unobserved(&decay(), &Direct, [1.0], &times, &tight())
        .expect("should integrate");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.points.len(), times.len());
    for point in &solution.points {
        assert_relative_eq!(point.y[0], (-point.t).exp(), epsilon = 1e-8);
    }
}

#[test]
fn harmonic_oscillator_stays_on_circle() {
    let model: Ode<_, 2> = Ode {
        rhs: |_t: f64, y: &[f64; 2]| [y[1], -y[0]],
    };
    let times = grid(0.0, PI / 4.0, 41);

    let solution =
        solve_unobserved(&model, &Direct, [0.0, 1.0], &times, &tight()).expect("should integrate");

    for point in &solution.points {
        assert_relative_eq!(point.y[0], point.t.sin(), epsilon = 1e-6);
        assert_relative_eq!(point.y[1], point.t.cos(), epsilon = 1e-6);
    }
}

#[test]
fn records_requested_times_exactly() {
    let times = vec![0.0, 0.3, 0.31, 2.0, 7.5];

    let solution =
        solve_unobserved(&decay(), &Direct, [2.0], &times, &tight()).expect("should integrate");

    let recorded: Vec<f64> = solution.points.iter().map(|p| p.t).collect();
    assert_eq!(recorded, times);
    assert_relative_eq!(solution.points[0].y[0], 2.0);
}

#[test]
fn single_time_returns_initial_state() {
    let solution =
        solve_unobserved(&decay(), &Direct, [3.0], &[4.0], &tight()).expect("should integrate");

    assert_eq!(solution.status, Status::Complete);
    assert_eq!(solution.points, vec![Point::new(4.0, [3.0])]);
    assert_eq!(solution.stats.accepted, 0);
    assert_eq!(solution.stats.evaluations, 1);
}

#[test]
fn dense_output_covers_many_times_per_step() {
    let config = Config::new(0.01, 1e-9, 1e-9, f64::INFINITY).unwrap();
    let times = grid(0.0, 0.05, 201);

    let solution =
        solve_unobserved(&decay(), &Direct, [1.0], &times, &config).expect("should integrate");

    assert_eq!(solution.points.len(), 201);
    assert!(solution.stats.accepted < 200);
    for point in &solution.points {
        assert_relative_eq!(point.y[0], (-point.t).exp(), epsilon = 1e-7);
    }
}

#[test]
fn steps_never_exceed_max_step() {
    let config = Config::new(0.01, 1e-6, 1e-6, 0.25).unwrap();
    let mut steps = Vec::new();

    let observer = |event: &Event<1>| -> Option<Action> {
        if let Event::Accepted { h, .. } = event {
            steps.push(*h);
        }
        None
    };

    solve(&decay(), &Direct, [1.0], &[0.0, 10.0], &config, observer).expect("should integrate");

    assert!(steps.len() >= 40);
    assert!(steps.iter().all(|&h| h <= 0.25));
}

#[test]
fn never_evaluates_past_last_time() {
    let latest = Cell::new(f64::NEG_INFINITY);
    let model: Ode<_, 1> = Ode {
        rhs: |t: f64, y: &[f64; 1]| {
            latest.set(latest.get().max(t));
            [-y[0]]
        },
    };

    let config = Config::new(0.7, 1e-6, 1e-6, f64::INFINITY).unwrap();
    let solution = solve_unobserved(&model, &Direct, [1.0], &[0.0, 1.0, 3.3], &config)
        .expect("should integrate");

    assert_eq!(solution.points.last().map(|p| p.t), Some(3.3));
    assert!(latest.get() <= 3.3 + 1e-12);
}

#[test]
fn resolves_switch_in_rate() {
    // dy/dt is zero until t = 1, then one.
    let model: Ode<_, 1> = Ode {
        rhs: |t: f64, _y: &[f64; 1]| [if t < 1.0 { 0.0 } else { 1.0 }],
    };
    let config = Config::new(0.1, 1e-9, 1e-9, 0.5).unwrap();

    let solution = solve_unobserved(&model, &Direct, [0.0], &[0.0, 0.9, 3.0], &config)
        .expect("should integrate");

    assert_relative_eq!(solution.points[1].y[0], 0.0, epsilon = 1e-6);
    assert_relative_eq!(solution.points[2].y[0], 2.0, epsilon = 1e-6);
    assert!(solution.stats.rejected > 0);
}

#[test]
fn stats_count_every_evaluation() {
    let solution = solve_unobserved(&decay(), &Direct, [1.0], &[0.0, 5.0], &tight())
        .expect("should integrate");

    let stats = solution.stats;
    assert_eq!(
        stats.evaluations,
        1 + 6 * (stats.accepted + stats.rejected)
    );
}

#[test]
fn observer_can_stop_after_a_recorded_point() {
    let observer = |event: &Event<1>| match event {
        Event::Recorded { index: 2, .. } => Some(Action::StopEarly),
        _ => None,
    };

    let solution = solve(&decay(), &Direct, [1.0], &grid(0.0, 1.0, 6), &tight(), observer)
        .expect("should stop early");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.points.len(), 3);
    assert_relative_eq!(solution.points[2].t, 2.0);
}

#[test]
fn observer_sees_rejections() {
    let config = Config::new(5.0, 1e-10, 1e-10, f64::INFINITY).unwrap();
    let mut rejected = 0;

    let observer = |event: &Event<1>| -> Option<Action> {
        if matches!(event, Event::Rejected { .. }) {
            rejected += 1;
        }
        None
    };

    let solution =
        solve(&decay(), &Direct, [1.0], &[0.0, 5.0], &config, observer).expect("should integrate");

    assert!(rejected > 0);
    assert_eq!(rejected, solution.stats.rejected);
}

#[test]
fn rejects_invalid_times() {
    let config = tight();

    let empty = solve_unobserved(&decay(), &Direct, [1.0], &[], &config);
    assert!(matches!(empty, Err(Error::NoTimes)));

    let nan = solve_unobserved(&decay(), &Direct, [1.0], &[0.0, f64::NAN], &config);
    assert!(matches!(nan, Err(Error::NonFiniteTime { index: 1, .. })));

    let repeated = solve_unobserved(&decay(), &Direct, [1.0], &[0.0, 1.0, 1.0], &config);
    assert!(matches!(
        repeated,
        Err(Error::NonIncreasingTimes { index: 2, .. })
    ));

    let backwards = solve_unobserved(&decay(), &Direct, [1.0], &[1.0, 0.0], &config);
    assert!(matches!(
        backwards,
        Err(Error::NonIncreasingTimes { index: 1, .. })
    ));
}

#[test]
fn rejects_non_finite_initial_state() {
    let model: Ode<_, 2> = Ode {
        rhs: |_t: f64, y: &[f64; 2]| *y,
    };

    let result = solve_unobserved(&model, &Direct, [0.0, f64::INFINITY], &[0.0, 1.0], &tight());

    assert!(matches!(result, Err(Error::NonFiniteState { index: 1, .. })));
}

/// A right-hand side that is undefined after the start.
fn poisoned() -> Ode<impl Fn(f64, &[f64; 1]) -> [f64; 1], 1> {
    Ode {
        rhs: |t: f64, y: &[f64; 1]| if t > 0.0 { [f64::NAN] } else { [-y[0]] },
    }
}

#[test]
fn fails_after_too_many_rejections() {
    let config = tight().with_max_rejections(3).unwrap();

    let error = solve_unobserved(&poisoned(), &Direct, [1.0], &[0.0, 1.0], &config)
        .expect_err("should diverge");

    assert!(matches!(error, Error::TooManyRejections { attempts: 3, .. }));
    assert_eq!(error.reached(), Some(0.0));
}

#[test]
fn fails_when_step_size_underflows() {
    let error = solve_unobserved(&poisoned(), &Direct, [1.0], &[0.0, 1.0], &tight())
        .expect_err("should diverge");

    assert!(matches!(error, Error::StepSizeUnderflow { .. }));
    assert_eq!(error.reached(), Some(0.0));
}

#[test]
fn infinite_rate_at_start_diverges_instead_of_returning_non_finite_states() {
    let model: Ode<_, 1> = Ode {
        rhs: |t: f64, y: &[f64; 1]| {
            if t == 0.0 {
                [f64::NEG_INFINITY]
            } else {
                [-y[0]]
            }
        },
    };

    let error = solve_unobserved(&model, &Direct, [1.0], &[0.0, 1.0, 2.0], &tight())
        .expect_err("should diverge");

    assert!(matches!(error, Error::StepSizeUnderflow { .. }));
    assert_eq!(error.reached(), Some(0.0));
}

#[derive(Debug, Error)]
#[error("rate undefined at t = {0}")]
struct Undefined(f64);

/// Model that fails once time passes one.
struct Fragile;

impl Model for Fragile {
    type Input = Point<1>;
    type Output = [f64; 1];
    type Error = Undefined;

    fn call(&self, input: &Point<1>) -> Result<[f64; 1], Undefined> {
        if input.t > 1.0 {
            Err(Undefined(input.t))
        } else {
            Ok([-input.y[0]])
        }
    }
}

#[test]
fn model_errors_are_propagated() {
    let error = solve_unobserved(&Fragile, &Direct, [1.0], &[0.0, 2.0], &tight())
        .expect_err("should fail");

    assert!(matches!(error, Error::Model(_)));
    assert_eq!(error.reached(), None);
}
