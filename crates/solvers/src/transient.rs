//! Solvers for transient problems — integrating a state forward in time.
//!
//! An [`OdeProblem`] maps a solver point `(t, y)` to model input, calls the
//! model, and extracts the state derivative. Solvers in this module advance the
//! state across a sequence of output times.
//!
//! # Solvers
//!
//! - [`dopri5`] — adaptive Dormand–Prince 5(4) with dense output
//!
//! [`OdeProblem`]: debtox_core::OdeProblem

mod evaluate;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};

pub mod dopri5;
