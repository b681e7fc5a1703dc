//! Capability traits for solver-agnostic observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once and reused with any solver that implements
//! them.
//!
//! # Event traits
//!
//! - [`HasTime`] — events that refer to a point in time
//! - [`HasStepError`] — events that carry a scaled local error estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use debtox_core::Observer;
//! use debtox_observers::traits::{CanStopEarly, HasStepError};
//!
//! /// Stops after too many rejected steps in total.
//! struct RejectionBudget {
//!     remaining: usize,
//! }
//!
//! impl<E: HasStepError, A: CanStopEarly> Observer<E, A> for RejectionBudget {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.step_error().is_some_and(|err| err > 1.0) {
//!             if self.remaining == 0 {
//!                 return Some(A::stop_early());
//!             }
//!             self.remaining -= 1;
//!         }
//!         None
//!     }
//! }
//! ```

use debtox_solvers::transient::dopri5;

/// An event that refers to a point in time.
pub trait HasTime {
    /// Returns the time this event refers to.
    fn time(&self) -> f64;
}

/// An event that may carry a scaled local error estimate.
pub trait HasStepError {
    /// Returns the scaled error of the attempted step, if the event has one.
    ///
    /// Values above one mean the step was rejected.
    fn step_error(&self) -> Option<f64>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- dopri5 ---

impl<const N: usize> HasTime for dopri5::Event<N> {
    fn time(&self) -> f64 {
        self.t()
    }
}

impl<const N: usize> HasStepError for dopri5::Event<N> {
    fn step_error(&self) -> Option<f64> {
        match self {
            dopri5::Event::Accepted { error, .. } | dopri5::Event::Rejected { error, .. } => {
                Some(*error)
            }
            dopri5::Event::Recorded { .. } => None,
        }
    }
}

impl CanStopEarly for dopri5::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
