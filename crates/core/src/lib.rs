//! Core traits and types for DEBtox model integration.
//!
//! This crate defines the shared abstractions that the solver, observer, and
//! model crates build on:
//!
//! - [`Model`] — a callable that maps a typed input to a typed output
//! - [`Snapshot`] — a captured input/output pair from a model call
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`OdeProblem`] — adapts a solver point `(t, y)` to model input and extracts
//!   the state derivative from model output

mod model;
mod observer;
mod problems;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::{OdeProblem, Point};
