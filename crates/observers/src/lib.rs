//! Reusable observers for DEBtox solver runs.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `debtox-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for solver-agnostic observers
//!   ([`HasTime`], [`HasStepError`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — forwards solver events to the [`log`] facade
//! - [`TimeLimit`] — stops a solver once it passes a given time
//!
//! [`Observer`]: debtox_core::Observer
//! [`HasTime`]: traits::HasTime
//! [`HasStepError`]: traits::HasStepError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod logger;
mod time_limit;

pub use logger::LogObserver;
pub use time_limit::TimeLimit;
