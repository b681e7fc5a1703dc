//! Exposure scenarios and concentration lookup.
//!
//! A scenario pairs a breakpoint table with an [`Interpolation`] mode. Runs
//! select one scenario up front with [`Exposure::select`], so the derivative
//! evaluation only performs the table lookup.

mod collection;
mod error;
mod exposure;
mod interpolation;
mod table;
mod time_varying;


pub use collection::{Scenario, Scenarios};
pub use error::ScenarioError;
pub use exposure::{Exposure, Lookup, lookup};
pub use interpolation::Interpolation;
pub use table::{Breakpoint, ScenarioTable};
pub use time_varying::TimeVarying;
