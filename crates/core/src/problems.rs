mod ode;

pub use ode::{OdeProblem, Point};
