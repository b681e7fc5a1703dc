//! Numerical solvers for DEBtox problems.
//!
//! Solvers are generic over a [`Model`] and a problem trait from
//! `debtox-core`, and report progress through an [`Observer`].
//!
//! # Modules
//!
//! - [`transient`] — time integration of [`OdeProblem`]s
//!
//! [`Model`]: debtox_core::Model
//! [`Observer`]: debtox_core::Observer
//! [`OdeProblem`]: debtox_core::OdeProblem

pub mod transient;
