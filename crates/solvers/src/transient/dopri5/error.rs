use std::error::Error as StdError;

use thiserror::Error;

use crate::transient::EvalError;

/// Errors that can occur during Dormand–Prince integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no output times were requested")]
    NoTimes,

    #[error("output time at index {index} is not finite: {value}")]
    NonFiniteTime { index: usize, value: f64 },

    #[error("output times must be strictly increasing: t[{index}] = {value} after {previous}")]
    NonIncreasingTimes {
        index: usize,
        previous: f64,
        value: f64,
    },

    #[error("initial state component {index} is not finite: {value}")]
    NonFiniteState { index: usize, value: f64 },

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("step rejected {attempts} times in a row at t = {t} (step size {h})")]
    TooManyRejections { t: f64, h: f64, attempts: usize },

    #[error("step size {h} too small to advance from t = {t}")]
    StepSizeUnderflow { t: f64, h: f64 },
}

impl Error {
    /// Returns the furthest time the solution reached before diverging.
    ///
    /// Returns `None` for errors that are not divergence failures.
    #[must_use]
    pub fn reached(&self) -> Option<f64> {
        match self {
            Self::TooManyRejections { t, .. } | Self::StepSizeUnderflow { t, .. } => Some(*t),
            _ => None,
        }
    }
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
