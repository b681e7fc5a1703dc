use thiserror::Error;

/// Consecutive rejections of a single step before the solver gives up.
const DEFAULT_MAX_REJECTIONS: usize = 500;

/// Configuration for the Dormand–Prince solver.
///
/// Step sizes and tolerances are always caller-supplied; there is no `Default`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_step: f64,
    abs_tol: f64,
    rel_tol: f64,
    max_step: f64,
    max_rejections: usize,
}

/// Errors that can occur when validating a Dormand–Prince solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial_step must be finite and positive")]
    InitialStep,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol and rel_tol cannot both be zero")]
    ZeroTolerance,

    #[error("max_step must be positive")]
    MaxStep,

    #[error("max_rejections must be at least one")]
    MaxRejections,
}

impl Config {
    /// Creates a new config with validated step sizes and tolerances.
    ///
    /// `max_step` caps every step the solver takes; pass `f64::INFINITY` to
    /// leave steps uncapped.
    ///
    /// # Errors
    ///
    /// Returns an error if a step size is not positive, a tolerance is negative
    /// or non-finite, or both tolerances are zero.
    pub fn new(
        initial_step: f64,
        abs_tol: f64,
        rel_tol: f64,
        max_step: f64,
    ) -> Result<Self, ConfigError> {
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if abs_tol == 0.0 && rel_tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }
        if max_step.is_nan() || max_step <= 0.0 {
            return Err(ConfigError::MaxStep);
        }

        Ok(Self {
            initial_step,
            abs_tol,
            rel_tol,
            max_step,
            max_rejections: DEFAULT_MAX_REJECTIONS,
        })
    }

    /// Returns a copy with a different limit on consecutive step rejections.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_rejections` is zero.
    pub fn with_max_rejections(self, max_rejections: usize) -> Result<Self, ConfigError> {
        if max_rejections == 0 {
            return Err(ConfigError::MaxRejections);
        }
        Ok(Self {
            max_rejections,
            ..self
        })
    }

    /// Returns the step size tried first.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the absolute tolerance for local error control.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative tolerance for local error control.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the largest step the solver may take.
    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.max_step
    }

    /// Returns the number of consecutive rejections tolerated for one step.
    #[must_use]
    pub fn max_rejections(&self) -> usize {
        self.max_rejections
    }
}
