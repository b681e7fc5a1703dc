use super::ScenarioError;

/// How concentration varies between scenario breakpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Interpolation {
    /// No lookup; the fixed concentration applies throughout.
    Constant,

    /// Concentration holds the value of the last breakpoint.
    StepHold,

    /// Concentration decays exponentially from the last breakpoint.
    ///
    /// The decay rate is the concentration of the final row.
    ExponentialDecay,

    /// Concentration changes linearly from the last breakpoint at its slope.
    LinearRamp,
}

impl Interpolation {
    /// Parses a numeric mode code: 1 constant, 2 step-hold, 3 exponential
    /// decay, 4 linear ramp.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::UnknownInterpolation`] for any other value.
    pub fn from_code(code: f64) -> Result<Self, ScenarioError> {
        match code {
            1.0 => Ok(Self::Constant),
            2.0 => Ok(Self::StepHold),
            3.0 => Ok(Self::ExponentialDecay),
            4.0 => Ok(Self::LinearRamp),
            _ => Err(ScenarioError::UnknownInterpolation { code }),
        }
    }

    /// Returns the numeric mode code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Constant => 1,
            Self::StepHold => 2,
            Self::ExponentialDecay => 3,
            Self::LinearRamp => 4,
        }
    }
}
