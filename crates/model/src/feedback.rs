use crate::{constants::FEEDBACK_NAMES, params::ParameterError};

/// Multipliers for the feedbacks on damage dynamics.
///
/// A zero switch disables its feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeedbackSwitches {
    /// Surface:volume scaling of uptake.
    pub uptake: f64,
    /// Surface:volume scaling of elimination.
    pub elimination: f64,
    /// Dilution of damage by growth.
    pub growth_dilution: f64,
    /// Damage losses with reproduction.
    pub reproduction: f64,
}

impl FeedbackSwitches {
    /// Returns the switches in flat-vector order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [
            self.uptake,
            self.elimination,
            self.growth_dilution,
            self.reproduction,
        ]
    }

    /// Checks that every switch is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFinite`] naming the first offending switch.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (&name, value) in FEEDBACK_NAMES.iter().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

impl From<[f64; 4]> for FeedbackSwitches {
    fn from([uptake, elimination, growth_dilution, reproduction]: [f64; 4]) -> Self {
        Self {
            uptake,
            elimination,
            growth_dilution,
            reproduction,
        }
    }
}
