use crate::{constants::MOA_NAMES, params::ParameterError};

/// Weights selecting which physiological processes the toxicant stresses.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeOfAction {
    /// Assimilation (feeding).
    pub assimilation: f64,
    /// Somatic and maturity maintenance.
    pub maintenance: f64,
    /// Growth costs.
    pub growth: f64,
    /// Reproduction costs.
    pub reproduction: f64,
    /// Hazard to reproduction.
    pub hazard_reproduction: f64,
}

impl ModeOfAction {
    /// Returns the weights in flat-vector order.
    #[must_use]
    pub fn to_array(&self) -> [f64; 5] {
        [
            self.assimilation,
            self.maintenance,
            self.growth,
            self.reproduction,
            self.hazard_reproduction,
        ]
    }

    /// Checks that every weight is finite.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::NonFinite`] naming the first offending weight.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (&name, value) in MOA_NAMES.iter().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }
        Ok(())
    }
}

impl From<[f64; 5]> for ModeOfAction {
    fn from(
        [assimilation, maintenance, growth, reproduction, hazard_reproduction]: [f64; 5],
    ) -> Self {
        Self {
            assimilation,
            maintenance,
            growth,
            reproduction,
            hazard_reproduction,
        }
    }
}
