use super::ScenarioError;

/// Whether exposure varies over time, and optionally which table row to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeVarying {
    /// Look concentrations up from the scenario table.
    pub enabled: bool,

    /// Zero-based row used for every lookup instead of a time search.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixed_row: Option<usize>,
}

impl TimeVarying {
    /// Constant exposure at the fixed concentration.
    pub const DISABLED: Self = Self {
        enabled: false,
        fixed_row: None,
    };

    /// Time-varying exposure, searching the table at each time.
    #[must_use]
    pub fn search() -> Self {
        Self {
            enabled: true,
            fixed_row: None,
        }
    }

    /// Time-varying exposure, always reading `row`.
    #[must_use]
    pub fn fixed(row: usize) -> Self {
        Self {
            enabled: true,
            fixed_row: Some(row),
        }
    }

    /// Parses `[enabled]` or `[enabled, row]` codes.
    ///
    /// Exposure is time-varying when the first code truncates to one. The
    /// optional row is one-based and ignored unless it is at least one.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::TimeVaryingCodes`] for any other length or a
    /// non-finite code.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_codes(codes: &[f64]) -> Result<Self, ScenarioError> {
        let invalid = || ScenarioError::TimeVaryingCodes {
            codes: codes.to_vec(),
        };

        if codes.iter().any(|c| !c.is_finite()) {
            return Err(invalid());
        }

        let (flag, row) = match *codes {
            [flag] => (flag, None),
            [flag, row] => (flag, Some(row)),
            _ => return Err(invalid()),
        };

        Ok(Self {
            enabled: flag.trunc() == 1.0,
            fixed_row: row.filter(|&r| r >= 1.0).map(|r| r as usize - 1),
        })
    }
}
