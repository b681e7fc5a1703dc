use thiserror::Error;

/// Errors that can occur when building or selecting an exposure scenario.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("scenario table is empty but a lookup is required")]
    EmptyTable,

    #[error("row {row} has {width} columns; expected 2 or 3")]
    RowWidth { row: usize, width: usize },

    #[error("row {row} has a non-finite value: {value}")]
    NonFiniteValue { row: usize, value: f64 },

    #[error("breakpoint times must be strictly increasing: row {row} has t = {value} after {previous}")]
    NonIncreasingTimes {
        row: usize,
        previous: f64,
        value: f64,
    },

    #[error("linear ramp needs a slope, but row {row} has none")]
    MissingSlope { row: usize },

    #[error("fixed row {row} is out of range for a table with {len} rows")]
    FixedRowOutOfRange { row: usize, len: usize },

    #[error("no scenario with identifier {id}")]
    UnknownScenario { id: f64 },

    #[error("unknown interpolation code {code}")]
    UnknownInterpolation { code: f64 },

    #[error("constant exposure has no table to look up")]
    ConstantLookup,

    #[error("invalid time-varying codes {codes:?}; expected [enabled] or [enabled, row]")]
    TimeVaryingCodes { codes: Vec<f64> },
}
