//! Fixed values used throughout the DEBtox model.

// -- Numerical safeguards --

/// Upper bound on the toxicant hazard rate [1/d].
///
/// Corresponds to 99% mortality within one hour, and keeps the survival
/// equation from becoming stiff at very high damage levels.
pub const HAZARD_CAP: f64 = 111.0;

/// Body length is never read below this fraction of the initial length.
pub const MIN_LENGTH_FRACTION: f64 = 1e-3;

/// Length changes stop once body length falls to this fraction of the initial
/// length.
pub const SHRINK_FLOOR_FRACTION: f64 = 0.5;

// -- Model contract constants --

/// Scalar parameter names in flat-vector order.
pub const PARAM_NAMES: &[&str] = &[
    "FBV", "KRV", "kap", "yP", "L0", "Lp", "Lm", "rB", "Rm", "f", "hb", "Lf", "Tlag", "kd", "zb",
    "bb", "zs", "bs", "Lj", "Lm_ref", "MF", "a",
];

/// Number of scalar parameters.
pub const N_PARAMS: usize = 22;

/// Feedback switch names in flat-vector order.
pub const FEEDBACK_NAMES: &[&str] = &["uptake", "elimination", "growth_dilution", "reproduction"];

/// Mode-of-action weight names in flat-vector order.
pub const MOA_NAMES: &[&str] = &[
    "assimilation",
    "maintenance",
    "growth",
    "reproduction",
    "hazard_reproduction",
];

/// Number of elements in the state vector.
pub const STATE_SIZE: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_tables_match_sizes() {
        assert_eq!(PARAM_NAMES.len(), N_PARAMS);
        assert_eq!(FEEDBACK_NAMES.len(), 4);
        assert_eq!(MOA_NAMES.len(), 5);
    }

    #[test]
    fn state_size_matches_solver_state() {
        let y: [f64; STATE_SIZE] = crate::State::default().into();
        assert_eq!(y, [0.0; 4]);
    }
}
