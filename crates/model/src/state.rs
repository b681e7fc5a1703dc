//! State vector and its rates of change.

use crate::constants::STATE_SIZE;

/// Organism state: scaled damage, body length, cumulative reproduction, and
/// survival probability.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    /// Scaled damage [C].
    pub damage: f64,
    /// Body length [mm].
    pub length: f64,
    /// Cumulative reproduction [#].
    pub reproduction: f64,
    /// Survival probability [-].
    pub survival: f64,
}

impl State {
    /// Creates a new state.
    #[must_use]
    pub fn new(damage: f64, length: f64, reproduction: f64, survival: f64) -> Self {
        Self {
            damage,
            length,
            reproduction,
            survival,
        }
    }

    /// Returns a copy with every component raised to at least zero.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            damage: self.damage.max(0.0),
            length: self.length.max(0.0),
            reproduction: self.reproduction.max(0.0),
            survival: self.survival.max(0.0),
        }
    }

    /// Returns the state in flat-vector order.
    #[must_use]
    pub fn to_array(&self) -> [f64; STATE_SIZE] {
        [self.damage, self.length, self.reproduction, self.survival]
    }
}

impl From<[f64; STATE_SIZE]> for State {
    fn from([damage, length, reproduction, survival]: [f64; STATE_SIZE]) -> Self {
        Self::new(damage, length, reproduction, survival)
    }
}

impl From<State> for [f64; STATE_SIZE] {
    fn from(state: State) -> Self {
        state.to_array()
    }
}

/// Rates of change of each [`State`] component, per day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rates {
    pub damage: f64,
    pub length: f64,
    pub reproduction: f64,
    pub survival: f64,
}

impl Rates {
    /// All rates zero.
    pub const ZERO: Self = Self {
        damage: 0.0,
        length: 0.0,
        reproduction: 0.0,
        survival: 0.0,
    };

    /// Returns the rates in flat-vector order.
    #[must_use]
    pub fn to_array(&self) -> [f64; STATE_SIZE] {
        [self.damage, self.length, self.reproduction, self.survival]
    }
}
