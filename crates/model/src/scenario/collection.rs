use super::{Interpolation, ScenarioTable};

/// An exposure table together with its interpolation mode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub table: ScenarioTable,
    pub interpolation: Interpolation,
}

impl Scenario {
    /// Creates a new scenario.
    #[must_use]
    pub fn new(table: ScenarioTable, interpolation: Interpolation) -> Self {
        Self {
            table,
            interpolation,
        }
    }
}

/// Scenarios keyed by a numeric identifier.
///
/// Identifiers are matched exactly.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Scenarios {
    entries: Vec<(f64, Scenario)>,
}

impl Scenarios {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scenario, returning the one it replaces if `id` was present.
    pub fn insert(&mut self, id: f64, scenario: Scenario) -> Option<Scenario> {
        match self.entries.iter_mut().find(|(key, _)| *key == id) {
            Some((_, existing)) => Some(std::mem::replace(existing, scenario)),
            None => {
                self.entries.push((id, scenario));
                None
            }
        }
    }

    /// Returns the scenario with identifier `id`.
    #[must_use]
    pub fn get(&self, id: f64) -> Option<&Scenario> {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, scenario)| scenario)
    }

    /// Returns the identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Returns the number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(f64, Scenario)> for Scenarios {
    fn from_iter<T: IntoIterator<Item = (f64, Scenario)>>(iter: T) -> Self {
        let mut scenarios = Self::new();
        for (id, scenario) in iter {
            scenarios.insert(id, scenario);
        }
        scenarios
    }
}
