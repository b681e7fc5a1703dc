use super::ScenarioError;

/// One row of a scenario table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakpoint {
    /// Time at which the row takes effect [d].
    pub time: f64,

    /// Concentration at `time` [C].
    pub concentration: f64,

    /// Rate of change of concentration after `time` [C/d], used by linear ramps.
    #[cfg_attr(feature = "serde", serde(default))]
    pub slope: Option<f64>,
}

impl Breakpoint {
    /// Creates a breakpoint without a slope.
    #[must_use]
    pub fn new(time: f64, concentration: f64) -> Self {
        Self {
            time,
            concentration,
            slope: None,
        }
    }

    /// Creates a breakpoint with a slope.
    #[must_use]
    pub fn with_slope(time: f64, concentration: f64, slope: f64) -> Self {
        Self {
            time,
            concentration,
            slope: Some(slope),
        }
    }
}

/// Exposure breakpoints ordered by strictly increasing time.
///
/// A table may be empty; emptiness is only an error once a lookup needs it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")
)]
pub struct ScenarioTable {
    rows: Vec<Breakpoint>,
}

impl ScenarioTable {
    /// Creates a table from breakpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or the times are not
    /// strictly increasing.
    pub fn new(rows: Vec<Breakpoint>) -> Result<Self, ScenarioError> {
        for (row, bp) in rows.iter().enumerate() {
            let values = [bp.time, bp.concentration, bp.slope.unwrap_or(0.0)];
            if let Some(&value) = values.iter().find(|v| !v.is_finite()) {
                return Err(ScenarioError::NonFiniteValue { row, value });
            }
        }

        if let Some(i) = rows.windows(2).position(|pair| pair[1].time <= pair[0].time) {
            return Err(ScenarioError::NonIncreasingTimes {
                row: i + 1,
                previous: rows[i].time,
                value: rows[i + 1].time,
            });
        }

        Ok(Self { rows })
    }

    /// Creates a table from flat rows of `[time, concentration]` or
    /// `[time, concentration, slope]`.
    ///
    /// # Errors
    ///
    /// Returns an error if a row has the wrong width, or for the reasons
    /// listed on [`ScenarioTable::new`].
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ScenarioError> {
        let breakpoints = rows
            .iter()
            .enumerate()
            .map(|(row, values)| match values.as_slice() {
                &[time, concentration] => Ok(Breakpoint::new(time, concentration)),
                &[time, concentration, slope] => {
                    Ok(Breakpoint::with_slope(time, concentration, slope))
                }
                other => Err(ScenarioError::RowWidth {
                    row,
                    width: other.len(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(breakpoints)
    }

    /// Returns the breakpoints.
    #[must_use]
    pub fn rows(&self) -> &[Breakpoint] {
        &self.rows
    }

    /// Returns the number of breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no breakpoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the index of the row in effect at `time`.
    ///
    /// This is the last row whose time is `<= time`. Times before the first
    /// breakpoint use the first row. Returns `None` for an empty table.
    #[must_use]
    pub fn row_at(&self, time: f64) -> Option<usize> {
        if self.rows.is_empty() {
            return None;
        }
        let after = self.rows.partition_point(|bp| bp.time <= time);
        Some(after.saturating_sub(1))
    }
}

impl TryFrom<Vec<Breakpoint>> for ScenarioTable {
    type Error = ScenarioError;

    fn try_from(rows: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<ScenarioTable> for Vec<Breakpoint> {
    fn from(table: ScenarioTable) -> Self {
        table.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ScenarioTable {
        ScenarioTable::from_rows(&[vec![0.0, 10.0], vec![2.0, 5.0], vec![7.0, 0.0]]).unwrap()
    }

    #[test]
    fn row_at_finds_last_row_not_after_time() {
        let table = table();

        assert_eq!(table.row_at(0.0), Some(0));
        assert_eq!(table.row_at(1.999), Some(0));
        assert_eq!(table.row_at(2.0), Some(1));
        assert_eq!(table.row_at(6.5), Some(1));
        assert_eq!(table.row_at(7.0), Some(2));
        assert_eq!(table.row_at(100.0), Some(2));
    }

    #[test]
    fn row_at_clamps_before_first_breakpoint() {
        let table = ScenarioTable::from_rows(&[vec![1.0, 3.0], vec![4.0, 0.0]]).unwrap();
        assert_eq!(table.row_at(0.5), Some(0));
        assert_eq!(table.row_at(-10.0), Some(0));
    }

    #[test]
    fn empty_table_has_no_row() {
        let table = ScenarioTable::default();
        assert!(table.is_empty());
        assert_eq!(table.row_at(1.0), None);
    }

    #[test]
    fn from_rows_reads_optional_slope() {
        let table = ScenarioTable::from_rows(&[vec![0.0, 1.0, 0.5], vec![1.0, 2.0]]).unwrap();

        assert_eq!(table.rows()[0], Breakpoint::with_slope(0.0, 1.0, 0.5));
        assert_eq!(table.rows()[1], Breakpoint::new(1.0, 2.0));
    }

    #[test]
    fn rejects_bad_rows() {
        assert_eq!(
            ScenarioTable::from_rows(&[vec![0.0, 1.0], vec![1.0]]),
            Err(ScenarioError::RowWidth { row: 1, width: 1 })
        );

        assert_eq!(
            ScenarioTable::from_rows(&[vec![0.0, 1.0], vec![0.0, 2.0]]),
            Err(ScenarioError::NonIncreasingTimes {
                row: 1,
                previous: 0.0,
                value: 0.0
            })
        );

        assert!(matches!(
            ScenarioTable::from_rows(&[vec![0.0, f64::NAN]]),
            Err(ScenarioError::NonFiniteValue { row: 0, .. })
        ));
    }
}
