use super::{Interpolation, ScenarioError, ScenarioTable, Scenarios, TimeVarying};

/// External concentration source for one run.
#[derive(Debug, Clone, PartialEq)]
pub enum Exposure {
    /// The same concentration at all times.
    Constant(f64),

    /// Concentration looked up from a scenario table.
    TimeVarying(Lookup),
}

impl Exposure {
    /// Resolves the exposure for a run.
    ///
    /// With time-varying exposure disabled, or a scenario using
    /// [`Interpolation::Constant`], `concentration` applies throughout.
    /// Otherwise `concentration` identifies the scenario whose table is used.
    ///
    /// # Errors
    ///
    /// Returns an error if the scenario is unknown or its table cannot serve
    /// the requested lookups.
    pub fn select(
        concentration: f64,
        time_varying: &TimeVarying,
        scenarios: &Scenarios,
    ) -> Result<Self, ScenarioError> {
        if !time_varying.enabled {
            return Ok(Self::Constant(concentration));
        }

        let scenario = scenarios
            .get(concentration)
            .ok_or(ScenarioError::UnknownScenario { id: concentration })?;

        if scenario.interpolation == Interpolation::Constant {
            return Ok(Self::Constant(concentration));
        }

        let lookup = Lookup::new(
            scenario.table.clone(),
            scenario.interpolation,
            time_varying.fixed_row,
        )?;
        Ok(Self::TimeVarying(lookup))
    }

    /// Returns the external concentration at `time`.
    ///
    /// `multiplier` scales looked-up concentrations only.
    #[must_use]
    pub fn concentration(&self, time: f64, multiplier: f64) -> f64 {
        match self {
            Self::Constant(c) => *c,
            Self::TimeVarying(lookup) => lookup.concentration(time, multiplier),
        }
    }
}

/// A validated table lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct Lookup {
    table: ScenarioTable,
    profile: Profile,
    fixed_row: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Profile {
    StepHold,
    ExponentialDecay { rate: f64 },
    LinearRamp,
}

impl Lookup {
    /// Creates a lookup over `table`.
    ///
    /// A fixed row is used for every time without consulting the table times.
    ///
    /// # Errors
    ///
    /// Returns an error if `interpolation` is [`Interpolation::Constant`], the
    /// table is empty, the fixed row is out of range, or a linear ramp table
    /// lacks slopes.
    pub fn new(
        table: ScenarioTable,
        interpolation: Interpolation,
        fixed_row: Option<usize>,
    ) -> Result<Self, ScenarioError> {
        let profile = profile(&table, interpolation, fixed_row)?;
        Ok(Self {
            table,
            profile,
            fixed_row,
        })
    }

    /// Returns the concentration at `time`, scaled by `multiplier`.
    #[must_use]
    pub fn concentration(&self, time: f64, multiplier: f64) -> f64 {
        let row = self
            .fixed_row
            .or_else(|| self.table.row_at(time))
            .unwrap_or_default();
        evaluate(&self.table, self.profile, row, time, multiplier)
    }
}

/// Returns the concentration of `table` at `time` for a single query.
///
/// # Errors
///
/// Returns an error for the reasons listed on [`Lookup::new`].
pub fn lookup(
    time: f64,
    interpolation: Interpolation,
    table: &ScenarioTable,
    fixed_row: Option<usize>,
    multiplier: f64,
) -> Result<f64, ScenarioError> {
    let profile = profile(table, interpolation, fixed_row)?;
    let row = fixed_row.or_else(|| table.row_at(time)).unwrap_or_default();
    Ok(evaluate(table, profile, row, time, multiplier))
}

/// Validates a table for `interpolation` and resolves its profile.
fn profile(
    table: &ScenarioTable,
    interpolation: Interpolation,
    fixed_row: Option<usize>,
) -> Result<Profile, ScenarioError> {
    let rows = table.rows();

    let profile = match interpolation {
        Interpolation::Constant => return Err(ScenarioError::ConstantLookup),
        Interpolation::StepHold => Profile::StepHold,
        Interpolation::ExponentialDecay => Profile::ExponentialDecay {
            rate: rows.last().ok_or(ScenarioError::EmptyTable)?.concentration,
        },
        Interpolation::LinearRamp => {
            if let Some(row) = rows.iter().position(|bp| bp.slope.is_none()) {
                return Err(ScenarioError::MissingSlope { row });
            }
            Profile::LinearRamp
        }
    };

    if rows.is_empty() {
        return Err(ScenarioError::EmptyTable);
    }

    if let Some(row) = fixed_row.filter(|&row| row >= rows.len()) {
        return Err(ScenarioError::FixedRowOutOfRange {
            row,
            len: rows.len(),
        });
    }

    Ok(profile)
}

/// Evaluates a validated profile at `row`.
fn evaluate(table: &ScenarioTable, profile: Profile, row: usize, time: f64, multiplier: f64) -> f64 {
    let bp = table.rows()[row];
    let elapsed = time - bp.time;

    match profile {
        Profile::StepHold => multiplier * bp.concentration,
        Profile::ExponentialDecay { rate } => {
            multiplier * bp.concentration * (-rate * elapsed).exp()
        }
        Profile::LinearRamp => {
            multiplier * (bp.concentration + elapsed * bp.slope.unwrap_or_default())
        }
    }
}
