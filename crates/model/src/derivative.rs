//! The DEBtox right-hand side.

use std::convert::Infallible;

use debtox_core::Model;

use crate::{
    constants::{MIN_LENGTH_FRACTION, SHRINK_FLOOR_FRACTION},
    feedback::FeedbackSwitches,
    moa::ModeOfAction,
    params::{ParameterError, Parameters},
    processes::{
        Feedbacks, Stress, background_hazard, damage_rate, feeding, growth, hazard, reproduction,
        stress,
    },
    scenario::Exposure,
    state::{Rates, State},
};

/// Input to a [`DerivativeModel`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub time: f64,
    pub state: State,
}

/// Computes DEBtox rates of change for damage, length, reproduction, and
/// survival.
///
/// Holds validated parameters and the exposure selected for the run, so every
/// evaluation is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivativeModel {
    params: Parameters,
    feedbacks: FeedbackSwitches,
    moa: ModeOfAction,
    exposure: Exposure,
}

impl DerivativeModel {
    /// Creates a model for one run.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter, feedback switch, or mode-of-action
    /// weight is invalid.
    pub fn new(
        params: Parameters,
        feedbacks: FeedbackSwitches,
        moa: ModeOfAction,
        exposure: Exposure,
    ) -> Result<Self, ParameterError> {
        params.validate()?;
        feedbacks.validate()?;
        moa.validate()?;

        Ok(Self {
            params,
            feedbacks,
            moa,
            exposure,
        })
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    #[must_use]
    pub fn feedbacks(&self) -> &FeedbackSwitches {
        &self.feedbacks
    }

    #[must_use]
    pub fn mode_of_action(&self) -> &ModeOfAction {
        &self.moa
    }

    #[must_use]
    pub fn exposure(&self) -> &Exposure {
        &self.exposure
    }

    /// Returns the rates of change at `time`.
    ///
    /// Negative state components are read as zero. All rates are zero before
    /// the lag time.
    #[must_use]
    pub fn rates(&self, time: f64, state: &State) -> Rates {
        let p = &self.params;
        if time < p.tlag {
            return Rates::ZERO;
        }

        let x = state.clamped();
        let hb = background_hazard(p.hb, p.a, time);
        let concentration = self.exposure.concentration(time, p.mf);

        let length = x.length.max(MIN_LENGTH_FRACTION * p.l0);
        let f = feeding(p.f, length, p.lf, p.lj);

        let stress = Stress::new(stress(x.damage, p.zb, p.bb), &self.moa);
        let h = hazard(x.damage, p.zs, p.bs);

        let growth = growth(p, f, length, &stress);
        let repro = reproduction(p, growth.f_repro, length, &stress);

        let fb = Feedbacks::new(&self.feedbacks, p, length, growth.rate, repro);

        Rates {
            damage: damage_rate(p.kd, concentration, x.damage, &fb),
            length: if length <= SHRINK_FLOOR_FRACTION * p.l0 {
                0.0
            } else {
                growth.rate
            },
            reproduction: repro,
            survival: -(h + hb) * x.survival,
        }
    }
}

impl Model for DerivativeModel {
    type Input = Input;
    type Output = Rates;
    type Error = Infallible;

    fn call(&self, input: &Input) -> Result<Rates, Self::Error> {
        Ok(self.rates(input.time, &input.state))
    }
}
