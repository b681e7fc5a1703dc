use std::convert::Infallible;

use debtox_core::{OdeProblem, Point};

use crate::{
    constants::STATE_SIZE,
    derivative::Input,
    state::{Rates, State},
};

/// Adapts [`DerivativeModel`] to the ODE solvers.
///
/// The solver state is `[damage, length, reproduction, survival]`.
///
/// [`DerivativeModel`]: crate::DerivativeModel
#[derive(Debug, Clone, Copy, Default)]
pub struct DebProblem;

impl OdeProblem<STATE_SIZE> for DebProblem {
    type Input = Input;
    type Output = Rates;
    type Error = Infallible;

    fn input(&self, point: &Point<STATE_SIZE>) -> Result<Input, Self::Error> {
        Ok(Input {
            time: point.t,
            state: State::from(point.y),
        })
    }

    fn derivative(
        &self,
        _input: &Input,
        output: &Rates,
    ) -> Result<[f64; STATE_SIZE], Self::Error> {
        Ok(output.to_array())
    }
}
