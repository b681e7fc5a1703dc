use thiserror::Error;

use debtox_core::{Model, OdeProblem, Point, Snapshot};

/// The result of evaluating an ODE problem at a given point.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub point: Point<N>,

    pub derivative: [f64; N],

    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an ODE problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),

    /// Failed to construct input or extract the derivative.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as OdeProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an ODE problem.
///
/// This function maps `point` to model input, calls the model, then extracts
/// the state derivative from the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or derivative extraction fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    point: Point<N>,
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: OdeProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&point).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let derivative = problem
        .derivative(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        point,
        derivative,
        snapshot: Snapshot::new(input, output),
    })
}
