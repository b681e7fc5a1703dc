/// A point on an ODE solution: the independent variable and the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<const N: usize> {
    /// The independent variable (typically time).
    pub t: f64,

    /// The state values at `t`.
    pub y: [f64; N],
}

impl<const N: usize> Point<N> {
    /// Creates a new point.
    #[must_use]
    pub fn new(t: f64, y: [f64; N]) -> Self {
        Self { t, y }
    }
}

/// Defines an ODE (ordinary differential equation) problem to be solved.
///
/// An ODE problem maps a solver point `(t, y)` into a model input, then
/// extracts the state derivative `dy/dt` from the model input and output.
/// This lets generic ODE solvers integrate any [`Model`] whose state can be
/// flattened into `N` real values.
///
/// The const generic `N` is the number of state variables, and the order of
/// values in `y` must match the order of the returned derivative.
///
/// [`Model`]: crate::Model
pub trait OdeProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps a solver point into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `point`.
    fn input(&self, point: &Point<N>) -> Result<Self::Input, Self::Error>;

    /// Extracts the state derivative from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}
