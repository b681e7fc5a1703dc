/// Control actions supported by the Dormand–Prince solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the points recorded so far.
    StopEarly,
}
