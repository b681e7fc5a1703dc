use debtox_core::Point;

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Recorded a point for every requested time.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Work counters for a solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Steps that met the error tolerance.
    pub accepted: usize,

    /// Steps that were retried with a smaller step size.
    pub rejected: usize,

    /// Calls made to the model.
    pub evaluations: usize,
}

/// The result of a Dormand–Prince integration.
#[derive(Debug, Clone)]
pub struct Solution<const N: usize> {
    /// How the solver terminated.
    pub status: Status,

    /// Solution at each requested time, in request order.
    ///
    /// Holds one point per requested time when `status` is
    /// [`Status::Complete`], fewer if the observer stopped the solver.
    pub points: Vec<Point<N>>,

    /// Work counters.
    pub stats: Stats,
}
