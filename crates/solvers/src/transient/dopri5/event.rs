use debtox_core::Point;

/// Events emitted by the Dormand–Prince solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<const N: usize> {
    /// A step met the error tolerance and the solution advanced.
    Accepted {
        /// Accepted step counter (1-based).
        step: usize,

        /// Time at the start of the step.
        t_start: f64,

        /// The solution at the end of the step.
        point: Point<N>,

        /// Size of the accepted step.
        h: f64,

        /// Scaled local error estimate (`<= 1` for accepted steps).
        error: f64,
    },

    /// A step exceeded the error tolerance and will be retried smaller.
    Rejected {
        /// Time at the start of the attempted step.
        t: f64,

        /// Size of the rejected step.
        h: f64,

        /// Scaled local error estimate (`> 1`, or non-finite).
        error: f64,
    },

    /// The state at a requested output time was recorded.
    Recorded {
        /// Index into the requested output times.
        index: usize,

        /// The recorded point.
        point: Point<N>,
    },
}

impl<const N: usize> Event<N> {
    /// Returns the time this event refers to.
    ///
    /// For accepted steps this is the end of the step; for rejected steps it
    /// is the start of the attempted step.
    #[must_use]
    pub fn t(&self) -> f64 {
        match self {
            Self::Accepted { point, .. } | Self::Recorded { point, .. } => point.t,
            Self::Rejected { t, .. } => *t,
        }
    }
}
