use debtox_core::Observer;

use crate::traits::{CanStopEarly, HasTime};

/// Stops a solver once an event passes a time limit.
///
/// Events at exactly `t_max` are allowed through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLimit {
    t_max: f64,
}

impl TimeLimit {
    #[must_use]
    pub fn new(t_max: f64) -> Self {
        Self { t_max }
    }

    #[must_use]
    pub fn t_max(&self) -> f64 {
        self.t_max
    }
}

impl<E: HasTime, A: CanStopEarly> Observer<E, A> for TimeLimit {
    fn observe(&mut self, event: &E) -> Option<A> {
        let t = event.time();
        if t > self.t_max {
            log::debug!("time limit {} passed at t = {t}", self.t_max);
            Some(A::stop_early())
        } else {
            None
        }
    }
}
