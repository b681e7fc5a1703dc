use debtox_core::Observer;
use debtox_solvers::transient::dopri5::{Action, Event};

/// Forwards Dormand–Prince events to the `log` facade.
///
/// Accepted steps are logged at `trace` level, rejections and recorded output
/// points at `debug`. The observer never acts on the solver.
#[derive(Debug, Clone, Default)]
pub struct LogObserver {
    accepted: usize,
    rejected: usize,
    recorded: usize,
}

impl LogObserver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of accepted steps seen.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Returns the number of rejected steps seen.
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Returns the number of recorded output points seen.
    #[must_use]
    pub fn recorded(&self) -> usize {
        self.recorded
    }
}

impl<const N: usize> Observer<Event<N>, Action> for LogObserver {
    fn observe(&mut self, event: &Event<N>) -> Option<Action> {
        match event {
            Event::Accepted {
                step,
                t_start,
                point,
                h,
                error,
            } => {
                self.accepted += 1;
                log::trace!(
                    "step {step}: t = {t_start} -> {}, h = {h:e}, error = {error:.3}",
                    point.t
                );
            }
            Event::Rejected { t, h, error } => {
                self.rejected += 1;
                log::debug!("rejected step at t = {t}: h = {h:e}, error = {error:.3}");
            }
            Event::Recorded { index, point } => {
                self.recorded += 1;
                log::debug!("output {index} at t = {}: {:?}", point.t, point.y);
            }
        }
        None
    }
}

/// Lets a borrowed logger be passed to a solver and inspected afterwards.
impl<const N: usize> Observer<Event<N>, Action> for &mut LogObserver {
    fn observe(&mut self, event: &Event<N>) -> Option<Action> {
        (**self).observe(event)
    }
}
