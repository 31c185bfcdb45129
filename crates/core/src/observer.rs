/// Receives events from a trial runner and decides whether it should continue.
///
/// Observers let reporting collaborators watch trials as they finish (to log,
/// plot, or tally them) without the runner knowing about any of that.
/// Returning `Some(action)` requests a runner-specific action; `None` lets
/// the runner proceed.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
