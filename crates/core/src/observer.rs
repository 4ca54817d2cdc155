/// Watches a solver run one event at a time and may steer it.
///
/// A solver hands each event to its observer and acts on the returned value:
/// `Some(action)` asks for a solver-specific action, `None` continues the run
/// untouched. Progress logging and convergence-based stopping are both built
/// this way, without widening the solver's own API.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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
