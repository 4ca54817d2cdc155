/// How a cross-entropy run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The stop decision returned true.
    StopDecision,

    /// An observer returned [`Action::StopEarly`](super::Action::StopEarly).
    StoppedByObserver,
}
