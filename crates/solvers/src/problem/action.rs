/// Actions an observer can take after a cross-entropy iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver now, keeping the parameters just updated.
    StopEarly,
}
