/// Summary of one completed iteration, emitted after the parameter update.
#[derive(Debug)]
pub struct Event<'a, P> {
    /// Completed iterations, including this one.
    pub iter: usize,

    /// Lowest score in this iteration's batch.
    pub min_score: f64,

    /// Score boundary of this iteration's elite set.
    pub elite_score: f64,

    /// Number of samples in the elite set, ties included.
    pub elite_count: usize,

    /// Best score seen across all iterations, or `+inf` if not tracked.
    pub overall_min_score: f64,

    /// Parameters after the update.
    pub params: &'a P,
}
