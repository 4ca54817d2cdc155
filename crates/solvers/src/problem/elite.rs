/// The elite subset of one scored batch.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Elite {
    pub(super) min_score: f64,
    pub(super) elite_score: f64,
    pub(super) indices: Vec<usize>,
}

/// Selects every sample scoring at or below the `num_elite`-th smallest score.
///
/// Indices stay in batch order. Ties at the boundary are all included, so
/// the elite set may hold more than `num_elite` samples.
///
/// Requires `1 <= num_elite <= scores.len()` and no NaN scores.
pub(super) fn select(scores: &[f64], num_elite: usize) -> Elite {
    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    let min_score = sorted[0];
    let elite_score = sorted[num_elite - 1];
    let indices = scores
        .iter()
        .enumerate()
        .filter_map(|(i, &score)| (score <= elite_score).then_some(i))
        .collect();

    Elite {
        min_score,
        elite_score,
        indices,
    }
}
