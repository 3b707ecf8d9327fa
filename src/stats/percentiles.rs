/// Collects values into an ascending vector. NaN sorts last.
#[must_use]
pub fn sorted_seconds<I>(values: I) -> Vec<f64>
where
    I: IntoIterator<Item = f64>,
{
    let mut sorted: Vec<f64> = values.into_iter().collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Linear interpolation between the two closest ranks.
///
/// `index = pct / 100 * (n - 1)`; the result blends `sorted[floor(index)]`
/// and the next element by the fractional part. Expects ascending input and
/// returns `0.0` for an empty slice.
#[must_use]
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let Some(last) = sorted.len().checked_sub(1) else {
        return 0.0;
    };
    let index = (pct.clamp(0.0, 100.0) / 100.0) * last as f64;
    let lower = (index.floor() as usize).min(last);
    let upper = lower.saturating_add(1).min(last);
    let fraction = index - lower as f64;

    match (sorted.get(lower), sorted.get(upper)) {
        (Some(low), Some(high)) => low + fraction * (high - low),
        (Some(low), None) => *low,
        (None, Some(_) | None) => 0.0,
    }
}
