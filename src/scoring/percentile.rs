//! Order statistics over per-scene scores.

/// Percentile with linear interpolation between closest ranks.
///
/// `p` is on the 0-100 scale. Rank `p/100 * (n-1)` is interpolated between
/// its floor and ceiling neighbours, the same convention as numpy's default.
/// An empty sample yields `0.0`.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
}

pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().fold(0.0, f64::max)
}

/// `max_weight * max + percentile_weight * percentile(p)`.
pub fn blend(values: &[f64], max_weight: f64, percentile_weight: f64, p: f64) -> f64 {
    max_weight * max(values) + percentile_weight * percentile(values, p)
}
