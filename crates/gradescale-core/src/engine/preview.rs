//! Sample conversions for display

/// Upper bound on preview samples
pub const MAX_PREVIEW_SAMPLES: usize = 5;

/// Evenly spaced samples over `[min, max]`, both ends included.
///
/// Takes `min(5, range + 1)` samples, never fewer than two for a
/// non-empty range.
pub fn sample_points(min: f64, max: f64) -> Vec<f64> {
    let range = max - min;
    if range <= 0.0 || !range.is_finite() {
        return vec![min];
    }

    let by_range = (range.floor() as usize).saturating_add(1);
    let count = by_range.clamp(2, MAX_PREVIEW_SAMPLES);
    let step = range / (count - 1) as f64;

    (0..count)
        .map(|i| {
            if i == count - 1 {
                max
            } else {
                min + step * i as f64
            }
        })
        .collect()
}
