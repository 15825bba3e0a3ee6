// Numeric helpers shared by the sequence and metric code

/// Modulo that always lands in `[0, n)` for positive `n`, unlike `%`.
pub fn modulo(a: f64, n: f64) -> f64 {
    ((a % n) + n) % n
}

/// Number of unordered pairs in a sequence of length `l`: `(l² − l) / 2`.
pub fn lm(l: usize) -> usize {
    (l * l - l) / 2
}

/// Ratio of generated intervals to the pairwise-relationship count of a
/// length-`l` sequence. A full combinatorial interval set scores 1.0.
pub fn degree_of_combinatoriality(num_intervals: usize, l: usize) -> f64 {
    let pairs = lm(l);
    if pairs == 0 {
        return 0.0;
    }
    num_intervals as f64 / pairs as f64
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Largest value in the slice, `NEG_INFINITY` when empty.
pub fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Divide every value by `max`, leaving them untouched when `max` is zero.
pub(crate) fn scale_by(values: &[f64], max: f64) -> Vec<f64> {
    if max == 0.0 {
        log::debug!("Normalizing maximum is zero, skipping scaling");
        return values.to_vec();
    }
    values.iter().map(|v| v / max).collect()
}
