// Pearson correlation, kept alongside the metrics for comparison

use ndarray::ArrayView1;

use crate::error::{MorphError, Result};

/// Pearson correlation coefficient of two equal-length sequences.
///
/// Returns 0.0 when either sequence has zero variance.
pub fn pearson(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(MorphError::LengthMismatch {
            m: a.len(),
            n: b.len(),
        });
    }
    if a.len() < 2 {
        return Err(MorphError::TooShortSequence(a.len()));
    }

    let x = ArrayView1::from(a);
    let y = ArrayView1::from(b);
    let (mean_x, mean_y) = match (x.mean(), y.mean()) {
        (Some(mx), Some(my)) => (mx, my),
        _ => return Err(MorphError::TooShortSequence(0)),
    };

    let dx = x.mapv(|v| v - mean_x);
    let dy = y.mapv(|v| v - mean_y);

    let covariance = dx.dot(&dy);
    let denom = dx.dot(&dx).sqrt() * dy.dot(&dy).sqrt();
    if denom > 0.0 {
        Ok(covariance / denom)
    } else {
        log::warn!("Correlation of a constant sequence is undefined, returning 0.0");
        Ok(0.0)
    }
}
