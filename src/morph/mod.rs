// Morph: an ordered sequence of real numbers under analysis

pub mod contour;
pub mod intervals;

pub use contour::*;
pub use intervals::*;

use serde::{Deserialize, Serialize};

use crate::delta::{sgn, Comparator};
use crate::error::{MorphError, Result};
use crate::numeric::{degree_of_combinatoriality, max_of, mean};

/// Immutable sequence value. Every derived representation is recomputed on
/// demand from `data`; nothing is cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Morph {
    data: Vec<f64>,
}

impl Morph {
    /// Build a Morph. Fails with `TooShortSequence` below two elements.
    pub fn new(data: impl Into<Vec<f64>>) -> Result<Self> {
        let data = data.into();
        if data.len() < 2 {
            return Err(MorphError::TooShortSequence(data.len()));
        }
        Ok(Self { data })
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false, construction rejects sequences shorter than two.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn mean(&self) -> f64 {
        mean(&self.data)
    }

    pub fn max(&self) -> f64 {
        max_of(&self.data)
    }

    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Order-`order` finite difference of the sequence.
    ///
    /// `order = 0` returns a copy of the data. Each further order applies the
    /// first difference `data[i + 1] − data[i]` once more, so the result has
    /// `len − order` elements. With `absolute`, every difference is replaced
    /// by its magnitude before the next order is taken.
    pub fn derivate(&self, order: usize, absolute: bool) -> Result<Vec<f64>> {
        let len = self.data.len();
        if order >= len {
            return Err(MorphError::InvalidOrder { order, len });
        }

        let mut working = self.data.clone();
        for _ in 0..order {
            working = working
                .windows(2)
                .map(|w| {
                    let step = w[1] - w[0];
                    if absolute { step.abs() } else { step }
                })
                .collect();
        }
        Ok(working)
    }

    /// Same as `derivate(1, true)`, which cannot fail since `len >= 2`.
    pub fn first_order_absolute_interval(&self) -> Vec<f64> {
        self.data.windows(2).map(|w| (w[1] - w[0]).abs()).collect()
    }

    pub fn second_order_absolute_interval(&self) -> Result<Vec<f64>> {
        self.derivate(2, true)
    }

    /// `sgn` of every adjacent pair: 1 for a fall, 0 for a repeat, −1 for a rise.
    pub fn direction_interval(&self) -> Vec<f64> {
        self.data.windows(2).map(|w| sgn(w[0], w[1])).collect()
    }

    /// `sgn` of every combinatorial pair `(data[i], data[j])`, `i < j`.
    pub fn combinatorial_direction(&self) -> Vec<f64> {
        self.pairs(&IntervalSpec::combinatorial())
            .into_iter()
            .map(|(a, b)| sgn(a, b))
            .collect()
    }

    /// Classify each first difference by its own sign.
    pub fn linear_contour_vector(&self) -> ContourVector {
        let mut contour = ContourVector::default();
        for w in self.data.windows(2) {
            contour.record(w[1] - w[0]);
        }
        contour
    }

    /// Classify each combinatorial pair `(a, b)` by the sign of `b − a`.
    ///
    /// A rise counts in slot 0 here while `direction_interval` reports a rise
    /// as −1. Both conventions are relied on by the metrics built on them.
    pub fn combinatorial_contour_vector(&self) -> ContourVector {
        let mut contour = ContourVector::default();
        for (a, b) in self.pairs(&IntervalSpec::combinatorial()) {
            contour.record(b - a);
        }
        contour
    }

    /// 1-based rank of each element in the sorted sequence. Repeated values
    /// share the rank of their first occurrence in sorted order.
    ///
    /// Ordering follows `f64::total_cmp`, so NaN ranks above every number and
    /// all NaN elements share one rank.
    pub fn morris_ranking(&self) -> Vec<usize> {
        let mut sorted = self.data.clone();
        sorted.sort_by(f64::total_cmp);

        self.data
            .iter()
            .map(|v| {
                sorted
                    .iter()
                    .position(|s| s == v || (s.is_nan() && v.is_nan()))
                    .map_or(0, |p| p + 1)
            })
            .collect()
    }

    /// Ragged upper-triangular table of `|data[i] − data[j]|`, `j > i`.
    pub fn combinatorial_magnitude_matrix(&self) -> Vec<Vec<f64>> {
        let len = self.data.len();
        (0..len - 1)
            .map(|i| {
                ((i + 1)..len)
                    .map(|j| (self.data[i] - self.data[j]).abs())
                    .collect()
            })
            .collect()
    }

    /// Variance of the adjacency intervals measured with `delta`, each
    /// squared deviation divided by `len − 1` before summing.
    pub fn interval_variance(&self, delta: Comparator) -> f64 {
        let intervals: Vec<f64> = self
            .data
            .windows(2)
            .map(|w| delta.apply(w[0], w[1]))
            .collect();
        let center = mean(&intervals);
        let n = (self.data.len() - 1) as f64;

        intervals
            .iter()
            .map(|v| (v - center).powi(2) / n)
            .sum()
    }

    /// Interval pairs of this sequence under `spec`.
    pub fn generate_intervals(&self, spec: &IntervalSpec) -> Result<Vec<IntervalPair>> {
        generate_intervals(&self.data, spec)
    }

    /// Number of intervals `spec` generates relative to all pairwise
    /// relationships in the sequence.
    pub fn combinatoriality(&self, spec: &IntervalSpec) -> Result<f64> {
        let intervals = self.generate_intervals(spec)?;
        Ok(degree_of_combinatoriality(intervals.len(), self.data.len()))
    }

    /// Flattened combinatorial magnitudes, row by row.
    pub(crate) fn combinatorial_magnitudes(&self) -> Vec<f64> {
        self.combinatorial_magnitude_matrix().concat()
    }

    // Combinatorial generation has no failure path.
    fn pairs(&self, spec: &IntervalSpec) -> Vec<IntervalPair> {
        generate_intervals(&self.data, spec).unwrap_or_default()
    }
}

impl TryFrom<Vec<f64>> for Morph {
    type Error = MorphError;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        Morph::new(data)
    }
}

impl From<Morph> for Vec<f64> {
    fn from(morph: Morph) -> Self {
        morph.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn morph(data: &[f64]) -> Morph {
        Morph::new(data.to_vec()).unwrap()
    }

    #[test]
    fn rejects_short_sequences() {
        assert_eq!(Morph::new(vec![1.0]), Err(MorphError::TooShortSequence(1)));
        assert_eq!(Morph::new(Vec::<f64>::new()), Err(MorphError::TooShortSequence(0)));
    }

    #[test]
    fn derivative_orders() {
        let m = morph(&[0.0, 2.0, 4.0, 1.0, 0.0]);
        assert_eq!(m.derivate(0, false).unwrap(), m.data().to_vec());
        assert_eq!(m.derivate(1, false).unwrap(), vec![2.0, 2.0, -3.0, -1.0]);
        assert_eq!(m.derivate(2, false).unwrap(), vec![0.0, -5.0, 2.0]);
        assert_eq!(m.derivate(4, false).unwrap().len(), 1);
        assert_eq!(
            m.derivate(5, false),
            Err(MorphError::InvalidOrder { order: 5, len: 5 })
        );
    }

    #[test]
    fn absolute_derivative_takes_magnitude_at_each_order() {
        let m = morph(&[0.0, 2.0, 4.0, 1.0, 0.0]);
        assert_eq!(m.first_order_absolute_interval(), vec![2.0, 2.0, 3.0, 1.0]);
        assert_eq!(m.second_order_absolute_interval().unwrap(), vec![0.0, 1.0, 2.0]);
        assert_eq!(m.derivate(0, true).unwrap(), m.data().to_vec());
    }

    #[test]
    fn derivative_does_not_touch_data() {
        let m = morph(&[3.0, -1.0, 2.0]);
        let mut d = m.derivate(0, false).unwrap();
        d[0] = 100.0;
        assert_eq!(m.data(), &[3.0, -1.0, 2.0]);
        assert_eq!(m.derivate(1, true).unwrap(), m.derivate(1, true).unwrap());
    }

    #[test]
    fn contour_vectors() {
        let m = morph(&[0.0, 2.0, 2.0, 1.0]);
        assert_eq!(m.linear_contour_vector(), ContourVector([1, 1, 1]));
        // pairs: (0,2)+ (0,2)+ (0,1)+ (2,2)= (2,1)- (2,1)-
        assert_eq!(m.combinatorial_contour_vector(), ContourVector([3, 1, 2]));
    }

    #[test]
    fn combinatorial_direction_uses_sgn() {
        let m = morph(&[0.0, 2.0, 1.0]);
        assert_eq!(m.combinatorial_direction(), vec![-1.0, -1.0, 1.0]);
    }

    #[test]
    fn ranking_collapses_ties() {
        assert_eq!(morph(&[3.0, 1.0, 3.0]).morris_ranking(), vec![2, 1, 2]);
        assert_eq!(morph(&[1.0, 2.0, 3.0]).morris_ranking(), vec![1, 2, 3]);
    }

    #[test]
    fn ranking_orders_nan_last() {
        assert_eq!(morph(&[1.0, f64::NAN, 3.0]).morris_ranking(), vec![1, 3, 2]);

        let data: Vec<f64> = (0..40)
            .map(|i| if i % 3 == 0 { f64::NAN } else { i as f64 })
            .collect();
        let ranks = morph(&data).morris_ranking();
        assert_eq!(ranks.len(), 40);
        // 26 finite values take ranks 1..=26, the 14 NaN share rank 27
        assert!(ranks.iter().step_by(3).all(|&r| r == 27));
        assert_eq!(ranks[1], 1);
        assert_eq!(ranks[38], 26);
    }

    #[test]
    fn magnitude_matrix_is_ragged() {
        let matrix = morph(&[1.0, 4.0, 2.0, 8.0]).combinatorial_magnitude_matrix();
        assert_eq!(
            matrix,
            vec![vec![3.0, 1.0, 7.0], vec![2.0, 4.0], vec![6.0]]
        );
    }

    #[test]
    fn interval_variance_of_even_steps_is_zero() {
        assert_eq!(morph(&[0.0, 2.0, 4.0, 6.0]).interval_variance(Comparator::default()), 0.0);
        // intervals 1, 3 around mean 2: (1 + 1) / 2
        assert_eq!(morph(&[0.0, 1.0, 4.0]).interval_variance(Comparator::default()), 1.0);
    }

    #[test]
    fn combinatoriality_by_form() {
        let m = morph(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(m.combinatoriality(&IntervalSpec::combinatorial()).unwrap(), 1.0);
        assert_eq!(m.combinatoriality(&IntervalSpec::default()).unwrap(), 0.4);
    }

    #[test]
    fn deserialization_validates_length() {
        let ok: Morph = serde_json::from_str("[1.0, 2.0]").unwrap();
        assert_eq!(ok.len(), 2);
        assert!(serde_json::from_str::<Morph>("[1.0]").is_err());
    }
}
