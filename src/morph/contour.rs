// Three-slot contour vectors

use serde::{Deserialize, Serialize};

/// Count of {rising, equal, falling} relationships under one interval scheme.
///
/// Slot 0 counts pairs whose later value is greater, slot 1 counts equal
/// pairs, slot 2 counts pairs whose later value is smaller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContourVector(pub [usize; 3]);

impl ContourVector {
    /// Classify a signed step into its slot and count it.
    pub(crate) fn record(&mut self, step: f64) {
        let slot = if step > 0.0 {
            0
        } else if step == 0.0 {
            1
        } else {
            2
        };
        self.0[slot] += 1;
    }

    pub fn slots(&self) -> [usize; 3] {
        self.0
    }

    /// Sum of all slots, i.e. the number of relationships classified.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Each slot as a fraction of `denominator`.
    pub fn proportions(&self, denominator: usize) -> [f64; 3] {
        let d = denominator as f64;
        self.0.map(|count| count as f64 / d)
    }

    /// `Σ |self_k − other_k|` over the three slots.
    pub fn distance(&self, other: &ContourVector) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| a.abs_diff(*b))
            .sum()
    }
}

impl std::ops::Index<usize> for ContourVector {
    type Output = usize;

    fn index(&self, slot: usize) -> &usize {
        &self.0[slot]
    }
}
