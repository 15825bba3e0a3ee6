// Direction metrics: contour and sign-sequence mismatch counts

use serde::{Deserialize, Serialize};

use super::MorphologicalMetric;
use crate::delta::diff;
use crate::error::Result;
use crate::numeric::lm;

/// Normalized mismatch value together with the grain it was scaled by
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionMeasure {
    pub value: f64,
    pub grain: f64,
}

impl DirectionMeasure {
    fn from_count(count: f64, grain: f64) -> Self {
        Self {
            value: count * grain,
            grain,
        }
    }
}

impl MorphologicalMetric<'_> {
    /// Unordered linear direction over linear contour vectors.
    pub fn uld(&self) -> Result<f64> {
        Ok(self.uld_verbose()?.value)
    }

    pub fn uld_verbose(&self) -> Result<DirectionMeasure> {
        let len = self.require_equal_lengths()?;
        let raw = self
            .m
            .linear_contour_vector()
            .distance(&self.n.linear_contour_vector());
        Ok(DirectionMeasure::from_count(
            raw as f64,
            1.0 / (2.0 * (len - 1) as f64),
        ))
    }

    /// Ordered linear direction over the direction-interval sign sequences.
    pub fn old(&self) -> Result<f64> {
        Ok(self.old_verbose()?.value)
    }

    pub fn old_verbose(&self) -> Result<DirectionMeasure> {
        self.require_ordered("OLD")?;
        let count = mismatches(&self.m.direction_interval(), &self.n.direction_interval());
        Ok(DirectionMeasure::from_count(
            count,
            1.0 / (self.m.len() - 1) as f64,
        ))
    }

    /// Ordered combinatorial direction over the combinatorial sign sequences.
    pub fn ocd(&self) -> Result<f64> {
        Ok(self.ocd_verbose()?.value)
    }

    pub fn ocd_verbose(&self) -> Result<DirectionMeasure> {
        self.require_ordered("OCD")?;
        let count = mismatches(
            &self.m.combinatorial_direction(),
            &self.n.combinatorial_direction(),
        );
        Ok(DirectionMeasure::from_count(
            count,
            1.0 / lm(self.m.len()) as f64,
        ))
    }

    /// Unordered combinatorial direction over combinatorial contour vectors.
    pub fn ucd(&self) -> Result<f64> {
        Ok(self.ucd_verbose()?.value)
    }

    pub fn ucd_verbose(&self) -> Result<DirectionMeasure> {
        let len = self.require_equal_lengths()?;
        let raw = self
            .m
            .combinatorial_contour_vector()
            .distance(&self.n.combinatorial_contour_vector());
        Ok(DirectionMeasure::from_count(
            raw as f64,
            1.0 / (2.0 * lm(len) as f64),
        ))
    }

    /// ULD for operands of any length: each linear contour vector is turned
    /// into proportions of its own interval count before comparing.
    pub fn uld_unequal_length_form(&self) -> f64 {
        let pm = self
            .m
            .linear_contour_vector()
            .proportions(self.m.len() - 1);
        let pn = self
            .n
            .linear_contour_vector()
            .proportions(self.n.len() - 1);
        half_distance(&pm, &pn)
    }

    /// UCD for operands of any length, proportions over `Lm(L)` pairs.
    pub fn ucd_unequal_length_form(&self) -> f64 {
        let pm = self
            .m
            .combinatorial_contour_vector()
            .proportions(lm(self.m.len()));
        let pn = self
            .n
            .combinatorial_contour_vector()
            .proportions(lm(self.n.len()));
        half_distance(&pm, &pn)
    }
}

fn mismatches(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(&x, &y)| diff(x, y)).sum()
}

fn half_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum::<f64>() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MorphError;
    use crate::morph::Morph;

    fn morph(data: &[f64]) -> Morph {
        Morph::new(data.to_vec()).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn identical_contours_score_zero() {
        let m = morph(&[1.0, 5.0, 3.0, 3.0]);
        let n = morph(&[2.0, 9.0, 4.0, 4.0]);
        let metric = MorphologicalMetric::new(&m, &n).unwrap();

        assert_eq!(metric.uld().unwrap(), 0.0);
        assert_eq!(metric.old().unwrap(), 0.0);
        assert_eq!(metric.ucd().unwrap(), 0.0);
        assert_eq!(metric.uld_unequal_length_form(), 0.0);
    }

    #[test]
    fn opposite_contours_score_one() {
        let m = morph(&[1.0, 2.0, 3.0, 4.0]);
        let n = morph(&[4.0, 3.0, 2.0, 1.0]);
        let metric = MorphologicalMetric::new(&m, &n).unwrap();

        assert_close(metric.uld().unwrap(), 1.0);
        assert_close(metric.old().unwrap(), 1.0);
        assert_close(metric.ocd().unwrap(), 1.0);
        assert_close(metric.ucd().unwrap(), 1.0);
        assert_close(metric.uld_unequal_length_form(), 1.0);
        assert_close(metric.ucd_unequal_length_form(), 1.0);
    }

    #[test]
    fn verbose_records_grain() {
        let m = morph(&[0.0, 2.0, 5.0, 4.0, 1.0]);
        let n = morph(&[0.0, 3.0, 1.0, 4.0, 5.0]);
        let metric = MorphologicalMetric::new(&m, &n).unwrap();

        // directions -1 -1 1 1 against -1 1 -1 -1
        let old = metric.old_verbose().unwrap();
        assert_close(old.grain, 0.25);
        assert_close(old.value, 0.75);

        // linear contours [2, 0, 2] and [3, 0, 1]
        let uld = metric.uld_verbose().unwrap();
        assert_close(uld.grain, 1.0 / 8.0);
        assert_close(uld.value, 2.0 / 8.0);

        assert_close(metric.ocd_verbose().unwrap().grain, 0.1);
        assert_close(metric.ucd_verbose().unwrap().grain, 0.05);
    }

    #[test]
    fn equal_length_forms_reject_unequal_operands() {
        let m = morph(&[1.0, 2.0, 3.0]);
        let n = morph(&[1.0, 2.0, 3.0, 2.0, 1.0]);
        let metric = MorphologicalMetric::unordered(&m, &n);

        assert_eq!(metric.uld(), Err(MorphError::LengthMismatch { m: 3, n: 5 }));
        assert_eq!(metric.ucd(), Err(MorphError::LengthMismatch { m: 3, n: 5 }));
        assert!(matches!(metric.old(), Err(MorphError::OrderingViolation(_))));

        // proportions [1, 0, 0] against [0.5, 0, 0.5]
        assert_close(metric.uld_unequal_length_form(), 0.5);
    }

    #[test]
    fn verbose_record_serializes() {
        let measure = DirectionMeasure { value: 0.5, grain: 0.25 };
        let json = serde_json::to_string(&measure).unwrap();
        assert_eq!(json, r#"{"value":0.5,"grain":0.25}"#);
    }
}
