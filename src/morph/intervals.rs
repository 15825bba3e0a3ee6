// Interval generation under the six index forms

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};
use crate::numeric::{max_of, mean};

/// A pair of sequence values `(a, b)`.
pub type IntervalPair = (f64, f64);

/// Which pairs of a sequence an interval set is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IntervalForm {
    /// `(data[i], data[i + k])`
    #[default]
    Adjacency,
    /// `(data[i], data[fundamental_index])`
    FundamentalIndex,
    /// `(data[i], fundamental_value)`
    FundamentalValue,
    /// `(data[i], mean(data))`
    MeanFundamentalValue,
    /// `(data[i], max(data))`
    MaxFundamentalValue,
    /// `(data[i], data[j])` for every `i < j`
    Combinatorial,
}

/// Parameters for one interval generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntervalSpec {
    pub form: IntervalForm,

    /// Offset `k` for the adjacency form
    pub adjacency_interval: usize,

    /// Reference value for the fundamental-value form
    pub fundamental_value: Option<f64>,

    /// Reference index for the fundamental-index form
    pub fundamental_index: Option<usize>,
}

impl Default for IntervalSpec {
    fn default() -> Self {
        Self {
            form: IntervalForm::Adjacency,
            adjacency_interval: 1,
            fundamental_value: None,
            fundamental_index: None,
        }
    }
}

impl IntervalSpec {
    pub fn adjacency(k: usize) -> Self {
        Self {
            adjacency_interval: k,
            ..Self::default()
        }
    }

    pub fn combinatorial() -> Self {
        Self::with_form(IntervalForm::Combinatorial)
    }

    pub fn fundamental_index(index: usize) -> Self {
        Self {
            form: IntervalForm::FundamentalIndex,
            fundamental_index: Some(index),
            ..Self::default()
        }
    }

    pub fn fundamental_value(value: f64) -> Self {
        Self {
            form: IntervalForm::FundamentalValue,
            fundamental_value: Some(value),
            ..Self::default()
        }
    }

    pub fn with_form(form: IntervalForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }
}

/// Build the interval pairs of `data` described by `spec`.
pub fn generate_intervals(data: &[f64], spec: &IntervalSpec) -> Result<Vec<IntervalPair>> {
    let len = data.len();

    match spec.form {
        IntervalForm::Adjacency => {
            let k = spec.adjacency_interval;
            if k == 0 {
                return Err(MorphError::ParameterMismatch(
                    "adjacency interval must be at least 1".into(),
                ));
            }
            if k >= len {
                return Err(MorphError::IndexOutOfRange { index: k, len });
            }
            Ok((0..len - k).map(|i| (data[i], data[i + k])).collect())
        }
        IntervalForm::FundamentalIndex => {
            let index = spec
                .fundamental_index
                .ok_or(MorphError::UndefinedParameter("fundamental_index"))?;
            if index >= len {
                return Err(MorphError::IndexOutOfRange { index, len });
            }
            Ok(against(data, data[index]))
        }
        IntervalForm::FundamentalValue => {
            let value = spec
                .fundamental_value
                .ok_or(MorphError::UndefinedParameter("fundamental_value"))?;
            Ok(against(data, value))
        }
        IntervalForm::MeanFundamentalValue => Ok(against(data, mean(data))),
        IntervalForm::MaxFundamentalValue => Ok(against(data, max_of(data))),
        IntervalForm::Combinatorial => {
            let mut pairs = Vec::with_capacity(crate::numeric::lm(len));
            for i in 0..len {
                for j in (i + 1)..len {
                    pairs.push((data[i], data[j]));
                }
            }
            Ok(pairs)
        }
    }
}

fn against(data: &[f64], reference: f64) -> Vec<IntervalPair> {
    data.iter().map(|&v| (v, reference)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 4] = [3.0, 1.0, 4.0, 1.0];

    #[test]
    fn adjacency_with_offset() {
        let pairs = generate_intervals(&DATA, &IntervalSpec::adjacency(2)).unwrap();
        assert_eq!(pairs, vec![(3.0, 4.0), (1.0, 1.0)]);
    }

    #[test]
    fn adjacency_offset_bounds() {
        assert!(matches!(
            generate_intervals(&DATA, &IntervalSpec::adjacency(0)),
            Err(MorphError::ParameterMismatch(_))
        ));
        assert_eq!(
            generate_intervals(&DATA, &IntervalSpec::adjacency(4)),
            Err(MorphError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn fundamental_index_pairs_every_element() {
        let pairs = generate_intervals(&DATA, &IntervalSpec::fundamental_index(2)).unwrap();
        assert_eq!(pairs, vec![(3.0, 4.0), (1.0, 4.0), (4.0, 4.0), (1.0, 4.0)]);
    }

    #[test]
    fn fundamental_parameters_must_be_defined() {
        assert_eq!(
            generate_intervals(&DATA, &IntervalSpec::with_form(IntervalForm::FundamentalIndex)),
            Err(MorphError::UndefinedParameter("fundamental_index"))
        );
        assert_eq!(
            generate_intervals(&DATA, &IntervalSpec::with_form(IntervalForm::FundamentalValue)),
            Err(MorphError::UndefinedParameter("fundamental_value"))
        );
        assert_eq!(
            generate_intervals(&DATA, &IntervalSpec::fundamental_index(4)),
            Err(MorphError::IndexOutOfRange { index: 4, len: 4 })
        );
    }

    #[test]
    fn mean_and_max_references() {
        let mean_pairs =
            generate_intervals(&DATA, &IntervalSpec::with_form(IntervalForm::MeanFundamentalValue))
                .unwrap();
        assert!(mean_pairs.iter().all(|&(_, b)| b == 2.25));

        let max_pairs =
            generate_intervals(&DATA, &IntervalSpec::with_form(IntervalForm::MaxFundamentalValue))
                .unwrap();
        assert!(max_pairs.iter().all(|&(_, b)| b == 4.0));

        let fixed = generate_intervals(&DATA, &IntervalSpec::fundamental_value(-1.0)).unwrap();
        assert_eq!(fixed[0], (3.0, -1.0));
    }

    #[test]
    fn combinatorial_in_index_order() {
        let pairs = generate_intervals(&[1.0, 2.0, 3.0], &IntervalSpec::combinatorial()).unwrap();
        assert_eq!(pairs, vec![(1.0, 2.0), (1.0, 3.0), (2.0, 3.0)]);
    }

    #[test]
    fn spec_parses_from_toml_with_defaults() {
        let spec: IntervalSpec = toml::from_str("form = \"fundamental-index\"\nfundamental_index = 1").unwrap();
        assert_eq!(spec.form, IntervalForm::FundamentalIndex);
        assert_eq!(spec.adjacency_interval, 1);
        assert_eq!(spec.fundamental_index, Some(1));
    }
}
