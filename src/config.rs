// Configuration records for metric operations

use serde::{Deserialize, Serialize};

use crate::delta::Comparator;
use crate::morph::IntervalSpec;

/// How per-operand deltas are normalized before comparison
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    /// Compare raw deltas
    #[default]
    None,
    /// Divide by the largest delta seen across both operands
    Absolute,
    /// Divide each operand by its own largest delta
    Relative,
}

/// Options for `MagnitudeMetric`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MagnitudeOptions {
    /// Compare per-pair magnitudes instead of aggregating signed differences
    pub absolute: bool,

    /// Divide the sum by the number of pairs
    pub normalized: bool,
}

impl Default for MagnitudeOptions {
    fn default() -> Self {
        Self {
            absolute: true,
            normalized: true,
        }
    }
}

/// Options for `OLM`.
///
/// When `scaling` is set the call dispatches to the canonical, scaled or
/// relative form at order 1; otherwise the original form runs at `order`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OlmOptions {
    pub scaling: Option<Scaling>,
    pub order: usize,
    pub squared: bool,
}

impl Default for OlmOptions {
    fn default() -> Self {
        Self {
            scaling: None,
            order: 1,
            squared: false,
        }
    }
}

impl OlmOptions {
    pub fn scaled(scaling: Scaling) -> Self {
        Self {
            scaling: Some(scaling),
            ..Self::default()
        }
    }
}

/// Options for `SobalevOLM`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SobalevOptions {
    pub min_order: usize,
    pub max_order: usize,

    /// One weight per order in `min_order..=max_order`, all 1 when absent
    pub weights: Option<Vec<f64>>,
}

impl Default for SobalevOptions {
    fn default() -> Self {
        Self {
            min_order: 1,
            max_order: 2,
            weights: None,
        }
    }
}

/// Options for `OLMGeneral`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralOptions {
    pub order: usize,
    pub delta: Comparator,
}

impl Default for GeneralOptions {
    fn default() -> Self {
        Self {
            order: 1,
            delta: Comparator::AbsoluteDifference,
        }
    }
}

/// Options for `OLMMetaInterval` and `ULMMetaInterval`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetaIntervalOptions {
    /// Compares the two operands' meta intervals
    pub psi: Comparator,

    /// Distance between consecutive first differences within one operand
    pub delta: Comparator,
}

/// Options for `OLMGeneralizedInterval`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralizedIntervalOptions {
    pub psi: Comparator,
    pub delta: Comparator,

    /// Interval form for the first operand
    pub m: IntervalSpec,

    /// Interval form for the second operand
    pub n: IntervalSpec,
}

/// Options for the ULM, OCM and UCM families
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScalingOptions {
    pub scaling: Scaling,
}

/// Options for the max-aggregated metrics
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MaxOptions {
    pub delta: Comparator,
}

/// One options record per metric family, used when metrics are evaluated
/// by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MetricConfig {
    pub magnitude: MagnitudeOptions,
    pub olm: OlmOptions,
    pub sobalev: SobalevOptions,
    pub general: GeneralOptions,
    pub meta_interval: MetaIntervalOptions,
    pub generalized_interval: GeneralizedIntervalOptions,
    pub ulm: ScalingOptions,
    pub ocm: ScalingOptions,
    pub ucm: ScalingOptions,
    pub max: MaxOptions,
}

impl MetricConfig {
    /// Parse a config from TOML; missing tables and fields take defaults.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
