// Metric names for dispatch by string

use std::fmt;
use std::str::FromStr;

use crate::error::MorphError;

/// Every scalar metric the suite can evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Magnitude,
    Olm,
    OlmCanonical,
    OlmScaled,
    OlmRelativeScaling,
    SobalevOlm,
    OlmGeneral,
    OlmMetaInterval,
    UlmMetaInterval,
    OlmGeneralizedInterval,
    Uld,
    Old,
    Ocd,
    Ucd,
    UldUnequalLength,
    UcdUnequalLength,
    Ulm,
    UlmAbsoluteScaling,
    UlmRelativeScaling,
    Ocm,
    Ucm,
    MaxUlm,
    MaxOlm,
    MaxOcm,
    MaxUcm,
    SigmaUlm,
}

impl MetricKind {
    pub const ALL: [MetricKind; 26] = [
        MetricKind::Magnitude,
        MetricKind::Olm,
        MetricKind::OlmCanonical,
        MetricKind::OlmScaled,
        MetricKind::OlmRelativeScaling,
        MetricKind::SobalevOlm,
        MetricKind::OlmGeneral,
        MetricKind::OlmMetaInterval,
        MetricKind::UlmMetaInterval,
        MetricKind::OlmGeneralizedInterval,
        MetricKind::Uld,
        MetricKind::Old,
        MetricKind::Ocd,
        MetricKind::Ucd,
        MetricKind::UldUnequalLength,
        MetricKind::UcdUnequalLength,
        MetricKind::Ulm,
        MetricKind::UlmAbsoluteScaling,
        MetricKind::UlmRelativeScaling,
        MetricKind::Ocm,
        MetricKind::Ucm,
        MetricKind::MaxUlm,
        MetricKind::MaxOlm,
        MetricKind::MaxOcm,
        MetricKind::MaxUcm,
        MetricKind::SigmaUlm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Magnitude => "magnitude",
            MetricKind::Olm => "olm",
            MetricKind::OlmCanonical => "olm_canonical",
            MetricKind::OlmScaled => "olm_scaled",
            MetricKind::OlmRelativeScaling => "olm_relative_scaling",
            MetricKind::SobalevOlm => "sobalev_olm",
            MetricKind::OlmGeneral => "olm_general",
            MetricKind::OlmMetaInterval => "olm_meta_interval",
            MetricKind::UlmMetaInterval => "ulm_meta_interval",
            MetricKind::OlmGeneralizedInterval => "olm_generalized_interval",
            MetricKind::Uld => "uld",
            MetricKind::Old => "old",
            MetricKind::Ocd => "ocd",
            MetricKind::Ucd => "ucd",
            MetricKind::UldUnequalLength => "uld_unequal_length",
            MetricKind::UcdUnequalLength => "ucd_unequal_length",
            MetricKind::Ulm => "ulm",
            MetricKind::UlmAbsoluteScaling => "ulm_absolute_scaling",
            MetricKind::UlmRelativeScaling => "ulm_relative_scaling",
            MetricKind::Ocm => "ocm",
            MetricKind::Ucm => "ucm",
            MetricKind::MaxUlm => "max_ulm",
            MetricKind::MaxOlm => "max_olm",
            MetricKind::MaxOcm => "max_ocm",
            MetricKind::MaxUcm => "max_ucm",
            MetricKind::SigmaUlm => "sigma_ulm",
        }
    }

    /// True for metrics that fail on an unordered comparison.
    pub fn requires_ordered(&self) -> bool {
        matches!(
            self,
            MetricKind::Magnitude
                | MetricKind::Olm
                | MetricKind::OlmCanonical
                | MetricKind::OlmScaled
                | MetricKind::OlmRelativeScaling
                | MetricKind::SobalevOlm
                | MetricKind::OlmGeneral
                | MetricKind::OlmMetaInterval
                | MetricKind::OlmGeneralizedInterval
                | MetricKind::Old
                | MetricKind::Ocd
                | MetricKind::Ocm
                | MetricKind::MaxOlm
                | MetricKind::MaxOcm
        )
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MetricKind {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetricKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| MorphError::ParameterMismatch(format!("unknown metric: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.as_str().parse::<MetricKind>().unwrap(), kind);
        }
        assert!("olm_sideways".parse::<MetricKind>().is_err());
    }
}
