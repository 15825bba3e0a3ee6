// Morphological metrics over a pair of Morphs

pub mod direction;
pub mod kind;
pub mod magnitude;

pub use direction::*;
pub use kind::*;

use crate::config::MetricConfig;
use crate::correlation::pearson;
use crate::error::{MorphError, Result};
use crate::morph::Morph;

/// A pair of Morphs under comparison plus the ordering mode.
///
/// In ordered mode both operands have the same length, which is checked at
/// construction. Every metric reads the operands and never modifies them.
#[derive(Debug, Clone, Copy)]
pub struct MorphologicalMetric<'a> {
    m: &'a Morph,
    n: &'a Morph,
    ordered: bool,
}

impl<'a> MorphologicalMetric<'a> {
    /// Ordered comparison. Fails with `OrderingViolation` on unequal lengths.
    pub fn new(m: &'a Morph, n: &'a Morph) -> Result<Self> {
        Self::with_ordering(m, n, true)
    }

    pub fn with_ordering(m: &'a Morph, n: &'a Morph, ordered: bool) -> Result<Self> {
        if ordered && m.len() != n.len() {
            return Err(MorphError::OrderingViolation(format!(
                "ordered comparison needs equal lengths, got {} and {}",
                m.len(),
                n.len()
            )));
        }
        Ok(Self { m, n, ordered })
    }

    /// Unordered comparison; operand lengths may differ.
    pub fn unordered(m: &'a Morph, n: &'a Morph) -> Self {
        Self {
            m,
            n,
            ordered: false,
        }
    }

    pub fn m(&self) -> &'a Morph {
        self.m
    }

    pub fn n(&self) -> &'a Morph {
        self.n
    }

    pub fn is_ordered(&self) -> bool {
        self.ordered
    }

    /// Pearson correlation of the two raw sequences.
    pub fn correlation(&self) -> Result<f64> {
        pearson(self.m.data(), self.n.data())
    }

    /// Evaluate a metric by name with the matching options from `config`.
    pub fn evaluate(&self, kind: MetricKind, config: &MetricConfig) -> Result<f64> {
        log::debug!(
            "Evaluating {} over lengths {} and {}",
            kind,
            self.m.len(),
            self.n.len()
        );

        match kind {
            MetricKind::Magnitude => self.magnitude_metric(&config.magnitude),
            MetricKind::Olm => self.olm(&config.olm),
            MetricKind::OlmCanonical => self.olm_canonical(),
            MetricKind::OlmScaled => self.olm_scaled(),
            MetricKind::OlmRelativeScaling => self.olm_relative_scaling(),
            MetricKind::SobalevOlm => self.sobalev_olm(&config.sobalev),
            MetricKind::OlmGeneral => self.olm_general(&config.general),
            MetricKind::OlmMetaInterval => self.olm_meta_interval(&config.meta_interval),
            MetricKind::UlmMetaInterval => self.ulm_meta_interval(&config.meta_interval),
            MetricKind::OlmGeneralizedInterval => {
                self.olm_generalized_interval(&config.generalized_interval)
            }
            MetricKind::Uld => self.uld(),
            MetricKind::Old => self.old(),
            MetricKind::Ocd => self.ocd(),
            MetricKind::Ucd => self.ucd(),
            MetricKind::UldUnequalLength => Ok(self.uld_unequal_length_form()),
            MetricKind::UcdUnequalLength => Ok(self.ucd_unequal_length_form()),
            MetricKind::Ulm => self.ulm(&config.ulm),
            MetricKind::UlmAbsoluteScaling => Ok(self.ulm_absolute_scaling()),
            MetricKind::UlmRelativeScaling => Ok(self.ulm_relative_scaling()),
            MetricKind::Ocm => self.ocm(&config.ocm),
            MetricKind::Ucm => self.ucm(&config.ucm),
            MetricKind::MaxUlm => Ok(self.max_ulm(&config.max)),
            MetricKind::MaxOlm => self.max_olm(&config.max),
            MetricKind::MaxOcm => self.max_ocm(&config.max),
            MetricKind::MaxUcm => Ok(self.max_ucm(&config.max)),
            MetricKind::SigmaUlm => Ok(self.sigma_ulm()),
        }
    }

    pub(crate) fn require_ordered(&self, metric: &str) -> Result<()> {
        if !self.ordered {
            return Err(MorphError::OrderingViolation(format!(
                "{} is only defined for ordered comparisons",
                metric
            )));
        }
        Ok(())
    }

    /// Shared length of both operands, for forms that need one.
    pub(crate) fn require_equal_lengths(&self) -> Result<usize> {
        if self.m.len() != self.n.len() {
            return Err(MorphError::LengthMismatch {
                m: self.m.len(),
                n: self.n.len(),
            });
        }
        Ok(self.m.len())
    }
}
