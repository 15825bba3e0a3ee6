// Magnitude metrics: OLM, ULM, OCM, UCM and their variants

use super::MorphologicalMetric;
use crate::config::{
    GeneralOptions, GeneralizedIntervalOptions, MagnitudeOptions, MaxOptions,
    MetaIntervalOptions, OlmOptions, Scaling, ScalingOptions, SobalevOptions,
};
use crate::delta::Comparator;
use crate::error::{MorphError, Result};
use crate::morph::Morph;
use crate::numeric::{max_of, mean, scale_by};

impl MorphologicalMetric<'_> {
    /// Mean (or sum) of `|Δm_i − Δn_i|` over the first-order absolute
    /// intervals. Without `absolute`, the signed differences `Δn_i − Δm_i`
    /// are aggregated instead.
    pub fn magnitude_metric(&self, options: &MagnitudeOptions) -> Result<f64> {
        self.require_ordered("MagnitudeMetric")?;
        let dm = self.m.first_order_absolute_interval();
        let dn = self.n.first_order_absolute_interval();

        let total: f64 = dm
            .iter()
            .zip(dn.iter())
            .map(|(a, b)| if options.absolute { (a - b).abs() } else { b - a })
            .sum();

        if options.normalized {
            Ok(total / dm.len() as f64)
        } else {
            Ok(total)
        }
    }

    /// Ordered linear magnitude.
    ///
    /// With `scaling` set this is `olm_canonical`, `olm_scaled` or
    /// `olm_relative_scaling`. Otherwise it averages `||a| − |b||` (or
    /// `sqrt(|a² − b²|)` when `squared`) over the order-`order` differences.
    pub fn olm(&self, options: &OlmOptions) -> Result<f64> {
        match options.scaling {
            Some(Scaling::None) => self.olm_canonical(),
            Some(Scaling::Absolute) => self.olm_scaled(),
            Some(Scaling::Relative) => self.olm_relative_scaling(),
            None => self.olm_original(options.order, options.squared),
        }
    }

    fn olm_original(&self, order: usize, squared: bool) -> Result<f64> {
        self.require_ordered("OLM")?;
        require_positive_order(order, self.m)?;
        let dm = self.m.derivate(order, false)?;
        let dn = self.n.derivate(order, false)?;

        let values: Vec<f64> = dm
            .iter()
            .zip(dn.iter())
            .map(|(a, b)| {
                if squared {
                    (a * a - b * b).abs().sqrt()
                } else {
                    (a.abs() - b.abs()).abs()
                }
            })
            .collect();
        Ok(mean(&values))
    }

    /// Mean `|Δm_i − Δn_i|` over first-order absolute intervals.
    pub fn olm_canonical(&self) -> Result<f64> {
        self.require_ordered("OLMCanonical")?;
        Ok(ordered_compare(
            &self.m.first_order_absolute_interval(),
            &self.n.first_order_absolute_interval(),
            Scaling::None,
        ))
    }

    /// `olm_canonical` divided by the largest interval of either operand.
    pub fn olm_scaled(&self) -> Result<f64> {
        self.require_ordered("OLMScaled")?;
        Ok(ordered_compare(
            &self.m.first_order_absolute_interval(),
            &self.n.first_order_absolute_interval(),
            Scaling::Absolute,
        ))
    }

    /// Mean difference after scaling each operand by its own largest interval.
    pub fn olm_relative_scaling(&self) -> Result<f64> {
        self.require_ordered("OLMRelativeScaling")?;
        Ok(ordered_compare(
            &self.m.first_order_absolute_interval(),
            &self.n.first_order_absolute_interval(),
            Scaling::Relative,
        ))
    }

    /// Weighted average over orders `min_order..=max_order` of the mean
    /// absolute difference between the operands' absolute derivatives.
    pub fn sobalev_olm(&self, options: &SobalevOptions) -> Result<f64> {
        self.require_ordered("SobalevOLM")?;
        require_positive_order(options.min_order, self.m)?;
        if options.max_order < options.min_order {
            return Err(MorphError::InvalidOrder {
                order: options.max_order,
                len: self.m.len(),
            });
        }

        let count = options.max_order - options.min_order + 1;
        let weights = options
            .weights
            .clone()
            .unwrap_or_else(|| vec![1.0; count]);
        if weights.len() != count {
            return Err(MorphError::ParameterMismatch(format!(
                "{} weights supplied for {} orders",
                weights.len(),
                count
            )));
        }

        let weight_sum: f64 = weights.iter().sum();
        if weight_sum == 0.0 {
            return Err(MorphError::ParameterMismatch("weights sum to zero".into()));
        }

        let mut total = 0.0;
        for (order, weight) in (options.min_order..=options.max_order).zip(weights.iter()) {
            let dm = self.m.derivate(order, true)?;
            let dn = self.n.derivate(order, true)?;
            total += weight * ordered_compare(&dm, &dn, Scaling::None);
        }
        Ok(total / weight_sum)
    }

    /// Mean `delta(Δm_i, Δn_i)` over order-`order` absolute differences.
    pub fn olm_general(&self, options: &GeneralOptions) -> Result<f64> {
        self.require_ordered("OLMGeneral")?;
        require_positive_order(options.order, self.m)?;
        let dm = self.m.derivate(options.order, true)?;
        let dn = self.n.derivate(options.order, true)?;
        Ok(mean(&pairwise(&dm, &dn, options.delta)))
    }

    /// Mean `psi` between the operands' meta intervals, divided by the
    /// largest meta interval of either operand.
    pub fn olm_meta_interval(&self, options: &MetaIntervalOptions) -> Result<f64> {
        self.require_ordered("OLMMetaInterval")?;
        let mm = meta_intervals(self.m, options.delta)?;
        let mn = meta_intervals(self.n, options.delta)?;

        let value = mean(&pairwise(&mm, &mn, options.psi));
        let largest = max_of(&mm).max(max_of(&mn));
        Ok(normalize(value, largest))
    }

    /// `psi` between the mean meta intervals of the two operands.
    pub fn ulm_meta_interval(&self, options: &MetaIntervalOptions) -> Result<f64> {
        let mm = meta_intervals(self.m, options.delta)?;
        let mn = meta_intervals(self.n, options.delta)?;
        Ok(options.psi.apply(mean(&mm), mean(&mn)))
    }

    /// Compare intervals generated independently for each operand, normalized
    /// by the largest endpoint magnitude. Fails when the two forms produce a
    /// different number of intervals.
    pub fn olm_generalized_interval(&self, options: &GeneralizedIntervalOptions) -> Result<f64> {
        self.require_ordered("OLMGeneralizedInterval")?;
        let im = self.m.generate_intervals(&options.m)?;
        let in_ = self.n.generate_intervals(&options.n)?;
        if im.len() != in_.len() {
            return Err(MorphError::ParameterMismatch(format!(
                "interval forms produce {} and {} intervals",
                im.len(),
                in_.len()
            )));
        }

        let values: Vec<f64> = im
            .iter()
            .zip(in_.iter())
            .map(|(&(ma, mb), &(na, nb))| {
                options
                    .psi
                    .apply(options.delta.apply(ma, mb), options.delta.apply(na, nb))
            })
            .collect();

        let largest = im
            .iter()
            .chain(in_.iter())
            .flat_map(|&(a, b)| [a, b])
            .fold(0.0, |acc: f64, v| acc.max(v.abs()));
        Ok(normalize(mean(&values), largest))
    }

    /// Unordered linear magnitude, dispatched on `scaling`.
    pub fn ulm(&self, options: &ScalingOptions) -> Result<f64> {
        Ok(match options.scaling {
            Scaling::None => self.ulm_plain(),
            Scaling::Absolute => self.ulm_absolute_scaling(),
            Scaling::Relative => self.ulm_relative_scaling(),
        })
    }

    /// `|mean(Δm) − mean(Δn)|`
    pub fn ulm_plain(&self) -> f64 {
        unordered_compare(
            &self.m.first_order_absolute_interval(),
            &self.n.first_order_absolute_interval(),
            Scaling::None,
        )
    }

    pub fn ulm_absolute_scaling(&self) -> f64 {
        unordered_compare(
            &self.m.first_order_absolute_interval(),
            &self.n.first_order_absolute_interval(),
            Scaling::Absolute,
        )
    }

    pub fn ulm_relative_scaling(&self) -> f64 {
        unordered_compare(
            &self.m.first_order_absolute_interval(),
            &self.n.first_order_absolute_interval(),
            Scaling::Relative,
        )
    }

    /// Ordered combinatorial magnitude: the mean per-pair difference of the
    /// combinatorial magnitudes over `Lm(L)` pairs.
    pub fn ocm(&self, options: &ScalingOptions) -> Result<f64> {
        self.require_ordered("OCM")?;
        Ok(ordered_compare(
            &self.m.combinatorial_magnitudes(),
            &self.n.combinatorial_magnitudes(),
            options.scaling,
        ))
    }

    /// Unordered combinatorial magnitude: compares the two mean combinatorial
    /// magnitudes.
    pub fn ucm(&self, options: &ScalingOptions) -> Result<f64> {
        Ok(unordered_compare(
            &self.m.combinatorial_magnitudes(),
            &self.n.combinatorial_magnitudes(),
            options.scaling,
        ))
    }

    /// `delta` between the largest first-order interval of each operand.
    pub fn max_ulm(&self, options: &MaxOptions) -> f64 {
        options.delta.apply(
            max_of(&self.m.first_order_absolute_interval()),
            max_of(&self.n.first_order_absolute_interval()),
        )
    }

    /// Largest `delta(Δm_i, Δn_i)` over first-order absolute intervals.
    pub fn max_olm(&self, options: &MaxOptions) -> Result<f64> {
        self.require_ordered("maxOLM")?;
        Ok(max_of(&pairwise(
            &self.m.first_order_absolute_interval(),
            &self.n.first_order_absolute_interval(),
            options.delta,
        )))
    }

    /// Largest per-pair `delta` over combinatorial magnitudes.
    pub fn max_ocm(&self, options: &MaxOptions) -> Result<f64> {
        self.require_ordered("maxOCM")?;
        Ok(max_of(&pairwise(
            &self.m.combinatorial_magnitudes(),
            &self.n.combinatorial_magnitudes(),
            options.delta,
        )))
    }

    /// `delta` between the largest combinatorial magnitude of each operand.
    pub fn max_ucm(&self, options: &MaxOptions) -> f64 {
        options.delta.apply(
            max_of(&self.m.combinatorial_magnitudes()),
            max_of(&self.n.combinatorial_magnitudes()),
        )
    }

    /// Difference between the standard deviations of the adjacency intervals.
    pub fn sigma_ulm(&self) -> f64 {
        let sm = self.m.interval_variance(Comparator::AbsoluteDifference).sqrt();
        let sn = self.n.interval_variance(Comparator::AbsoluteDifference).sqrt();
        (sm - sn).abs()
    }
}

/// Order 0 would compare the raw values, which no magnitude metric does.
fn require_positive_order(order: usize, morph: &Morph) -> Result<()> {
    if order < 1 {
        return Err(MorphError::InvalidOrder {
            order,
            len: morph.len(),
        });
    }
    Ok(())
}

fn pairwise(a: &[f64], b: &[f64], delta: Comparator) -> Vec<f64> {
    a.iter().zip(b.iter()).map(|(&x, &y)| delta.apply(x, y)).collect()
}

/// `delta` between consecutive first differences of one operand.
fn meta_intervals(morph: &Morph, delta: Comparator) -> Result<Vec<f64>> {
    let firsts = morph.derivate(1, false)?;
    if firsts.len() < 2 {
        return Err(MorphError::InvalidOrder {
            order: 2,
            len: morph.len(),
        });
    }
    Ok(firsts.windows(2).map(|w| delta.apply(w[0], w[1])).collect())
}

fn normalize(value: f64, largest: f64) -> f64 {
    if largest == 0.0 {
        log::debug!("Normalizing maximum is zero, returning raw value");
        return value;
    }
    value / largest
}

/// Per-pair comparison of two equal-length delta sets.
fn ordered_compare(dm: &[f64], dn: &[f64], scaling: Scaling) -> f64 {
    match scaling {
        Scaling::None => mean(&pairwise(dm, dn, Comparator::AbsoluteDifference)),
        Scaling::Absolute => {
            let shared = max_of(dm).max(max_of(dn));
            normalize(mean(&pairwise(dm, dn, Comparator::AbsoluteDifference)), shared)
        }
        Scaling::Relative => {
            let sm = scale_by(dm, max_of(dm));
            let sn = scale_by(dn, max_of(dn));
            mean(&pairwise(&sm, &sn, Comparator::AbsoluteDifference))
        }
    }
}

/// Compares the aggregate means of two delta sets, lengths may differ.
fn unordered_compare(dm: &[f64], dn: &[f64], scaling: Scaling) -> f64 {
    let (mean_m, mean_n) = (mean(dm), mean(dn));
    match scaling {
        Scaling::None => (mean_m - mean_n).abs(),
        Scaling::Absolute => {
            let shared = max_of(dm).max(max_of(dn));
            normalize((mean_m - mean_n).abs(), shared)
        }
        Scaling::Relative => {
            (normalize(mean_m, max_of(dm)) - normalize(mean_n, max_of(dn))).abs()
        }
    }
}
