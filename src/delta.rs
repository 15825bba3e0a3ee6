// Comparator catalog: named binary functions used as delta/psi strategies

use serde::{Deserialize, Serialize};

use crate::numeric::modulo;

/// `|a − b|`
pub fn absolute_difference(a: f64, b: f64) -> f64 {
    (a - b).abs()
}

/// `a / b` (IEEE semantics when `b` is zero)
pub fn ratio(a: f64, b: f64) -> f64 {
    a / b
}

/// `(a − b)²`
pub fn squared_difference(a: f64, b: f64) -> f64 {
    (a - b).powi(2)
}

/// Pitch-class distance: the shorter way around the mod-12 circle.
pub fn interval_class(a: f64, b: f64) -> f64 {
    modulo(a - b, 12.0).min(modulo(b - a, 12.0))
}

/// Direction of the step from `a` to `b`: 1 when it goes down, 0 when flat,
/// −1 when it goes up.
pub fn sgn(a: f64, b: f64) -> f64 {
    if a > b {
        1.0
    } else if a < b {
        -1.0
    } else {
        0.0
    }
}

/// 1 when two sign classifications disagree, 0 otherwise.
pub fn diff(a: f64, b: f64) -> f64 {
    if a != b {
        1.0
    } else {
        0.0
    }
}

/// Pluggable `(scalar, scalar) -> scalar` strategy.
///
/// The named variants cover the fixed catalog and can be written in config
/// files; `Custom` carries any caller-supplied function and is skipped by serde.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    #[default]
    AbsoluteDifference,
    Ratio,
    SquaredDifference,
    IntervalClass,
    Sign,
    SignDifference,
    #[serde(skip)]
    Custom(fn(f64, f64) -> f64),
}

impl Comparator {
    /// Apply the comparator to a pair of values.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Comparator::AbsoluteDifference => absolute_difference(a, b),
            Comparator::Ratio => ratio(a, b),
            Comparator::SquaredDifference => squared_difference(a, b),
            Comparator::IntervalClass => interval_class(a, b),
            Comparator::Sign => sgn(a, b),
            Comparator::SignDifference => diff(a, b),
            Comparator::Custom(f) => f(a, b),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Comparator::AbsoluteDifference => "absolute_difference",
            Comparator::Ratio => "ratio",
            Comparator::SquaredDifference => "squared_difference",
            Comparator::IntervalClass => "interval_class",
            Comparator::Sign => "sign",
            Comparator::SignDifference => "sign_difference",
            Comparator::Custom(_) => "custom",
        }
    }
}

// Named variants compare by tag; `Custom` compares by function address.
impl PartialEq for Comparator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparator::Custom(a), Comparator::Custom(b)) => std::ptr::fn_addr_eq(*a, *b),
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl From<fn(f64, f64) -> f64> for Comparator {
    fn from(f: fn(f64, f64) -> f64) -> Self {
        Comparator::Custom(f)
    }
}
