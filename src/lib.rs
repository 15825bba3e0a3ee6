// Morphmetric - Morphological metrics for melodic contour analysis
// Main library entry point

pub mod config;
pub mod correlation;
pub mod delta;
pub mod error;
pub mod metric;
pub mod morph;
pub mod numeric;

pub use config::*;
pub use delta::Comparator;
pub use error::{MorphError, Result};
pub use metric::{DirectionMeasure, MetricKind, MorphologicalMetric};
pub use morph::{ContourVector, IntervalForm, IntervalPair, IntervalSpec, Morph};
