//! Canonical band ranges.
//!
//! Configuration data describes bands either as absolute `{minValue, maxValue}` pairs
//! (inclusive at both ends) or as `{startPercentage, lessThanPercentage}` pairs (half-open,
//! optionally unbounded). Both shapes are converted into [`BandRange`] when a configuration is
//! loaded so scoring only ever runs one matching algorithm.

use super::domain::BandName;

/// Upper end of a band range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandEnd {
    Inclusive(f64),
    Exclusive(f64),
    Unbounded,
}

/// Range with an inclusive lower bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandRange {
    pub start: f64,
    pub end: BandEnd,
}

impl BandRange {
    pub fn absolute(min_value: f64, max_value: f64) -> Self {
        Self {
            start: min_value,
            end: BandEnd::Inclusive(max_value),
        }
    }

    pub fn percentage(start_percentage: f64, less_than_percentage: Option<f64>) -> Self {
        let end = match less_than_percentage {
            Some(limit) if limit.is_finite() => BandEnd::Exclusive(limit),
            _ => BandEnd::Unbounded,
        };
        Self {
            start: start_percentage,
            end,
        }
    }

    pub fn contains(&self, measure: f64) -> bool {
        if measure < self.start {
            return false;
        }
        match self.end {
            BandEnd::Inclusive(limit) => measure <= limit,
            BandEnd::Exclusive(limit) => measure < limit,
            BandEnd::Unbounded => !measure.is_nan(),
        }
    }

    /// `false` when the range can never contain a value.
    pub fn is_ordered(&self) -> bool {
        match self.end {
            BandEnd::Inclusive(limit) => self.start <= limit,
            BandEnd::Exclusive(limit) => self.start < limit,
            BandEnd::Unbounded => !self.start.is_nan(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBand {
    pub name: BandName,
    pub range: BandRange,
}

/// First band whose range contains `measure`.
pub fn classify(bands: &[ScoreBand], measure: f64) -> Option<&ScoreBand> {
    bands.iter().find(|band| band.range.contains(measure))
}

/// Which measure a total band list classifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandBasis {
    /// Raw summed points.
    Points,
    /// Total as a percentage of the configuration's max score.
    Percentage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TotalBands {
    pub basis: BandBasis,
    pub bands: Vec<ScoreBand>,
}

impl TotalBands {
    pub fn measure(&self, total: f64, percentage: f64) -> f64 {
        match self.basis {
            BandBasis::Points => total,
            BandBasis::Percentage => percentage,
        }
    }

    pub fn classify(&self, total: f64, percentage: f64) -> Option<&ScoreBand> {
        classify(&self.bands, self.measure(total, percentage))
    }
}
