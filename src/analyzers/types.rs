//! Data types produced by the aggregation pipeline.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Yearly averages keyed by year. Years with no usable values are absent.
pub type YearlySeries = BTreeMap<i32, f64>;

/// Era buckets keyed by era start year. Every supported era key is present,
/// empty or not.
pub type EraBuckets = BTreeMap<i32, Vec<EraEntry>>;

/// A place classified into the recording era of its first record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EraEntry {
    pub place: String,
    /// 0-based rank of the place in scan order.
    pub order: usize,
    /// Mean over the place's entire record history; `None` when the place
    /// has no usable values at all.
    pub average: Option<f64>,
}

/// The place with the highest overall average within one era.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EraLeader {
    pub era: i32,
    pub place: String,
    pub average: f64,
}

/// Least-squares line fitted through a yearly series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl TrendFit {
    /// Value of the fitted line at `year`.
    pub fn predict(&self, year: i32) -> f64 {
        self.slope * f64::from(year) + self.intercept
    }
}

/// One plotted year: measured average, error bar, fitted value, century tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub year: i32,
    pub value: f64,
    /// Error-bar half-width; `None` plots without an error bar.
    pub uncertainty: Option<f64>,
    pub fitted: f64,
    /// Century start the year belongs to, e.g. 1843 -> 1800.
    pub century: i32,
}

/// Render-ready time series: one point per usable year plus the trend fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
    pub trend: TrendFit,
}

/// Point styling for one century of a plotted series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CenturyStyle {
    pub color: &'static str,
    pub marker: &'static str,
}

/// Complete aggregation result for one region, serialized as JSON for the
/// rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionDigest {
    pub schema_version: u8,
    pub region: String,
    pub generated_at: DateTime<Utc>,
    /// Number of input records the digest was built from.
    pub records: usize,
    pub chart: ChartSeries,
    pub era_leaders: Vec<EraLeader>,
}

impl RegionDigest {
    /// Pretty JSON for handoff to the rendering layer.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Summary entry for the cross-region index listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionIndexEntry {
    pub region: String,
    pub first_year: i32,
    pub last_year: i32,
    /// Fitted temperature change over one hundred years, in degrees.
    pub warming_per_century: f64,
    pub r_squared: f64,
}

/// Top-level index over all aggregated regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigestIndex {
    pub generated_at: DateTime<Utc>,
    pub regions: Vec<RegionIndexEntry>,
}
