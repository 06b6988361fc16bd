use chrono::Utc;
use tracing::{debug, info};

use crate::analyzers::chart::chart_series;
use crate::analyzers::eras::{classify_by_era, highest_per_era};
use crate::analyzers::types::{DigestIndex, RegionDigest, RegionIndexEntry};
use crate::error::Error;
use crate::record::Record;

/// Digest payload layout version.
const SCHEMA_VERSION: u8 = 1;

/// Aggregates one region's records into a render-ready digest.
///
/// The chart series needs date order while the era classifier needs
/// place-grouped order: the digest sorts its own copy for the former and
/// feeds the latter the records as given.
pub fn digest_region(region: &str, records: &[Record]) -> Result<RegionDigest, Error> {
    debug!(region, records = records.len(), "Building region digest");

    let mut by_date = records.to_vec();
    by_date.sort_by(|a, b| a.date.cmp(&b.date));

    let chart = chart_series(&by_date)?;
    let buckets = classify_by_era(records, Record::temperature)?;
    let era_leaders = highest_per_era(&buckets);

    info!(
        region,
        years = chart.points.len(),
        leaders = era_leaders.len(),
        "Region digest complete"
    );

    Ok(RegionDigest {
        schema_version: SCHEMA_VERSION,
        region: region.to_string(),
        generated_at: Utc::now(),
        records: records.len(),
        chart,
        era_leaders,
    })
}

/// Summarizes a set of region digests into one index payload.
pub fn digest_index(digests: &[RegionDigest]) -> DigestIndex {
    let mut regions = Vec::with_capacity(digests.len());

    for digest in digests {
        let Some(first) = digest.chart.points.first() else {
            continue;
        };
        let Some(last) = digest.chart.points.last() else {
            continue;
        };

        regions.push(RegionIndexEntry {
            region: digest.region.clone(),
            first_year: first.year,
            last_year: last.year,
            warming_per_century: digest.chart.trend.slope * 100.0,
            r_squared: digest.chart.trend.r_squared,
        });
    }

    DigestIndex {
        generated_at: Utc::now(),
        regions,
    }
}
