use std::collections::HashMap;

use crate::analyzers::types::{EraBuckets, EraEntry, EraLeader};
use crate::analyzers::utility::RunningMean;
use crate::error::Error;
use crate::record::Record;

/// Start years of the supported recording eras, each spanning fifty years.
pub const ERA_STARTS: [i32; 7] = [1700, 1750, 1800, 1850, 1900, 1950, 2000];

/// The era containing `year`, or `None` for years outside the table.
///
/// A year lands in the first half of its century unless `year mod 100`
/// reaches 50: 1846 -> 1800, 1867 -> 1850.
pub fn era_of(year: i32) -> Option<i32> {
    let mut era = year.div_euclid(100) * 100;
    if year.rem_euclid(100) >= 50 {
        era += 50;
    }
    ERA_STARTS.contains(&era).then_some(era)
}

/// Buckets each place into the era of its first record.
///
/// Each entry carries the place's overall mean across its entire record
/// history (missing values excluded; `None` when nothing is usable) and its
/// 0-based rank in scan order. Records are expected grouped by place, each
/// place's rows contiguous; only the first row of a place's run is
/// classified.
pub fn classify_by_era<F>(records: &[Record], field: F) -> Result<EraBuckets, Error>
where
    F: Fn(&Record) -> Option<f64>,
{
    let mut overall: HashMap<&str, RunningMean> = HashMap::new();
    for record in records {
        let acc = overall.entry(record.place.as_str()).or_default();
        if let Some(value) = field(record) {
            acc.add(value);
        }
    }

    let mut buckets: EraBuckets = ERA_STARTS.iter().map(|&era| (era, Vec::new())).collect();

    let mut current_place: Option<&str> = None;
    let mut order = 0usize;

    for record in records {
        if current_place == Some(record.place.as_str()) {
            continue;
        }
        current_place = Some(record.place.as_str());

        let year = record.year()?;
        let era = era_of(year).ok_or_else(|| Error::EraOutOfRange {
            place: record.place.clone(),
            year,
        })?;

        let average = overall.get(record.place.as_str()).and_then(RunningMean::mean);

        buckets.entry(era).or_default().push(EraEntry {
            place: record.place.clone(),
            order,
            average,
        });
        order += 1;
    }

    Ok(buckets)
}

/// Picks the place with the highest overall average within each era.
///
/// Entries without a usable average never win; ties keep bucket order. Eras
/// with no rankable entry are omitted, so the result holds at most one
/// leader per era, in ascending era order.
pub fn highest_per_era(buckets: &EraBuckets) -> Vec<EraLeader> {
    let mut leaders = Vec::new();

    for (&era, entries) in buckets {
        let mut ranked: Vec<(&EraEntry, f64)> = entries
            .iter()
            .filter_map(|entry| entry.average.map(|average| (entry, average)))
            .collect();
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((top, average)) = ranked.first() {
            leaders.push(EraLeader {
                era,
                place: top.place.clone(),
                average: *average,
            });
        }
    }

    leaders
}
