use std::collections::BTreeMap;

use crate::analyzers::trend::fit_trend;
use crate::analyzers::types::{CenturyStyle, ChartPoint, ChartSeries};
use crate::analyzers::utility::RunningMean;
use crate::analyzers::yearly::aggregate_yearly;
use crate::error::Error;
use crate::record::Record;

/// Point styling per century, anchored so the 1700s take the first entry.
/// Lookup wraps around, so any century resolves to a style.
static CENTURY_PALETTE: &[CenturyStyle] = &[
    CenturyStyle {
        color: "blue",
        marker: "o",
    },
    CenturyStyle {
        color: "green",
        marker: "^",
    },
    CenturyStyle {
        color: "orange",
        marker: "v",
    },
    CenturyStyle {
        color: "red",
        marker: ",",
    },
];

/// Bar color for each recording era's leaderboard entry.
static ERA_COLORS: &[(i32, &str)] = &[
    (1700, "blue"),
    (1750, "red"),
    (1800, "green"),
    (1850, "orange"),
    (1900, "purple"),
    (1950, "pink"),
    (2000, "yellow"),
];

/// Century start containing `year`, e.g. 1843 -> 1800.
pub fn century_of(year: i32) -> i32 {
    year.div_euclid(100) * 100
}

/// Style for a century start year (e.g. 1800).
pub fn century_style(century: i32) -> CenturyStyle {
    let slot = (century.div_euclid(100) - 17).rem_euclid(CENTURY_PALETTE.len() as i32);
    CENTURY_PALETTE[slot as usize]
}

/// Bar color for an era start year, or `None` outside the seven eras.
pub fn era_color(era: i32) -> Option<&'static str> {
    ERA_COLORS
        .iter()
        .find(|(start, _)| *start == era)
        .map(|(_, color)| *color)
}

/// Builds the render-ready yearly series for a set of records.
///
/// Temperatures and uncertainties aggregate independently and are joined by
/// year, so a year measured without any uncertainty simply plots without an
/// error bar. Input must be in date order; the trend fit needs at least two
/// usable years.
pub fn chart_series(records: &[Record]) -> Result<ChartSeries, Error> {
    let temperatures = aggregate_yearly(records, Record::temperature)?;
    let uncertainties = aggregate_yearly(records, Record::uncertainty)?;
    let trend = fit_trend(&temperatures)?;

    let points = temperatures
        .iter()
        .map(|(&year, &value)| ChartPoint {
            year,
            value,
            uncertainty: uncertainties.get(&year).copied(),
            fitted: trend.predict(year),
            century: century_of(year),
        })
        .collect();

    Ok(ChartSeries { points, trend })
}

/// Mean temperature per place across one century, for choropleth shading.
///
/// Only records whose year falls in `[century, century + 100)` contribute;
/// places with no usable values in that span are absent, which the renderer
/// shows as missing.
pub fn place_means_for_century(
    records: &[Record],
    century: i32,
) -> Result<BTreeMap<String, f64>, Error> {
    let mut accumulators: BTreeMap<&str, RunningMean> = BTreeMap::new();

    for record in records {
        let year = record.year()?;
        if year < century || year >= century + 100 {
            continue;
        }
        if let Some(value) = record.temperature() {
            accumulators
                .entry(record.place.as_str())
                .or_default()
                .add(value);
        }
    }

    Ok(accumulators
        .into_iter()
        .filter_map(|(place, acc)| acc.mean().map(|mean| (place.to_string(), mean)))
        .collect())
}
