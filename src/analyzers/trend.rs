use crate::analyzers::types::{TrendFit, YearlySeries};
use crate::error::Error;

/// Minimum number of yearly values needed to fit a line.
const MIN_YEARS: usize = 2;

/// Fits an ordinary least-squares line through a yearly series.
///
/// Returns [`Error::InsufficientData`] when fewer than two years are
/// available; series keys are distinct years, so two of them already give
/// the fit a non-zero spread in x. A series the line passes through
/// exactly, including a constant one, reports an r-squared of 1.0.
pub fn fit_trend(series: &YearlySeries) -> Result<TrendFit, Error> {
    if series.len() < MIN_YEARS {
        return Err(Error::InsufficientData {
            needed: MIN_YEARS,
            got: series.len(),
        });
    }

    let n = series.len() as f64;
    let mean_x = series.keys().map(|&year| f64::from(year)).sum::<f64>() / n;
    let mean_y = series.values().sum::<f64>() / n;

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    for (&year, &value) in series {
        let dx = f64::from(year) - mean_x;
        sxy += dx * (value - mean_y);
        sxx += dx * dx;
    }

    let slope = sxy / sxx;
    let intercept = mean_y - slope * mean_x;

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&year, &value) in series {
        let fitted = slope * f64::from(year) + intercept;
        ss_res += (value - fitted) * (value - fitted);
        ss_tot += (value - mean_y) * (value - mean_y);
    }

    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(TrendFit {
        slope,
        intercept,
        r_squared,
    })
}
