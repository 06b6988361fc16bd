use crate::error::Error;

/// A single temperature observation for one place in one month.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Observation date as `YYYY-MM-DD`; the day is carried but unused.
    pub date: String,
    /// Country, city, or state the observation belongs to.
    pub place: String,
    /// Land average temperature in degrees Celsius, if measured.
    pub average_temperature: Option<f64>,
    /// 95% confidence interval around the average, if reported.
    pub average_temperature_uncertainty: Option<f64>,
}

impl Record {
    pub fn new(
        date: &str,
        place: &str,
        average_temperature: Option<f64>,
        average_temperature_uncertainty: Option<f64>,
    ) -> Self {
        Record {
            date: date.to_string(),
            place: place.to_string(),
            average_temperature,
            average_temperature_uncertainty,
        }
    }

    /// The four-digit year prefix of the record date.
    pub fn year(&self) -> Result<i32, Error> {
        self.date
            .get(..4)
            .and_then(|prefix| prefix.parse::<i32>().ok())
            .ok_or_else(|| Error::MalformedRecord {
                date: self.date.clone(),
            })
    }

    /// The temperature value, if present and finite.
    pub fn temperature(&self) -> Option<f64> {
        self.average_temperature.filter(|v| v.is_finite())
    }

    /// The uncertainty value, if present and finite.
    pub fn uncertainty(&self) -> Option<f64> {
        self.average_temperature_uncertainty.filter(|v| v.is_finite())
    }
}
