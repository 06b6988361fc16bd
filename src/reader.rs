//! CSV decoding of temperature observations.
//!
//! Understands the Berkeley Earth export layout: a fixed date column plus
//! measurement columns, and one caller-chosen place column (`Country`,
//! `City`, `State`, ...).

use anyhow::{Context, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::record::Record;

/// Header name of the observation date column.
pub const DATE_COLUMN: &str = "dt";
/// Header name of the average temperature column.
pub const TEMPERATURE_COLUMN: &str = "AverageTemperature";
/// Header name of the temperature uncertainty column.
pub const UNCERTAINTY_COLUMN: &str = "AverageTemperatureUncertainty";

/// Reads temperature records from a CSV file.
pub fn read_records(path: impl AsRef<Path>, place_column: &str) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let records = read_records_from(file, place_column)
        .with_context(|| format!("reading {}", path.display()))?;

    debug!(path = %path.display(), rows = records.len(), "Loaded temperature records");
    Ok(records)
}

/// Reads temperature records from any CSV source.
///
/// Columns are located by header name, so their order does not matter.
/// Empty or unparseable measurement cells decode as missing; a missing
/// required column is an error.
pub fn read_records_from(input: impl io::Read, place_column: &str) -> Result<Vec<Record>> {
    let mut rdr = csv::Reader::from_reader(input);

    let headers = rdr.headers()?.clone();
    let date_idx = column_index(&headers, DATE_COLUMN)?;
    let place_idx = column_index(&headers, place_column)?;
    let temperature_idx = column_index(&headers, TEMPERATURE_COLUMN)?;
    let uncertainty_idx = column_index(&headers, UNCERTAINTY_COLUMN)?;

    let mut records = Vec::new();

    for result in rdr.records() {
        let row = result?;
        records.push(Record {
            date: row.get(date_idx).unwrap_or_default().to_string(),
            place: row.get(place_idx).unwrap_or_default().to_string(),
            average_temperature: parse_measurement(row.get(temperature_idx)),
            average_temperature_uncertainty: parse_measurement(row.get(uncertainty_idx)),
        });
    }

    Ok(records)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .with_context(|| format!("missing column {:?}", name))
}

/// Empty, unparseable, and non-finite cells all read as missing.
fn parse_measurement(cell: Option<&str>) -> Option<f64> {
    cell?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    const BY_COUNTRY: &str = "\
dt,AverageTemperature,AverageTemperatureUncertainty,Country
1846-01-01,1.255,2.551,Denmark
1846-02-01,,,Denmark
1846-03-01,abc,0.5,Denmark
";

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    #[test]
    fn test_reads_rows_with_missing_cells() {
        let records = read_records_from(BY_COUNTRY.as_bytes(), "Country").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].date, "1846-01-01");
        assert_eq!(records[0].place, "Denmark");
        assert_eq!(records[0].average_temperature, Some(1.255));
        assert_eq!(records[1].average_temperature, None);
        assert_eq!(records[1].average_temperature_uncertainty, None);
    }

    #[test]
    fn test_unparseable_cell_reads_as_missing() {
        let records = read_records_from(BY_COUNTRY.as_bytes(), "Country").unwrap();

        assert_eq!(records[2].average_temperature, None);
        assert_eq!(records[2].average_temperature_uncertainty, Some(0.5));
    }

    #[test]
    fn test_non_finite_cell_reads_as_missing() {
        let csv = "\
dt,AverageTemperature,AverageTemperatureUncertainty,Country
1846-01-01,inf,NaN,Denmark
";

        let records = read_records_from(csv.as_bytes(), "Country").unwrap();

        assert_eq!(records[0].average_temperature, None);
        assert_eq!(records[0].average_temperature_uncertainty, None);
    }

    #[test]
    fn test_column_order_does_not_matter() {
        let csv = "\
City,AverageTemperatureUncertainty,dt,AverageTemperature
Aarhus,1.201,1867-05-01,9.731
";

        let records = read_records_from(csv.as_bytes(), "City").unwrap();

        assert_eq!(records[0].place, "Aarhus");
        assert_eq!(records[0].date, "1867-05-01");
        assert_eq!(records[0].average_temperature, Some(9.731));
        assert_eq!(records[0].average_temperature_uncertainty, Some(1.201));
    }

    #[test]
    fn test_missing_place_column_is_an_error() {
        let err = read_records_from(BY_COUNTRY.as_bytes(), "City").unwrap_err();

        assert!(err.to_string().contains("City"));
    }

    #[test]
    fn test_read_records_loads_rows_from_a_file() {
        let path = temp_path("climate_trends_test_read.csv");
        let _ = fs::remove_file(&path); // clean up any prior run

        fs::write(&path, BY_COUNTRY).unwrap();
        let records = read_records(&path, "Country").unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].place, "Denmark");
        assert_eq!(records[0].average_temperature, Some(1.255));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_records_missing_file_is_an_error() {
        let path = temp_path("climate_trends_test_absent.csv");
        let _ = fs::remove_file(&path);

        let err = read_records(&path, "Country").unwrap_err();

        assert!(err.to_string().contains("climate_trends_test_absent.csv"));
    }
}
