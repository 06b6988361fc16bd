use crate::analyzers::types::YearlySeries;
use crate::analyzers::utility::RunningMean;
use crate::error::Error;
use crate::record::Record;

/// Collapses per-month records into one average per year.
///
/// `field` selects the measurement a record contributes; records where it
/// yields `None` are skipped, uniformly, so a year whose values are all
/// missing is absent from the result rather than 0.0 or NaN. The scan closes
/// a year whenever the year of the current record differs from the previous
/// one, so input must already be in date order.
pub fn aggregate_yearly<F>(records: &[Record], field: F) -> Result<YearlySeries, Error>
where
    F: Fn(&Record) -> Option<f64>,
{
    let mut series = YearlySeries::new();

    let mut current_year: Option<i32> = None;
    let mut acc = RunningMean::default();

    for record in records {
        let year = record.year()?;

        if current_year != Some(year) {
            if let (Some(closed), Some(mean)) = (current_year, acc.mean()) {
                series.insert(closed, mean);
            }
            current_year = Some(year);
            acc = RunningMean::default();
        }

        if let Some(value) = field(record) {
            acc.add(value);
        }
    }

    // Close the final year
    if let (Some(closed), Some(mean)) = (current_year, acc.mean()) {
        series.insert(closed, mean);
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_months_average_into_one_year() {
        let records = vec![
            rec("1990-01-01", Some(10.0)),
            rec("1990-02-01", Some(20.0)),
            rec("1991-01-01", None),
        ];

        let series = aggregate_yearly(&records, Record::temperature).unwrap();

        assert_eq!(series.len(), 1);
        assert_eq!(series.get(&1990), Some(&15.0));
    }

    #[test]
    fn test_year_of_only_missing_values_is_absent() {
        let records = vec![
            rec("1990-01-01", Some(10.0)),
            rec("1991-01-01", None),
            rec("1991-02-01", Some(f64::NAN)),
            rec("1992-01-01", Some(12.0)),
        ];

        let series = aggregate_yearly(&records, Record::temperature).unwrap();

        assert_eq!(series.len(), 2);
        assert!(!series.contains_key(&1991));
        assert_eq!(series.get(&1992), Some(&12.0));
    }

    #[test]
    fn test_missing_first_record_is_excluded_like_any_other() {
        let records = vec![
            rec("1850-01-01", None),
            rec("1850-02-01", Some(4.0)),
            rec("1850-03-01", Some(6.0)),
        ];

        let series = aggregate_yearly(&records, Record::temperature).unwrap();

        // The leading gap does not poison the year: 1850 averages the two
        // present values only.
        assert_eq!(series.get(&1850), Some(&5.0));
    }

    #[test]
    fn test_single_record_year() {
        let records = vec![rec("1900-06-01", Some(7.5))];

        let series = aggregate_yearly(&records, Record::temperature).unwrap();

        assert_eq!(series.get(&1900), Some(&7.5));
    }

    #[test]
    fn test_final_year_is_closed_at_end_of_input() {
        let records = vec![
            rec("2000-01-01", Some(1.0)),
            rec("2001-01-01", Some(2.0)),
            rec("2001-02-01", Some(4.0)),
        ];

        let series = aggregate_yearly(&records, Record::temperature).unwrap();

        assert_eq!(series.get(&2001), Some(&3.0));
    }

    #[test]
    fn test_empty_input_yields_empty_series() {
        let series = aggregate_yearly(&[], Record::temperature).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_aggregate_yearly_is_idempotent() {
        let records = vec![
            rec("1990-01-01", Some(10.0)),
            rec("1990-02-01", None),
            rec("1990-03-01", Some(20.0)),
            rec("1991-01-01", Some(8.0)),
        ];

        let first = aggregate_yearly(&records, Record::temperature).unwrap();
        let second = aggregate_yearly(&records, Record::temperature).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.get(&1990), Some(&15.0));
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let records = vec![rec("1990-01-01", Some(10.0)), rec("19xx-01-01", Some(11.0))];

        let err = aggregate_yearly(&records, Record::temperature).unwrap_err();

        assert_eq!(
            err,
            Error::MalformedRecord {
                date: "19xx-01-01".to_string()
            }
        );
    }

    #[test]
    fn test_field_selector_picks_uncertainty() {
        let records = vec![
            Record::new("1990-01-01", "Oslo", Some(10.0), Some(1.0)),
            Record::new("1990-02-01", "Oslo", Some(20.0), Some(3.0)),
        ];

        let series = aggregate_yearly(&records, Record::uncertainty).unwrap();

        assert_eq!(series.get(&1990), Some(&2.0));
    }

    // Helper functions for tests
    fn rec(date: &str, temperature: Option<f64>) -> Record {
        Record::new(date, "Oslo", temperature, None)
    }
}
