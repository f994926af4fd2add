//! Unsorted-versus-sorted comparison reports.
//!
//! A [`Request`] carries the caller's selections for one run. [`compare`]
//! measures the search on the input array, sorts it, measures the search
//! again on the sorted array, and assembles both measurements with the
//! sorting cost into a [`Report`].

use presort_core::{NumericArray, Observer, finite_target};

use crate::{
    ComplexityProfile, Error, InvariantError, SearchAlgorithm, SortAlgorithm, Sortedness, complexity,
    profile::{self, Action, Config, Event, Outcome, PerformanceMeasurement},
    sort,
};

/// The selections for one comparison run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Request {
    pub array: NumericArray,
    pub search: SearchAlgorithm,
    pub sort: SortAlgorithm,
    pub target: f64,
}

impl Request {
    /// Builds a request from raw values and algorithm identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for an empty array or non-finite
    /// values, and [`Error::InvalidConfiguration`] for unknown identifiers.
    pub fn parse(values: Vec<f64>, search: &str, sort: &str, target: f64) -> Result<Self, Error> {
        Ok(Self {
            array: NumericArray::new(values)?,
            search: search.parse()?,
            sort: sort.parse()?,
            target: finite_target(target)?,
        })
    }
}

/// Measurements of one search before and after presorting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Report {
    pub unsorted_measurement: PerformanceMeasurement,
    pub sorted_measurement: PerformanceMeasurement,
    pub algorithm: SearchAlgorithm,
    pub sorting_algorithm: SortAlgorithm,
    pub array_size: usize,
    pub sorting_complexity: ComplexityProfile,

    /// Element comparisons spent sorting the array.
    pub sort_comparisons: usize,
}

impl Report {
    /// Returns how many times faster the search ran on the sorted array.
    ///
    /// Returns `None` when the sorted mean is zero.
    #[must_use]
    pub fn speedup(&self) -> Option<f64> {
        let sorted = self.sorted_measurement.execution_time_ms;
        (sorted > 0.0).then(|| self.unsorted_measurement.execution_time_ms / sorted)
    }

    /// Returns unsorted minus sorted search comparisons.
    ///
    /// Negative when presorting made the search compare more.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn comparisons_saved(&self) -> i64 {
        self.unsorted_measurement.comparisons as i64 - self.sorted_measurement.comparisons as i64
    }
}

/// Runs the unsorted and sorted measurements for `request`.
///
/// # Errors
///
/// Returns an error if either measurement fails.
pub fn compare(request: &Request, config: &Config) -> Result<Report, Error> {
    match compare_observed(request, config, ())? {
        Outcome::Completed(report) => Ok(report),
        Outcome::Aborted { .. } => Err(InvariantError::UnexpectedAbort.into()),
    }
}

/// Runs the unsorted and sorted measurements, reporting every repetition of
/// both to `observer`.
///
/// If the observer aborts either measurement, the whole comparison is
/// aborted; `completed` counts repetitions across both measurements.
///
/// # Errors
///
/// Returns an error if either measurement fails.
pub fn compare_observed<Obs>(
    request: &Request,
    config: &Config,
    mut observer: Obs,
) -> Result<Outcome<Report>, Error>
where
    Obs: Observer<Event, Action>,
{
    let Request {
        array,
        search,
        sort: sort_algorithm,
        target,
    } = request;

    let unsorted = match profile::measure(
        array,
        *search,
        Sortedness::Unsorted,
        *target,
        config,
        |event: &Event| observer.observe(event),
    )? {
        Outcome::Completed(measurement) => measurement,
        Outcome::Aborted { completed } => return Ok(Outcome::Aborted { completed }),
    };

    let sorted_run = sort::sort_counted(array, *sort_algorithm);

    let sorted = match profile::measure(
        &sorted_run.values,
        *search,
        Sortedness::Sorted,
        *target,
        config,
        |event: &Event| observer.observe(event),
    )? {
        Outcome::Completed(measurement) => measurement,
        Outcome::Aborted { completed } => {
            return Ok(Outcome::Aborted {
                completed: unsorted.repetitions + completed,
            });
        }
    };

    Ok(Outcome::Completed(Report {
        unsorted_measurement: unsorted,
        sorted_measurement: sorted,
        algorithm: *search,
        sorting_algorithm: *sort_algorithm,
        array_size: array.len(),
        sorting_complexity: complexity::sort(*sort_algorithm),
        sort_comparisons: sorted_run.comparisons,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use presort_core::InputError;

    use crate::{Complexity, ConfigError};

    fn example_request(search: &str) -> Request {
        Request::parse(
            vec![3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0],
            search,
            "mergeSort",
            9.0,
        )
        .expect("valid request")
    }

    fn config() -> Config {
        Config::new(3, 0).unwrap()
    }

    fn with_times(report: &Report, unsorted_ms: f64, sorted_ms: f64) -> Report {
        let mut report = report.clone();
        report.unsorted_measurement.execution_time_ms = unsorted_ms;
        report.sorted_measurement.execution_time_ms = sorted_ms;
        report
    }

    #[test]
    fn parse_rejects_bad_selections() {
        assert_eq!(
            Request::parse(vec![], "binarySearch", "quickSort", 1.0),
            Err(Error::InvalidInput(InputError::Empty))
        );
        assert_eq!(
            Request::parse(vec![1.0], "jumpSearch", "quickSort", 1.0),
            Err(Error::InvalidConfiguration(ConfigError::UnknownAlgorithm(
                "jumpSearch".into()
            )))
        );
        assert!(matches!(
            Request::parse(vec![1.0], "binarySearch", "quickSort", f64::NAN),
            Err(Error::InvalidInput(InputError::NonFiniteTarget(_)))
        ));
    }

    #[test]
    fn binary_report_contrasts_degraded_and_sorted_search() {
        let report = compare(&example_request("binarySearch"), &config()).expect("should compare");

        assert_eq!(report.array_size, 11);
        assert_eq!(report.algorithm, SearchAlgorithm::Binary);
        assert_eq!(report.sorting_algorithm, SortAlgorithm::Merge);
        assert_eq!(report.sorting_complexity.worst, Complexity::Linearithmic);
        assert!(report.sort_comparisons > 0);

        let unsorted = &report.unsorted_measurement;
        assert_eq!(unsorted.executed, SearchAlgorithm::Linear);
        assert_eq!(unsorted.position, Some(5));
        assert_eq!(unsorted.comparisons, 6);

        let sorted = &report.sorted_measurement;
        assert_eq!(sorted.executed, SearchAlgorithm::Binary);
        assert_eq!(sorted.position, Some(10));
        assert_eq!(sorted.comparisons, 7);

        assert_eq!(report.comparisons_saved(), -1);
    }

    #[test]
    fn linear_report_searches_sorted_copy() {
        let report = compare(&example_request("linearSearch"), &config()).expect("should compare");

        assert_eq!(report.sorted_measurement.position, Some(10));
        assert_eq!(report.sorted_measurement.comparisons, 11);
        assert_eq!(report.comparisons_saved(), -5);
    }

    #[test]
    fn speedup_divides_means() {
        let report = compare(&example_request("binarySearch"), &config()).expect("should compare");

        let faster = with_times(&report, 2.0, 0.5);
        assert_relative_eq!(faster.speedup().expect("non-zero"), 4.0);

        let instant = with_times(&report, 2.0, 0.0);
        assert_eq!(instant.speedup(), None);
    }

    #[test]
    fn abort_during_sorted_measurement_counts_both_phases() {
        let mut seen = 0;
        let outcome = compare_observed(&example_request("binarySearch"), &config(), |_: &Event| {
            seen += 1;
            (seen == 4).then_some(Action::Abort)
        })
        .expect("should stop");

        assert_eq!(outcome, Outcome::Aborted { completed: 4 });
    }
}
