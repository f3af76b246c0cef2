//! Itinerary search over a loaded timetable.
//!
//! Finds direct, one-stop and two-stop itineraries between two cities.
//! The search is exhaustive over the connection set: the timetable is a
//! bounded, static network, not a live global graph, so O(n²)/O(n³)
//! enumeration with early layover rejection is acceptable.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Connection, Itinerary, eq_ignore_case};
use crate::timetable::{ConnectionFilter, Timetable};

use super::config::SearchConfig;

/// Error from an invalid search request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A required query input is missing or empty
    #[error("invalid search request: {0}")]
    InvalidRequest(&'static str),
}

/// Result of an itinerary search, grouped by stop count.
///
/// Empty groups are a normal outcome meaning no itinerary of that stop
/// count exists; they are never an error.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'t> {
    /// Direct connections matching the query (and any attribute filters).
    pub direct: Vec<&'t Connection>,
    /// Itineraries with one intermediate transfer.
    pub one_stop: Vec<Itinerary<'t>>,
    /// Itineraries with two intermediate transfers.
    pub two_stop: Vec<Itinerary<'t>>,
}

impl SearchResults<'_> {
    /// True if no itinerary of any stop count was found.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.one_stop.is_empty() && self.two_stop.is_empty()
    }
}

/// Searches a timetable for itineraries between two cities.
///
/// Borrows the timetable immutably; `search` is a pure read-only function,
/// so one finder (or many) can serve concurrent callers without locks.
pub struct PathFinder<'t> {
    timetable: &'t Timetable,
    config: SearchConfig,
}

impl<'t> PathFinder<'t> {
    /// Create a finder with the default configuration.
    pub fn new(timetable: &'t Timetable) -> Self {
        Self::with_config(timetable, SearchConfig::default())
    }

    /// Create a finder with an explicit configuration.
    pub fn with_config(timetable: &'t Timetable, config: SearchConfig) -> Self {
        Self { timetable, config }
    }

    /// Search for direct, one-stop and two-stop itineraries.
    ///
    /// City matching is case-insensitive. Attribute `filters` narrow the
    /// direct group only; multi-stop legs are not filtered (preserved
    /// behavior of the source system, pinned by tests).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidRequest`] if either city is empty.
    /// No partial results are produced on failure.
    pub fn search(
        &self,
        departure_city: &str,
        arrival_city: &str,
        filters: &[ConnectionFilter],
    ) -> Result<SearchResults<'t>, SearchError> {
        if departure_city.is_empty() {
            return Err(SearchError::InvalidRequest(
                "departure city must not be empty",
            ));
        }
        if arrival_city.is_empty() {
            return Err(SearchError::InvalidRequest(
                "arrival city must not be empty",
            ));
        }

        let direct = Timetable::filter(
            self.timetable
                .connections_from(departure_city)
                .filter(|c| eq_ignore_case(c.arrival_city(), arrival_city)),
            filters,
        );

        let one_stop = self.search_one_stop(departure_city, arrival_city);
        let two_stop = self.search_two_stop(departure_city, arrival_city);

        debug!(
            departure_city,
            arrival_city,
            direct = direct.len(),
            one_stop = one_stop.len(),
            two_stop = two_stop.len(),
            "itinerary search complete"
        );

        Ok(SearchResults {
            direct,
            one_stop,
            two_stop,
        })
    }

    /// Enumerate feasible (leg1, leg2) pairs. O(n²).
    fn search_one_stop(&self, departure_city: &str, arrival_city: &str) -> Vec<Itinerary<'t>> {
        let mut found = Vec::new();

        'outer: for leg1 in self.timetable.connections_from(departure_city) {
            let dep1 = leg1.departure();
            let arr1 = leg1.arrival().resolve_after(dep1);

            for leg2 in self.timetable.connections_to(arrival_city) {
                if !eq_ignore_case(leg1.arrival_city(), leg2.departure_city()) {
                    continue;
                }

                let dep2 = leg2.departure().resolve_after(arr1);
                if !self.config.layover.acceptable(arr1, dep2) {
                    continue;
                }

                let arr2 = leg2.arrival().resolve_after(dep2);
                // Chain already verified above, so construction cannot fail
                match Itinerary::new(vec![leg1, leg2], dep1.gap_until(arr2)) {
                    Ok(itinerary) => found.push(itinerary),
                    Err(err) => debug_assert!(false, "verified chain rejected: {err}"),
                }
                if self.at_cap(found.len()) {
                    break 'outer;
                }
            }
        }

        found
    }

    /// Enumerate feasible (leg1, leg2, leg3) triples. O(n³) worst case,
    /// but the first layover is checked before the inner loop, so
    /// infeasible pairs never pay for the third scan.
    fn search_two_stop(&self, departure_city: &str, arrival_city: &str) -> Vec<Itinerary<'t>> {
        let mut found = Vec::new();

        'outer: for leg1 in self.timetable.connections_from(departure_city) {
            let dep1 = leg1.departure();
            let arr1 = leg1.arrival().resolve_after(dep1);

            for leg2 in self.timetable.connections_from(leg1.arrival_city()) {
                let dep2 = leg2.departure().resolve_after(arr1);
                if !self.config.layover.acceptable(arr1, dep2) {
                    continue;
                }
                let arr2 = leg2.arrival().resolve_after(dep2);

                for leg3 in self.timetable.connections_to(arrival_city) {
                    if !eq_ignore_case(leg2.arrival_city(), leg3.departure_city()) {
                        continue;
                    }

                    let dep3 = leg3.departure().resolve_after(arr2);
                    if !self.config.layover.acceptable(arr2, dep3) {
                        continue;
                    }

                    let arr3 = leg3.arrival().resolve_after(dep3);
                    match Itinerary::new(vec![leg1, leg2, leg3], dep1.gap_until(arr3)) {
                        Ok(itinerary) => found.push(itinerary),
                        Err(err) => debug_assert!(false, "verified chain rejected: {err}"),
                    }
                    if self.at_cap(found.len()) {
                        break 'outer;
                    }
                }
            }
        }

        found
    }

    fn at_cap(&self, len: usize) -> bool {
        self.config.max_itineraries.is_some_and(|max| len >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConnectionRecord;

    fn record(route_id: &str, from: &str, to: &str, dep: &str, arr: &str) -> ConnectionRecord {
        ConnectionRecord {
            route_id: route_id.into(),
            departure_city: from.into(),
            arrival_city: to.into(),
            departure_time: dep.into(),
            arrival_time: arr.into(),
            train_type: "Express".into(),
            days_of_operation: "Daily".into(),
            first_class_rate: 50.0,
            second_class_rate: 25.0,
        }
    }

    fn timetable(records: Vec<ConnectionRecord>) -> Timetable {
        Timetable::new(records).unwrap()
    }

    fn route_ids<'a>(itineraries: &[Itinerary<'a>]) -> Vec<Vec<&'a str>> {
        itineraries
            .iter()
            .map(|i| i.legs().iter().map(|c| c.route_id()).collect())
            .collect()
    }

    #[test]
    fn direct_connection_found() {
        let t = timetable(vec![
            record("R1", "Paris", "Lyon", "08:00", "10:00"),
            record("R2", "Paris", "Dijon", "08:30", "10:00"),
        ]);

        let results = PathFinder::new(&t).search("Paris", "Lyon", &[]).unwrap();

        assert_eq!(results.direct.len(), 1);
        assert_eq!(results.direct[0].route_id(), "R1");
        assert!(results.one_stop.is_empty());
        assert!(results.two_stop.is_empty());
    }

    #[test]
    fn city_matching_ignores_case() {
        let t = timetable(vec![record("R1", "Paris", "Lyon", "08:00", "10:00")]);

        let results = PathFinder::new(&t).search("PARIS", "lyon", &[]).unwrap();
        assert_eq!(results.direct.len(), 1);
    }

    #[test]
    fn empty_departure_city_fails() {
        let t = timetable(vec![record("R1", "Paris", "Lyon", "08:00", "10:00")]);

        let err = PathFinder::new(&t).search("", "Lyon", &[]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidRequest(_)));
    }

    #[test]
    fn empty_arrival_city_fails() {
        let t = timetable(vec![record("R1", "Paris", "Lyon", "08:00", "10:00")]);

        let err = PathFinder::new(&t).search("Paris", "", &[]).unwrap_err();
        assert!(matches!(err, SearchError::InvalidRequest(_)));
    }

    #[test]
    fn no_itineraries_is_a_successful_empty_result() {
        let t = timetable(vec![record("R1", "Paris", "Lyon", "08:00", "10:00")]);

        let results = PathFinder::new(&t).search("Lyon", "Berlin", &[]).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn one_stop_with_acceptable_layover() {
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "10:00", "11:00"),
            record("R2", "CityB", "CityC", "11:20", "12:00"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityC", &[]).unwrap();

        assert_eq!(route_ids(&results.one_stop), vec![vec!["R1", "R2"]]);
        assert_eq!(results.one_stop[0].stops(), 1);
        assert_eq!(results.one_stop[0].total_duration_display(), "2:00");
    }

    #[test]
    fn one_stop_below_minimum_transfer_excluded() {
        // 10-minute gap is below the 15-minute minimum
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "10:00", "11:00"),
            record("R2", "CityB", "CityC", "11:10", "12:00"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityC", &[]).unwrap();
        assert!(results.one_stop.is_empty());
    }

    #[test]
    fn one_stop_excessive_daytime_layover_excluded() {
        // 2h30 daytime layover exceeds the 2-hour maximum
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "10:00", "11:00"),
            record("R2", "CityB", "CityC", "13:30", "14:30"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityC", &[]).unwrap();
        assert!(results.one_stop.is_empty());
    }

    #[test]
    fn one_stop_after_hours_layover() {
        // Arrival at 23:00: at most 30 minutes
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "21:00", "23:00"),
            record("R2", "CityB", "CityC", "23:20", "23:59"),
            record("R3", "CityB", "CityC", "23:45", "23:59"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityC", &[]).unwrap();
        assert_eq!(route_ids(&results.one_stop), vec![vec!["R1", "R2"]]);
    }

    #[test]
    fn one_stop_transfer_across_midnight() {
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "22:00", "23:50"),
            record("R2", "CityB", "CityC", "00:10", "01:00"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityC", &[]).unwrap();

        // 20-minute after-hours gap across midnight is fine; the total runs
        // from 22:00 day 0 to 01:00 day 1.
        assert_eq!(results.one_stop.len(), 1);
        assert_eq!(results.one_stop[0].total_duration_display(), "3:00");
    }

    #[test]
    fn two_stop_with_two_acceptable_layovers() {
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "08:00", "09:00"),
            record("R2", "CityB", "CityC", "09:30", "10:30"),
            record("R3", "CityC", "CityD", "11:00", "12:00"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityD", &[]).unwrap();

        assert_eq!(route_ids(&results.two_stop), vec![vec!["R1", "R2", "R3"]]);
        assert_eq!(results.two_stop[0].stops(), 2);
        assert_eq!(results.two_stop[0].total_duration_display(), "4:00");
    }

    #[test]
    fn two_stop_failing_second_gap_excluded() {
        // First layover fine, second only 10 minutes
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "08:00", "09:00"),
            record("R2", "CityB", "CityC", "09:30", "10:30"),
            record("R3", "CityC", "CityD", "10:40", "12:00"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityD", &[]).unwrap();
        assert!(results.two_stop.is_empty());
    }

    #[test]
    fn two_stop_failing_first_gap_excluded() {
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "08:00", "09:00"),
            record("R2", "CityB", "CityC", "09:05", "10:30"),
            record("R3", "CityC", "CityD", "11:00", "12:00"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityD", &[]).unwrap();
        assert!(results.two_stop.is_empty());
    }

    #[test]
    fn direct_respects_attribute_filters() {
        let mut regional = record("R2", "Paris", "Lyon", "09:00", "11:00");
        regional.train_type = "Regional".into();

        let t = timetable(vec![
            record("R1", "Paris", "Lyon", "08:00", "10:00"),
            regional,
        ]);

        let filters = [ConnectionFilter::TrainType("regional".into())];
        let results = PathFinder::new(&t).search("Paris", "Lyon", &filters).unwrap();

        assert_eq!(results.direct.len(), 1);
        assert_eq!(results.direct[0].route_id(), "R2");
    }

    #[test]
    fn filters_never_narrow_multi_stop_groups() {
        // Pins the source system's asymmetry: attribute filters apply to
        // the direct set only, not to intermediate legs.
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "10:00", "11:00"),
            record("R2", "CityB", "CityC", "11:20", "12:00"),
        ]);

        let filters = [ConnectionFilter::TrainType("Sleeper".into())];
        let results = PathFinder::new(&t).search("CityA", "CityC", &filters).unwrap();

        assert!(results.direct.is_empty());
        assert_eq!(results.one_stop.len(), 1);
    }

    #[test]
    fn max_itineraries_caps_each_group() {
        // Two interchange cities produce two one-stop itineraries
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "10:00", "11:00"),
            record("R2", "CityB", "CityD", "11:20", "12:00"),
            record("R3", "CityA", "CityC", "10:00", "11:00"),
            record("R4", "CityC", "CityD", "11:20", "12:00"),
        ]);

        let uncapped = PathFinder::new(&t).search("CityA", "CityD", &[]).unwrap();
        assert_eq!(uncapped.one_stop.len(), 2);

        let finder = PathFinder::with_config(&t, SearchConfig::new().with_max_itineraries(1));
        let capped = finder.search("CityA", "CityD", &[]).unwrap();
        assert_eq!(capped.one_stop.len(), 1);
    }

    #[test]
    fn cap_does_not_touch_direct_group() {
        let t = timetable(vec![
            record("R1", "Paris", "Lyon", "08:00", "10:00"),
            record("R2", "Paris", "Lyon", "09:00", "11:00"),
            record("R3", "Paris", "Lyon", "10:00", "12:00"),
        ]);

        let finder = PathFinder::with_config(&t, SearchConfig::new().with_max_itineraries(1));
        let results = finder.search("Paris", "Lyon", &[]).unwrap();

        assert_eq!(results.direct.len(), 3);
    }

    #[test]
    fn one_stop_ignores_legs_not_reaching_destination() {
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "10:00", "11:00"),
            record("R2", "CityB", "CityX", "11:20", "12:00"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityC", &[]).unwrap();
        assert!(results.one_stop.is_empty());
    }

    #[test]
    fn results_serialize_for_the_presentation_layer() {
        let t = timetable(vec![
            record("R1", "CityA", "CityB", "10:00", "11:00"),
            record("R2", "CityB", "CityC", "11:20", "12:00"),
            record("R3", "CityA", "CityC", "10:00", "12:30"),
        ]);

        let results = PathFinder::new(&t).search("CityA", "CityC", &[]).unwrap();
        let json = serde_json::to_value(&results).unwrap();

        assert_eq!(json["direct"][0]["route_id"], "R3");
        assert_eq!(json["one_stop"][0]["total_duration"], "2:00");
        assert!(json["two_stop"].as_array().unwrap().is_empty());
    }
}
