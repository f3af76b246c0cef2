//! Scheduled connection records.
//!
//! A [`ConnectionRecord`] is the plain ingestion type a loader hands the
//! engine (from CSV, a database, or anywhere else). A [`Connection`] is the
//! validated, immutable form the engine searches: its invariants are
//! enforced at construction so search code can trust every record it sees.

use serde::{Deserialize, Serialize};

use super::duration::format_duration;
use super::error::DomainError;
use super::time::ClockTime;

/// Raw connection data as produced by a timetable loader.
///
/// No invariants hold here; validation happens in [`Connection::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub route_id: String,
    pub departure_city: String,
    pub arrival_city: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub train_type: String,
    pub days_of_operation: String,
    pub first_class_rate: f64,
    pub second_class_rate: f64,
}

/// One scheduled train leg, validated and immutable.
///
/// Created once at load time and never mutated. The departure and arrival
/// times are parsed at construction and cached, so the search loops never
/// re-parse and never fail on a time string.
///
/// # Invariants
///
/// - Both time strings parse to valid clock-times
/// - Both fares are non-negative finite numbers
#[derive(Debug, Clone, Serialize)]
pub struct Connection {
    route_id: String,
    departure_city: String,
    arrival_city: String,
    departure_time: String,
    arrival_time: String,
    train_type: String,
    days_of_operation: String,
    first_class_rate: f64,
    second_class_rate: f64,
    #[serde(skip)]
    departure: ClockTime,
    #[serde(skip)]
    arrival: ClockTime,
}

impl Connection {
    /// Validate a raw record into a connection.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError`] if either time string is malformed or either
    /// fare is negative or not finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetable_search::domain::{Connection, ConnectionRecord};
    ///
    /// let record = ConnectionRecord {
    ///     route_id: "R100".into(),
    ///     departure_city: "Paris".into(),
    ///     arrival_city: "Lyon".into(),
    ///     departure_time: "08:00".into(),
    ///     arrival_time: "10:30".into(),
    ///     train_type: "TGV".into(),
    ///     days_of_operation: "Mon-Fri".into(),
    ///     first_class_rate: 85.0,
    ///     second_class_rate: 45.0,
    /// };
    ///
    /// let connection = Connection::new(record).unwrap();
    /// assert_eq!(connection.duration_display(), "2:30");
    /// ```
    pub fn new(record: ConnectionRecord) -> Result<Self, DomainError> {
        let departure =
            ClockTime::parse(&record.departure_time).map_err(|source| DomainError::InvalidTime {
                route_id: record.route_id.clone(),
                field: "departure",
                source,
            })?;
        let arrival =
            ClockTime::parse(&record.arrival_time).map_err(|source| DomainError::InvalidTime {
                route_id: record.route_id.clone(),
                field: "arrival",
                source,
            })?;

        check_rate(&record.route_id, "first class", record.first_class_rate)?;
        check_rate(&record.route_id, "second class", record.second_class_rate)?;

        Ok(Self {
            route_id: record.route_id,
            departure_city: record.departure_city,
            arrival_city: record.arrival_city,
            departure_time: record.departure_time,
            arrival_time: record.arrival_time,
            train_type: record.train_type,
            days_of_operation: record.days_of_operation,
            first_class_rate: record.first_class_rate,
            second_class_rate: record.second_class_rate,
            departure,
            arrival,
        })
    }

    /// Opaque route identifier. Never used for matching or filtering.
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn departure_city(&self) -> &str {
        &self.departure_city
    }

    pub fn arrival_city(&self) -> &str {
        &self.arrival_city
    }

    /// Raw departure time string as loaded.
    pub fn departure_time(&self) -> &str {
        &self.departure_time
    }

    /// Raw arrival time string as loaded (may carry a day annotation).
    pub fn arrival_time(&self) -> &str {
        &self.arrival_time
    }

    pub fn train_type(&self) -> &str {
        &self.train_type
    }

    pub fn days_of_operation(&self) -> &str {
        &self.days_of_operation
    }

    pub fn first_class_rate(&self) -> f64 {
        self.first_class_rate
    }

    pub fn second_class_rate(&self) -> f64 {
        self.second_class_rate
    }

    /// Parsed departure clock-time (guaranteed valid).
    pub fn departure(&self) -> ClockTime {
        self.departure
    }

    /// Parsed arrival clock-time, unresolved: its day offset comes from the
    /// source annotation only.
    pub fn arrival(&self) -> ClockTime {
        self.arrival
    }

    /// Elapsed time for this single leg.
    pub fn duration_minutes(&self) -> chrono::Duration {
        let arrival = self.arrival.resolve_after(self.departure);
        self.departure.gap_until(arrival)
    }

    /// Elapsed time for this single leg, rendered as "H:MM".
    pub fn duration_display(&self) -> String {
        format_duration(self.duration_minutes())
    }
}

/// Case-insensitive string equality, used for city and attribute matching.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn check_rate(route_id: &str, field: &'static str, value: f64) -> Result<(), DomainError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DomainError::InvalidRate {
            route_id: route_id.to_string(),
            field,
            value,
        })
    }
}
