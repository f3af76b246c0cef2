//! Itinerary type.
//!
//! An itinerary chains one to three connections into a trip from origin to
//! destination. It borrows its legs from the timetable that found it and is
//! built, consumed and discarded within a single search/sort call.

use chrono::Duration;
use serde::{Serialize, Serializer};

use super::connection::{Connection, eq_ignore_case};
use super::duration::format_duration;
use super::error::DomainError;

/// A chained sequence of 1-3 legs between two cities.
///
/// # Invariants
///
/// - One to three legs
/// - Each leg's arrival city equals the next leg's departure city
///   (case-insensitively)
#[derive(Debug, Clone, Serialize)]
pub struct Itinerary<'t> {
    legs: Vec<&'t Connection>,
    stops: usize,
    #[serde(serialize_with = "serialize_duration")]
    total_duration: Duration,
}

impl<'t> Itinerary<'t> {
    /// Construct an itinerary, validating the city chain.
    ///
    /// `total_duration` is the elapsed time from the first leg's departure
    /// to the last leg's arrival, as resolved on the search's timeline.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the leg count is outside 1-3 or consecutive legs
    /// do not share a transfer city.
    pub fn new(legs: Vec<&'t Connection>, total_duration: Duration) -> Result<Self, DomainError> {
        if legs.is_empty() || legs.len() > 3 {
            return Err(DomainError::InvalidLegCount(legs.len()));
        }

        for window in legs.windows(2) {
            if !eq_ignore_case(window[0].arrival_city(), window[1].departure_city()) {
                return Err(DomainError::BrokenChain {
                    arrival_city: window[0].arrival_city().to_string(),
                    departure_city: window[1].departure_city().to_string(),
                });
            }
        }

        let stops = legs.len() - 1;
        Ok(Self {
            legs,
            stops,
            total_duration,
        })
    }

    /// The legs in travel order.
    pub fn legs(&self) -> &[&'t Connection] {
        &self.legs
    }

    /// Number of intermediate transfer cities (0 = direct).
    pub fn stops(&self) -> usize {
        self.stops
    }

    /// Elapsed time from first departure to last arrival.
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Total duration rendered as "H:MM".
    pub fn total_duration_display(&self) -> String {
        format_duration(self.total_duration)
    }

    /// The city the itinerary departs from.
    pub fn origin(&self) -> &str {
        // Safe: validated non-empty at construction
        self.legs[0].departure_city()
    }

    /// The city the itinerary arrives at.
    pub fn destination(&self) -> &str {
        self.legs[self.legs.len() - 1].arrival_city()
    }
}

fn serialize_duration<S: Serializer>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*d))
}
