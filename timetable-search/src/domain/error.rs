//! Domain error types.
//!
//! These errors represent validation failures in connection records and
//! itinerary construction. They are distinct from search-request errors.

use super::time::TimeError;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A connection record carries an unparseable time string
    #[error("invalid {field} time for route {route_id}: {source}")]
    InvalidTime {
        route_id: String,
        field: &'static str,
        #[source]
        source: TimeError,
    },

    /// A fare is negative or not a finite number
    #[error("invalid {field} rate for route {route_id}: {value}")]
    InvalidRate {
        route_id: String,
        field: &'static str,
        value: f64,
    },

    /// Consecutive itinerary legs do not share a transfer city
    #[error("itinerary legs do not chain: arrived at {arrival_city}, next leg departs {departure_city}")]
    BrokenChain {
        arrival_city: String,
        departure_city: String,
    },

    /// Itinerary must chain one to three legs
    #[error("itinerary must have between 1 and 3 legs, got {0}")]
    InvalidLegCount(usize),
}
