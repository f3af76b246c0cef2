//! Timetable itinerary search engine.
//!
//! Given a fixed set of scheduled train connections, finds direct, one-stop
//! and two-stop itineraries between two cities, checks transfer feasibility
//! against a layover policy, and orders results by duration or fare.
//!
//! The timetable is immutable after load and [`search::PathFinder::search`]
//! is a pure function of its inputs, so a loaded [`timetable::Timetable`]
//! can be shared freely across threads.

pub mod domain;
pub mod search;
pub mod timetable;

pub use domain::{ClockTime, Connection, ConnectionRecord, DomainError, Itinerary, TimeError};
pub use search::{
    LayoverPolicy, PathFinder, SearchConfig, SearchError, SearchResults, SortKey, sort_results,
};
pub use timetable::{ConnectionFilter, Timetable};
