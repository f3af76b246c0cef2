//! Domain types for the itinerary search engine.
//!
//! This module contains the core model types representing validated
//! timetable data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod connection;
mod duration;
mod error;
mod itinerary;
mod time;

pub(crate) use connection::eq_ignore_case;

pub use connection::{Connection, ConnectionRecord};
pub use duration::{duration, duration_minutes, format_duration};
pub use error::DomainError;
pub use itinerary::Itinerary;
pub use time::{ClockTime, TimeError};
