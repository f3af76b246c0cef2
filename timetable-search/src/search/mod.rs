//! Itinerary search: path finding, layover policy and result ordering.

mod config;
mod finder;
mod layover;
mod sort;

pub use config::SearchConfig;
pub use finder::{PathFinder, SearchError, SearchResults};
pub use layover::LayoverPolicy;
pub use sort::{SortKey, UnknownSortKey, sort_results};
