//! Ordering of search results.

use std::str::FromStr;

use super::finder::SearchResults;

/// The attribute results are ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Total elapsed time, ascending. Applies to every result group.
    #[default]
    Duration,
    /// First-class fare, ascending. Direct connections only.
    PriceFirst,
    /// Second-class fare, ascending. Direct connections only.
    PriceSecond,
}

/// Error for an unrecognised sort-key name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0:?}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "duration" => Ok(SortKey::Duration),
            "price_first" => Ok(SortKey::PriceFirst),
            "price_second" => Ok(SortKey::PriceSecond),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Sort search results in place by the given key.
///
/// All sorts are stable: connections that compare equal keep their
/// discovery order. A price key reorders the direct group only; multi-stop
/// itineraries have no single-fare total, so those groups keep discovery
/// order unchanged.
pub fn sort_results(results: &mut SearchResults<'_>, key: SortKey) {
    match key {
        SortKey::Duration => {
            results.direct.sort_by_key(|c| c.duration_minutes());
            results.one_stop.sort_by_key(|i| i.total_duration());
            results.two_stop.sort_by_key(|i| i.total_duration());
        }
        SortKey::PriceFirst => {
            results
                .direct
                .sort_by(|a, b| a.first_class_rate().total_cmp(&b.first_class_rate()));
        }
        SortKey::PriceSecond => {
            results
                .direct
                .sort_by(|a, b| a.second_class_rate().total_cmp(&b.second_class_rate()));
        }
    }
}
