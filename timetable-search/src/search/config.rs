//! Search configuration.

use super::layover::LayoverPolicy;

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Cap on the number of itineraries collected per stop-count group.
    ///
    /// The two-stop search is cubic in timetable size; a cap bounds the
    /// work on dense networks. `None` (the default) searches exhaustively.
    pub max_itineraries: Option<usize>,

    /// Transfer-feasibility policy applied at every intermediate stop.
    pub layover: LayoverPolicy,
}

impl SearchConfig {
    /// Exhaustive search with the default layover policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each multi-stop group to at most `max` itineraries.
    pub fn with_max_itineraries(mut self, max: usize) -> Self {
        self.max_itineraries = Some(max);
        self
    }

    /// Replace the layover policy.
    pub fn with_layover(mut self, layover: LayoverPolicy) -> Self {
        self.layover = layover;
        self
    }
}
