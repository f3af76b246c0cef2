//! The loaded connection set and its filtered views.
//!
//! A [`Timetable`] owns every [`Connection`] for the lifetime of a loaded
//! network. It is immutable after construction, so it can be shared across
//! concurrent searchers without locks.

use crate::domain::{Connection, ConnectionRecord, DomainError, eq_ignore_case};

/// An attribute filter applied to connection results.
///
/// This is a closed set on purpose: only the train type and service-day
/// mask are filterable. The route identifier and the city fields are query
/// inputs, not refinement filters, and are excluded from this path by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionFilter {
    /// Exact train-type match, case-insensitive.
    TrainType(String),
    /// Exact service-day-mask match, case-insensitive.
    DaysOfOperation(String),
}

impl ConnectionFilter {
    /// Returns true if the connection satisfies this filter.
    pub fn matches(&self, connection: &Connection) -> bool {
        match self {
            ConnectionFilter::TrainType(wanted) => eq_ignore_case(connection.train_type(), wanted),
            ConnectionFilter::DaysOfOperation(wanted) => {
                eq_ignore_case(connection.days_of_operation(), wanted)
            }
        }
    }
}

/// The full set of scheduled connections for a network.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    connections: Vec<Connection>,
}

impl Timetable {
    /// Build a timetable from raw loader records, validating each one.
    ///
    /// # Errors
    ///
    /// Returns the first [`DomainError`] encountered; a timetable is never
    /// built from partially valid input. Rejecting malformed records here
    /// is what keeps the search loops infallible.
    pub fn new(records: Vec<ConnectionRecord>) -> Result<Self, DomainError> {
        let connections = records
            .into_iter()
            .map(Connection::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { connections })
    }

    /// Build a timetable from already-validated connections.
    pub fn from_connections(connections: Vec<Connection>) -> Self {
        Self { connections }
    }

    /// All connections, in load order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }

    /// Connections departing from `city` (case-insensitive).
    pub fn connections_from<'t>(&'t self, city: &str) -> impl Iterator<Item = &'t Connection> {
        let needle = city.to_lowercase();
        self.connections
            .iter()
            .filter(move |c| c.departure_city().to_lowercase() == needle)
    }

    /// Connections arriving at `city` (case-insensitive).
    pub fn connections_to<'t>(&'t self, city: &str) -> impl Iterator<Item = &'t Connection> {
        let needle = city.to_lowercase();
        self.connections
            .iter()
            .filter(move |c| c.arrival_city().to_lowercase() == needle)
    }

    /// Narrow a set of connections to those matching every filter.
    pub fn filter<'t>(
        connections: impl IntoIterator<Item = &'t Connection>,
        filters: &[ConnectionFilter],
    ) -> Vec<&'t Connection> {
        connections
            .into_iter()
            .filter(|c| filters.iter().all(|f| f.matches(c)))
            .collect()
    }
}
