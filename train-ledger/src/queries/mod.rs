//! Read-only queries over trains and their ticket ledgers.
//!
//! Every query is a pure, synchronous pass over caller-supplied data:
//! nothing here mutates a train, acquires a lock, or performs I/O. Trains
//! are resolved through an injected [`TrainProvider`] so the queries can be
//! exercised against in-memory fixtures.

mod boarding;
mod oldest;
mod seats;
mod windows;

pub use boarding::boarding_count;
pub use oldest::oldest_age;
pub use seats::available_seats;
pub use windows::{arrival_estimate, trains_at};

use std::sync::Arc;

use chrono::NaiveTime;

use crate::domain::{Station, StationNotOnRoute, Train, TrainId};
use crate::store::TrainProvider;

/// Error from a ledger query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No train with the given identifier
    #[error("no train with id {0}")]
    TrainNotFound(TrainId),

    /// The queried station is not on the train's route
    #[error("train does not pass through {0}")]
    StationNotOnRoute(Station),

    /// A queried station pair does not resolve on the train's route
    #[error("invalid query range: {from} to {to} does not resolve on the route")]
    InvalidRoute {
        /// Requested boarding station.
        from: Station,
        /// Requested destination station.
        to: Station,
    },
}

impl From<StationNotOnRoute> for QueryError {
    fn from(err: StationNotOnRoute) -> Self {
        QueryError::StationNotOnRoute(err.station)
    }
}

/// Query facade over an injected train store.
///
/// Resolves train identifiers through the provider and dispatches to the
/// per-train query functions. This is the surface an external
/// request-handling layer consumes.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use train_ledger::domain::{Station, Train, TrainId};
/// use train_ledger::queries::LedgerQueries;
/// use train_ledger::store::InMemoryTrains;
///
/// let mut store = InMemoryTrains::new();
/// store.insert(
///     Train::new(
///         TrainId(1),
///         vec![Station::Euston, Station::Leeds],
///         80,
///         NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
///     )
///     .unwrap(),
/// );
///
/// let queries = LedgerQueries::new(&store);
/// assert_eq!(queries.oldest_age(TrainId(1)).unwrap(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct LedgerQueries<P> {
    provider: P,
}

impl<P: TrainProvider> LedgerQueries<P> {
    /// Wraps a train provider.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Seats remaining between two stations on a train.
    pub fn available_seats(
        &self,
        train_id: TrainId,
        from: Station,
        to: Station,
    ) -> Result<i64, QueryError> {
        let train = self.find(train_id)?;
        available_seats(&train, from, to)
    }

    /// Passengers boarding a train at a station.
    pub fn boarding_count(&self, train_id: TrainId, station: Station) -> Result<usize, QueryError> {
        let train = self.find(train_id)?;
        boarding_count(&train, station)
    }

    /// Age of the oldest passenger travelling on a train.
    pub fn oldest_age(&self, train_id: TrainId) -> Result<u32, QueryError> {
        let train = self.find(train_id)?;
        Ok(oldest_age(&train))
    }

    /// Trains estimated to be at a station within an inclusive time window.
    pub fn trains_at(&self, station: Station, start: NaiveTime, end: NaiveTime) -> Vec<TrainId> {
        trains_at(&self.provider, station, start, end)
    }

    fn find(&self, train_id: TrainId) -> Result<Arc<Train>, QueryError> {
        self.provider
            .find_train(train_id)
            .ok_or(QueryError::TrainNotFound(train_id))
    }
}
