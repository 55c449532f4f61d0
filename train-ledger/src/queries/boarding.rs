//! Passengers boarding at a station.

use tracing::trace;

use crate::domain::{Station, Train};

use super::QueryError;

/// Counts the passengers boarding `train` at `station`.
///
/// A ticket contributes its passenger count when its boarding station
/// equals the queried station by value; tickets merely passing through the
/// station do not count. Returns 0 when no ticket boards there.
///
/// Fails with [`QueryError::StationNotOnRoute`] if the train does not call
/// at the station at all.
pub fn boarding_count(train: &Train, station: Station) -> Result<usize, QueryError> {
    if !train.route_index().contains(station) {
        return Err(QueryError::StationNotOnRoute(station));
    }

    let boarding = train
        .tickets()
        .iter()
        .filter(|ticket| ticket.from_station() == station)
        .map(|ticket| ticket.seats())
        .sum();
    trace!(train = %train.id(), %station, boarding, "counted boarding passengers");
    Ok(boarding)
}
