//! Station-to-position resolution within a train's route.

use std::collections::HashMap;

use super::Station;

/// Error returned when a station does not appear on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("station {station} is not on the route")]
pub struct StationNotOnRoute {
    /// The station that failed to resolve.
    pub station: Station,
}

/// Lookup table from station to its zero-based position on a route.
///
/// Routes are duplicate-free (enforced by [`Train`](super::Train)
/// construction), so the mapping is injective. The table is built once per
/// query rather than per lookup.
///
/// # Examples
///
/// ```
/// use train_ledger::domain::{RouteIndex, Station};
///
/// let index = RouteIndex::new(&[Station::Euston, Station::York, Station::Edinburgh]);
/// assert_eq!(index.position(Station::York).unwrap(), 1);
/// assert!(index.position(Station::Paddington).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RouteIndex {
    positions: HashMap<Station, usize>,
}

impl RouteIndex {
    /// Builds the index from a route slice.
    ///
    /// If the slice contains duplicates, the last occurrence wins; callers
    /// are expected to pass validated routes.
    pub fn new(route: &[Station]) -> Self {
        let positions = route
            .iter()
            .enumerate()
            .map(|(i, &station)| (station, i))
            .collect();
        Self { positions }
    }

    /// Resolves a station to its zero-based position on the route.
    pub fn position(&self, station: Station) -> Result<usize, StationNotOnRoute> {
        self.positions
            .get(&station)
            .copied()
            .ok_or(StationNotOnRoute { station })
    }

    /// Returns true if the station appears on the route.
    pub fn contains(&self, station: Station) -> bool {
        self.positions.contains_key(&station)
    }

    /// Number of stations on the route.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the route is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
