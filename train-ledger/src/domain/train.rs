//! Trains and their ticket ledgers.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{DomainError, RouteIndex, Station, Ticket};

/// Identifier of a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainId(pub u32);

impl fmt::Display for TrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A train: an ordered route, a seat capacity, a departure time, and the
/// ledger of tickets booked against it.
///
/// Invariants are enforced at construction and attachment time:
///
/// - the route is non-empty and duplicate-free,
/// - the seat count is positive,
/// - every ticket's endpoints resolve on the route with the boarding
///   station strictly before the destination.
///
/// The departure time is a wall-clock time of day; dates and timezones are
/// not modeled.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use train_ledger::domain::{Passenger, Station, Ticket, Train, TrainId};
///
/// let mut train = Train::new(
///     TrainId(1),
///     vec![Station::KingsCross, Station::York, Station::Edinburgh],
///     120,
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// let ticket = Ticket::new(Station::KingsCross, Station::York, vec![Passenger::new(34)]).unwrap();
/// train.add_ticket(ticket).unwrap();
/// assert_eq!(train.tickets().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Train {
    id: TrainId,
    route: Vec<Station>,
    total_seats: u32,
    departure: NaiveTime,
    tickets: Vec<Ticket>,
}

impl Train {
    /// Creates a train with an empty ticket ledger.
    pub fn new(
        id: TrainId,
        route: Vec<Station>,
        total_seats: u32,
        departure: NaiveTime,
    ) -> Result<Self, DomainError> {
        if route.is_empty() {
            return Err(DomainError::EmptyRoute);
        }
        let mut seen = HashSet::new();
        for &station in &route {
            if !seen.insert(station) {
                return Err(DomainError::DuplicateStation(station));
            }
        }
        if total_seats == 0 {
            return Err(DomainError::NoSeats);
        }
        Ok(Self {
            id,
            route,
            total_seats,
            departure,
            tickets: Vec::new(),
        })
    }

    /// Attaches a booked ticket to this train's ledger.
    ///
    /// Fails if either endpoint is not on the route, or if the boarding
    /// station is not strictly before the destination.
    pub fn add_ticket(&mut self, ticket: Ticket) -> Result<(), DomainError> {
        let index = self.route_index();
        let from = index
            .position(ticket.from_station())
            .map_err(|e| DomainError::StationNotOnRoute(e.station))?;
        let to = index
            .position(ticket.to_station())
            .map_err(|e| DomainError::StationNotOnRoute(e.station))?;
        if from >= to {
            return Err(DomainError::InvalidTicketSpan {
                from: ticket.from_station(),
                to: ticket.to_station(),
            });
        }
        self.tickets.push(ticket);
        Ok(())
    }

    /// The train's identifier.
    pub fn id(&self) -> TrainId {
        self.id
    }

    /// The ordered route of stations.
    pub fn route(&self) -> &[Station] {
        &self.route
    }

    /// Total seat capacity.
    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    /// Wall-clock departure time from the first station.
    pub fn departure(&self) -> NaiveTime {
        self.departure
    }

    /// The booked tickets, in attachment order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Builds the station-to-position lookup table for this route.
    pub fn route_index(&self) -> RouteIndex {
        RouteIndex::new(&self.route)
    }
}
