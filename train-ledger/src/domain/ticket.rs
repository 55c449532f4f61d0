//! Tickets and passengers.

use super::Station;

/// A passenger travelling on a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passenger {
    age: u32,
}

impl Passenger {
    /// Creates a passenger with the given age.
    pub fn new(age: u32) -> Self {
        Self { age }
    }

    /// Returns the passenger's age in years.
    pub fn age(&self) -> u32 {
        self.age
    }
}

/// A ticket booked over a sub-range of a train's route.
///
/// A ticket runs from `from` to `to` and carries an ordered list of
/// passengers; it consumes one seat per passenger. The endpoints must be
/// distinct; their positions on the route are checked when the ticket is
/// attached to a train via [`Train::add_ticket`](super::Train::add_ticket).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    from: Station,
    to: Station,
    passengers: Vec<Passenger>,
}

impl Ticket {
    /// Creates a ticket from `from` to `to` carrying `passengers`.
    ///
    /// Returns `None` if the endpoints are the same station.
    pub fn new(from: Station, to: Station, passengers: Vec<Passenger>) -> Option<Self> {
        if from == to {
            return None;
        }
        Some(Self {
            from,
            to,
            passengers,
        })
    }

    /// The boarding station.
    pub fn from_station(&self) -> Station {
        self.from
    }

    /// The alighting station.
    pub fn to_station(&self) -> Station {
        self.to
    }

    /// The passengers on the ticket, in booking order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Seats consumed by this ticket (one per passenger).
    pub fn seats(&self) -> usize {
        self.passengers.len()
    }
}
