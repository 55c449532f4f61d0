//! Domain error types.
//!
//! These errors represent validation failures raised while constructing
//! trains and attaching tickets. They are distinct from query errors.

use super::Station;

/// Domain-level errors for train and ticket validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A train's route must call at least one station
    #[error("route must have at least one station")]
    EmptyRoute,

    /// A station appears more than once on a route
    #[error("station {0} appears more than once on the route")]
    DuplicateStation(Station),

    /// A train must have a positive seat count
    #[error("train must have at least one seat")]
    NoSeats,

    /// A ticket endpoint does not appear on the train's route
    #[error("ticket endpoint {0} is not on the train's route")]
    StationNotOnRoute(Station),

    /// A ticket's boarding station is not strictly before its destination
    #[error("ticket from {from} to {to} runs against the route direction")]
    InvalidTicketSpan {
        /// Boarding station.
        from: Station,
        /// Alighting station.
        to: Station,
    },
}
