//! Domain types for the ticket ledger.
//!
//! This module contains the core domain model: stations, routes, tickets,
//! and trains. All types enforce their invariants at construction time, so
//! query code that receives these types can trust their validity.

mod error;
mod route;
mod station;
mod ticket;
mod train;

pub use error::DomainError;
pub use route::{RouteIndex, StationNotOnRoute};
pub use station::Station;
pub use ticket::{Passenger, Ticket};
pub use train::{Train, TrainId};
