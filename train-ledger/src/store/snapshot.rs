//! JSON snapshot decoding.
//!
//! Trains and their ledgers arrive from the persistence layer as a JSON
//! snapshot: a list of trains, each with a route of station codes, a seat
//! count, an "HH:MM" departure time, and booked tickets. The wire structs
//! here mirror that shape; decoding converts them into validated domain
//! values and reports the first violation found.

use std::fs;
use std::path::Path;

use chrono::NaiveTime;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{DomainError, Passenger, Station, Ticket, Train, TrainId};

use super::InMemoryTrains;

/// Errors raised while loading a train snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Snapshot file could not be read
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not well-formed JSON for the expected shape
    #[error("failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A departure time is not minute-granular "HH:MM"
    #[error("train {id}: invalid departure time {value:?}, expected HH:MM")]
    Departure {
        /// Train the bad time belongs to.
        id: TrainId,
        /// The offending value.
        value: String,
    },

    /// A train or ticket violates a domain invariant
    #[error("train {id}: {source}")]
    Train {
        /// Train the violation belongs to.
        id: TrainId,
        /// The underlying domain error.
        source: DomainError,
    },
}

/// Wire shape of a train in the snapshot.
#[derive(Debug, Deserialize)]
struct RawTrain {
    id: TrainId,
    route: Vec<Station>,
    total_seats: u32,
    departure: String,
    #[serde(default)]
    tickets: Vec<RawTicket>,
}

/// Wire shape of a booked ticket.
#[derive(Debug, Deserialize)]
struct RawTicket {
    from: Station,
    to: Station,
    #[serde(default)]
    passenger_ages: Vec<u32>,
}

impl RawTrain {
    fn into_domain(self) -> Result<Train, SnapshotError> {
        let id = self.id;
        let departure = NaiveTime::parse_from_str(&self.departure, "%H:%M").map_err(|_| {
            SnapshotError::Departure {
                id,
                value: self.departure.clone(),
            }
        })?;

        let mut train = Train::new(id, self.route, self.total_seats, departure)
            .map_err(|source| SnapshotError::Train { id, source })?;

        for raw in self.tickets {
            let passengers = raw.passenger_ages.into_iter().map(Passenger::new).collect();
            let ticket =
                Ticket::new(raw.from, raw.to, passengers).ok_or_else(|| SnapshotError::Train {
                    id,
                    source: DomainError::InvalidTicketSpan {
                        from: raw.from,
                        to: raw.to,
                    },
                })?;
            train
                .add_ticket(ticket)
                .map_err(|source| SnapshotError::Train { id, source })?;
        }

        Ok(train)
    }
}

/// Parses a snapshot from its JSON text.
pub fn parse_snapshot(json: &str) -> Result<InMemoryTrains, SnapshotError> {
    let raw: Vec<RawTrain> = serde_json::from_str(json)?;

    let mut store = InMemoryTrains::new();
    for train in raw {
        store.insert(train.into_domain()?);
    }
    debug!(trains = store.len(), "loaded train snapshot");
    Ok(store)
}

/// Reads and parses a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<InMemoryTrains, SnapshotError> {
    let json = fs::read_to_string(path)?;
    parse_snapshot(&json)
}
