//! Analytical queries over a train ticket ledger.
//!
//! Each train carries an ordered route of stations, a seat capacity, a
//! departure time, and a ledger of tickets booked against sub-ranges of
//! that route. This crate answers read-only questions over that data:
//! seats remaining between two stations, passengers boarding at a station,
//! the oldest traveler on a train, and which trains pass a station within
//! a time window.

pub mod domain;
pub mod queries;
pub mod store;
