//! Matching trains to a station and time window.

use chrono::{Duration, NaiveTime};
use tracing::debug;

use crate::domain::{Station, TrainId};
use crate::store::TrainProvider;

/// Estimated time at which a train is present at any station on its route.
///
/// The model is a fixed one-hour offset from departure, independent of the
/// station's position: no per-segment schedule is modeled anywhere in the
/// data, so a finer estimate would be invented precision. Addition wraps at
/// midnight, but callers are assumed to stay within one day.
pub fn arrival_estimate(departure: NaiveTime) -> NaiveTime {
    departure + Duration::hours(1)
}

/// Finds the trains estimated to be at `station` within `[start, end]`.
///
/// Scans the provider's full snapshot. A train matches when its route
/// includes the station and its [`arrival_estimate`] falls inside the
/// window, boundaries included. The window is normalized first, so a
/// reversed `(end, start)` pair matches the same trains. Result order
/// follows the provider's iteration order.
pub fn trains_at<P: TrainProvider>(
    provider: &P,
    station: Station,
    start: NaiveTime,
    end: NaiveTime,
) -> Vec<TrainId> {
    let (window_start, window_end) = (start.min(end), start.max(end));

    let mut matches = Vec::new();
    for train in provider.all_trains() {
        if !train.route_index().contains(station) {
            continue;
        }
        let arrival = arrival_estimate(train.departure());
        if arrival >= window_start && arrival <= window_end {
            matches.push(train.id());
        }
    }
    debug!(
        %station,
        %window_start,
        %window_end,
        matched = matches.len(),
        "matched trains in time window"
    );
    matches
}
