//! Seat availability between two stations.

use tracing::debug;

use crate::domain::{Station, Train};

use super::QueryError;

/// Computes the seats remaining on `train` between `from` and `to`.
///
/// A booked ticket counts against the queried range only when its whole
/// span lies inside the range: `ticket_from >= from` and `ticket_to <= to`
/// by route position. Tickets that merely cross a boundary of the range do
/// not consume a seat for it. The result is `total_seats` minus the
/// passenger count of all contained tickets, and can go negative when
/// contained bookings exceed capacity; this is a capacity-minus-bookings
/// approximation, not per-seat assignment tracking.
///
/// Fails with [`QueryError::InvalidRoute`] if either query station is not
/// on the route.
///
/// # Examples
///
/// ```
/// use chrono::NaiveTime;
/// use train_ledger::domain::{Passenger, Station, Ticket, Train, TrainId};
/// use train_ledger::queries::available_seats;
///
/// let mut train = Train::new(
///     TrainId(1),
///     vec![Station::Euston, Station::Leeds, Station::York, Station::Newcastle],
///     10,
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
/// )
/// .unwrap();
/// let two = vec![Passenger::new(30), Passenger::new(31)];
/// train.add_ticket(Ticket::new(Station::Euston, Station::York, two).unwrap()).unwrap();
///
/// // The Euston→York ticket is contained in Euston→Newcastle.
/// assert_eq!(available_seats(&train, Station::Euston, Station::Newcastle).unwrap(), 8);
/// // ...but not in Leeds→Newcastle.
/// assert_eq!(available_seats(&train, Station::Leeds, Station::Newcastle).unwrap(), 10);
/// ```
pub fn available_seats(train: &Train, from: Station, to: Station) -> Result<i64, QueryError> {
    let index = train.route_index();
    let from_index = index
        .position(from)
        .map_err(|_| QueryError::InvalidRoute { from, to })?;
    let to_index = index
        .position(to)
        .map_err(|_| QueryError::InvalidRoute { from, to })?;

    let mut booked: i64 = 0;
    for ticket in train.tickets() {
        // Endpoints always resolve: add_ticket validated them against the route.
        let ticket_from = index.position(ticket.from_station())?;
        let ticket_to = index.position(ticket.to_station())?;
        if ticket_from >= from_index && ticket_to <= to_index {
            booked += ticket.seats() as i64;
        }
    }

    let available = i64::from(train.total_seats()) - booked;
    debug!(
        train = %train.id(),
        %from,
        %to,
        booked,
        available,
        "computed seat availability"
    );
    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Passenger, Ticket, TrainId};
    use chrono::NaiveTime;

    fn passengers(n: usize) -> Vec<Passenger> {
        (0..n).map(|i| Passenger::new(20 + i as u32)).collect()
    }

    /// Route A→B→C→D from the worked example: capacity 10,
    /// Ticket1 A→C with 2 passengers, Ticket2 B→D with 3.
    fn example_train() -> Train {
        let mut train = Train::new(
            TrainId(1),
            vec![
                Station::Euston,
                Station::Leeds,
                Station::York,
                Station::Newcastle,
            ],
            10,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        )
        .unwrap();
        train
            .add_ticket(Ticket::new(Station::Euston, Station::York, passengers(2)).unwrap())
            .unwrap();
        train
            .add_ticket(Ticket::new(Station::Leeds, Station::Newcastle, passengers(3)).unwrap())
            .unwrap();
        train
    }

    #[test]
    fn contained_tickets_reduce_availability() {
        let train = example_train();
        // Ticket2's span B→D is not contained in A→C.
        assert_eq!(
            available_seats(&train, Station::Euston, Station::York).unwrap(),
            8
        );
        // Both tickets are contained in A→D.
        assert_eq!(
            available_seats(&train, Station::Euston, Station::Newcastle).unwrap(),
            5
        );
    }

    #[test]
    fn boundary_crossing_tickets_do_not_count() {
        let train = example_train();
        // B→C contains neither A→C nor B→D.
        assert_eq!(
            available_seats(&train, Station::Leeds, Station::York).unwrap(),
            10
        );
    }

    #[test]
    fn same_station_range_counts_nothing() {
        let train = example_train();
        // from == to forces contained tickets to start and end there, and
        // no valid ticket does.
        assert_eq!(
            available_seats(&train, Station::Leeds, Station::Leeds).unwrap(),
            10
        );
    }

    #[test]
    fn empty_ledger_returns_capacity() {
        let train = Train::new(
            TrainId(2),
            vec![Station::Euston, Station::Leeds],
            42,
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        )
        .unwrap();
        assert_eq!(
            available_seats(&train, Station::Euston, Station::Leeds).unwrap(),
            42
        );
    }

    #[test]
    fn can_go_negative_when_bookings_exceed_capacity() {
        let mut train = Train::new(
            TrainId(3),
            vec![Station::Euston, Station::Leeds],
            2,
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        )
        .unwrap();
        train
            .add_ticket(Ticket::new(Station::Euston, Station::Leeds, passengers(5)).unwrap())
            .unwrap();
        assert_eq!(
            available_seats(&train, Station::Euston, Station::Leeds).unwrap(),
            -3
        );
    }

    #[test]
    fn unresolvable_station_fails() {
        let train = example_train();
        let err = available_seats(&train, Station::Euston, Station::Victoria).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidRoute {
                from: Station::Euston,
                to: Station::Victoria,
            }
        );
        let err = available_seats(&train, Station::Victoria, Station::Paddington).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidRoute {
                from: Station::Victoria,
                to: Station::Paddington,
            }
        );
    }
}
