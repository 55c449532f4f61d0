//! Oldest passenger on a train.

use crate::domain::Train;

/// Returns the age of the oldest passenger travelling on `train`.
///
/// Scans every ticket's passenger list. A train with no tickets, or whose
/// tickets carry no passengers, answers 0; absence of travelers is a valid
/// state, not an error.
pub fn oldest_age(train: &Train) -> u32 {
    train
        .tickets()
        .iter()
        .flat_map(|ticket| ticket.passengers())
        .map(|passenger| passenger.age())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Passenger, Station, Ticket, TrainId};
    use chrono::NaiveTime;

    fn empty_train() -> Train {
        Train::new(
            TrainId(9),
            vec![Station::Victoria, Station::Cambridge],
            30,
            NaiveTime::from_hms_opt(6, 45, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn empty_ledger_answers_zero() {
        assert_eq!(oldest_age(&empty_train()), 0);
    }

    #[test]
    fn ticket_without_passengers_answers_zero() {
        let mut train = empty_train();
        train
            .add_ticket(Ticket::new(Station::Victoria, Station::Cambridge, vec![]).unwrap())
            .unwrap();
        assert_eq!(oldest_age(&train), 0);
    }

    #[test]
    fn maximum_across_tickets() {
        let mut train = empty_train();
        train
            .add_ticket(
                Ticket::new(
                    Station::Victoria,
                    Station::Cambridge,
                    vec![Passenger::new(5), Passenger::new(40)],
                )
                .unwrap(),
            )
            .unwrap();
        train
            .add_ticket(
                Ticket::new(Station::Victoria, Station::Cambridge, vec![Passenger::new(21)])
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(oldest_age(&train), 40);
    }

    #[test]
    fn newborn_is_a_valid_oldest() {
        let mut train = empty_train();
        train
            .add_ticket(
                Ticket::new(Station::Victoria, Station::Cambridge, vec![Passenger::new(0)])
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(oldest_age(&train), 0);
    }
}
