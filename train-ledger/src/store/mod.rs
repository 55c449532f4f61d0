//! Train lookup collaborator.
//!
//! Trains and their ledgers are created and persisted elsewhere; the
//! queries only need to look them up. That capability is modeled as the
//! [`TrainProvider`] trait, injected rather than reached for globally, so
//! the query layer stays testable against in-memory fixtures.

mod snapshot;

pub use snapshot::{SnapshotError, load_snapshot, parse_snapshot};

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Train, TrainId};

/// Read-only access to the known trains.
///
/// Implementations hand out stable snapshots: a returned [`Train`] is
/// immutable for the duration of a query.
pub trait TrainProvider {
    /// Looks up a train by identifier.
    fn find_train(&self, id: TrainId) -> Option<Arc<Train>>;

    /// All known trains, in a stable iteration order.
    fn all_trains(&self) -> Vec<Arc<Train>>;
}

impl<T: TrainProvider + ?Sized> TrainProvider for &T {
    fn find_train(&self, id: TrainId) -> Option<Arc<Train>> {
        (**self).find_train(id)
    }

    fn all_trains(&self) -> Vec<Arc<Train>> {
        (**self).all_trains()
    }
}

/// In-memory train store.
///
/// Preserves insertion order for [`TrainProvider::all_trains`], which in
/// turn fixes the result order of window queries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTrains {
    trains: Vec<Arc<Train>>,
    by_id: HashMap<TrainId, usize>,
}

impl InMemoryTrains {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a train, replacing any train with the same identifier.
    pub fn insert(&mut self, train: Train) {
        let train = Arc::new(train);
        match self.by_id.get(&train.id()) {
            Some(&index) => self.trains[index] = train,
            None => {
                self.by_id.insert(train.id(), self.trains.len());
                self.trains.push(train);
            }
        }
    }

    /// Number of trains in the store.
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    /// Returns true if no trains are stored.
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }
}

impl TrainProvider for InMemoryTrains {
    fn find_train(&self, id: TrainId) -> Option<Arc<Train>> {
        self.by_id.get(&id).map(|&index| self.trains[index].clone())
    }

    fn all_trains(&self) -> Vec<Arc<Train>> {
        self.trains.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Station;
    use chrono::NaiveTime;

    fn train(id: u32) -> Train {
        Train::new(
            TrainId(id),
            vec![Station::Euston, Station::Leeds],
            10,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn find_by_id() {
        let mut store = InMemoryTrains::new();
        store.insert(train(1));
        store.insert(train(2));
        assert_eq!(store.find_train(TrainId(2)).unwrap().id(), TrainId(2));
        assert!(store.find_train(TrainId(3)).is_none());
    }

    #[test]
    fn all_trains_preserves_insertion_order() {
        let mut store = InMemoryTrains::new();
        for id in [4, 2, 9] {
            store.insert(train(id));
        }
        let ids: Vec<TrainId> = store.all_trains().iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![TrainId(4), TrainId(2), TrainId(9)]);
    }

    #[test]
    fn insert_replaces_same_id_in_place() {
        let mut store = InMemoryTrains::new();
        store.insert(train(1));
        store.insert(train(2));
        let replacement = Train::new(
            TrainId(1),
            vec![Station::Victoria, Station::Cambridge],
            99,
            NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
        )
        .unwrap();
        store.insert(replacement);
        assert_eq!(store.len(), 2);
        let first = store.all_trains()[0].clone();
        assert_eq!(first.id(), TrainId(1));
        assert_eq!(first.total_seats(), 99);
    }

    #[test]
    fn provider_works_through_references() {
        let mut store = InMemoryTrains::new();
        store.insert(train(1));
        let by_ref: &InMemoryTrains = &store;
        assert!(by_ref.find_train(TrainId(1)).is_some());
        assert_eq!(by_ref.all_trains().len(), 1);
    }
}
