//! In-memory reference store.
//!
//! A mutex-guarded store implementing both the snapshot and commit
//! seams. Reads clone; the commit runs its precondition checks and both
//! writes inside one critical section, which satisfies the atomic
//! conditional-commit contract for in-process use. Linear scans keep it
//! suitable for tests and small deployments only.

use std::sync::{Mutex, PoisonError};

use crate::rider::RiderStatus;
use crate::{Order, OrderStatus, Restaurant, Rider};

use super::{AssignmentCommitter, CommitError, SnapshotStore};

#[derive(Debug, Default)]
struct Inner {
    restaurants: Vec<Restaurant>,
    riders: Vec<Rider>,
    orders: Vec<Order>,
}

/// Thread-safe in-memory store over interior vectors.
///
/// Iteration order is insertion order, which makes tie-breaks
/// deterministic in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with snapshots.
    #[must_use]
    pub fn with_entities(
        restaurants: impl IntoIterator<Item = Restaurant>,
        riders: impl IntoIterator<Item = Rider>,
        orders: impl IntoIterator<Item = Order>,
    ) -> Self {
        Self {
            inner: Mutex::new(Inner {
                restaurants: restaurants.into_iter().collect(),
                riders: riders.into_iter().collect(),
                orders: orders.into_iter().collect(),
            }),
        }
    }

    /// Insert a restaurant snapshot.
    pub fn add_restaurant(&self, restaurant: Restaurant) {
        self.lock().restaurants.push(restaurant);
    }

    /// Insert a rider snapshot.
    pub fn add_rider(&self, rider: Rider) {
        self.lock().riders.push(rider);
    }

    /// Insert an order snapshot.
    pub fn add_order(&self, order: Order) {
        self.lock().orders.push(order);
    }

    /// Fetch one rider snapshot by id.
    #[must_use]
    pub fn rider(&self, id: u64) -> Option<Rider> {
        self.lock().riders.iter().find(|r| r.id == id).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // A poisoned mutex means a writer panicked mid-update; the data
        // is still structurally sound vectors, so recover the guard.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SnapshotStore for MemoryStore {
    fn restaurant(&self, id: u64) -> Option<Restaurant> {
        self.lock().restaurants.iter().find(|r| r.id == id).cloned()
    }

    fn order(&self, id: u64) -> Option<Order> {
        self.lock().orders.iter().find(|o| o.id == id).cloned()
    }

    fn restaurants(&self) -> Box<dyn Iterator<Item = Restaurant> + Send + '_> {
        let snapshot: Vec<Restaurant> = self.lock().restaurants.clone();
        Box::new(snapshot.into_iter())
    }

    fn riders(&self) -> Box<dyn Iterator<Item = Rider> + Send + '_> {
        let snapshot: Vec<Rider> = self.lock().riders.clone();
        Box::new(snapshot.into_iter())
    }
}

impl AssignmentCommitter for MemoryStore {
    fn commit_assignment(&self, order_id: u64, rider_id: u64) -> Result<(), CommitError> {
        let mut inner = self.lock();

        let order_assignable = inner
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .is_some_and(|o| o.status.is_assignable());
        if !order_assignable {
            return Err(CommitError::OrderNotAssignable(order_id));
        }

        let rider_available = inner
            .riders
            .iter()
            .find(|r| r.id == rider_id)
            .is_some_and(Rider::is_available);
        if !rider_available {
            return Err(CommitError::RiderNoLongerAvailable(rider_id));
        }

        for rider in &mut inner.riders {
            if rider.id == rider_id {
                rider.status = RiderStatus::Busy;
            }
        }
        for order in &mut inner.orders {
            if order.id == order_id {
                order.status = OrderStatus::Preparing;
                order.rider_id = Some(rider_id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use rstest::rstest;

    fn origin() -> Coord<f64> {
        Coord { x: 0.0, y: 0.0 }
    }

    fn available_rider(id: u64) -> Rider {
        Rider::new(id, "Asha", origin(), RiderStatus::Available, "+91-98xxxx")
    }

    fn accepted_order(id: u64) -> Order {
        Order::new(id, 1, origin(), OrderStatus::Accepted)
    }

    #[rstest]
    fn commit_marks_both_sides() {
        let store = MemoryStore::new();
        store.add_rider(available_rider(1));
        store.add_order(accepted_order(10));

        store
            .commit_assignment(10, 1)
            .expect("commit against a fresh store succeeds");

        let rider = store.rider(1).expect("rider 1 exists");
        assert_eq!(rider.status, RiderStatus::Busy);
        let order = store.order(10).expect("order 10 exists");
        assert_eq!(order.status, OrderStatus::Preparing);
        assert_eq!(order.rider_id, Some(1));
    }

    #[rstest]
    fn second_commit_for_the_same_rider_loses() {
        let store = MemoryStore::new();
        store.add_rider(available_rider(1));
        store.add_order(accepted_order(10));
        store.add_order(accepted_order(11));

        assert_eq!(store.commit_assignment(10, 1), Ok(()));
        assert_eq!(
            store.commit_assignment(11, 1),
            Err(CommitError::RiderNoLongerAvailable(1))
        );
        // The losing order is untouched and can be re-dispatched.
        let order = store.order(11).expect("order 11 exists");
        assert_eq!(order.status, OrderStatus::Accepted);
        assert_eq!(order.rider_id, None);
    }

    #[rstest]
    #[case(OrderStatus::Placed)]
    #[case(OrderStatus::Delivered)]
    #[case(OrderStatus::Cancelled)]
    fn commit_rejects_unassignable_orders(#[case] status: OrderStatus) {
        let store = MemoryStore::new();
        store.add_rider(available_rider(1));
        store.add_order(Order::new(10, 1, origin(), status));

        assert_eq!(
            store.commit_assignment(10, 1),
            Err(CommitError::OrderNotAssignable(10))
        );
        let rider = store.rider(1).expect("rider 1 exists");
        assert_eq!(rider.status, RiderStatus::Available);
    }

    #[rstest]
    fn commit_rejects_unknown_rider() {
        let store = MemoryStore::new();
        store.add_order(accepted_order(10));
        assert_eq!(
            store.commit_assignment(10, 99),
            Err(CommitError::RiderNoLongerAvailable(99))
        );
    }

    #[rstest]
    fn commit_rejects_unknown_order() {
        let store = MemoryStore::new();
        store.add_rider(available_rider(1));
        assert_eq!(
            store.commit_assignment(42, 1),
            Err(CommitError::OrderNotAssignable(42))
        );
    }

    #[rstest]
    fn snapshots_are_copies_not_views() {
        let store = MemoryStore::new();
        store.add_rider(available_rider(1));
        let before: Vec<Rider> = store.riders().collect();
        store.add_order(accepted_order(10));
        store
            .commit_assignment(10, 1)
            .expect("commit against a fresh store succeeds");
        assert_eq!(before.first().map(|r| r.status), Some(RiderStatus::Available));
    }
}
