//! Nearest-rider selection and the conditional-commit retry loop.

use std::collections::HashSet;

use tiffin_core::geo::distance_km;
use tiffin_core::{
    Assignment, AssignmentCommitter, CommitError, DeliveryEstimator, DispatchError, Dispatcher,
    OrderStatus, Rider, SnapshotStore,
};

/// Default [`Dispatcher`] over a combined snapshot and commit store.
///
/// Selection is a linear scan over the rider snapshot, O(n) distance
/// computations for n available riders, which is adequate into the low
/// thousands. A bounding-box pre-filter via
/// [`tiffin_core::geo::bounding_box`] is the intended extension point
/// beyond that scale.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tiffin_core::test_support::{accepted_order, restaurant, rider};
/// use tiffin_core::{Dispatcher, MemoryStore};
/// use tiffin_dispatch::NearestRiderDispatcher;
///
/// let store = MemoryStore::new();
/// store.add_restaurant(restaurant(1, Coord { x: 72.88, y: 19.08 }, Vec::new()));
/// store.add_rider(rider(5, Coord { x: 72.89, y: 19.09 }));
/// store.add_order(accepted_order(10, 1));
///
/// let dispatcher = NearestRiderDispatcher::new(store);
/// let assignment = dispatcher.assign(10).expect("one rider is available");
/// assert_eq!(assignment.rider_id, 5);
/// ```
pub struct NearestRiderDispatcher<S>
where
    S: SnapshotStore + AssignmentCommitter,
{
    store: S,
    estimator: DeliveryEstimator,
}

impl<S> NearestRiderDispatcher<S>
where
    S: SnapshotStore + AssignmentCommitter,
{
    /// Construct a dispatcher with the default delivery-time model.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_estimator(store, DeliveryEstimator::default())
    }

    /// Construct a dispatcher with an explicit delivery-time model.
    #[must_use]
    pub const fn with_estimator(store: S, estimator: DeliveryEstimator) -> Self {
        Self { store, estimator }
    }

    /// Access the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}

impl<S> Dispatcher for NearestRiderDispatcher<S>
where
    S: SnapshotStore + AssignmentCommitter + Send + Sync,
{
    fn assign(&self, order_id: u64) -> Result<Assignment, DispatchError> {
        let order = self
            .store
            .order(order_id)
            .ok_or(DispatchError::OrderNotFound(order_id))?;
        if !order.status.is_assignable() {
            return Err(DispatchError::InvalidState {
                order_id,
                status: order.status,
            });
        }
        let restaurant = self
            .store
            .restaurant(order.restaurant_id)
            .ok_or(DispatchError::RestaurantNotFound(order.restaurant_id))?;

        // One snapshot read; distances are computed once per candidate
        // and reused across commit retries.
        let candidates: Vec<(Rider, f64)> = self
            .store
            .riders()
            .filter(Rider::is_available)
            .map(|rider| {
                let distance = distance_km(rider.location, restaurant.location);
                (rider, distance)
            })
            .collect();

        let mut contested: HashSet<u64> = HashSet::new();
        loop {
            let Some((rider, distance)) = nearest(&candidates, &contested) else {
                return Err(DispatchError::NoCapacity);
            };
            match self.store.commit_assignment(order_id, rider.id) {
                Ok(()) => {
                    return Ok(Assignment {
                        order_id,
                        order_status: OrderStatus::Preparing,
                        rider_id: rider.id,
                        rider_name: rider.name.clone(),
                        rider_phone: rider.phone.clone(),
                        distance_km: distance,
                        pickup_eta_minutes: self.estimator.estimate_minutes(distance),
                    });
                }
                Err(CommitError::RiderNoLongerAvailable(rider_id)) => {
                    // Lost the rider to a concurrent assignment; re-run
                    // selection without it.
                    log::debug!(
                        "rider {rider_id} contested during assignment of order {order_id}; reselecting"
                    );
                    contested.insert(rider_id);
                }
                Err(CommitError::OrderNotAssignable(_)) => {
                    // The order moved concurrently; report the state the
                    // store holds now, not the stale snapshot.
                    let status = self
                        .store
                        .order(order_id)
                        .map(|current| current.status)
                        .ok_or(DispatchError::OrderNotFound(order_id))?;
                    return Err(DispatchError::InvalidState { order_id, status });
                }
            }
        }
    }
}

/// Minimum-distance candidate outside the contested set.
///
/// Ties are broken by stable input order: only a strictly smaller
/// distance displaces the incumbent, so the first rider encountered in
/// the snapshot wins. This is the documented tie-break policy, not an
/// accident of iteration.
fn nearest<'a>(
    candidates: &'a [(Rider, f64)],
    contested: &HashSet<u64>,
) -> Option<(&'a Rider, f64)> {
    let mut best: Option<(&'a Rider, f64)> = None;
    for (rider, distance) in candidates {
        if contested.contains(&rider.id) {
            continue;
        }
        let closer = best.is_none_or(|(_, best_distance)| *distance < best_distance);
        if closer {
            best = Some((rider, *distance));
        }
    }
    best
}
