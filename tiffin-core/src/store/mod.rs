//! Data access seams for snapshots and assignment commits.
//!
//! `SnapshotStore` is the read side: it hands engines immutable copies
//! of restaurants, riders, and orders as of fetch time. The engines make
//! no freshness guarantee beyond that.
//!
//! `AssignmentCommitter` is the write side, and carries the single most
//! important correctness contract in the system: marking the rider busy
//! and the order preparing must be one conditional, atomic operation.
//! Two concurrent dispatches can both read the same rider as available;
//! the commit is where exactly one of them is allowed to win.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::{Order, Restaurant, Rider};

/// Read-only access to entity snapshots.
///
/// Full-collection reads are acceptable; pre-filtering by availability
/// or open state is a store-side optimisation the engines must not rely
/// on. Iteration order is the store's insertion order and engines treat
/// it as the tie-break order, so it must be stable between calls.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tiffin_core::{MemoryStore, Rider, RiderStatus, SnapshotStore};
///
/// let store = MemoryStore::default();
/// store.add_rider(Rider::new(
///     1,
///     "Asha",
///     Coord { x: 72.88, y: 19.08 },
///     RiderStatus::Available,
///     "+91-98xxxx",
/// ));
/// assert_eq!(store.riders().count(), 1);
/// ```
pub trait SnapshotStore {
    /// Fetch one restaurant snapshot by id.
    fn restaurant(&self, id: u64) -> Option<Restaurant>;

    /// Fetch one order snapshot by id.
    fn order(&self, id: u64) -> Option<Order>;

    /// Iterate over all restaurant snapshots.
    fn restaurants(&self) -> Box<dyn Iterator<Item = Restaurant> + Send + '_>;

    /// Iterate over all rider snapshots.
    fn riders(&self) -> Box<dyn Iterator<Item = Rider> + Send + '_>;
}

/// Errors returned by [`AssignmentCommitter::commit_assignment`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitError {
    /// The rider left the available state between selection and commit.
    /// The dispatcher re-runs selection without this rider.
    #[error("rider {0} is no longer available")]
    RiderNoLongerAvailable(u64),
    /// The order left an assignable state between selection and commit.
    #[error("order {0} is no longer assignable")]
    OrderNotAssignable(u64),
}

/// Conditionally commit a rider assignment.
///
/// The commit must re-check both preconditions (rider available, order
/// assignable) and apply both state changes inside one atomic unit, so
/// that of two concurrent assignments to the same rider exactly one
/// succeeds and the loser re-selects instead of double-booking.
pub trait AssignmentCommitter {
    /// Atomically mark `rider_id` busy and `order_id` preparing.
    ///
    /// # Errors
    /// Returns a [`CommitError`] naming whichever precondition no longer
    /// holds; nothing is written in that case.
    fn commit_assignment(&self, order_id: u64, rider_id: u64) -> Result<(), CommitError>;
}
