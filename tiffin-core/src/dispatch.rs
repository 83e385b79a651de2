//! Rider assignment seam: result type, error taxonomy, and the
//! `Dispatcher` trait implemented by assignment engines.

use thiserror::Error;

use crate::OrderStatus;

/// Outcome of a successful rider assignment.
///
/// The assignment is a decision, not a mutation: by the time the caller
/// sees it, the store has already committed the paired state changes
/// (order to [`OrderStatus::Preparing`], rider to busy) atomically.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Order the rider was assigned to.
    pub order_id: u64,
    /// Order state after the commit.
    pub order_status: OrderStatus,
    /// Chosen rider.
    pub rider_id: u64,
    /// Rider display name for customer messaging.
    pub rider_name: String,
    /// Rider contact phone for customer messaging.
    pub rider_phone: String,
    /// Straight-line rider-to-restaurant distance in kilometres.
    pub distance_km: f64,
    /// Estimated minutes until the rider reaches the restaurant.
    pub pickup_eta_minutes: u32,
}

/// Errors returned by [`Dispatcher::assign`].
///
/// The variants are distinct because callers must treat them
/// differently: [`NoCapacity`](Self::NoCapacity) is an expected business
/// outcome worth retrying after a delay, while the others indicate
/// upstream data or sequencing problems and must not be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// The order does not exist in the snapshot provider.
    #[error("order {0} not found")]
    OrderNotFound(u64),
    /// The order references a restaurant the snapshot provider does not
    /// know, which indicates a data-integrity problem upstream.
    #[error("restaurant {0} not found")]
    RestaurantNotFound(u64),
    /// No rider was in the available state at decision time.
    #[error("no riders available")]
    NoCapacity,
    /// The order is not in an assignable lifecycle state; a caller-side
    /// sequencing bug.
    #[error("order {order_id} is not assignable while {status}")]
    InvalidState {
        /// Order the caller attempted to dispatch.
        order_id: u64,
        /// Lifecycle state the order was found in.
        status: OrderStatus,
    },
}

impl DispatchError {
    /// Whether the caller may retry the dispatch later.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NoCapacity)
    }
}

/// Assign the nearest available rider to an order.
///
/// Implementations must be `Send + Sync` and perform no retries of
/// their own beyond the conditional-commit re-selection described in
/// the store seam; retry policy belongs to the caller.
pub trait Dispatcher: Send + Sync {
    /// Assign a rider to `order_id`, producing the committed
    /// [`Assignment`].
    ///
    /// # Errors
    /// Returns a [`DispatchError`] naming the failed precondition or the
    /// absence of available riders.
    fn assign(&self, order_id: u64) -> Result<Assignment, DispatchError>;
}
