//! Order lifecycle snapshot types.

use geo::Coord;
use std::fmt;

/// Lifecycle state of an order.
///
/// Dispatch only runs against orders in [`Accepted`](Self::Accepted) or
/// [`Preparing`](Self::Preparing); assignment moves an accepted order to
/// `Preparing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderStatus {
    /// Placed by the customer, awaiting restaurant acceptance.
    Placed,
    /// Accepted by the restaurant, awaiting a rider.
    Accepted,
    /// Being prepared; a rider is assigned.
    Preparing,
    /// Collected from the restaurant.
    PickedUp,
    /// Handed to the customer.
    Delivered,
    /// Abandoned at some point in the lifecycle.
    Cancelled,
}

impl OrderStatus {
    /// Whether a rider may be assigned in this state.
    ///
    /// `Preparing` stays assignable so that a failed or lost assignment
    /// can be retried without a state rollback.
    #[must_use]
    pub const fn is_assignable(self) -> bool {
        matches!(self, Self::Accepted | Self::Preparing)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Placed => "placed",
            Self::Accepted => "accepted",
            Self::Preparing => "preparing",
            Self::PickedUp => "picked-up",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}

/// Immutable snapshot of an order as seen by the dispatch engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    /// Unique identifier.
    pub id: u64,
    /// Restaurant the order was placed with.
    pub restaurant_id: u64,
    /// Customer delivery destination.
    pub dropoff: Coord<f64>,
    /// Lifecycle state at snapshot time.
    pub status: OrderStatus,
    /// Rider assigned so far, if any.
    pub rider_id: Option<u64>,
}

impl Order {
    /// Construct an unassigned order snapshot.
    #[must_use]
    pub const fn new(id: u64, restaurant_id: u64, dropoff: Coord<f64>, status: OrderStatus) -> Self {
        Self {
            id,
            restaurant_id,
            dropoff,
            status,
            rider_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OrderStatus::Placed, false)]
    #[case(OrderStatus::Accepted, true)]
    #[case(OrderStatus::Preparing, true)]
    #[case(OrderStatus::PickedUp, false)]
    #[case(OrderStatus::Delivered, false)]
    #[case(OrderStatus::Cancelled, false)]
    fn assignability_follows_the_lifecycle(#[case] status: OrderStatus, #[case] expected: bool) {
        assert_eq!(status.is_assignable(), expected);
    }

    #[rstest]
    fn new_orders_carry_no_rider() {
        let order = Order::new(7, 1, Coord { x: 0.0, y: 0.0 }, OrderStatus::Accepted);
        assert_eq!(order.rider_id, None);
    }
}
