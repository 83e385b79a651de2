//! Test-only snapshot builders used by unit and behaviour tests.
//!
//! Downstream crates enable the `test-support` cargo feature in their
//! dev-dependencies to reuse these fixtures.

use geo::Coord;

use crate::{MenuItem, Order, OrderStatus, Restaurant, Rider, RiderStatus};

/// An available menu item in `category` with the given preparation time.
///
/// # Panics
/// Panics when the fixed fixture price is rejected, which cannot happen.
#[must_use]
pub fn menu_item(id: u64, category: &str, prep_minutes: u32) -> MenuItem {
    MenuItem::new(id, format!("item-{id}"), 25_000, category, true, prep_minutes)
        .unwrap_or_else(|err| panic!("fixture menu item is valid: {err}"))
}

/// An open restaurant at `location` with a 10 km radius and rating 4.0.
///
/// # Panics
/// Panics when the fixed fixture fields are rejected, which cannot
/// happen.
#[must_use]
pub fn restaurant(id: u64, location: Coord<f64>, menu: Vec<MenuItem>) -> Restaurant {
    Restaurant::new(
        id,
        format!("restaurant-{id}"),
        location,
        true,
        10.0,
        20,
        4.0,
        menu,
    )
    .unwrap_or_else(|err| panic!("fixture restaurant is valid: {err}"))
}

/// An available rider at `location`.
#[must_use]
pub fn rider(id: u64, location: Coord<f64>) -> Rider {
    Rider::new(
        id,
        format!("rider-{id}"),
        location,
        RiderStatus::Available,
        format!("+91-90000{id:05}"),
    )
}

/// An accepted order against `restaurant_id`, dropped off at the origin.
#[must_use]
pub const fn accepted_order(id: u64, restaurant_id: u64) -> Order {
    Order::new(
        id,
        restaurant_id,
        Coord { x: 0.0, y: 0.0 },
        OrderStatus::Accepted,
    )
}
