//! Restaurant and menu snapshot types.

use geo::Coord;
use thiserror::Error;

/// A single menu entry offered by a [`Restaurant`].
///
/// Prices are fixed-point cents so monetary values never pass through
/// floating point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuItem {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Price in cents.
    pub price_cents: u32,
    /// Category tag used for discovery, e.g. `"biryani"`.
    pub category: String,
    /// Whether the item can currently be ordered.
    pub available: bool,
    /// Preparation time in minutes.
    pub prep_minutes: u32,
}

/// Errors returned by [`MenuItem::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuItemError {
    /// The price was zero.
    #[error("menu item price must be positive")]
    ZeroPrice,
}

impl MenuItem {
    /// Validates and constructs a [`MenuItem`].
    ///
    /// # Errors
    /// Returns [`MenuItemError::ZeroPrice`] when `price_cents` is zero.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        price_cents: u32,
        category: impl Into<String>,
        available: bool,
        prep_minutes: u32,
    ) -> Result<Self, MenuItemError> {
        if price_cents == 0 {
            return Err(MenuItemError::ZeroPrice);
        }
        Ok(Self {
            id,
            name: name.into(),
            price_cents,
            category: category.into(),
            available,
            prep_minutes,
        })
    }
}

/// Immutable snapshot of a restaurant eligible for delivery.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tiffin_core::Restaurant;
///
/// # fn main() -> Result<(), tiffin_core::RestaurantError> {
/// let place = Restaurant::new(
///     1,
///     "Shalimar",
///     Coord { x: 72.8800, y: 19.0850 },
///     true,
///     10.0,
///     20,
///     4.4,
///     Vec::new(),
/// )?;
/// assert!(place.open);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restaurant {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Whether the restaurant currently accepts orders.
    pub open: bool,
    /// Maximum delivery distance in kilometres.
    pub delivery_radius_km: f64,
    /// Average preparation time across the menu, in minutes.
    pub avg_prep_minutes: u32,
    /// Quality rating in `0.0..=5.0`.
    pub rating: f32,
    /// Current menu snapshot.
    pub menu: Vec<MenuItem>,
}

/// Errors returned by [`Restaurant::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RestaurantError {
    /// The delivery radius was zero, negative, or not finite.
    #[error("delivery radius must be a positive number of kilometres")]
    NonPositiveRadius,
    /// The average preparation time was zero.
    #[error("average preparation time must be positive")]
    NonPositivePrepTime,
    /// The rating fell outside `0.0..=5.0`.
    #[error("rating {0} is outside 0.0..=5.0")]
    RatingOutOfRange(f32),
}

impl Restaurant {
    /// Validates and constructs a [`Restaurant`].
    ///
    /// Coordinate range validation is the caller's responsibility; NaN
    /// coordinates propagate through downstream distance math.
    ///
    /// # Errors
    /// Returns a [`RestaurantError`] when the delivery radius is not a
    /// positive finite number, the average preparation time is zero, or
    /// the rating is outside `0.0..=5.0`.
    #[expect(
        clippy::too_many_arguments,
        reason = "snapshot constructor mirrors the persisted record"
    )]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        location: Coord<f64>,
        open: bool,
        delivery_radius_km: f64,
        avg_prep_minutes: u32,
        rating: f32,
        menu: Vec<MenuItem>,
    ) -> Result<Self, RestaurantError> {
        if !(delivery_radius_km.is_finite() && delivery_radius_km > 0.0) {
            return Err(RestaurantError::NonPositiveRadius);
        }
        if avg_prep_minutes == 0 {
            return Err(RestaurantError::NonPositivePrepTime);
        }
        if !(0.0..=5.0).contains(&rating) {
            return Err(RestaurantError::RatingOutOfRange(rating));
        }
        Ok(Self {
            id,
            name: name.into(),
            location,
            open,
            delivery_radius_km,
            avg_prep_minutes,
            rating,
            menu,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn build(radius: f64, prep: u32, rating: f32) -> Result<Restaurant, RestaurantError> {
        Restaurant::new(
            1,
            "Test Kitchen",
            Coord { x: 0.0, y: 0.0 },
            true,
            radius,
            prep,
            rating,
            Vec::new(),
        )
    }

    #[rstest]
    fn accepts_valid_snapshot() {
        assert!(build(5.0, 15, 4.2).is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(f64::NAN)]
    fn rejects_non_positive_radius(#[case] radius: f64) {
        assert_eq!(
            build(radius, 15, 4.2),
            Err(RestaurantError::NonPositiveRadius)
        );
    }

    #[rstest]
    fn rejects_zero_prep_time() {
        assert_eq!(build(5.0, 0, 4.2), Err(RestaurantError::NonPositivePrepTime));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(5.1)]
    fn rejects_out_of_range_rating(#[case] rating: f32) {
        assert_eq!(
            build(5.0, 15, rating),
            Err(RestaurantError::RatingOutOfRange(rating))
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(5.0)]
    fn accepts_boundary_ratings(#[case] rating: f32) {
        assert!(build(5.0, 15, rating).is_ok());
    }

    #[rstest]
    fn menu_item_rejects_zero_price() {
        let result = MenuItem::new(1, "Veg Biryani", 0, "biryani", true, 15);
        assert_eq!(result, Err(MenuItemError::ZeroPrice));
    }
}
