//! Restaurant discovery seam: query, result, and the `Recommender`
//! trait implemented by ranking engines.

use geo::Coord;
use thiserror::Error;

use crate::MenuItem;

/// Parameters for a discovery request.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tiffin_core::RecommendationQuery;
///
/// # fn main() -> Result<(), tiffin_core::QueryError> {
/// let query = RecommendationQuery::new(
///     Coord { x: 72.8777, y: 19.0760 },
///     "biryani",
///     45,
/// )?;
/// assert_eq!(query.max_total_minutes, 45);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationQuery {
    /// Requester location, WGS84 (`x = longitude`, `y = latitude`).
    pub origin: Coord<f64>,
    /// Desired food category, matched exactly against menu items.
    pub category: String,
    /// Maximum acceptable preparation plus delivery time, in minutes.
    pub max_total_minutes: u32,
}

/// Errors returned by [`RecommendationQuery::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No category was supplied.
    #[error("query category must not be empty")]
    EmptyCategory,
    /// The time budget was zero.
    #[error("query time budget must be positive")]
    ZeroTimeBudget,
}

impl RecommendationQuery {
    /// Validates and constructs a [`RecommendationQuery`].
    ///
    /// Coordinate range validation is the caller's responsibility.
    ///
    /// # Errors
    /// Returns a [`QueryError`] when the category is empty or the time
    /// budget is zero.
    pub fn new(
        origin: Coord<f64>,
        category: impl Into<String>,
        max_total_minutes: u32,
    ) -> Result<Self, QueryError> {
        let query = Self {
            origin,
            category: category.into(),
            max_total_minutes,
        };
        if query.category.is_empty() {
            return Err(QueryError::EmptyCategory);
        }
        if query.max_total_minutes == 0 {
            return Err(QueryError::ZeroTimeBudget);
        }
        Ok(query)
    }
}

/// A ranked discovery result for one restaurant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Restaurant identifier.
    pub restaurant_id: u64,
    /// Restaurant display name.
    pub restaurant_name: String,
    /// Quality rating copied from the snapshot.
    pub rating: f32,
    /// Straight-line distance from the requester, rounded to 2 decimal
    /// places in this projection only.
    pub distance_km: f64,
    /// Fastest matching preparation time plus delivery estimate.
    pub total_minutes: u32,
    /// Every available menu item matching the requested category.
    pub items: Vec<MenuItem>,
}

/// Rank restaurants for a discovery query.
///
/// Implementations compute over whatever snapshot they were given and
/// must be `Send + Sync` so a service layer can share one engine across
/// request handlers. Zero matches yield an empty vector, never an
/// error.
pub trait Recommender: Send + Sync {
    /// Return ranked recommendations for `query`.
    fn recommend(&self, query: &RecommendationQuery) -> Vec<Recommendation>;
}
