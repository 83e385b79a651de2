//! Five-stage filter-and-rank pipeline over restaurant snapshots.

use std::cmp::Ordering;

use tiffin_core::geo::distance_km;
use tiffin_core::{
    DeliveryEstimator, MenuItem, Recommendation, RecommendationQuery, Recommender, Restaurant,
    SnapshotStore,
};

/// A place that survived filtering, with the values computed on the way.
struct Candidate {
    restaurant_id: u64,
    restaurant_name: String,
    rating: f32,
    distance_km: f64,
    total_minutes: u32,
    items: Vec<MenuItem>,
}

/// Default [`Recommender`] over a [`SnapshotStore`].
///
/// The engine is stateless between calls: each invocation collects the
/// current restaurant snapshot, ranks it with [`rank`], and returns the
/// projection. Ranking never errors; zero survivors yield an empty
/// vector.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tiffin_core::test_support::{menu_item, restaurant};
/// use tiffin_core::{MemoryStore, RecommendationQuery, Recommender};
/// use tiffin_recommend::RecommendationEngine;
///
/// # fn main() -> Result<(), tiffin_core::QueryError> {
/// let store = MemoryStore::new();
/// store.add_restaurant(restaurant(
///     1,
///     Coord { x: 72.8800, y: 19.0850 },
///     vec![menu_item(1, "biryani", 15)],
/// ));
/// let engine = RecommendationEngine::new(store);
/// let query = RecommendationQuery::new(Coord { x: 72.8777, y: 19.0760 }, "biryani", 45)?;
/// assert_eq!(engine.recommend(&query).len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct RecommendationEngine<S>
where
    S: SnapshotStore,
{
    store: S,
    estimator: DeliveryEstimator,
}

impl<S> RecommendationEngine<S>
where
    S: SnapshotStore,
{
    /// Construct an engine with the default delivery-time model.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_estimator(store, DeliveryEstimator::default())
    }

    /// Construct an engine with an explicit delivery-time model.
    #[must_use]
    pub const fn with_estimator(store: S, estimator: DeliveryEstimator) -> Self {
        Self { store, estimator }
    }
}

impl<S> Recommender for RecommendationEngine<S>
where
    S: SnapshotStore + Send + Sync,
{
    fn recommend(&self, query: &RecommendationQuery) -> Vec<Recommendation> {
        let places: Vec<Restaurant> = self.store.restaurants().collect();
        rank(&places, query, self.estimator)
    }
}

/// Rank a restaurant snapshot for a discovery query.
///
/// Stages, cheapest first, each strictly narrowing the candidate set:
/// 1. drop closed places;
/// 2. compute the requester distance once, drop places beyond their own
///    delivery radius;
/// 3. restrict the menu to available items in the requested category,
///    drop places with no match;
/// 4. drop places whose fastest matching preparation time plus the
///    delivery estimate exceeds the query budget;
/// 5. sort ascending by total time, then descending by rating, then
///    ascending by full-precision distance.
///
/// Distance is rounded to 2 decimal places in the output projection
/// only, after sorting, so premature rounding cannot manufacture ties.
/// NaN distances from out-of-range coordinates propagate into the
/// output rather than being corrected here; validating coordinates is
/// the caller's job.
#[must_use]
pub fn rank(
    places: &[Restaurant],
    query: &RecommendationQuery,
    estimator: DeliveryEstimator,
) -> Vec<Recommendation> {
    let mut survivors: Vec<Candidate> = places
        .iter()
        .filter(|place| place.open)
        .filter_map(|place| evaluate(place, query, estimator))
        .collect();

    survivors.sort_by(compare);
    survivors.into_iter().map(project).collect()
}

/// Stages 2-4 for a single open place.
fn evaluate(
    place: &Restaurant,
    query: &RecommendationQuery,
    estimator: DeliveryEstimator,
) -> Option<Candidate> {
    let distance = distance_km(query.origin, place.location);
    if distance > place.delivery_radius_km {
        return None;
    }

    let items: Vec<MenuItem> = place
        .menu
        .iter()
        .filter(|item| item.available && item.category == query.category)
        .cloned()
        .collect();
    let fastest_prep = items.iter().map(|item| item.prep_minutes).min()?;

    let total_minutes = fastest_prep + estimator.estimate_minutes(distance);
    if total_minutes > query.max_total_minutes {
        return None;
    }

    Some(Candidate {
        restaurant_id: place.id,
        restaurant_name: place.name.clone(),
        rating: place.rating,
        distance_km: distance,
        total_minutes,
        items,
    })
}

/// The three-key ordering contract: fastest first, quality as tiebreak,
/// proximity as final tiebreak.
fn compare(lhs: &Candidate, rhs: &Candidate) -> Ordering {
    lhs.total_minutes
        .cmp(&rhs.total_minutes)
        .then_with(|| {
            rhs.rating
                .partial_cmp(&lhs.rating)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| {
            lhs.distance_km
                .partial_cmp(&rhs.distance_km)
                .unwrap_or(Ordering::Equal)
        })
}

fn project(candidate: Candidate) -> Recommendation {
    Recommendation {
        restaurant_id: candidate.restaurant_id,
        restaurant_name: candidate.restaurant_name,
        rating: candidate.rating,
        distance_km: round_2dp(candidate.distance_km),
        total_minutes: candidate.total_minutes,
        items: candidate.items,
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "presentation rounding to 2 decimal places"
)]
fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
