//! Facade crate for the tiffin dispatch engine.
//!
//! This crate re-exports the core domain types and exposes the
//! recommendation and dispatch engines behind feature flags.

#![forbid(unsafe_code)]

pub use tiffin_core::{
    Assignment, AssignmentCommitter, CommitError, DeliveryEstimator, DispatchError, Dispatcher,
    MemoryStore, MenuItem, MenuItemError, Order, OrderStatus, QueryError, Recommendation,
    RecommendationQuery, Recommender, Restaurant, RestaurantError, Rider, RiderStatus,
    SnapshotStore,
};

#[cfg(feature = "recommend")]
pub use tiffin_recommend::RecommendationEngine;

#[cfg(feature = "dispatch")]
pub use tiffin_dispatch::NearestRiderDispatcher;
