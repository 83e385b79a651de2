//! Core domain types and trait seams for the tiffin dispatch engine.
//!
//! The crate defines the immutable snapshot types the engines compute
//! over (restaurants, riders, orders), the geodesic distance and
//! delivery-time estimation primitives they share, and the narrow trait
//! seams (`SnapshotStore`, `AssignmentCommitter`, `Recommender`,
//! `Dispatcher`) that separate the pure matching algorithms from the
//! surrounding service layer.
//!
//! Engines hold no persistent state: each invocation reads a snapshot,
//! computes, and returns a decision that the store commits. Constructors
//! validate input early and return `Result` to keep downstream
//! components honest.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod estimate;
pub mod geo;
mod order;
mod place;
mod recommend;
mod rider;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

mod dispatch;

pub use dispatch::{Assignment, DispatchError, Dispatcher};
pub use estimate::DeliveryEstimator;
pub use order::{Order, OrderStatus};
pub use place::{MenuItem, MenuItemError, Restaurant, RestaurantError};
pub use recommend::{QueryError, Recommendation, RecommendationQuery, Recommender};
pub use rider::{Rider, RiderStatus};
pub use store::{AssignmentCommitter, CommitError, MemoryStore, SnapshotStore};
