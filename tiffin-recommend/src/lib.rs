//! Restaurant recommendation engine.
//!
//! This crate provides [`RecommendationEngine`], the default
//! implementation of the [`Recommender`](tiffin_core::Recommender)
//! trait. Given a requester location, a food category, and a time
//! budget, it runs a five-stage narrowing pipeline over a restaurant
//! snapshot and returns results ranked fastest first, with rating and
//! proximity as tie-breaks.
//!
//! The pipeline itself is exposed as the pure function [`rank`] so
//! callers holding their own snapshot can rank without a store seam.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;

pub use engine::{RecommendationEngine, rank};
