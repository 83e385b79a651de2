//! Nearest-available-rider dispatch engine.
//!
//! This crate provides [`NearestRiderDispatcher`], the default
//! implementation of the [`Dispatcher`](tiffin_core::Dispatcher) trait.
//! It resolves an order's restaurant, scans the rider snapshot for
//! available riders, selects the one nearest the restaurant, and commits
//! the assignment through the store's atomic conditional-commit seam.
//!
//! When a commit is lost to a concurrent assignment of the same rider,
//! the dispatcher re-runs selection with that rider excluded rather than
//! double-booking, and reports `NoCapacity` once every available rider
//! has been contested away.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod dispatcher;

pub use dispatcher::NearestRiderDispatcher;
