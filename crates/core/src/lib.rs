//! Composable callables whose failures are part of their type.
//!
//! Closures passed to `Option::map`, `Option::filter`, and friends cannot fail
//! without the caller reaching for `transpose` or an outer `Result` dance.
//! This crate provides four small callable traits, each carrying an
//! associated `Error` type, and an optional wrapper whose operations accept
//! them and hand any error straight back to the caller:
//!
//! - [`Action`] — observes a value, may fail (consumer)
//! - [`Transform`] — maps a value to another, may fail (function)
//! - [`Predicate`] — tests a value, may fail (predicate)
//! - [`Producer`] — produces a value from nothing, may fail (supplier)
//! - [`Opt`] — zero or one value, transformed through the traits above
//!
//! Every closure of the matching shape returning a `Result` implements the
//! corresponding trait, so most call sites never name a type:
//!
//! ```
//! use tryfn_core::Opt;
//!
//! #[derive(Debug, PartialEq)]
//! struct Negative(i32);
//!
//! let checked_sqrt = |x: i32| {
//!     if x < 0 { Err(Negative(x)) } else { Ok(f64::from(x).sqrt()) }
//! };
//!
//! assert_eq!(Opt::of(16).map(checked_sqrt), Ok(Opt::of(4.0)));
//! assert_eq!(Opt::of(-4).map(checked_sqrt), Err(Negative(-4)));
//! assert_eq!(Opt::<i32>::empty().map(checked_sqrt), Ok(Opt::empty()));
//! ```
//!
//! The [`provenance`] module records which standard library shape each item
//! stands in for.

mod action;
mod error;
mod map_err;
mod opt;
mod predicate;
mod producer;
pub mod provenance;
mod transform;

pub use action::Action;
pub use error::AbsentError;
pub use opt::Opt;
pub use predicate::{IsEqual, Predicate, is_equal, not};
pub use producer::Producer;
pub use transform::{Transform, identity};
