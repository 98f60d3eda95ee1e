//! This crate provides [`RangeSearch`], an index mapping inclusive ranges
//! of an ordered point type to values, which answers "which values cover
//! this point?" and "do these ranges tile without gaps or overlaps?".
//!
//! ## Example
//!
//! ```rust
//! use fastrange::predicate::touching;
//! use fastrange::{CancellationToken, RangeElement, RangeSearch};
//!
//! let token = CancellationToken::new();
//! let mut tariffs = RangeSearch::new();
//!
//! tariffs.add("night", RangeElement::new(0, 6)?, &token)?;
//! tariffs.add_bounds("day", 7, 18, &token)?;
//! tariffs.add_bounds("evening", 19, 23, &token)?;
//!
//! assert_eq!(tariffs.find_one(&12, &token)?.value(), Some(&"day"));
//!
//! let result = tariffs.check(
//! 	|check| {
//! 		check.require_contiguous(touching).prevent_overlap();
//! 	},
//! 	&token,
//! )?;
//!
//! assert!(result.succeeded());
//! # Ok::<(), fastrange::Error>(())
//! ```
//!
//! ## Key Understandings and Philosophies:
//!
//! ### Ranges
//!
//! A range is a `(floor, ceiling)` pair with both ends inclusive, so
//! `[10, 19]` contains `10`, `19` and everything between. A range is only
//! valid if its floor is strictly less than its ceiling, which means
//! single-point ranges such as `[5, 5]` are rejected as well as inverted
//! ones such as `[9, 2]`.
//!
//! ### Store Order
//!
//! Each insertion places the new range before the first stored range
//! with a greater floor. Both lookups and analysis walk ranges in this
//! store order, so [`RangeSearch::find()`] reports matches in store order
//! and [`RangeSearcherCheck::analyze()`] only ever compares a range with
//! its neighbour.
//!
//! Store order is not always ascending by floor. A range whose floor is
//! already taken by a range with an equal or smaller ceiling can end up
//! after ranges with greater floors, see [`InMemoryRangeSearcher`] for the
//! exact placement rule.
//!
//! ### Contiguity
//!
//! Whether two neighbouring ranges "touch" depends on the point type, so
//! contiguity is decided by a caller-supplied predicate taking the
//! ceiling of the earlier range and the floor of the later one.
//! [`predicate::touching`] covers the integers via
//! [`predicate::Successor`].
//!
//! ### Overlap
//!
//! Two neighbouring ranges overlap if the ceiling of the earlier one is
//! not below the floor of the later one. Overlap is only looked for while
//! the ranges are not contiguous, so a predicate that calls overlapping
//! ranges contiguous hides their overlap.
//!
//! ### Engines
//!
//! [`RangeSearch`] holds the validation and lookup rules while the ranges
//! themselves live in an engine implementing [`RangeSearcher`]. The
//! default engine is [`InMemoryRangeSearcher`].
//!
//! ### Cancellation
//!
//! Every [`RangeSearch`] operation takes a [`CancellationToken`]. Bulk
//! insertions look at it between ranges and keep whatever was added before
//! they stopped.
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for [`RangeElement`],
//!   [`InMemoryRangeSearcher`], [`Analysis`], [`Statistics`] and
//!   [`CheckResult`]. Deserialized ranges are validated like inserted
//!   ones.

#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::needless_return)]

pub mod cancel;
pub mod check;
pub mod engine;
pub mod error;
pub mod predicate;
pub mod range_element;
pub mod search;

pub use crate::cancel::CancellationToken;
pub use crate::check::{CheckResult, RangeCheck};
pub use crate::engine::in_memory::InMemoryRangeSearcher;
pub use crate::engine::{
	Analysis, Found, RangeEntry, RangeSearcher, RangeSearcherCheck,
	Statistics,
};
pub use crate::error::{Error, Result};
pub use crate::range_element::{InvalidRangeError, PointType, RangeElement};
pub use crate::search::{FindOneResult, FindResult, RangeSearch};
