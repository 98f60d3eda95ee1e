//! A module containing the engine traits [`RangeSearcher`] and
//! [`RangeSearcherCheck`] along with the types they exchange.
//!
//! An engine owns the actual `(floor, ceiling, value)` entries.
//! [`RangeSearch`](crate::RangeSearch) is generic over its engine so a
//! different storage strategy can be swapped in without touching the
//! validation and lookup logic layered on top.

use smallvec::SmallVec;

pub mod in_memory;

/// The entries returned by [`RangeSearcher::find()`], in store order.
///
/// Point lookups rarely match more than a handful of ranges, so the first
/// few matches are kept inline.
pub type Found<'a, I, V> = SmallVec<[&'a RangeEntry<I, V>; 4]>;

/// A stored range and the value associated with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeEntry<I, V> {
	floor: I,
	ceiling: I,
	value: V,
}

impl<I, V> RangeEntry<I, V> {
	/// Makes a new entry. No validation is performed on the bounds.
	pub fn new(floor: I, ceiling: I, value: V) -> Self {
		RangeEntry {
			floor,
			ceiling,
			value,
		}
	}

	/// The inclusive lower bound.
	pub fn floor(&self) -> &I {
		&self.floor
	}

	/// The inclusive upper bound.
	pub fn ceiling(&self) -> &I {
		&self.ceiling
	}

	/// The associated value.
	pub fn value(&self) -> &V {
		&self.value
	}
}

/// The raw verdict of [`RangeSearcherCheck::analyze()`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
	/// `true` if every adjacent pair satisfied the contiguity predicate.
	pub is_contiguous: bool,
	/// `true` if an overlap between adjacent ranges was found.
	pub has_overlap: bool,
}

/// A snapshot of an engine's size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
	/// The number of ranges stored in the engine.
	pub total_ranges: usize,
}

/// The analysis half of an engine, which is all a
/// [`RangeCheck`](crate::RangeCheck) needs to see.
pub trait RangeSearcherCheck<I> {
	/// Walks adjacent pairs of stored ranges in store order and reports
	/// whether they are contiguous according to `contiguity` and whether
	/// any of them overlap.
	///
	/// `contiguity` is called with the ceiling of the earlier range and
	/// the floor of the later one.
	fn analyze<F>(&self, contiguity: F) -> Analysis
	where
		F: Fn(&I, &I) -> bool;
}

/// An engine storing ranges over the point type `I`, each associated with
/// a value of type `V`.
pub trait RangeSearcher<I, V>: RangeSearcherCheck<I> {
	/// Stores a new range. Callers are expected to have checked that
	/// `floor < ceiling`.
	fn insert(&mut self, floor: I, ceiling: I, value: V);

	/// Returns every entry whose range contains `point`, both ends
	/// inclusive.
	fn find(&self, point: &I) -> Found<'_, I, V>;

	/// Returns a snapshot of the engine's size.
	fn statistics(&self) -> Statistics;

	/// Returns the number of stored ranges.
	fn count(&self) -> usize {
		self.statistics().total_ranges
	}
}
