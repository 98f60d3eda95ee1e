//! A module containing [`InMemoryRangeSearcher`].

use core::cmp::Ordering;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::engine::{
	Analysis, Found, RangeEntry, RangeSearcher, RangeSearcherCheck, Statistics,
};
use crate::PointType;

/// An append-only, [`Vec`]-backed range store.
///
/// Entries are kept ascending by floor, with ties broken by ceiling. Every
/// operation is a linear scan, there is no indexing structure.
///
/// # Tie-breaking
///
/// When a new range has the same floor as an existing entry but a ceiling
/// that is not smaller, the *whole rest of the store* is searched for a
/// later entry with that same floor and a larger ceiling. If there is none
/// the new range goes to the very end of the store, even past entries
/// with larger floors:
///
/// ```
/// use fastrange::engine::in_memory::InMemoryRangeSearcher;
/// use fastrange::RangeSearcher;
///
/// let mut store = InMemoryRangeSearcher::new();
///
/// store.insert(10, 19, "a");
/// store.insert(20, 29, "b");
/// store.insert(10, 25, "c");
///
/// assert_eq!(
/// 	store
/// 		.iter()
/// 		.map(|entry| (*entry.floor(), *entry.ceiling()))
/// 		.collect::<Vec<_>>(),
/// 	[(10, 19), (20, 29), (10, 25)]
/// );
///
/// // lookups scan everything so they are unaffected
/// assert_eq!(store.find(&24).len(), 2);
/// ```
///
/// So the store is not always globally sorted by floor and nothing should
/// rely on it being so.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryRangeSearcher<I, V> {
	entries: Vec<RangeEntry<I, V>>,
}

impl<I, V> InMemoryRangeSearcher<I, V> {
	/// Makes a new, empty `InMemoryRangeSearcher`.
	///
	/// # Examples
	/// ```
	/// use fastrange::engine::in_memory::InMemoryRangeSearcher;
	///
	/// let store: InMemoryRangeSearcher<i32, String> =
	/// 	InMemoryRangeSearcher::new();
	///
	/// assert!(store.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the number of stored ranges.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no ranges have been stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns an iterator over every entry in store order.
	pub fn iter(&self) -> impl DoubleEndedIterator<Item = &RangeEntry<I, V>> {
		self.entries.iter()
	}
}

impl<I, V> InMemoryRangeSearcher<I, V>
where
	I: PointType,
{
	fn insertion_index(&self, floor: &I, ceiling: &I) -> Option<usize> {
		for (index, current) in self.entries.iter().enumerate() {
			match floor.cmp(current.floor()) {
				Ordering::Less => return Some(index),
				Ordering::Equal if ceiling < current.ceiling() => {
					return Some(index)
				}
				Ordering::Equal => {
					//searches the remainder of the store, not only the run
					//of equal floors, and a miss means appending
					return self.entries[index + 1..]
						.iter()
						.find_position(|later| {
							later.floor() == floor && ceiling < later.ceiling()
						})
						.map(|(offset, _)| index + 1 + offset);
				}
				Ordering::Greater => {}
			}
		}

		None
	}
}

impl<I, V> RangeSearcherCheck<I> for InMemoryRangeSearcher<I, V>
where
	I: PointType,
{
	/// See [`RangeSearcherCheck::analyze()`].
	///
	/// An empty store is neither contiguous nor overlapping, whereas a
	/// store with a single range is always contiguous.
	///
	/// Overlap is only tested for a pair once contiguity has already been
	/// broken, and no more pairs are tested after the first overlap.
	///
	/// # Examples
	/// ```
	/// use fastrange::engine::in_memory::InMemoryRangeSearcher;
	/// use fastrange::engine::Analysis;
	/// use fastrange::predicate::touching;
	/// use fastrange::RangeSearcherCheck;
	///
	/// let store: InMemoryRangeSearcher<i32, ()> =
	/// 	[(0, 9, ()), (10, 20, ()), (20, 29, ())].into_iter().collect();
	///
	/// assert_eq!(
	/// 	store.analyze(touching),
	/// 	Analysis {
	/// 		is_contiguous: false,
	/// 		has_overlap: true,
	/// 	}
	/// );
	/// ```
	fn analyze<F>(&self, contiguity: F) -> Analysis
	where
		F: Fn(&I, &I) -> bool,
	{
		if self.entries.is_empty() {
			return Analysis::default();
		}

		let mut is_contiguous = true;
		let mut has_overlap = false;

		for (previous, current) in self.entries.iter().tuple_windows() {
			is_contiguous &= contiguity(previous.ceiling(), current.floor());

			if !(is_contiguous || has_overlap) {
				has_overlap = previous.ceiling() >= current.floor();
			}
		}

		debug!(
			ranges = self.entries.len(),
			is_contiguous, has_overlap, "analyzed ranges"
		);

		return Analysis {
			is_contiguous,
			has_overlap,
		};
	}
}

impl<I, V> RangeSearcher<I, V> for InMemoryRangeSearcher<I, V>
where
	I: PointType,
{
	/// See [`RangeSearcher::insert()`] and the [tie-breaking
	/// rules](InMemoryRangeSearcher#tie-breaking).
	fn insert(&mut self, floor: I, ceiling: I, value: V) {
		let index = self.insertion_index(&floor, &ceiling);
		let entry = RangeEntry::new(floor, ceiling, value);

		match index {
			Some(index) => {
				trace!(index, "inserting range before existing entry");
				self.entries.insert(index, entry);
			}
			None => {
				trace!(index = self.entries.len(), "appending range");
				self.entries.push(entry);
			}
		}
	}

	fn find(&self, point: &I) -> Found<'_, I, V> {
		self.entries
			.iter()
			.filter(|entry| point >= entry.floor() && point <= entry.ceiling())
			.collect()
	}

	fn statistics(&self) -> Statistics {
		Statistics {
			total_ranges: self.entries.len(),
		}
	}
}

impl<I, V> Default for InMemoryRangeSearcher<I, V> {
	fn default() -> Self {
		InMemoryRangeSearcher {
			entries: Vec::new(),
		}
	}
}

impl<I, V> Extend<(I, I, V)> for InMemoryRangeSearcher<I, V>
where
	I: PointType,
{
	fn extend<T>(&mut self, iter: T)
	where
		T: IntoIterator<Item = (I, I, V)>,
	{
		for (floor, ceiling, value) in iter {
			self.insert(floor, ceiling, value);
		}
	}
}

impl<I, V> FromIterator<(I, I, V)> for InMemoryRangeSearcher<I, V>
where
	I: PointType,
{
	fn from_iter<T>(iter: T) -> Self
	where
		T: IntoIterator<Item = (I, I, V)>,
	{
		let mut store = InMemoryRangeSearcher::new();
		store.extend(iter);
		store
	}
}

#[cfg(feature = "serde")]
mod serde {
	use core::marker::PhantomData;

	use serde::de::{SeqAccess, Visitor};
	use serde::ser::SerializeSeq;
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::InMemoryRangeSearcher;
	use crate::{PointType, RangeElement, RangeSearcher};

	impl<I, V> Serialize for InMemoryRangeSearcher<I, V>
	where
		I: Serialize,
		V: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			let mut seq = serializer.serialize_seq(Some(self.len()))?;
			for entry in self.iter() {
				seq.serialize_element(&(
					entry.floor(),
					entry.ceiling(),
					entry.value(),
				))?;
			}
			seq.end()
		}
	}

	impl<'de, I, V> Deserialize<'de> for InMemoryRangeSearcher<I, V>
	where
		I: PointType + Deserialize<'de>,
		V: Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			deserializer.deserialize_seq(InMemoryRangeSearcherVisitor {
				i: PhantomData,
				v: PhantomData,
			})
		}
	}

	struct InMemoryRangeSearcherVisitor<I, V> {
		i: PhantomData<I>,
		v: PhantomData<V>,
	}

	impl<'de, I, V> Visitor<'de> for InMemoryRangeSearcherVisitor<I, V>
	where
		I: PointType + Deserialize<'de>,
		V: Deserialize<'de>,
	{
		type Value = InMemoryRangeSearcher<I, V>;

		fn expecting(
			&self,
			formatter: &mut core::fmt::Formatter,
		) -> core::fmt::Result {
			formatter.write_str("a sequence of (floor, ceiling, value) entries")
		}

		fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
		where
			A: SeqAccess<'de>,
		{
			let mut store = InMemoryRangeSearcher::new();
			while let Some((floor, ceiling, value)) =
				access.next_element::<(I, I, V)>()?
			{
				let (floor, ceiling) = RangeElement::new(floor, ceiling)
					.map_err(serde::de::Error::custom)?
					.into_bounds();
				store.insert(floor, ceiling, value);
			}
			Ok(store)
		}
	}
}
