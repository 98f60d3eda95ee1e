//! A module containing [`RangeSearch`] and the results of its lookups.

use core::marker::PhantomData;

use tracing::{debug, trace};

use crate::engine::in_memory::InMemoryRangeSearcher;
use crate::engine::RangeSearcher;
use crate::{
	CancellationToken, CheckResult, Error, PointType, RangeCheck,
	RangeElement, Result,
};

/// The result of [`RangeSearch::find()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindResult<V> {
	values: Vec<V>,
}

impl<V> FindResult<V> {
	/// `true` if at least one range contained the point.
	pub fn found(&self) -> bool {
		!self.values.is_empty()
	}

	/// The values of every range containing the point, in store order.
	pub fn values(&self) -> &[V] {
		&self.values
	}

	/// Consumes the result, returning the values.
	pub fn into_values(self) -> Vec<V> {
		self.values
	}
}

/// The result of [`RangeSearch::find_one()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindOneResult<V> {
	value: Option<V>,
}

impl<V> FindOneResult<V> {
	/// `true` if a range contained the point.
	pub fn found(&self) -> bool {
		self.value.is_some()
	}

	/// The value of the range containing the point, if any.
	pub fn value(&self) -> Option<&V> {
		self.value.as_ref()
	}

	/// Consumes the result, returning the value.
	pub fn into_value(self) -> Option<V> {
		self.value
	}
}

/// A range index mapping ranges over `I` to values of type `V`, storing
/// them in the engine `E`.
///
/// `RangeSearch` is the checked entry point to an engine: ranges are
/// validated before they are stored, lookups refuse to run against an
/// index with no ranges, and bulk insertions observe a
/// [`CancellationToken`] between ranges.
///
/// # Examples
/// ```
/// use fastrange::predicate::touching;
/// use fastrange::{CancellationToken, Error, RangeSearch};
///
/// let token = CancellationToken::new();
/// let mut shards: RangeSearch<u32, &str> = RangeSearch::new();
///
/// assert_eq!(shards.find(&5, &token), Err(Error::EmptyIndex));
///
/// shards.add_bounds("shard-a", 0, 99, &token)?;
/// shards.add_many_bounds("shard-b", [(100, 199), (300, 399)], &token)?;
///
/// assert_eq!(shards.find_one(&150, &token)?.value(), Some(&"shard-b"));
/// assert!(!shards.find(&250, &token)?.found());
///
/// let result = shards.check(
/// 	|check| {
/// 		check.require_contiguous(touching).prevent_overlap();
/// 	},
/// 	&token,
/// )?;
///
/// assert!(!result.succeeded());
/// assert_eq!(result.is_contiguous(), Some(false));
/// assert!(!result.has_overlap());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct RangeSearch<I, V, E = InMemoryRangeSearcher<I, V>> {
	engine: E,
	phantom: PhantomData<(I, V)>,
}

impl<I, V> RangeSearch<I, V>
where
	I: PointType,
{
	/// Makes a new, empty `RangeSearch` backed by an
	/// [`InMemoryRangeSearcher`].
	pub fn new() -> Self {
		RangeSearch::with_engine(InMemoryRangeSearcher::new())
	}
}

impl<I, V, E> RangeSearch<I, V, E>
where
	I: PointType,
	E: RangeSearcher<I, V>,
{
	/// Makes a new `RangeSearch` on top of the given engine.
	pub fn with_engine(engine: E) -> Self {
		RangeSearch {
			engine,
			phantom: PhantomData,
		}
	}

	/// Returns a reference to the underlying engine.
	pub fn engine(&self) -> &E {
		&self.engine
	}

	/// Consumes the `RangeSearch`, returning the underlying engine.
	pub fn into_engine(self) -> E {
		self.engine
	}

	/// Adds a single range associated with `value`.
	pub fn add(
		&mut self,
		value: V,
		range: RangeElement<I>,
		token: &CancellationToken,
	) -> Result<()> {
		token.error_if_cancelled()?;
		self.insert_unchecked(value, range);

		Ok(())
	}

	/// Adds every range in `ranges`, each associated with its own clone
	/// of `value`.
	///
	/// The token is checked before each range. On cancellation the ranges
	/// added so far are kept and [`Error::Cancelled`] is returned.
	pub fn add_many<R>(
		&mut self,
		value: V,
		ranges: R,
		token: &CancellationToken,
	) -> Result<()>
	where
		R: IntoIterator<Item = RangeElement<I>>,
		V: Clone,
	{
		for (added, range) in ranges.into_iter().enumerate() {
			if token.is_cancelled() {
				debug!(added, "bulk insertion cancelled");
				return Err(Error::Cancelled);
			}

			self.insert_unchecked(value.clone(), range);
		}

		Ok(())
	}

	/// Validates `floor < ceiling` and adds the range.
	///
	/// # Examples
	/// ```
	/// use fastrange::{CancellationToken, Error, InvalidRangeError, RangeSearch};
	///
	/// let token = CancellationToken::new();
	/// let mut search = RangeSearch::new();
	///
	/// assert_eq!(
	/// 	search.add_bounds("nope", 10, 10, &token),
	/// 	Err(Error::InvalidRange(InvalidRangeError::EqualBounds))
	/// );
	/// assert_eq!(search.engine().len(), 0);
	/// ```
	pub fn add_bounds(
		&mut self,
		value: V,
		floor: I,
		ceiling: I,
		token: &CancellationToken,
	) -> Result<()> {
		let range = RangeElement::new(floor, ceiling)?;
		self.add(value, range, token)
	}

	/// Validates and adds every `(floor, ceiling)` pair in `bounds`, each
	/// associated with its own clone of `value`.
	///
	/// Pairs are validated one at a time, so an invalid pair stops the
	/// insertion with the pairs before it already added. Cancellation
	/// behaves as in [`RangeSearch::add_many()`].
	pub fn add_many_bounds<B>(
		&mut self,
		value: V,
		bounds: B,
		token: &CancellationToken,
	) -> Result<()>
	where
		B: IntoIterator<Item = (I, I)>,
		V: Clone,
	{
		for (added, (floor, ceiling)) in bounds.into_iter().enumerate() {
			if token.is_cancelled() {
				debug!(added, "bulk insertion cancelled");
				return Err(Error::Cancelled);
			}

			let range = RangeElement::new(floor, ceiling)?;
			self.insert_unchecked(value.clone(), range);
		}

		Ok(())
	}

	/// Returns the values of every range containing `point`.
	///
	/// Fails with [`Error::EmptyIndex`] if no range has been added yet.
	pub fn find(
		&self,
		point: &I,
		token: &CancellationToken,
	) -> Result<FindResult<V>>
	where
		V: Clone,
	{
		self.error_if_unusable(token)?;

		let values = self
			.engine
			.find(point)
			.into_iter()
			.map(|entry| entry.value().clone())
			.collect();

		Ok(FindResult { values })
	}

	/// Returns the value of the single range containing `point`, if any.
	///
	/// Fails with [`Error::EmptyIndex`] if no range has been added yet and
	/// with [`Error::MultipleMatches`] if more than one range contains
	/// `point`.
	pub fn find_one(
		&self,
		point: &I,
		token: &CancellationToken,
	) -> Result<FindOneResult<V>>
	where
		V: Clone,
	{
		self.error_if_unusable(token)?;

		let found = self.engine.find(point);

		match found.as_slice() {
			[] => Ok(FindOneResult { value: None }),
			[entry] => Ok(FindOneResult {
				value: Some(entry.value().clone()),
			}),
			_ => Err(Error::MultipleMatches { count: found.len() }),
		}
	}

	/// Configures a fresh [`RangeCheck`] with `configure` and evaluates it
	/// against the stored ranges.
	///
	/// Checking an empty index is allowed and reports no contiguity.
	pub fn check<'a, F>(
		&'a self,
		configure: F,
		token: &CancellationToken,
	) -> Result<CheckResult>
	where
		F: FnOnce(&mut RangeCheck<'a, I, E>),
	{
		token.error_if_cancelled()?;

		let mut check = RangeCheck::new(&self.engine);
		configure(&mut check);

		Ok(check.evaluate())
	}

	fn insert_unchecked(&mut self, value: V, range: RangeElement<I>) {
		let (floor, ceiling) = range.into_bounds();
		self.engine.insert(floor, ceiling, value);
		trace!(total_ranges = self.engine.count(), "added range");
	}

	fn error_if_unusable(&self, token: &CancellationToken) -> Result<()> {
		token.error_if_cancelled()?;

		if self.engine.count() == 0 {
			return Err(Error::EmptyIndex);
		}

		Ok(())
	}
}

impl<I, V, E> Default for RangeSearch<I, V, E>
where
	E: Default,
{
	fn default() -> Self {
		RangeSearch {
			engine: E::default(),
			phantom: PhantomData,
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::engine::{
		Analysis, Found, RangeEntry, RangeSearcherCheck, Statistics,
	};
	use crate::InvalidRangeError;

	/// Records insertions and replays canned lookups and analyses.
	#[derive(Debug, Default)]
	struct Recording {
		inserted: Vec<(i32, i32, &'static str)>,
		found: Vec<RangeEntry<i32, &'static str>>,
		total_ranges: usize,
		analysis: Analysis,
	}

	impl RangeSearcherCheck<i32> for Recording {
		fn analyze<F>(&self, _contiguity: F) -> Analysis
		where
			F: Fn(&i32, &i32) -> bool,
		{
			self.analysis
		}
	}

	impl RangeSearcher<i32, &'static str> for Recording {
		fn insert(&mut self, floor: i32, ceiling: i32, value: &'static str) {
			self.inserted.push((floor, ceiling, value));
		}

		fn find(&self, _point: &i32) -> Found<'_, i32, &'static str> {
			self.found.iter().collect()
		}

		fn statistics(&self) -> Statistics {
			Statistics {
				total_ranges: self.total_ranges,
			}
		}
	}

	type Search = RangeSearch<i32, &'static str, Recording>;

	fn recording() -> Search {
		RangeSearch::with_engine(Recording::default())
	}
	fn search_finding(found: &[(i32, i32, &'static str)]) -> Search {
		RangeSearch::with_engine(Recording {
			found: found
				.iter()
				.map(|&(floor, ceiling, value)| {
					RangeEntry::new(floor, ceiling, value)
				})
				.collect(),
			total_ranges: 3,
			..Recording::default()
		})
	}
	fn range(floor: i32, ceiling: i32) -> RangeElement<i32> {
		RangeElement::new(floor, ceiling).unwrap()
	}

	#[test]
	fn check_evaluates_the_configured_check_against_the_engine() {
		let search = RangeSearch::with_engine(Recording {
			analysis: Analysis {
				is_contiguous: true,
				has_overlap: false,
			},
			..Recording::default()
		});
		let token = CancellationToken::new();

		let result = search
			.check(
				|check| {
					check.prevent_overlap().require_contiguous(|_, _| true);
				},
				&token,
			)
			.unwrap();

		assert_eq!(result, CheckResult::new(true, Some(true), false));

		let result = search.check(|_| {}, &token).unwrap();

		assert_eq!(result, CheckResult::new(true, None, false));
	}

	#[test]
	fn add_passes_the_range_to_the_engine() {
		let mut search = recording();
		let token = CancellationToken::new();

		search.add("bubbles", range(100, 1000), &token).unwrap();

		assert_eq!(search.engine().inserted, [(100, 1000, "bubbles")]);
	}

	#[test]
	fn add_many_passes_every_range_to_the_engine() {
		let mut search = recording();
		let token = CancellationToken::new();

		search
			.add_many(
				"chuckles",
				[range(100, 1000), range(10000, 100000)],
				&token,
			)
			.unwrap();

		assert_eq!(
			search.engine().inserted,
			[(100, 1000, "chuckles"), (10000, 100000, "chuckles")]
		);
	}

	#[test]
	fn add_bounds_passes_the_range_to_the_engine() {
		let mut search = recording();
		let token = CancellationToken::new();

		search.add_bounds("whizzle", 2, 4, &token).unwrap();
		search
			.add_many_bounds("whump", [(99, 101), (102, 999)], &token)
			.unwrap();

		assert_eq!(
			search.engine().inserted,
			[(2, 4, "whizzle"), (99, 101, "whump"), (102, 999, "whump")]
		);
	}

	#[test]
	fn invalid_bounds_are_rejected() {
		let token = CancellationToken::new();

		for (floor, ceiling, error) in [
			(10, 10, InvalidRangeError::EqualBounds),
			(10, 9, InvalidRangeError::FloorAboveCeiling),
		] {
			let mut search = recording();

			assert_eq!(
				search.add_bounds("bahrump", floor, ceiling, &token),
				Err(Error::InvalidRange(error))
			);
			assert!(search.engine().inserted.is_empty());

			let mut search = recording();

			assert_eq!(
				search.add_many_bounds(
					"Magwi",
					[(0, 1), (floor, ceiling), (100, 103)],
					&token
				),
				Err(Error::InvalidRange(error))
			);
			assert_eq!(search.engine().inserted, [(0, 1, "Magwi")]);
		}
	}

	#[test]
	fn lookups_fail_on_an_empty_index() {
		let search = recording();
		let token = CancellationToken::new();

		assert_eq!(search.find(&15, &token), Err(Error::EmptyIndex));
		assert_eq!(search.find_one(&15, &token), Err(Error::EmptyIndex));
	}

	#[test]
	fn lookups_with_multiple_results() {
		let search = search_finding(&[
			(0, 20, "wahahaa"),
			(5, 25, "auauaua"),
			(10, 30, "iurreiie"),
		]);
		let token = CancellationToken::new();

		let result = search.find(&15, &token).unwrap();

		assert!(result.found());
		assert_eq!(result.values(), ["wahahaa", "auauaua", "iurreiie"]);
		assert_eq!(
			search.find_one(&15, &token),
			Err(Error::MultipleMatches { count: 3 })
		);
	}

	#[test]
	fn lookups_with_a_single_result() {
		let search = search_finding(&[(0, 20, "jihgf")]);
		let token = CancellationToken::new();

		let result = search.find(&15, &token).unwrap();

		assert!(result.found());
		assert_eq!(result.into_values(), ["jihgf"]);

		let result = search.find_one(&15, &token).unwrap();

		assert!(result.found());
		assert_eq!(result.into_value(), Some("jihgf"));
	}

	#[test]
	fn lookups_with_no_results() {
		let search = search_finding(&[]);
		let token = CancellationToken::new();

		let result = search.find(&15, &token).unwrap();

		assert!(!result.found());
		assert!(result.values().is_empty());

		let result = search.find_one(&15, &token).unwrap();

		assert!(!result.found());
		assert_eq!(result.value(), None);
	}

	#[test]
	fn in_memory_index_end_to_end() {
		let token = CancellationToken::new();
		let mut search = RangeSearch::new();

		search
			.add_many_bounds("base", [(10, 19), (20, 29), (40, 49)], &token)
			.unwrap();

		let contiguous = |search: &RangeSearch<i32, &'static str>| {
			search
				.check(
					|check| {
						check
							.require_contiguous(crate::predicate::touching)
							.prevent_overlap();
					},
					&token,
				)
				.unwrap()
		};

		assert_eq!(
			contiguous(&search),
			CheckResult::new(false, Some(false), false)
		);

		search.add_bounds("gap", 30, 39, &token).unwrap();

		assert_eq!(
			contiguous(&search),
			CheckResult::new(true, Some(true), false)
		);

		search.add_bounds("wide", 35, 44, &token).unwrap();

		assert_eq!(
			contiguous(&search),
			CheckResult::new(false, Some(false), true)
		);
		assert_eq!(
			search.find(&40, &token).unwrap().into_values(),
			["wide", "base"]
		);
		assert_eq!(
			search.find_one(&40, &token),
			Err(Error::MultipleMatches { count: 2 })
		);
		assert_eq!(search.engine().count(), 5);
	}

	#[test]
	fn cancelled_tokens_stop_everything_up_front() {
		let mut search = search_finding(&[(0, 20, "jihgf")]);
		let token = CancellationToken::new();
		token.cancel();

		assert_eq!(
			search.add("a", range(0, 1), &token),
			Err(Error::Cancelled)
		);
		assert_eq!(
			search.add_many("a", [range(0, 1)], &token),
			Err(Error::Cancelled)
		);
		assert_eq!(
			search.add_many_bounds("a", [(0, 1)], &token),
			Err(Error::Cancelled)
		);
		assert_eq!(search.find(&15, &token), Err(Error::Cancelled));
		assert_eq!(search.find_one(&15, &token), Err(Error::Cancelled));
		assert_eq!(search.check(|_| {}, &token), Err(Error::Cancelled));
		assert!(search.engine().inserted.is_empty());
	}

	#[test]
	fn cancelling_mid_way_keeps_what_was_added() {
		let mut search = recording();
		let token = CancellationToken::new();

		let ranges = (0..5).map(|x| {
			if x == 2 {
				token.cancel();
			}
			range(x * 10, x * 10 + 9)
		});

		assert_eq!(search.add_many("a", ranges, &token), Err(Error::Cancelled));
		assert_eq!(search.engine().inserted, [(0, 9, "a"), (10, 19, "a")]);

		let mut search = recording();
		let token = CancellationToken::new();

		let bounds = (0..5).map(|x| {
			if x == 3 {
				token.cancel();
			}
			(x * 10, x * 10 + 9)
		});

		assert_eq!(
			search.add_many_bounds("b", bounds, &token),
			Err(Error::Cancelled)
		);
		assert_eq!(
			search.engine().inserted,
			[(0, 9, "b"), (10, 19, "b"), (20, 29, "b")]
		);
	}

	#[test]
	fn find_reports_matches_in_store_order() {
		let token = CancellationToken::new();
		let mut search = RangeSearch::new();

		search
			.add_many_bounds("x", [(10, 19), (20, 29)], &token)
			.unwrap();
		search.add_bounds("y", 10, 25, &token).unwrap();

		assert_eq!(search.find(&22, &token).unwrap().into_values(), ["x", "y"]);
		assert_eq!(
			search
				.engine()
				.iter()
				.map(|entry| *entry.floor())
				.collect::<Vec<_>>(),
			[10, 20, 10]
		);
	}
}
