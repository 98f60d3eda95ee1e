//! A module containing [`RangeCheck`] and the [`CheckResult`] it
//! produces.

use crate::engine::RangeSearcherCheck;
use crate::predicate;

/// The outcome of evaluating a [`RangeCheck`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckResult {
	succeeded: bool,
	is_contiguous: Option<bool>,
	has_overlap: bool,
}

impl CheckResult {
	pub(crate) fn new(
		succeeded: bool,
		is_contiguous: Option<bool>,
		has_overlap: bool,
	) -> Self {
		CheckResult {
			succeeded,
			is_contiguous,
			has_overlap,
		}
	}

	/// `true` if every configured requirement held.
	pub fn succeeded(&self) -> bool {
		self.succeeded
	}

	/// Whether the ranges were contiguous, or `None` if contiguity was
	/// never required.
	pub fn is_contiguous(&self) -> Option<bool> {
		self.is_contiguous
	}

	/// Whether an overlap between adjacent ranges was found. This is
	/// reported even when overlap is allowed.
	pub fn has_overlap(&self) -> bool {
		self.has_overlap
	}
}

/// A declarative pass/fail policy evaluated once against the ranges of an
/// engine.
///
/// With no requirements configured a check always succeeds.
///
/// # Examples
/// ```
/// use fastrange::engine::in_memory::InMemoryRangeSearcher;
/// use fastrange::predicate::touching;
/// use fastrange::RangeCheck;
///
/// let store: InMemoryRangeSearcher<i32, &str> =
/// 	[(0, 9, "a"), (10, 19, "b")].into_iter().collect();
///
/// let mut check = RangeCheck::new(&store);
/// check.require_contiguous(touching).prevent_overlap();
/// let result = check.evaluate();
///
/// assert!(result.succeeded());
/// assert_eq!(result.is_contiguous(), Some(true));
/// assert!(!result.has_overlap());
/// ```
pub struct RangeCheck<'a, I, C> {
	check: &'a C,
	requires_contiguous: bool,
	allows_overlap: bool,
	contiguity: Box<dyn Fn(&I, &I) -> bool + 'a>,
}

impl<'a, I, C> RangeCheck<'a, I, C>
where
	I: 'a,
	C: RangeSearcherCheck<I>,
{
	/// Makes a new check with no requirements against the given engine.
	pub fn new(check: &'a C) -> Self {
		RangeCheck {
			check,
			requires_contiguous: false,
			allows_overlap: true,
			contiguity: Box::new(predicate::never::<I>),
		}
	}

	/// Requires every adjacent pair of ranges to satisfy `contiguity`,
	/// which is called with the ceiling of the earlier range and the
	/// floor of the later one.
	///
	/// See [`crate::predicate`] for ready-made predicates.
	pub fn require_contiguous<F>(&mut self, contiguity: F) -> &mut Self
	where
		F: Fn(&I, &I) -> bool + 'a,
	{
		self.requires_contiguous = true;
		self.contiguity = Box::new(contiguity);
		self
	}

	/// Fails the check if any overlap is found.
	pub fn prevent_overlap(&mut self) -> &mut Self {
		self.allows_overlap = false;
		self
	}

	/// Runs the analysis once and applies the configured requirements.
	pub fn evaluate(self) -> CheckResult {
		let analysis = self.check.analyze(&*self.contiguity);

		let succeeded = (!self.requires_contiguous || analysis.is_contiguous)
			&& (self.allows_overlap || !analysis.has_overlap);

		CheckResult::new(
			succeeded,
			self.requires_contiguous.then_some(analysis.is_contiguous),
			analysis.has_overlap,
		)
	}
}
