//! A module containing the crate-wide [`Error`] type.

use thiserror::Error as ThisError;

use crate::InvalidRangeError;

/// `Result` type with a predefined error type ([`Error`]).
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The error returned by the fallible operations of
/// [`RangeSearch`](crate::RangeSearch).
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
	/// A range was rejected before it reached the store.
	#[error(transparent)]
	InvalidRange(#[from] InvalidRangeError),
	/// A lookup was attempted before any range was added.
	#[error("the searcher must have at least one range")]
	EmptyIndex,
	/// A single-result lookup matched more than one range.
	#[error("expected at most one range to contain the point, found {count}")]
	MultipleMatches {
		/// How many ranges contained the point.
		count: usize,
	},
	/// The [`CancellationToken`](crate::CancellationToken) was cancelled
	/// before the operation could finish. Any work already done is kept.
	#[error("the operation was cancelled")]
	Cancelled,
}
