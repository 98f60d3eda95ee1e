//! A module containing [`CancellationToken`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{Error, Result};

/// A cheaply cloneable flag used to cooperatively cancel the operations of
/// [`RangeSearch`](crate::RangeSearch).
///
/// Every clone shares the same flag, so a token handed to another thread
/// can cancel work running on this one. Cancellation is only observed
/// between discrete steps (for example between the ranges of a bulk
/// insertion) and nothing that already happened is rolled back.
///
/// # Examples
/// ```
/// use fastrange::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handle = token.clone();
///
/// assert!(!token.is_cancelled());
/// handle.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
	cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
	/// Makes a new token which has not been cancelled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Signals cancellation to every clone of this token.
	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::Relaxed);
	}

	/// Returns `true` if [`CancellationToken::cancel()`] has been called
	/// on this token or any of its clones.
	pub fn is_cancelled(&self) -> bool {
		self.cancelled.load(Ordering::Relaxed)
	}

	pub(crate) fn error_if_cancelled(&self) -> Result<()> {
		if self.is_cancelled() {
			return Err(Error::Cancelled);
		}

		Ok(())
	}
}
