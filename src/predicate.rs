//! Ready-made contiguity predicates for
//! [`RangeCheck::require_contiguous()`](crate::RangeCheck::require_contiguous).
//!
//! A contiguity predicate is called with the ceiling of one range and the
//! floor of the range that follows it in store order, and returns `true`
//! if the two ranges touch with no gap between them.

/// Point types with a well-defined next value, such as the primitive
/// integers.
///
/// Any [`Ord`] type can be stored, this is only needed by [`touching`].
pub trait Successor: Sized {
	/// The smallest value greater than `self`, or `None` at the top of the
	/// type's range.
	fn successor(&self) -> Option<Self>;
}

macro_rules! successor_impls {
	($($int:ty),* $(,)?) => {
		$(
			impl Successor for $int {
				fn successor(&self) -> Option<Self> {
					self.checked_add(1)
				}
			}
		)*
	};
}

successor_impls!(
	u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize,
);

/// Returns `true` if `floor` is the value directly after `ceiling`, so
/// `[0, 9]` followed by `[10, 19]` is contiguous for integers.
///
/// # Examples
/// ```
/// use fastrange::predicate::touching;
///
/// assert!(touching(&9, &10));
/// assert!(!touching(&9, &9));
/// assert!(!touching(&9, &11));
/// assert!(!touching(&u8::MAX, &u8::MIN));
/// ```
pub fn touching<I>(ceiling: &I, floor: &I) -> bool
where
	I: Successor + PartialEq,
{
	ceiling.successor().is_some_and(|next| next == *floor)
}

/// Never reports contiguity. This is the predicate a
/// [`RangeCheck`](crate::RangeCheck) uses until one is installed.
pub fn never<I>(_ceiling: &I, _floor: &I) -> bool {
	false
}
