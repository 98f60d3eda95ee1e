//! A module containing [`RangeElement`], the validated range-bound type
//! accepted by [`RangeSearch`](crate::RangeSearch).

use thiserror::Error;

/// The marker trait for valid point types, a blanket implementation is
/// provided for all types which implement this traits' super-traits so you
/// shouln't need to implement this yourself.
pub trait PointType: Ord {}
impl<I> PointType for I where I: Ord {}

/// The error returned when constructing a [`RangeElement`] whose floor is
/// not strictly below its ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRangeError {
	/// The floor and the ceiling were equal.
	#[error("the floor and ceiling of a range cannot be equal")]
	EqualBounds,
	/// The floor was greater than the ceiling.
	#[error("the floor cannot be greater than the ceiling in a range")]
	FloorAboveCeiling,
}

/// A range with an inclusive `floor` and an inclusive `ceiling`.
///
/// A `RangeElement` always satisfies `floor < ceiling`, the only way to
/// obtain one is through [`RangeElement::new()`] (or the equivalent
/// [`TryFrom`] impl) which rejects both equal and inverted bounds.
///
/// # Examples
/// ```
/// use fastrange::{InvalidRangeError, RangeElement};
///
/// let range = RangeElement::new(10, 19).unwrap();
///
/// assert_eq!(range.floor(), &10);
/// assert_eq!(range.ceiling(), &19);
/// assert!(range.contains(&19));
///
/// assert_eq!(RangeElement::new(4, 4), Err(InvalidRangeError::EqualBounds));
/// assert_eq!(
/// 	RangeElement::try_from((9, 2)),
/// 	Err(InvalidRangeError::FloorAboveCeiling)
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RangeElement<I> {
	floor: I,
	ceiling: I,
}

impl<I> RangeElement<I>
where
	I: PointType,
{
	/// Makes a new `RangeElement`, failing if `floor >= ceiling`.
	pub fn new(floor: I, ceiling: I) -> Result<Self, InvalidRangeError> {
		match floor.cmp(&ceiling) {
			core::cmp::Ordering::Less => Ok(RangeElement { floor, ceiling }),
			core::cmp::Ordering::Equal => Err(InvalidRangeError::EqualBounds),
			core::cmp::Ordering::Greater => {
				Err(InvalidRangeError::FloorAboveCeiling)
			}
		}
	}

	/// Returns `true` if `point` lies within the range, both ends
	/// inclusive.
	pub fn contains(&self, point: &I) -> bool {
		*point >= self.floor && *point <= self.ceiling
	}
}

impl<I> RangeElement<I> {
	/// The inclusive lower bound.
	pub fn floor(&self) -> &I {
		&self.floor
	}

	/// The inclusive upper bound.
	pub fn ceiling(&self) -> &I {
		&self.ceiling
	}

	/// Splits the range into its `(floor, ceiling)` bounds.
	pub fn into_bounds(self) -> (I, I) {
		(self.floor, self.ceiling)
	}
}

impl<I> TryFrom<(I, I)> for RangeElement<I>
where
	I: PointType,
{
	type Error = InvalidRangeError;

	fn try_from((floor, ceiling): (I, I)) -> Result<Self, Self::Error> {
		RangeElement::new(floor, ceiling)
	}
}

#[cfg(feature = "serde")]
mod serde {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};

	use super::{PointType, RangeElement};

	impl<I> Serialize for RangeElement<I>
	where
		I: Serialize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			(&self.floor, &self.ceiling).serialize(serializer)
		}
	}

	impl<'de, I> Deserialize<'de> for RangeElement<I>
	where
		I: PointType + Deserialize<'de>,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let (floor, ceiling) = <(I, I)>::deserialize(deserializer)?;
			RangeElement::new(floor, ceiling).map_err(serde::de::Error::custom)
		}
	}
}
