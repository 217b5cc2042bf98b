use std::convert::TryFrom;
use std::ops::{Bound, RangeBounds, RangeInclusive};
use std::ops::Range as OpsRange;
use super::range::Range;
use super::range_error::RangeError;

/// Lets a Range select keys from ordered collections such as BTreeMap::range.
impl<T> RangeBounds<T> for Range<T> {
  fn start_bound(&self) -> Bound<&T> {
    self.start_boundary().bound(self.start())
  }
  fn end_bound(&self) -> Bound<&T> {
    self.end_boundary().bound(self.end())
  }
}

impl<T: Ord + Clone> Range<T> {
  /// Build a Range from anything with std bounds.
  /// Unbounded limits are rejected since every Range has two values.
  pub fn try_from_bounds<R: RangeBounds<T>>(bounds: R) -> Result<Self, RangeError> {
    let (start, start_inclusive) = match bounds.start_bound() {
      Bound::Included(low) => (low.clone(), true),
      Bound::Excluded(low) => (low.clone(), false),
      Bound::Unbounded => return Err(RangeError::Unbounded)
    };
    let (end, end_inclusive) = match bounds.end_bound() {
      Bound::Included(high) => (high.clone(), true),
      Bound::Excluded(high) => (high.clone(), false),
      Bound::Unbounded => return Err(RangeError::Unbounded)
    };
    Range::with_bounds(start, end, start_inclusive, end_inclusive)
  }
}

/// `start..end` becomes [start, end).
impl<T: Ord> TryFrom<OpsRange<T>> for Range<T> {
  type Error = RangeError;

  fn try_from(r: OpsRange<T>) -> Result<Self, Self::Error> {
    Range::with_bounds(r.start, r.end, true, false)
  }
}

/// `start..=end` becomes [start, end].
impl<T: Ord> TryFrom<RangeInclusive<T>> for Range<T> {
  type Error = RangeError;

  fn try_from(r: RangeInclusive<T>) -> Result<Self, Self::Error> {
    let (start, end) = r.into_inner();
    Range::with_bounds(start, end, true, true)
  }
}
