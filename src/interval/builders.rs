use super::range::Range;
use super::range_error::RangeError;

// Convenience constructors. Each is an alias for Range::with_bounds.

/// Create a Range, choosing whether each limit is inclusive.
pub fn create<T: Ord>(start: T, end: T, start_inclusive: bool, end_inclusive: bool) -> Result<Range<T>, RangeError> {
  Range::with_bounds(start, end, start_inclusive, end_inclusive)
}

/// Create a Range that includes both limits, written [start, end].
pub fn closed<T: Ord>(start: T, end: T) -> Result<Range<T>, RangeError> {
  Range::with_bounds(start, end, true, true)
}

/// Create a Range that excludes both limits, written (start, end).
pub fn open<T: Ord>(start: T, end: T) -> Result<Range<T>, RangeError> {
  Range::with_bounds(start, end, false, false)
}

/// Build a range from its start, as in `1.to(5, true, false)`.
pub trait RangeExt: Ord + Sized {
  /// Use this value as the start of a range that runs to `end`.
  fn to(self, end: Self, start_inclusive: bool, end_inclusive: bool) -> Result<Range<Self>, RangeError> {
    create(self, end, start_inclusive, end_inclusive)
  }
}

impl<T: Ord> RangeExt for T {}

/// Build a range from its end, as in `5.from(1, true, false)`.
///
/// Kept apart from [`RangeExt`] because its `from` method clashes with
/// `From::from`: while this trait is in scope, `String::from(..)` and
/// `i64::from(..)` are ambiguous and must be written `<String as From<_>>::from(..)`.
/// Import it only in modules that build ranges this way.
pub trait RangeFromExt: Ord + Sized {
  /// Use this value as the end of a range that begins at `start`.
  fn from(self, start: Self, start_inclusive: bool, end_inclusive: bool) -> Result<Range<Self>, RangeError> {
    create(start, self, start_inclusive, end_inclusive)
  }
}

impl<T: Ord> RangeFromExt for T {}


#[cfg(test)]
mod from_tests {
  use super::super::range::Range;
  use super::super::range_error::RangeError;
  use super::tests::all_bounds;
  use super::RangeFromExt;

  #[test]
  fn test_from_method_is_a_constructor_alias() {
    for (si, ei) in all_bounds() {
      assert_eq!(Range::with_bounds(0, 5, si, ei), 5.from(0, si, ei), "bounds {} {}", si, ei);
    }
  }

  #[test]
  fn test_from_rejects_start_after_end() {
    assert_eq!(Err(RangeError::OutOfRange), 1.from(5, true, true));
  }
}
