use std::borrow::Cow;
use std::cmp::Ordering;
use tracing::{debug, trace};
use super::boundary::{Boundary, compare_lower, compare_upper, lower_reaches_upper};
use super::range_error::RangeError;

/// An immutable range of values between a start and an end,
/// either of which may be inclusive or exclusive.
///   - The start never sorts after the end; construction rejects that.
///   - When start equals end the range holds a single value if both bounds are inclusive,
///     otherwise it holds no values but is still well formed.
///   - Equality and hashing are structural over all four fields.
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Range<T> {
  start: T,
  end: T,
  start_inclusive: bool,
  end_inclusive: bool
}

impl<T: Ord> Range<T> {

  /// Create a closed Range that includes both its start and end values.
  pub fn new(start: T, end: T) -> Result<Self, RangeError> {
    Range::with_bounds(start, end, true, true)
  }

  /// Create a Range, choosing whether each limit is inclusive.
  /// Fails with OutOfRange if start is greater than end.
  pub fn with_bounds(start: T, end: T, start_inclusive: bool, end_inclusive: bool) -> Result<Self, RangeError> {
    if start > end {
      debug!(start_inclusive, end_inclusive, "rejected range whose start is greater than its end");
      return Err(RangeError::OutOfRange);
    }
    Ok(Range::from_parts(start, end, start_inclusive, end_inclusive))
  }

  /// Create a Range from a pair of Boundary values.
  pub fn with_boundaries(start: T, end: T, start_boundary: Boundary, end_boundary: Boundary) -> Result<Self, RangeError> {
    Range::with_bounds(start, end, start_boundary.is_inclusive(), end_boundary.is_inclusive())
  }

  // Callers must already know that start <= end.
  pub(crate) fn from_parts(start: T, end: T, start_inclusive: bool, end_inclusive: bool) -> Self {
    Range { start, end, start_inclusive, end_inclusive }
  }

  /// A range whose start equals its end holds no values unless both ends are inclusive.
  pub fn is_empty(&self) -> bool {
    self.start == self.end && !(self.start_inclusive && self.end_inclusive)
  }

  /// True if the value is not below the start bound.
  pub fn satisfies_start(&self, value: &T) -> bool {
    if self.start_inclusive {
      self.start <= *value
    }
    else {
      self.start < *value
    }
  }

  /// True if the value is not above the end bound.
  pub fn satisfies_end(&self, value: &T) -> bool {
    if self.end_inclusive {
      self.end >= *value
    }
    else {
      self.end > *value
    }
  }

  /// Tests if the value falls within the Range.
  pub fn includes(&self, value: &T) -> bool {
    self.satisfies_start(value) && self.satisfies_end(value)
  }

  /// Compare the value to the range and decide if it falls before the range starts (Less),
  /// inside the range (Equal), or after the range ends (Greater).
  pub fn compare_value(&self, value: &T) -> Ordering {
    match (self.satisfies_start(value), self.satisfies_end(value)) {
      (false, _) => Ordering::Less,
      (true, true) => Ordering::Equal,
      _ => Ordering::Greater
    }
  }

  /// True if every value in the other range is also in this one.
  /// Only the bounds are consulted, so an empty range is included
  /// only where its bounds fit.
  pub fn includes_range(&self, other: &Range<T>) -> bool {
    compare_lower(&self.start, self.start_inclusive, &other.start, other.start_inclusive) != Ordering::Greater
      && compare_upper(&self.end, self.end_inclusive, &other.end, other.end_inclusive) != Ordering::Less
  }

  /// True if the ranges share a value or one contains the other.
  /// An empty range sitting on the other's boundary still overlaps it
  /// when it is contained.
  pub fn overlaps(&self, other: &Range<T>) -> bool {
    (lower_reaches_upper(&self.start, self.start_inclusive, &other.end, other.end_inclusive)
      && lower_reaches_upper(&other.start, other.start_inclusive, &self.end, self.end_inclusive))
      || self.includes_range(other)
      || other.includes_range(self)
  }

  /// Every value in this range is less than every value in the other.
  pub fn before(&self, other: &Range<T>) -> bool {
    !lower_reaches_upper(&other.start, other.start_inclusive, &self.end, self.end_inclusive)
  }

  /// Every value in this range is greater than every value in the other.
  pub fn after(&self, other: &Range<T>) -> bool {
    other.before(self)
  }

  /// This range ends, inclusively, on the value where the other begins inclusively.
  pub fn meets(&self, other: &Range<T>) -> bool {
    self.end_inclusive && other.start_inclusive && self.end == other.start
  }

  /// The other range ends, inclusively, on the value where this one begins inclusively.
  pub fn met_by(&self, other: &Range<T>) -> bool {
    other.meets(self)
  }

  /// Returns an identical range save for the start being excluded.
  /// An already exclusive start returns the range untouched.
  pub fn exclude_start(self) -> Self {
    if self.start_inclusive {
      Range { start_inclusive: false, ..self }
    }
    else {
      self
    }
  }

  /// Returns an identical range save for the start being included.
  pub fn include_start(self) -> Self {
    if self.start_inclusive {
      self
    }
    else {
      Range { start_inclusive: true, ..self }
    }
  }

  /// Returns an identical range save for the end being excluded.
  pub fn exclude_end(self) -> Self {
    if self.end_inclusive {
      Range { end_inclusive: false, ..self }
    }
    else {
      self
    }
  }

  /// Returns an identical range save for the end being included.
  pub fn include_end(self) -> Self {
    if self.end_inclusive {
      self
    }
    else {
      Range { end_inclusive: true, ..self }
    }
  }
}

impl<T> Range<T> {
  /// Gets the start value of the range.
  pub fn start(&self) -> &T {
    &self.start
  }

  /// Gets the end value of the range.
  pub fn end(&self) -> &T {
    &self.end
  }

  /// Gets whether the start value is a member of the range.
  pub fn is_start_included(&self) -> bool {
    self.start_inclusive
  }

  /// Gets whether the end value is a member of the range.
  pub fn is_end_included(&self) -> bool {
    self.end_inclusive
  }

  /// Gets the start bound as a Boundary.
  pub fn start_boundary(&self) -> Boundary {
    self.start_inclusive.into()
  }

  /// Gets the end bound as a Boundary.
  pub fn end_boundary(&self) -> Boundary {
    self.end_inclusive.into()
  }

  /// Take ownership of the (start, end) values.
  pub fn into_inner(self) -> (T, T) {
    (self.start, self.end)
  }
}

impl<T: Ord + Clone> Range<T> {
  /// The range of values common to both ranges, or None if they share none.
  ///
  /// If one range contains the other, the contained range is returned borrowed.
  /// Otherwise a new range is built from the later start and the earlier end,
  /// each keeping the inclusivity of the range it came from.
  pub fn intersection<'a>(&'a self, other: &'a Range<T>) -> Option<Cow<'a, Range<T>>> {
    if self.includes_range(other) {
      return Some(Cow::Borrowed(other));
    }
    if other.includes_range(self) {
      return Some(Cow::Borrowed(self));
    }
    if !self.overlaps(other) {
      trace!("intersection of disjoint ranges is empty");
      return None;
    }
    let (start, start_inclusive) = match compare_lower(&self.start, self.start_inclusive, &other.start, other.start_inclusive) {
      Ordering::Less => (&other.start, other.start_inclusive),
      _ => (&self.start, self.start_inclusive)
    };
    let (end, end_inclusive) = match compare_upper(&self.end, self.end_inclusive, &other.end, other.end_inclusive) {
      Ordering::Greater => (&other.end, other.end_inclusive),
      _ => (&self.end, self.end_inclusive)
    };
    // Overlap guarantees the later start does not pass the earlier end.
    Some(Cow::Owned(Range::from_parts(start.clone(), end.clone(), start_inclusive, end_inclusive)))
  }
}

impl<T: Ord> PartialOrd for Range<T> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<T: Ord> Ord for Range<T> {
  /// Order the ranges first by the start value.
  /// If the starts are equal but one is included and the other excluded,
  /// the excluded start comes first.
  /// Then a range with an included end comes before one with an excluded end.
  /// Finally ranges are ordered by the end value.
  fn cmp(&self, other: &Self) -> Ordering {
    self.start.cmp(&other.start)
      .then_with(|| self.start_inclusive.cmp(&other.start_inclusive))
      .then_with(|| other.end_inclusive.cmp(&self.end_inclusive))
      .then_with(|| self.end.cmp(&other.end))
  }
}

/////////////// TESTS /////////////////
