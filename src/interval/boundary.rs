use std::cmp::Ordering;
use std::ops::Bound;

/// Whether a boundary value is itself a member of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Boundary {
  Inclusive,
  Exclusive
}

impl Boundary {
  pub fn is_inclusive(self) -> bool {
    self == Boundary::Inclusive
  }

  /// Wrap a borrowed value in the matching std Bound.
  pub fn bound<T>(self, value: &T) -> Bound<&T> {
    match self {
      Boundary::Inclusive => Bound::Included(value),
      Boundary::Exclusive => Bound::Excluded(value)
    }
  }
}

impl From<bool> for Boundary {
  fn from(inclusive: bool) -> Self {
    if inclusive { Boundary::Inclusive } else { Boundary::Exclusive }
  }
}

impl From<Boundary> for bool {
  fn from(boundary: Boundary) -> Self {
    boundary.is_inclusive()
  }
}

// Bound comparisons.
//   A lower bound that admits fewer values compares Greater,
//   so for equal values the exclusive lower bound is Greater.
//   An upper bound that admits more values compares Greater,
//   so for equal values the inclusive upper bound is Greater.

/// Compare two lower bounds given as (value, inclusive) pairs.
pub(crate) fn compare_lower<T: Ord>(a: &T, a_inclusive: bool, b: &T, b_inclusive: bool) -> Ordering {
  a.cmp(b).then_with(|| b_inclusive.cmp(&a_inclusive))
}

/// Compare two upper bounds given as (value, inclusive) pairs.
pub(crate) fn compare_upper<T: Ord>(a: &T, a_inclusive: bool, b: &T, b_inclusive: bool) -> Ordering {
  a.cmp(b).then_with(|| a_inclusive.cmp(&b_inclusive))
}

/// True if some value can satisfy both the lower and the upper bound.
/// Equal values only qualify when both bounds include them.
pub(crate) fn lower_reaches_upper<T: Ord>(lower: &T, lower_inclusive: bool, upper: &T, upper_inclusive: bool) -> bool {
  match lower.cmp(upper) {
    Ordering::Less => true,
    Ordering::Equal => lower_inclusive && upper_inclusive,
    Ordering::Greater => false
  }
}
