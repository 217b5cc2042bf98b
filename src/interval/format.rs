use std::fmt::{self, Debug, Display, Formatter, Result};
use super::range::Range;

/// Renders as "{start} to {end}".
/// Formatting options such as width and precision apply to both values,
/// so `format!("{:.1}", range)` gives "1.0 to 2.5".
impl<T: Display> Display for Range<T> {
  fn fmt(&self, f: &mut Formatter) -> Result {
    Display::fmt(self.start(), f)?;
    f.write_str(" to ")?;
    Display::fmt(self.end(), f)
  }
}

/// Interval notation, as in "[1, 5)".
impl<T: Debug> Debug for Range<T> {
  fn fmt(&self, f: &mut Formatter) -> Result {
    let left_bracket = if self.is_start_included() { "[" } else { "(" };
    let right_bracket = if self.is_end_included() { "]" } else { ")" };
    write!(f, "{}{:?}, {:?}{}", left_bracket, self.start(), self.end(), right_bracket)
  }
}

macro_rules! forward_format_trait {
  ($($format_trait:ident),*) => {
    $(
      impl<T: fmt::$format_trait> fmt::$format_trait for Range<T> {
        fn fmt(&self, f: &mut Formatter) -> Result {
          fmt::$format_trait::fmt(self.start(), f)?;
          f.write_str(" to ")?;
          fmt::$format_trait::fmt(self.end(), f)
        }
      }
    )*
  };
}

forward_format_trait!(LowerHex, UpperHex, Octal, Binary, LowerExp, UpperExp);

/// Display adapter returned by [`Range::display_with`].
pub struct DisplayWith<'a, T, F> {
  range: &'a Range<T>,
  format_value: F
}

impl<T> Range<T> {
  /// Render the range with a custom formatter applied to each value.
  pub fn display_with<F>(&self, format_value: F) -> DisplayWith<'_, T, F>
  where F: Fn(&T, &mut Formatter) -> Result {
    DisplayWith { range: self, format_value }
  }
}

impl<'a, T, F> Display for DisplayWith<'a, T, F>
where F: Fn(&T, &mut Formatter) -> Result {
  fn fmt(&self, f: &mut Formatter) -> Result {
    (self.format_value)(self.range.start(), f)?;
    f.write_str(" to ")?;
    (self.format_value)(self.range.end(), f)
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use super::super::range::Range;

  #[test]
  fn test_to_string() {
    assert_eq!("0 to 65".to_string(), Range::with_bounds(0, 65, true, false).unwrap().to_string(), "inclusive exclusive range");
    assert_eq!("a to b".to_string(), Range::new("a", "b").unwrap().to_string(), "strings");
  }

  #[test]
  fn test_format_applies_to_both_values() {
    let r = Range::new(1, 3).unwrap();
    assert_eq!("1 to 3", format!("{}", r), "plain");
    assert_eq!("  1 to   3", format!("{:>3}", r), "width");
    assert_eq!("001 to 003", format!("{:03}", r), "zero padding");
    assert_eq!("1    to 3   ", format!("{:<4}", r), "left aligned");
  }

  #[test]
  fn test_numeric_format_traits() {
    let r = Range::new(10, 255).unwrap();
    assert_eq!("a to ff", format!("{:x}", r), "lower hex");
    assert_eq!("0xA to 0xFF", format!("{:#X}", r), "upper hex with prefix");
    assert_eq!("1010 to 11111111", format!("{:b}", r), "binary");
    assert_eq!("12 to 377", format!("{:o}", r), "octal");
  }

  #[test]
  fn test_display_with() {
    let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let r = Range::with_bounds(ymd(2024, 1, 1), ymd(2024, 3, 31), true, true).unwrap();
    let rendered = r.display_with(|date, f| write!(f, "{}", date.format("%d/%m/%Y"))).to_string();
    assert_eq!("01/01/2024 to 31/03/2024", rendered);
  }

  #[test]
  fn test_debug() {
    assert_eq!("[0, 65)", format!("{:?}", Range::with_bounds(0, 65, true, false).unwrap()), "inclusive exclusive");
    assert_eq!("(0, 65]", format!("{:?}", Range::with_bounds(0, 65, false, true).unwrap()), "exclusive inclusive");
    assert_eq!("(\"a\", \"b\")", format!("{:?}", Range::with_bounds("a", "b", false, false).unwrap()), "open strings");
  }
}
