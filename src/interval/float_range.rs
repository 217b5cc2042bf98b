use ordered_float::OrderedFloat;
use super::range::Range;
use super::range_error::RangeError;

/// A Range over 64 bit floats, ordered with OrderedFloat.
pub type FloatRange = Range<OrderedFloat<f64>>;

impl Range<OrderedFloat<f64>> {
  /// Create a FloatRange from raw floats. NaN is refused at either end.
  pub fn from_f64(start: f64, end: f64, start_inclusive: bool, end_inclusive: bool) -> Result<Self, RangeError> {
    if start.is_nan() || end.is_nan() {
      return Err(RangeError::NotANumber);
    }
    Range::with_bounds(OrderedFloat(start), OrderedFloat(end), start_inclusive, end_inclusive)
  }

  pub fn includes_f64(&self, value: f64) -> bool {
    !value.is_nan() && self.includes(&OrderedFloat(value))
  }
}
