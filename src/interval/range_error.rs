use thiserror::Error;

/// Reasons a Range could not be built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
  /// The start value sorts after the end value.
  #[error("start value must be less than or equal to end value")]
  OutOfRange,

  /// A std range bound was Unbounded, which a Range cannot represent.
  #[error("range bounds must be included or excluded, not unbounded")]
  Unbounded,

  /// A floating point endpoint was NaN.
  #[error("range endpoints must not be NaN")]
  NotANumber
}

#[cfg(test)]
mod tests {
  use super::RangeError;

  #[test]
  fn test_display() {
    assert_eq!(
      "start value must be less than or equal to end value".to_string(),
      RangeError::OutOfRange.to_string(),
      "out of range message"
    );
    assert_eq!(
      "range endpoints must not be NaN".to_string(),
      RangeError::NotANumber.to_string(),
      "nan message"
    );
  }
}
