pub mod boundary;
pub mod builders;
pub mod conversions;
pub mod float_range;
pub mod format;
pub mod range;
pub mod range_error;
#[cfg(feature = "serde")]
pub mod serde_support;
