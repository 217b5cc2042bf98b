//! Immutable ranges over any totally ordered type, where each limit
//! may be inclusive or exclusive.
//!
//! ```ignore
//! use spans::RangeExt;
//!
//! let a = 1.to(5, true, true)?;
//! let b = 5.to(10, true, true)?;
//! assert!(a.overlaps(&b));
//! assert_eq!("5 to 5", a.intersection(&b).unwrap().to_string());
//! ```
//!
//! `RangeFromExt` adds `end.from(start, ..)`. It is a separate import because
//! its `from` method makes `String::from` and friends ambiguous while in scope.
#![forbid(unsafe_code)]

extern crate strum;
#[macro_use]
extern crate strum_macros;

pub mod interval;

pub use interval::boundary::Boundary;
pub use interval::builders::{RangeExt, RangeFromExt, closed, create, open};
pub use interval::float_range::FloatRange;
pub use interval::format::DisplayWith;
pub use interval::range::Range;
pub use interval::range_error::RangeError;
