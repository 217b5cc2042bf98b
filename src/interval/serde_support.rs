use serde::de::{self, Deserialize, Deserializer};
use super::range::Range;

fn inclusive() -> bool {
  true
}

// Wire form of a Range, checked by the constructor before use.
#[derive(serde::Deserialize)]
struct RawRange<T> {
  start: T,
  end: T,
  #[serde(default = "inclusive")]
  start_inclusive: bool,
  #[serde(default = "inclusive")]
  end_inclusive: bool
}

impl<'de, T> Deserialize<'de> for Range<T>
where T: Deserialize<'de> + Ord {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where D: Deserializer<'de> {
    let raw = RawRange::<T>::deserialize(deserializer)?;
    Range::with_bounds(raw.start, raw.end, raw.start_inclusive, raw.end_inclusive).map_err(de::Error::custom)
  }
}
