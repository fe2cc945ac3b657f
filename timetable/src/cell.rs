use std::cmp::Ordering;
use std::fmt;

use crate::Timestamp;

/// A single observation: a timestamp and the value recorded at it.
///
/// Cells are ordered by [`TimeCell::cmp_time`], which ignores the value.
/// `PartialEq` still compares both fields.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeCell<V> {
    time: Timestamp,
    value: V,
}

impl<V> TimeCell<V> {
    pub fn new(time: Timestamp, value: V) -> Self {
        TimeCell { time, value }
    }

    #[inline]
    pub fn time(&self) -> Timestamp {
        self.time
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (Timestamp, V) {
        (self.time, self.value)
    }

    /// Compares two cells by timestamp only.
    #[inline]
    pub fn cmp_time(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time)
    }
}

impl<V> From<(Timestamp, V)> for TimeCell<V> {
    fn from((time, value): (Timestamp, V)) -> Self {
        TimeCell::new(time, value)
    }
}

impl<V: fmt::Debug> fmt::Debug for TimeCell<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeCell {{ time: {}, value: {:?} }}",
            self.time.to_rfc3339(),
            self.value
        )
    }
}
