use std::ops::{Deref, Range};

use crate::search::time_range;
use crate::{TimeCell, Timestamp};

/// An ordered sequence of [`TimeCell`]s.
///
/// The series is not required to be sorted. Operations that depend on time order
/// ([`TimeSeries::between`], [`TimeSeries::sort`]) sort the backing storage in place,
/// and that order stays visible afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeSeries<V> {
    cells: Vec<TimeCell<V>>,
}

impl<V> Default for TimeSeries<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TimeSeries<V> {
    pub fn new() -> Self {
        TimeSeries { cells: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TimeSeries {
            cells: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, time: Timestamp, value: V) {
        self.cells.push(TimeCell::new(time, value))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[TimeCell<V>] {
        &self.cells
    }

    pub fn into_inner(self) -> Vec<TimeCell<V>> {
        self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeCell<V>> {
        self.cells.iter()
    }

    /// Time of the first cell in storage order. Call [`TimeSeries::sort`] first to get
    /// the earliest time of an unsorted series.
    pub fn first_time(&self) -> Option<Timestamp> {
        self.cells.first().map(TimeCell::time)
    }

    /// Time of the last cell in storage order.
    pub fn last_time(&self) -> Option<Timestamp> {
        self.cells.last().map(TimeCell::time)
    }

    /// Stable sort by time. Cells sharing a timestamp keep their relative order.
    pub fn sort(&mut self) {
        self.cells.sort_by(TimeCell::cmp_time);
    }

    pub fn is_sorted(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].time() <= w[1].time())
    }

    /// Returns the cells in `[t0, t1]`, sorting the series first.
    ///
    /// The lower bound is inclusive. The upper bound is inclusive only when a cell's
    /// time equals `t1` exactly; otherwise cells at or after `t1` are excluded.
    /// `t0` and `t1` may be given in either order.
    ///
    /// The returned slice borrows the (now sorted) storage of this series. Copy it
    /// with `to_vec()` if an independent series is needed.
    pub fn between(&mut self, t0: Timestamp, t1: Timestamp) -> &[TimeCell<V>] {
        if self.cells.is_empty() {
            return &[];
        }
        self.sort();
        let range = time_range(&self.cells, TimeCell::time, t0, t1);
        &self.cells[range]
    }

    /// Same bounds as [`TimeSeries::between`] without sorting. Returns `None` if the
    /// series is not sorted.
    pub fn range(&self, t0: Timestamp, t1: Timestamp) -> Option<Range<usize>> {
        if !self.is_sorted() {
            return None;
        }
        Some(time_range(&self.cells, TimeCell::time, t0, t1))
    }
}

impl<V> Deref for TimeSeries<V> {
    type Target = [TimeCell<V>];

    fn deref(&self) -> &Self::Target {
        &self.cells
    }
}

impl<V> From<Vec<TimeCell<V>>> for TimeSeries<V> {
    fn from(cells: Vec<TimeCell<V>>) -> Self {
        TimeSeries { cells }
    }
}

impl<V: Clone> From<&[TimeCell<V>]> for TimeSeries<V> {
    fn from(cells: &[TimeCell<V>]) -> Self {
        TimeSeries {
            cells: cells.to_vec(),
        }
    }
}

impl<V> From<TimeSeries<V>> for Vec<TimeCell<V>> {
    fn from(series: TimeSeries<V>) -> Self {
        series.cells
    }
}

impl<V> FromIterator<TimeCell<V>> for TimeSeries<V> {
    fn from_iter<I: IntoIterator<Item = TimeCell<V>>>(iter: I) -> Self {
        TimeSeries {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<V> FromIterator<(Timestamp, V)> for TimeSeries<V> {
    fn from_iter<I: IntoIterator<Item = (Timestamp, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(time, value)| TimeCell::new(time, value))
            .collect()
    }
}

impl<V> IntoIterator for TimeSeries<V> {
    type Item = TimeCell<V>;
    type IntoIter = std::vec::IntoIter<TimeCell<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a TimeSeries<V> {
    type Item = &'a TimeCell<V>;
    type IntoIter = std::slice::Iter<'a, TimeCell<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
