use itertools::{EitherOrBoth, Itertools};
use tracing::{debug, trace};

use crate::search::time_range;
use crate::{DefaultFill, FillPolicy, TableError, TableResult, TimeCell, TimeSeries, Timestamp};

/// A set of value columns sharing one ascending, duplicate-free time axis.
///
/// A table starts out [`AlignedTable::Uninitialized`] (no columns, no rows). The first
/// [`AlignedTable::add_column`] turns it into [`AlignedTable::Populated`]. A populated
/// table may have zero rows: that is the "no overlap" state, reached when an added series
/// shares no time span with the table, and it is kept for every later column.
///
/// Every operation returns a new table; there is no cell-level mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlignedTable<V> {
    Uninitialized,
    Populated(Frame<V>),
}

/// The storage of a populated table: the time axis and one value vector per column.
///
/// Invariants: `times` is strictly ascending, there is at least one column, and every
/// column has exactly `times.len()` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<V> {
    times: Vec<Timestamp>,
    columns: Vec<Vec<V>>,
}

impl<V> Frame<V> {
    fn zero_rows(column_count: usize) -> Self {
        Frame {
            times: Vec::new(),
            columns: (0..column_count).map(|_| Vec::new()).collect(),
        }
    }

    pub fn times(&self) -> &[Timestamp] {
        &self.times
    }

    pub fn columns(&self) -> &[Vec<V>] {
        &self.columns
    }

    fn check_invariants(&self) {
        for (i, column) in self.columns.iter().enumerate() {
            if column.len() != self.times.len() {
                panic!(
                    "BUG: column {i} has {} values; want {}",
                    column.len(),
                    self.times.len()
                );
            }
        }
        if self.times.windows(2).any(|w| w[0] >= w[1]) {
            panic!("BUG: time axis is not strictly ascending");
        }
    }
}

impl<V> Default for AlignedTable<V> {
    fn default() -> Self {
        AlignedTable::Uninitialized
    }
}

impl<V> AlignedTable<V> {
    pub fn new() -> Self {
        AlignedTable::Uninitialized
    }

    /// Assembles a table from an axis and its columns, as found in an external
    /// representation. Rows are put in canonical order first.
    ///
    /// No columns and no times give an uninitialized table.
    pub fn from_parts(times: Vec<Timestamp>, columns: Vec<Vec<V>>) -> TableResult<Self> {
        if columns.is_empty() {
            return if times.is_empty() {
                Ok(AlignedTable::Uninitialized)
            } else {
                Err(TableError::MissingColumns(times.len()))
            };
        }
        for (column, values) in columns.iter().enumerate() {
            if values.len() != times.len() {
                return Err(TableError::ColumnLength {
                    column,
                    expected: times.len(),
                    actual: values.len(),
                });
            }
        }
        let mut table = AlignedTable::Populated(Frame { times, columns });
        table.canonicalize();
        if let AlignedTable::Populated(frame) = &table {
            if let Some(w) = frame.times.windows(2).find(|w| w[0] == w[1]) {
                return Err(TableError::DuplicateTimestamp(w[0]));
            }
        }
        Ok(table)
    }

    pub fn is_uninitialized(&self) -> bool {
        matches!(self, AlignedTable::Uninitialized)
    }

    /// True for a populated table without rows.
    pub fn is_zero_row(&self) -> bool {
        match self {
            AlignedTable::Uninitialized => false,
            AlignedTable::Populated(frame) => frame.times.is_empty(),
        }
    }

    pub fn frame(&self) -> Option<&Frame<V>> {
        match self {
            AlignedTable::Uninitialized => None,
            AlignedTable::Populated(frame) => Some(frame),
        }
    }

    pub fn number_of_columns(&self) -> usize {
        self.frame().map_or(0, |f| f.columns.len())
    }

    pub fn number_of_rows(&self) -> usize {
        self.frame().map_or(0, |f| f.times.len())
    }

    pub fn number_of_cells(&self) -> usize {
        self.number_of_columns() * self.number_of_rows()
    }

    pub fn first_time(&self) -> Option<Timestamp> {
        self.underlying_times().first().copied()
    }

    pub fn last_time(&self) -> Option<Timestamp> {
        self.underlying_times().last().copied()
    }

    /// Borrows the time axis. Empty for an uninitialized table.
    ///
    /// The slice is tied to this table and cannot outlive or modify it; use
    /// [`AlignedTable::times`] for an owned copy.
    pub fn underlying_times(&self) -> &[Timestamp] {
        match self {
            AlignedTable::Uninitialized => &[],
            AlignedTable::Populated(frame) => &frame.times,
        }
    }

    /// Borrows the value columns. See [`AlignedTable::underlying_times`].
    pub fn underlying_values(&self) -> &[Vec<V>] {
        match self {
            AlignedTable::Uninitialized => &[],
            AlignedTable::Populated(frame) => &frame.columns,
        }
    }

    /// Puts the rows in ascending time order.
    ///
    /// A single permutation is computed from the time axis and applied to the axis and
    /// to every column, so rows never come apart. The sort is stable. Tables built by
    /// this crate are already canonical, which makes this a no-op for them.
    pub fn canonicalize(&mut self) {
        let AlignedTable::Populated(frame) = self else {
            return;
        };
        if frame.times.windows(2).all(|w| w[0] <= w[1]) {
            return;
        }
        debug!(rows = frame.times.len(), "reordering rows into canonical order");

        let mut permutation: Vec<usize> = (0..frame.times.len()).collect();
        permutation.sort_by_key(|&i| frame.times[i]);

        frame.times = apply_permutation(std::mem::take(&mut frame.times), &permutation);
        for column in frame.columns.iter_mut() {
            *column = apply_permutation(std::mem::take(column), &permutation);
        }
    }
}

impl<V: Clone> AlignedTable<V> {
    /// Builds a table by adding each series in turn, filling gaps with `V::default()`.
    pub fn from_series<I>(series: I) -> Self
    where
        I: IntoIterator<Item = TimeSeries<V>>,
        V: Default,
    {
        series
            .into_iter()
            .fold(AlignedTable::new(), |table, s| table.add_column_with_default(s))
    }

    /// Owned copy of the time axis.
    pub fn times(&self) -> Vec<Timestamp> {
        self.underlying_times().to_vec()
    }

    /// Owned copy of every column.
    pub fn values(&self) -> Vec<Vec<V>> {
        self.underlying_values().to_vec()
    }

    /// The values of every column at time `t`, or `None` when the axis has no row at
    /// exactly `t`.
    pub fn row(&self, t: Timestamp) -> Option<Vec<V>> {
        let frame = self.frame()?;
        let index = frame.times.binary_search(&t).ok()?;
        Some(frame.columns.iter().map(|c| c[index].clone()).collect())
    }

    /// Column `index` paired with the time axis, or `None` if there is no such column.
    pub fn column(&self, index: usize) -> Option<TimeSeries<V>> {
        let frame = self.frame()?;
        let values = frame.columns.get(index)?;
        Some(
            frame
                .times
                .iter()
                .zip(values.iter())
                .map(|(t, v)| TimeCell::new(*t, v.clone()))
                .collect(),
        )
    }

    /// Iterates over `(time, row values)` in axis order.
    pub fn iter_rows(&self) -> impl Iterator<Item = (Timestamp, Vec<V>)> + '_ {
        let columns = self.underlying_values();
        self.underlying_times()
            .iter()
            .enumerate()
            .map(move |(i, t)| (*t, columns.iter().map(|c| c[i].clone()).collect()))
    }

    /// Keeps the rows in `[t0, t1]`, with the bound rules of [`TimeSeries::between`].
    ///
    /// An uninitialized table stays uninitialized. A zero-row table, or a range that
    /// selects nothing, gives a zero-row table with the same number of columns.
    pub fn restrict_to_range(&self, t0: Timestamp, t1: Timestamp) -> AlignedTable<V> {
        let frame = match self {
            AlignedTable::Uninitialized => return AlignedTable::Uninitialized,
            AlignedTable::Populated(frame) => frame,
        };
        let range = time_range(&frame.times, |t| *t, t0, t1);
        AlignedTable::Populated(Frame {
            times: frame.times[range.clone()].to_vec(),
            columns: frame
                .columns
                .iter()
                .map(|c| c[range.clone()].to_vec())
                .collect(),
        })
    }

    /// [`AlignedTable::add_column`] with `V::default()` as the fill value.
    pub fn add_column_with_default(&self, series: TimeSeries<V>) -> AlignedTable<V>
    where
        V: Default,
    {
        self.add_column(series, DefaultFill)
    }

    /// Returns a new table with `series` appended as the last column.
    ///
    /// The first column defines the axis. After that, the axis is narrowed to the span
    /// where the table and the series overlap, and within that span it becomes the union
    /// of both sides' timestamps. Positions a column does not cover are filled with
    /// `fill`. When there is no overlap the result is a zero-row table with one more
    /// column.
    pub fn add_column<F>(&self, mut series: TimeSeries<V>, fill: F) -> AlignedTable<V>
    where
        F: FillPolicy<V>,
    {
        let frame = match self {
            AlignedTable::Uninitialized => return initial_column(series),
            AlignedTable::Populated(frame) => frame,
        };
        let column_count = frame.columns.len() + 1;
        let (Some(&first), Some(&last)) = (frame.times.first(), frame.times.last()) else {
            trace!(columns = column_count, "table has no rows; adding empty column");
            return zero_row_table(column_count);
        };

        let clipped = series.between(first, last);
        let (Some(s0), Some(s1)) = (clipped.first(), clipped.last()) else {
            trace!(columns = column_count, "series is outside the table span");
            return zero_row_table(column_count);
        };

        let restricted = self.restrict_to_range(s0.time(), s1.time());
        let restricted = match restricted {
            AlignedTable::Populated(frame) if !frame.times.is_empty() => frame,
            _ => {
                trace!(columns = column_count, "no table rows within the series span");
                return zero_row_table(column_count);
            }
        };
        trace!(
            table_rows = restricted.times.len(),
            series_cells = clipped.len(),
            "merging column"
        );

        let merged = merge_column(&restricted, clipped, &fill);
        if cfg!(debug_assertions) {
            merged.check_invariants();
        }
        AlignedTable::Populated(merged)
    }
}

impl<V: Clone + Default> FromIterator<TimeSeries<V>> for AlignedTable<V> {
    fn from_iter<I: IntoIterator<Item = TimeSeries<V>>>(iter: I) -> Self {
        AlignedTable::from_series(iter)
    }
}

fn zero_row_table<V>(column_count: usize) -> AlignedTable<V> {
    AlignedTable::Populated(Frame::zero_rows(column_count))
}

fn initial_column<V>(mut series: TimeSeries<V>) -> AlignedTable<V> {
    series.sort();
    let mut times = Vec::with_capacity(series.len());
    let mut values = Vec::with_capacity(series.len());
    for (t, v) in series.into_iter().map(TimeCell::into_parts) {
        // the axis stays unique: a repeated timestamp keeps the first cell's value
        if times.last() == Some(&t) {
            continue;
        }
        times.push(t);
        values.push(v);
    }
    AlignedTable::Populated(Frame {
        times,
        columns: vec![values],
    })
}

/// Where a row of the merged axis comes from.
#[derive(Clone, Copy)]
struct RowSource {
    table_row: Option<usize>,
    series_index: Option<usize>,
}

fn merge_column<V, F>(table: &Frame<V>, cells: &[TimeCell<V>], fill: &F) -> Frame<V>
where
    V: Clone,
    F: FillPolicy<V>,
{
    // a repeated timestamp in the series takes the first cell's value
    let unique_cells = cells
        .iter()
        .enumerate()
        .dedup_by(|(_, a), (_, b)| a.time() == b.time());

    let mut times = Vec::with_capacity(table.times.len() + cells.len());
    let mut sources = Vec::with_capacity(table.times.len() + cells.len());
    for item in table
        .times
        .iter()
        .enumerate()
        .merge_join_by(unique_cells, |(_, t), (_, cell)| (*t).cmp(&cell.time()))
    {
        let (time, source) = match item {
            EitherOrBoth::Left((row, t)) => (
                *t,
                RowSource {
                    table_row: Some(row),
                    series_index: None,
                },
            ),
            EitherOrBoth::Right((index, cell)) => (
                cell.time(),
                RowSource {
                    table_row: None,
                    series_index: Some(index),
                },
            ),
            EitherOrBoth::Both((row, t), (index, _)) => (
                *t,
                RowSource {
                    table_row: Some(row),
                    series_index: Some(index),
                },
            ),
        };
        times.push(time);
        sources.push(source);
    }

    let mut columns = Vec::with_capacity(table.columns.len() + 1);
    for column in table.columns.iter() {
        columns.push(
            times
                .iter()
                .zip(sources.iter())
                .map(|(t, source)| match source.table_row {
                    Some(row) => column[row].clone(),
                    None => fill.fill(*t),
                })
                .collect(),
        );
    }
    columns.push(
        times
            .iter()
            .zip(sources.iter())
            .map(|(t, source)| match source.series_index {
                Some(index) => cells[index].value().clone(),
                None => fill.fill(*t),
            })
            .collect(),
    );

    Frame { times, columns }
}

fn apply_permutation<T>(items: Vec<T>, permutation: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    permutation
        .iter()
        .map(|&i| match slots[i].take() {
            Some(item) => item,
            None => panic!("BUG: index {i} appears twice in permutation"),
        })
        .collect()
}
