use crate::Timestamp;

/// Produces the value for an axis position a column does not natively cover.
///
/// Any `Fn(Timestamp) -> V` is a fill policy, so custom interpolation or sentinel
/// schemes can be passed inline:
///
/// ```
/// # use timetable::{AlignedTable, TimeSeries, Timestamp};
/// let table: AlignedTable<f64> = AlignedTable::new();
/// let table = table.add_column(TimeSeries::new(), |_t: Timestamp| f64::NAN);
/// assert_eq!(table.number_of_columns(), 1);
/// ```
pub trait FillPolicy<V> {
    fn fill(&self, time: Timestamp) -> V;
}

impl<V, F> FillPolicy<V> for F
where
    F: Fn(Timestamp) -> V,
{
    #[inline]
    fn fill(&self, time: Timestamp) -> V {
        self(time)
    }
}

/// Fills gaps with `V::default()`, e.g. `0` for numbers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultFill;

impl<V: Default> FillPolicy<V> for DefaultFill {
    #[inline]
    fn fill(&self, _time: Timestamp) -> V {
        V::default()
    }
}

/// Fills gaps with a fixed sentinel such as `f64::NAN`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantFill<V>(pub V);

impl<V: Clone> FillPolicy<V> for ConstantFill<V> {
    #[inline]
    fn fill(&self, _time: Timestamp) -> V {
        self.0.clone()
    }
}
