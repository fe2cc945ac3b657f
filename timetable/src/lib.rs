//! Alignment of sparse, independently timestamped series into a single table
//! indexed by a shared timestamp axis.
//!
//! The building blocks are [`TimeCell`] (a timestamp/value pair), [`TimeSeries`]
//! (a sequence of cells with range extraction) and [`AlignedTable`] (a shared
//! axis plus one value column per added series).
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use timetable::{AlignedTable, TimeCell, TimeSeries};
//!
//! let day = |d| Utc.with_ymd_and_hms(2022, 10, d, 0, 0, 0).unwrap();
//!
//! let table = AlignedTable::new()
//!     .add_column_with_default(TimeSeries::from(vec![TimeCell::new(day(21), 2)]))
//!     .add_column_with_default(TimeSeries::from(vec![
//!         TimeCell::new(day(20), 10),
//!         TimeCell::new(day(21), 20),
//!     ]));
//!
//! assert_eq!(table.underlying_times(), &[day(21)]);
//! assert_eq!(table.values(), vec![vec![2], vec![20]]);
//! ```
extern crate chrono;

mod cell;
mod error;
mod fill;
mod search;
mod series;
mod table;

#[cfg(feature = "serde")]
mod codec;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod series_test;

pub use cell::*;
pub use error::*;
pub use fill::*;
pub use series::*;
pub use table::*;

/// An absolute instant. All comparisons in this crate are by instant; the
/// zone is always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
