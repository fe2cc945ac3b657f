//! serde support.
//!
//! A series is written as an array of `{"time", "value"}` objects in ascending time
//! order. A table is written as `{"times": [...], "values": [[...], ...]}`, where each
//! inner array of `values` is one column; an uninitialized table has both fields
//! `null`. Decoding a table always canonicalizes the rows.
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{AlignedTable, TableError, TimeCell, TimeSeries, Timestamp};

impl<V: Serialize> Serialize for TimeSeries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_sorted() {
            return serializer.collect_seq(self.iter());
        }
        let mut cells: Vec<&TimeCell<V>> = self.iter().collect();
        cells.sort_by(|a, b| a.cmp_time(b));
        serializer.collect_seq(cells)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for TimeSeries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<TimeCell<V>>::deserialize(deserializer)?;
        let mut series = TimeSeries::from(cells);
        series.sort();
        Ok(series)
    }
}

#[derive(Serialize)]
struct EncodedTableRef<'a, V> {
    times: Option<&'a [Timestamp]>,
    values: Option<&'a [Vec<V>]>,
}

#[derive(Deserialize)]
struct EncodedTable<V> {
    times: Option<Vec<Timestamp>>,
    values: Option<Vec<Vec<V>>>,
}

impl<V: Serialize> Serialize for AlignedTable<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = match self.frame() {
            None => EncodedTableRef {
                times: None,
                values: None,
            },
            Some(frame) => EncodedTableRef {
                times: Some(frame.times()),
                values: Some(frame.columns()),
            },
        };
        encoded.serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for AlignedTable<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = EncodedTable::<V>::deserialize(deserializer)?;
        match (encoded.times, encoded.values) {
            (None, None) => Ok(AlignedTable::Uninitialized),
            (Some(times), Some(values)) => {
                AlignedTable::from_parts(times, values).map_err(D::Error::custom)
            }
            _ => Err(D::Error::custom(TableError::MismatchedNullity)),
        }
    }
}
