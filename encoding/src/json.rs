use serde::de::DeserializeOwned;
use serde::Serialize;
use snafu::ResultExt;
use tracing::trace;

use timetable::{AlignedTable, TimeSeries};

use crate::{DecodeSnafu, EncodeSnafu, EncodingResult, Target};

/// Encodes a series as `[{"time": ..., "value": ...}, ...]` in ascending time order.
/// `None` encodes as `null`.
pub fn encode_series<V: Serialize>(series: Option<&TimeSeries<V>>) -> EncodingResult<String> {
    serde_json::to_string(&series).context(EncodeSnafu {
        target: Target::Series,
    })
}

/// Decodes a series; `null` decodes as `None`. Cells are sorted by time.
pub fn decode_series<V: DeserializeOwned>(json: &str) -> EncodingResult<Option<TimeSeries<V>>> {
    decode_series_from_slice(json.as_bytes())
}

pub fn decode_series_from_slice<V: DeserializeOwned>(
    buf: &[u8],
) -> EncodingResult<Option<TimeSeries<V>>> {
    serde_json::from_slice(buf).context(DecodeSnafu {
        target: Target::Series,
    })
}

/// Encodes a table as `{"times": [...], "values": [[...], ...]}`. `None` encodes as
/// `null`, an uninitialized table as `{"times": null, "values": null}`.
pub fn encode_table<V: Serialize>(table: Option<&AlignedTable<V>>) -> EncodingResult<String> {
    serde_json::to_string(&table).context(EncodeSnafu {
        target: Target::Table,
    })
}

/// Decodes a table, putting its rows in canonical order. `null` decodes as `None`.
pub fn decode_table<V: DeserializeOwned>(json: &str) -> EncodingResult<Option<AlignedTable<V>>> {
    decode_table_from_slice(json.as_bytes())
}

pub fn decode_table_from_slice<V: DeserializeOwned>(
    buf: &[u8],
) -> EncodingResult<Option<AlignedTable<V>>> {
    let table: Option<AlignedTable<V>> = serde_json::from_slice(buf).context(DecodeSnafu {
        target: Target::Table,
    })?;
    if let Some(table) = &table {
        trace!(
            rows = table.number_of_rows(),
            columns = table.number_of_columns(),
            "decoded table"
        );
    }
    Ok(table)
}
