use chrono::{NaiveDate, TimeZone, Utc};

use crate::{TimeCell, Timestamp};

pub(crate) const DAY0: &str = "2022-10-20"; // Thursday
pub(crate) const DAY1: &str = "2022-10-21"; // Friday
pub(crate) const DAY2: &str = "2022-10-24"; // Monday
pub(crate) const DAY3: &str = "2022-10-25"; // Tuesday
pub(crate) const DAY_BEFORE: &str = "2022-10-19";
pub(crate) const DAY_AFTER: &str = "2022-10-26";

/// Midnight UTC of a `YYYY-MM-DD` date.
pub(crate) fn date(value: &str) -> Timestamp {
    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("invalid test date {value}: {e}"));
    Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap())
}

pub(crate) fn cell<V>(day: &str, value: V) -> TimeCell<V> {
    TimeCell::new(date(day), value)
}

/// A cell carrying only a time; the value is zero.
pub(crate) fn cell_t(day: &str) -> TimeCell<i64> {
    TimeCell::new(date(day), 0)
}
