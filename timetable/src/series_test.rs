#[cfg(test)]
mod tests {
    use chrono::{Datelike, Duration, Weekday};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use crate::test_utils::{cell, cell_t, date, DAY0, DAY1, DAY2, DAY3, DAY_AFTER, DAY_BEFORE};
    use crate::{AlignedTable, TimeCell, TimeSeries};

    type Cells = Vec<TimeCell<i64>>;

    fn four_in_a_row() -> Cells {
        vec![cell_t(DAY0), cell_t(DAY1), cell_t(DAY2), cell_t(DAY3)]
    }

    #[test_case(vec![], DAY0, DAY1, vec![]; "empty")]
    #[test_case(four_in_a_row(), DAY_BEFORE, DAY_AFTER, four_in_a_row(); "out of bounds")]
    #[test_case(
        vec![cell_t(DAY0), cell_t(DAY2), cell_t(DAY3), cell_t(DAY1)],
        DAY_BEFORE, DAY_AFTER, four_in_a_row();
        "series out of order"
    )]
    #[test_case(four_in_a_row(), DAY3, DAY0, four_in_a_row(); "range out of order")]
    #[test_case(four_in_a_row(), DAY_BEFORE, "2022-10-18", vec![]; "both before")]
    #[test_case(four_in_a_row(), DAY_AFTER, "2022-10-27", vec![]; "both after")]
    #[test_case(four_in_a_row(), DAY1, DAY1, vec![cell_t(DAY1)]; "same day")]
    #[test_case(
        four_in_a_row(), DAY1, DAY3, vec![cell_t(DAY1), cell_t(DAY2), cell_t(DAY3)];
        "days between"
    )]
    #[test_case(vec![cell_t(DAY0)], DAY0, DAY0, vec![cell_t(DAY0)]; "one element")]
    #[test_case(
        vec![cell_t(DAY0), cell_t(DAY1)], DAY0, DAY1, vec![cell_t(DAY0), cell_t(DAY1)];
        "two elements"
    )]
    #[test_case(
        vec![cell_t(DAY0), cell_t(DAY1), cell_t(DAY2)], DAY1, DAY2,
        vec![cell_t(DAY1), cell_t(DAY2)];
        "truncate the first elements exact match"
    )]
    #[test_case(
        vec![cell_t(DAY0), cell_t(DAY2), cell_t(DAY3)], DAY1, DAY3,
        vec![cell_t(DAY2), cell_t(DAY3)];
        "truncate the first elements index not found"
    )]
    #[test_case(
        vec![cell_t(DAY0), cell_t(DAY1), cell_t(DAY3)], DAY0, DAY2,
        vec![cell_t(DAY0), cell_t(DAY1)];
        "truncate the last elements index not found"
    )]
    fn between(cells: Cells, start: &str, end: &str, expected: Cells) {
        let mut series = TimeSeries::from(cells.clone());
        assert_eq!(series.between(date(start), date(end)), expected.as_slice());

        // a single column table restricted to the same range agrees with the series
        let table = AlignedTable::new().add_column_with_default(TimeSeries::from(cells));
        let column = table
            .restrict_to_range(date(start), date(end))
            .column(0)
            .expect("column 0");
        assert_eq!(column.as_slice(), expected.as_slice());
    }

    #[test]
    fn between_sorts_the_series_in_place() {
        let mut series = TimeSeries::from(vec![cell(DAY2, 3), cell(DAY0, 1), cell(DAY1, 2)]);
        assert!(!series.is_sorted());
        assert_eq!(series.range(date(DAY0), date(DAY2)), None);

        series.between(date(DAY_AFTER), date(DAY_AFTER));
        assert!(series.is_sorted());
        assert_eq!(
            series.as_slice(),
            &[cell(DAY0, 1), cell(DAY1, 2), cell(DAY2, 3)]
        );
        assert_eq!(series.range(date(DAY0), date(DAY2)), Some(0..3));
    }

    fn two_weeks_of_returns() -> TimeSeries<i64> {
        [
            "2021-04-23",
            "2021-04-22",
            "2021-04-21",
            "2021-04-20",
            "2021-04-19",
            "2021-04-16",
            "2021-04-15",
            "2021-04-14",
            "2021-04-13",
            "2021-04-12",
        ]
        .into_iter()
        .map(cell_t)
        .collect()
    }

    #[test_case("2021-04-18", Weekday::Sun; "on sunday")]
    #[test_case("2021-04-17", Weekday::Sat; "on saturday")]
    fn end_during_weekend(end: &str, weekday: Weekday) {
        let end = date(end);
        assert_eq!(end.weekday(), weekday);
        let start = date("2021-04-12");

        let mut series = two_weeks_of_returns();
        let result = series.between(end, start);

        assert_eq!(
            result,
            &[
                cell_t("2021-04-12"),
                cell_t("2021-04-13"),
                cell_t("2021-04-14"),
                cell_t("2021-04-15"),
                cell_t("2021-04-16"),
            ]
        );
    }

    #[test]
    fn bounds_hold_for_every_range() {
        let mut series = TimeSeries::from(vec![
            cell(DAY0, 1),
            cell(DAY1, 2),
            cell(DAY2, 3),
            cell(DAY3, 4),
        ]);
        let days: Vec<_> = (0..10)
            .map(|i| date(DAY_BEFORE) - Duration::days(1) + Duration::days(i))
            .collect();

        for &t0 in &days {
            for &t1 in days.iter().filter(|&&t| t >= t0) {
                let forward = series.between(t0, t1).to_vec();
                let backward = series.between(t1, t0).to_vec();
                assert_eq!(forward, backward, "reversed bounds for {t0}..{t1}");

                for c in &forward {
                    assert!(c.time() >= t0, "{c:?} before {t0}");
                    assert!(c.time() <= t1, "{c:?} after {t1}");
                }
                let exact = series.iter().any(|c| c.time() == t1);
                if exact {
                    assert_eq!(forward.last().map(TimeCell::time), Some(t1));
                }
            }
        }
    }

    #[test]
    fn collects_from_pairs() {
        let series: TimeSeries<i64> = vec![(date(DAY1), 2), (date(DAY0), 1)].into_iter().collect();
        assert_eq!(series.len(), 2);
        assert_eq!(series.first_time(), Some(date(DAY1)));
        assert_eq!(series.last_time(), Some(date(DAY0)));
    }
}
