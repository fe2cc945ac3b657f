use std::ops::Range;

use crate::Timestamp;

/// Computes the index range selected by `[t0, t1]` over items sorted ascending by `key`.
///
/// The lower bound is inclusive: the first item whose time is `>= t0`. The upper bound
/// is inclusive only when an item lands exactly on `t1`; otherwise it stops at the first
/// item whose time is `>= t1`. Reversed bounds are swapped first.
pub(crate) fn time_range<T>(
    items: &[T],
    key: impl Fn(&T) -> Timestamp,
    t0: Timestamp,
    t1: Timestamp,
) -> Range<usize> {
    let Some(last) = items.last() else {
        return 0..0;
    };
    let (t0, t1) = if t1 < t0 { (t1, t0) } else { (t0, t1) };
    let last = key(last);
    let len = items.len();

    let first_index = if t0 > last {
        len
    } else {
        lower_bound(items, &key, t0)
    };

    let last_index = if t1 > last {
        len
    } else {
        let i = lower_bound(items, &key, t1);
        if i < len && key(&items[i]) == t1 {
            i + 1
        } else {
            i
        }
    };

    first_index..last_index
}

/// Index of the first item whose time is `>= t`.
#[inline]
pub(crate) fn lower_bound<T>(items: &[T], key: impl Fn(&T) -> Timestamp, t: Timestamp) -> usize {
    items.partition_point(|item| key(item) < t)
}
