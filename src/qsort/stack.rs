use super::partition;

pub fn qsort(v: &mut [i32]) {
    let len = v.len();
    sort_range(v, 0, len);
}

/// Same partitioning as [`super::normal::sort_range`], but pending ranges
/// live on a `Vec` so depth is bounded by memory rather than the thread stack.
///
/// The larger half is pushed first so the smaller one is handled next.
pub fn sort_range(v: &mut [i32], start: usize, end: usize) {
    let mut pending = vec![(start, end)];

    while let Some((start, end)) = pending.pop() {
        if start + 1 >= end {
            continue;
        }

        let m = partition(v, start, end);
        let (left, right) = ((start, m), (m + 1, end));
        if m - start < end - (m + 1) {
            pending.push(right);
            pending.push(left);
        } else {
            pending.push(left);
            pending.push(right);
        }
    }
}
