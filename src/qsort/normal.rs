use super::partition;

pub fn qsort(v: &mut [i32]) {
    let len = v.len();
    sort_range(v, 0, len);
}

/// Sorts `v[start..end]` ascending, leaving the rest of `v` alone.
///
/// Always pivots on `v[start]`, so sorted or reverse-sorted ranges take
/// quadratic time and recurse `end - start` levels deep.
pub fn sort_range(v: &mut [i32], start: usize, end: usize) {
    if start + 1 >= end {
        return;
    }

    let m = partition(v, start, end);
    sort_range(v, start, m);
    sort_range(v, m + 1, end);
}
