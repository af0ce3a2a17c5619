/// First-element pivot, recursive: the routine the driver benchmarks.
pub mod normal;
/// Same partition, pending ranges kept on a heap-allocated work stack.
pub mod stack;

/// Lomuto partition of `v[start..end]` around `v[start]`.
///
/// Elements strictly less than the pivot end up in `[start, m)`, the pivot at
/// `m`, everything else in `(m, end)`. Returns `m`.
///
/// Requires `start < end <= v.len()`.
#[inline]
pub(crate) fn partition(v: &mut [i32], start: usize, end: usize) -> usize {
    let pivot = v[start];
    let mut m = start;

    for i in start + 1..end {
        if v[i] < pivot {
            m += 1;
            v.swap(i, m);
        }
    }

    v.swap(start, m);
    m
}
