/// Reverses `v` in place by swapping from both ends towards the middle.
pub fn reverse(v: &mut [i32]) {
    if v.is_empty() {
        return;
    }

    let (mut lo, mut hi) = (0, v.len() - 1);
    while lo < hi {
        v.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }
}
