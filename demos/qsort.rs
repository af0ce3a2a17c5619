use std::array;

use qsort_demo::qsort;
use qsort_demo::reverse::reverse;

fn main() {
    let mut arr: [_; 1000] =
        array::from_fn(|i| (i as f64 * f64::sin((i as f64) / 5.0)).ceil() as i32);

    qsort::normal::qsort(&mut arr);
    works(&arr);

    reverse(&mut arr);
    qsort::stack::qsort(&mut arr);
    works(&arr);

    println!("min = {}, max = {}", arr[0], arr[arr.len() - 1]);
}

fn works(arr: &[i32]) {
    for (a, b) in arr.iter().zip(arr.iter().skip(1)) {
        assert!(a <= b);
    }
}
