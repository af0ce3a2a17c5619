pub mod qsort;
pub mod reverse;
pub mod workload;

pub use workload::{Strategy, Workload, WorkloadError};
