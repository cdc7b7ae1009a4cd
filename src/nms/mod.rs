//! Bounding-box non-max suppression and its sort benchmark.

pub mod bench;
pub mod generate;
pub mod suppress;

pub use bench::{run_benchmark, run_trial, PerformanceResult};
pub use generate::{clustered_boxes, generate, random_boxes, Distribution};
pub use suppress::{non_max_suppression, rank, suppress};
