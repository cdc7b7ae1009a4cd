//! Timing of the NMS pipeline under each sort algorithm.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use crate::config::NmsConfig;
use crate::sort::SortAlgorithm;
use crate::types::BoundingBox;

use super::generate::{generate, Distribution};
use super::suppress::{rank, suppress};

/// Mean timings for one (algorithm, size, distribution) cell.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceResult {
    pub algorithm: SortAlgorithm,
    pub size: usize,
    pub distribution: Distribution,
    pub sort_ms: f64,
    pub nms_ms: f64,
    pub total_ms: f64,
    /// Boxes surviving suppression in the last run.
    pub kept: usize,
}

/// Time ranking and suppression of `boxes` over `repetitions` runs.
pub fn run_trial(
    boxes: &[BoundingBox],
    algorithm: SortAlgorithm,
    distribution: Distribution,
    repetitions: usize,
    iou_threshold: f32,
) -> PerformanceResult {
    let repetitions = repetitions.max(1);
    let mut sort_ms = 0.0;
    let mut nms_ms = 0.0;
    let mut kept = 0;

    for _ in 0..repetitions {
        let mut ranked = boxes.to_vec();

        let start = Instant::now();
        rank(&mut ranked, algorithm);
        sort_ms += start.elapsed().as_secs_f64() * 1000.0;

        let start = Instant::now();
        kept = suppress(&ranked, iou_threshold).len();
        nms_ms += start.elapsed().as_secs_f64() * 1000.0;
    }

    let runs = repetitions as f64;
    PerformanceResult {
        algorithm,
        size: boxes.len(),
        distribution,
        sort_ms: sort_ms / runs,
        nms_ms: nms_ms / runs,
        total_ms: (sort_ms + nms_ms) / runs,
        kept,
    }
}

/// Run every configured size, layout and algorithm.
///
/// All algorithms in a cell see the same generated boxes. Insertion sort is
/// skipped above `insertion_limit` and the clustered layout above
/// `clustered_limit`.
pub fn run_benchmark<R: Rng + ?Sized>(config: &NmsConfig, rng: &mut R) -> Vec<PerformanceResult> {
    let mut results = Vec::new();

    for &size in &config.sizes {
        for distribution in [Distribution::Random, Distribution::Clustered] {
            if distribution == Distribution::Clustered && size > config.clustered_limit {
                log::info!("skipping clustered layout at {} boxes", size);
                continue;
            }

            let boxes = generate(distribution, size, config.clusters, rng);
            log::info!("benchmarking {} {} boxes", size, distribution.name());

            for algorithm in SortAlgorithm::NMS {
                if algorithm == SortAlgorithm::Insertion && size > config.insertion_limit {
                    log::debug!("skipping insertion sort at {} boxes", size);
                    continue;
                }
                let result = run_trial(
                    &boxes,
                    algorithm,
                    distribution,
                    config.repetitions,
                    config.iou_threshold,
                );
                log::debug!(
                    "{} on {} {}: {:.3} ms, kept {}",
                    algorithm,
                    size,
                    distribution.name(),
                    result.total_ms,
                    result.kept
                );
                results.push(result);
            }
        }
    }

    results
}
