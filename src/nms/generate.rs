//! Synthetic detection boxes.

use rand::Rng;
use serde::Serialize;

use crate::types::BoundingBox;

/// Side length of every clustered box.
const CLUSTER_BOX_SIZE: f32 = 0.1;

/// Spatial layout of generated boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Independent uniform positions and sizes.
    Random,
    /// Gathered around a few centres, so many boxes overlap.
    Clustered,
}

impl Distribution {
    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Clustered => "clustered",
        }
    }
}

/// Approximate normal sample: the Irwin–Hall sum of twelve uniforms has
/// mean 6 and variance 1.
fn approx_normal<R: Rng + ?Sized>(rng: &mut R, mean: f32, std_dev: f32) -> f32 {
    let sum: f32 = (0..12).map(|_| rng.gen::<f32>()).sum();
    mean + (sum - 6.0) * std_dev
}

/// `count` boxes with sides in [0.05, 0.25), fully inside the unit square,
/// and uniform confidence.
pub fn random_boxes<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<BoundingBox> {
    (0..count)
        .map(|i| {
            let width = rng.gen::<f32>() * 0.2 + 0.05;
            let height = rng.gen::<f32>() * 0.2 + 0.05;
            let x = rng.gen::<f32>() * (1.0 - width);
            let y = rng.gen::<f32>() * (1.0 - height);
            let confidence = rng.gen::<f32>();
            BoundingBox::new(i as u32, x, y, width, height, confidence, i)
        })
        .collect()
}

/// `count` fixed-size boxes spread round-robin over `clusters` random
/// centres. Confidence falls off with squared distance from the centre and
/// is clamped to [0.1, 1.0].
pub fn clustered_boxes<R: Rng + ?Sized>(
    count: usize,
    clusters: usize,
    rng: &mut R,
) -> Vec<BoundingBox> {
    let clusters = clusters.max(1);
    let centres: Vec<(f32, f32)> = (0..clusters)
        .map(|_| (rng.gen::<f32>(), rng.gen::<f32>()))
        .collect();

    let size = CLUSTER_BOX_SIZE;
    (0..count)
        .map(|i| {
            let (cx, cy) = centres[i % clusters];
            let x = approx_normal(rng, cx, 0.1).clamp(0.0, 1.0 - size);
            let y = approx_normal(rng, cy, 0.1).clamp(0.0, 1.0 - size);

            let dx = x + size / 2.0 - cx;
            let dy = y + size / 2.0 - cy;
            let confidence =
                (0.8 + rng.gen::<f32>() * 0.2 - (dx * dx + dy * dy) * 2.0).clamp(0.1, 1.0);

            BoundingBox::new(i as u32, x, y, size, size, confidence, i)
        })
        .collect()
}

/// Generate boxes with the given layout.
pub fn generate<R: Rng + ?Sized>(
    distribution: Distribution,
    count: usize,
    clusters: usize,
    rng: &mut R,
) -> Vec<BoundingBox> {
    match distribution {
        Distribution::Random => random_boxes(count, rng),
        Distribution::Clustered => clustered_boxes(count, clusters, rng),
    }
}
