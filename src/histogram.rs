//! Largest rectangle under a histogram.

use rand::Rng;
use serde::Serialize;

/// Area of the largest axis-aligned rectangle that fits under the bars.
///
/// For each bar, two monotonic-stack passes find the nearest strictly lower
/// bar on each side; the bar's best rectangle spans the gap between them.
/// O(n) time and space.
pub fn largest_rectangle_area(heights: &[u32]) -> u64 {
    let n = heights.len();
    // left[i]: index + 1 of the nearest lower bar to the left (0 = none).
    let mut left = vec![0usize; n];
    // right[i]: index of the nearest lower bar to the right (n = none).
    let mut right = vec![n; n];
    let mut stack: Vec<usize> = Vec::with_capacity(n);

    for i in 0..n {
        while stack.last().is_some_and(|&top| heights[top] >= heights[i]) {
            stack.pop();
        }
        left[i] = stack.last().map_or(0, |&top| top + 1);
        stack.push(i);
    }

    stack.clear();
    for i in (0..n).rev() {
        while stack.last().is_some_and(|&top| heights[top] >= heights[i]) {
            stack.pop();
        }
        right[i] = stack.last().copied().unwrap_or(n);
        stack.push(i);
    }

    (0..n)
        .map(|i| u64::from(heights[i]) * (right[i] - left[i]) as u64)
        .max()
        .unwrap_or(0)
}

/// One generated histogram and its answer.
#[derive(Debug, Clone, Serialize)]
pub struct HistogramCase {
    /// Bar heights.
    pub heights: Vec<u32>,
    /// Largest rectangle area.
    pub area: u64,
}

/// Generate `count` random histograms with lengths in `1..=max_len` and
/// heights in `0..max_height`, and solve each.
pub fn random_cases<R: Rng + ?Sized>(
    count: usize,
    max_len: usize,
    max_height: u32,
    rng: &mut R,
) -> Vec<HistogramCase> {
    (0..count)
        .map(|_| {
            let len = rng.gen_range(1..=max_len.max(1));
            let heights: Vec<u32> = (0..len)
                .map(|_| rng.gen_range(0..max_height.max(1)))
                .collect();
            let area = largest_rectangle_area(&heights);
            HistogramCase { heights, area }
        })
        .collect()
}
