//! Bubble sort vs merge sort timing on differently ordered inputs.

use std::time::Instant;

use rand::Rng;
use serde::Serialize;

use super::ComplexVector;

/// Initial arrangement of a benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputOrder {
    /// Already ascending.
    Sorted,
    /// Random permutation.
    Shuffled,
    /// Descending.
    Reversed,
}

impl InputOrder {
    /// All arrangements, in report order.
    pub const ALL: [InputOrder; 3] = [Self::Sorted, Self::Shuffled, Self::Reversed];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::Shuffled => "shuffled",
            Self::Reversed => "reversed",
        }
    }
}

/// One row of the sort comparison.
#[derive(Debug, Clone, Serialize)]
pub struct SortTiming {
    /// Input arrangement.
    pub order: InputOrder,
    /// Element count.
    pub size: usize,
    /// Bubble sort wall time in milliseconds.
    pub bubble_ms: f64,
    /// Merge sort wall time in milliseconds.
    pub merge_ms: f64,
}

impl SortTiming {
    /// How many times faster merge sort was, if measurable.
    pub fn speedup(&self) -> Option<f64> {
        (self.merge_ms > 0.0).then(|| self.bubble_ms / self.merge_ms)
    }
}

/// Arrange `base` as requested.
pub fn arrange<R: Rng + ?Sized>(base: &ComplexVector, order: InputOrder, rng: &mut R) -> ComplexVector {
    let mut v = base.clone();
    match order {
        InputOrder::Sorted => v.merge_sort(),
        InputOrder::Shuffled => v.shuffle(rng),
        InputOrder::Reversed => {
            v.merge_sort();
            v.reverse();
        }
    }
    v
}

/// Time both sorts on copies of `input`.
pub fn time_sorts(input: &ComplexVector, order: InputOrder) -> SortTiming {
    let mut bubble = input.clone();
    let started = Instant::now();
    bubble.bubble_sort();
    let bubble_ms = started.elapsed().as_secs_f64() * 1000.0;

    let mut merge = input.clone();
    let started = Instant::now();
    merge.merge_sort();
    let merge_ms = started.elapsed().as_secs_f64() * 1000.0;

    debug_assert!(bubble.is_sorted() && merge.is_sorted());
    log::debug!(
        "{} input of {}: bubble {:.3} ms, merge {:.3} ms",
        order.name(),
        input.len(),
        bubble_ms,
        merge_ms
    );

    SortTiming {
        order,
        size: input.len(),
        bubble_ms,
        merge_ms,
    }
}

/// Run the comparison for every [`InputOrder`] over a random vector of `size`.
pub fn compare_sorts<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<SortTiming> {
    let base = ComplexVector::random(size, rng);
    InputOrder::ALL
        .iter()
        .map(|&order| {
            let input = arrange(&base, order, rng);
            time_sorts(&input, order)
        })
        .collect()
}
