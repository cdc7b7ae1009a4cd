//! Comparison sorts parameterised by a strict "less than" predicate.
//!
//! The exercises order values that are only partially ordered as Rust types
//! (`f64`/`f32` fields), so every sort takes `less(a, b)` instead of
//! requiring `Ord`.

use serde::Serialize;

/// Selectable sort algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortAlgorithm {
    /// Adjacent-swap passes with early exit. O(n²), stable.
    Bubble,
    /// Shift-into-place. O(n²), stable.
    Insertion,
    /// Top-down merge with one scratch buffer. O(n log n), stable.
    Merge,
    /// Hoare partition around the middle element. O(n log n) expected.
    Quick,
    /// In-place binary max-heap. O(n log n).
    Heap,
}

impl SortAlgorithm {
    /// The algorithms compared by the NMS benchmark.
    pub const NMS: [SortAlgorithm; 4] = [Self::Quick, Self::Merge, Self::Heap, Self::Insertion];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }

    /// Parse from a name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bubble" => Some(Self::Bubble),
            "insertion" => Some(Self::Insertion),
            "merge" => Some(Self::Merge),
            "quick" | "quicksort" => Some(Self::Quick),
            "heap" | "heapsort" => Some(Self::Heap),
            _ => None,
        }
    }

    /// True for algorithms with quadratic worst case on random input.
    pub fn is_quadratic(&self) -> bool {
        matches!(self, Self::Bubble | Self::Insertion)
    }

    /// Sort `v` in place with this algorithm.
    pub fn sort_by<T, F>(&self, v: &mut [T], less: F)
    where
        T: Clone,
        F: Fn(&T, &T) -> bool,
    {
        match self {
            Self::Bubble => bubble_sort_by(v, &less),
            Self::Insertion => insertion_sort_by(v, &less),
            Self::Merge => merge_sort_by(v, &less),
            Self::Quick => quick_sort_by(v, &less),
            Self::Heap => heap_sort_by(v, &less),
        }
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Bubble sort. Stops after a pass without swaps.
pub fn bubble_sort_by<T, F>(v: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let n = v.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if less(&v[j + 1], &v[j]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Insertion sort.
pub fn insertion_sort_by<T, F>(v: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Stable top-down merge sort.
pub fn merge_sort_by<T, F>(v: &mut [T], less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return;
    }
    let mut buf: Vec<T> = Vec::with_capacity(v.len());
    merge_sort_rec(v, &mut buf, less);
}

fn merge_sort_rec<T, F>(v: &mut [T], buf: &mut Vec<T>, less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let n = v.len();
    if n <= 1 {
        return;
    }
    let mid = n / 2;
    merge_sort_rec(&mut v[..mid], buf, less);
    merge_sort_rec(&mut v[mid..], buf, less);

    buf.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < n {
        // Equal elements come from the left run first.
        if less(&v[j], &v[i]) {
            buf.push(v[j].clone());
            j += 1;
        } else {
            buf.push(v[i].clone());
            i += 1;
        }
    }
    buf.extend_from_slice(&v[i..mid]);
    buf.extend_from_slice(&v[j..n]);
    v.clone_from_slice(buf);
}

/// Quicksort with Hoare partitioning around the lower-middle element.
///
/// Recurses into the smaller side and loops on the larger one, so stack
/// depth stays logarithmic.
pub fn quick_sort_by<T, F>(mut v: &mut [T], less: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    while v.len() > 1 {
        let split = hoare_partition(v, less);
        let (left, right) = std::mem::take(&mut v).split_at_mut(split + 1);
        if left.len() < right.len() {
            quick_sort_by(left, less);
            v = right;
        } else {
            quick_sort_by(right, less);
            v = left;
        }
    }
}

/// Returns `j` such that `v[..=j]` holds no element greater than any in
/// `v[j + 1..]`. Always `j < v.len() - 1`.
fn hoare_partition<T, F>(v: &mut [T], less: &F) -> usize
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let pivot = v[(v.len() - 1) / 2].clone();
    let mut i = 0;
    let mut j = v.len() - 1;
    loop {
        while less(&v[i], &pivot) {
            i += 1;
        }
        while less(&pivot, &v[j]) {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        v.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Heapsort over a max-heap ordered by `less`.
pub fn heap_sort_by<T, F>(v: &mut [T], less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    let n = v.len();
    for i in (0..n / 2).rev() {
        sift_down(v, n, i, less);
    }
    for end in (1..n).rev() {
        v.swap(0, end);
        sift_down(v, end, 0, less);
    }
}

fn sift_down<T, F>(v: &mut [T], n: usize, mut i: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    loop {
        let mut largest = i;
        let (l, r) = (2 * i + 1, 2 * i + 2);
        if l < n && less(&v[largest], &v[l]) {
            largest = l;
        }
        if r < n && less(&v[largest], &v[r]) {
            largest = r;
        }
        if largest == i {
            return;
        }
        v.swap(i, largest);
        i = largest;
    }
}

/// True if no element is strictly less than its predecessor.
pub fn is_sorted_by<T, F>(v: &[T], less: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    v.windows(2).all(|w| !less(&w[1], &w[0]))
}
