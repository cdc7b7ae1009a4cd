//! A growable vector of complex numbers with the classic list operations.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::sort::{bubble_sort_by, is_sorted_by, merge_sort_by};
use crate::types::Complex;

/// Ordered sequence of [`Complex`] values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ComplexVector {
    items: Vec<Complex>,
}

impl ComplexVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// `size` values whose parts are uniform tenths in [-10.0, 9.9].
    pub fn random<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let mut part = || f64::from(rng.gen_range(0i32..200) - 100) / 10.0;
        let items = (0..size).map(|_| Complex::new(part(), part())).collect();
        Self { items }
    }

    /// Append a value.
    pub fn push(&mut self, c: Complex) {
        self.items.push(c);
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> Option<Complex> {
        self.items.get(index).copied()
    }

    /// Overwrite the value at `index`. Returns false if out of range.
    pub fn set(&mut self, index: usize, c: Complex) -> bool {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = c;
                true
            }
            None => false,
        }
    }

    /// Values as a slice.
    pub fn as_slice(&self) -> &[Complex] {
        &self.items
    }

    /// Fisher–Yates shuffle.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.items.shuffle(rng);
    }

    /// Index of the first value exactly equal to `target`.
    pub fn find(&self, target: &Complex) -> Option<usize> {
        self.items.iter().position(|c| c == target)
    }

    /// Insert before `index`. Indices past the end are ignored.
    pub fn insert(&mut self, index: usize, c: Complex) -> bool {
        if index > self.items.len() {
            return false;
        }
        self.items.insert(index, c);
        true
    }

    /// Remove the value at `index`. Out-of-range indices are ignored.
    pub fn remove(&mut self, index: usize) -> Option<Complex> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Drop every value equal to an earlier one, keeping first occurrences in
    /// their original order. Returns the number removed.
    pub fn unique(&mut self) -> usize {
        let before = self.items.len();
        let mut kept: Vec<Complex> = Vec::with_capacity(before);
        for c in self.items.drain(..) {
            if !kept.contains(&c) {
                kept.push(c);
            }
        }
        self.items = kept;
        before - self.items.len()
    }

    /// Sort with bubble sort.
    pub fn bubble_sort(&mut self) {
        bubble_sort_by(&mut self.items, &Complex::precedes);
    }

    /// Sort with merge sort.
    pub fn merge_sort(&mut self) {
        merge_sort_by(&mut self.items, &Complex::precedes);
    }

    /// True if ascending under the modulus-then-real order.
    pub fn is_sorted(&self) -> bool {
        is_sorted_by(&self.items, Complex::precedes)
    }

    /// Reverse in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Values whose modulus lies in `[low, high)`, in their current order.
    pub fn range_search(&self, low: f64, high: f64) -> ComplexVector {
        let items = self
            .items
            .iter()
            .filter(|c| {
                let m = c.modulus();
                m >= low && m < high
            })
            .copied()
            .collect();
        Self { items }
    }

    /// Render with each value's modulus, e.g. `[3.00+4.00i (|5.00|)]`.
    pub fn format_with_modulus(&self) -> String {
        let parts: Vec<String> = self
            .items
            .iter()
            .map(|c| format!("{} (|{:.2}|)", c, c.modulus()))
            .collect();
        format!("[{}]", parts.join(", "))
    }
}

impl From<Vec<Complex>> for ComplexVector {
    fn from(items: Vec<Complex>) -> Self {
        Self { items }
    }
}

impl FromIterator<Complex> for ComplexVector {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for ComplexVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, c) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, "]")
    }
}
