//! Instrumented algorithm generators
//!
//! Each algorithm is an explicit state machine implementing
//! `Iterator<Item = Operation>`: every call to `next` resumes from a stored
//! program counter, runs until the algorithm makes its next observable
//! decision, and returns it as an [`Operation`]. The sequence ends with a
//! single [`Operation::Done`], after which the iterator is fused.
//!
//! A generator copies its input into a private [`ArrayModel`](crate::array::ArrayModel)
//! and never touches the caller's array. Generators cannot be rewound: a
//! restart is a freshly created generator.
//!
//! # Algorithms
//!
//! - [`bubble`]: adjacent compare/swap passes
//! - [`selection`]: running-minimum scan, swap only when the minimum moved
//! - [`insertion`]: lift a key, shift larger predecessors right, drop it
//! - [`merge`]: bottom-up merge with doubling width
//! - [`quick`]: Lomuto partition over an explicit range stack
//! - [`subset_sum`]: include/exclude backtracking over an explicit frame stack

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod subset_sum;

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use subset_sum::SubsetSum;

use crate::errors::VisualizerError;
use crate::operation::Operation;
use std::fmt;
use std::str::FromStr;

/// A lazy, finite, single-pass producer of operations
pub type Generator = Box<dyn Iterator<Item = Operation>>;

/// The algorithms that can be visualized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    SubsetSum,
}

impl Algorithm {
    /// All algorithms in selector order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::SubsetSum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::SubsetSum => "Subset Sum",
        }
    }

    /// Whether the algorithm sorts (as opposed to searching with a target)
    pub fn is_sorting(self) -> bool {
        !matches!(self, Algorithm::SubsetSum)
    }

    /// The next algorithm in selector order, wrapping around
    pub fn next(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// The previous algorithm in selector order, wrapping around
    pub fn prev(self) -> Self {
        let pos = self.position();
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|a| *a == self).unwrap_or(0)
    }

    /// Create a fresh generator over a private copy of `base`
    ///
    /// `target` is only read by [`Algorithm::SubsetSum`].
    pub fn generator(self, base: &[u32], target: i64) -> Generator {
        match self {
            Algorithm::Bubble => Box::new(BubbleSort::new(base)),
            Algorithm::Selection => Box::new(SelectionSort::new(base)),
            Algorithm::Insertion => Box::new(InsertionSort::new(base)),
            Algorithm::Merge => Box::new(MergeSort::new(base)),
            Algorithm::Quick => Box::new(QuickSort::new(base)),
            Algorithm::SubsetSum => Box::new(SubsetSum::new(base, target)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = VisualizerError;

    /// Accepts display names ("Quick Sort") and short keys ("quick",
    /// "subset-sum"), ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "bubble" | "bubblesort" => Ok(Algorithm::Bubble),
            "selection" | "selectionsort" => Ok(Algorithm::Selection),
            "insertion" | "insertionsort" => Ok(Algorithm::Insertion),
            "merge" | "mergesort" => Ok(Algorithm::Merge),
            "quick" | "quicksort" => Ok(Algorithm::Quick),
            "subset" | "subsetsum" => Ok(Algorithm::SubsetSum),
            _ => Err(VisualizerError::invalid_algorithm(s)),
        }
    }
}
