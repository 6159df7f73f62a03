//! Pseudocode listings and the operation → line lookup table
//!
//! Each algorithm has a short listing shown next to the bars. As operations
//! are applied, [`line_for`] says which line to highlight: a line number,
//! [`LineMarker::Clear`] once the run is done, or [`LineMarker::Keep`] for
//! operations that have no line of their own.

use crate::algorithms::Algorithm;
use crate::operation::Operation;

/// Effect of an operation on the highlighted pseudocode line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker {
    /// Highlight this (0-based) line
    Line(usize),
    /// Remove the highlight
    Clear,
    /// Leave the current highlight alone
    Keep,
}

impl LineMarker {
    /// Fold this marker into the currently highlighted line
    pub fn apply(self, current: Option<usize>) -> Option<usize> {
        match self {
            LineMarker::Line(line) => Some(line),
            LineMarker::Clear => None,
            LineMarker::Keep => current,
        }
    }
}

const BUBBLE: &[&str] = &[
    "for i from 0 to n-1:",
    "  for j from 0 to n-i-2:",
    "    if A[j] > A[j+1]:",
    "      swap(A[j], A[j+1])",
];

const SELECTION: &[&str] = &[
    "for i from 0 to n-1:",
    "  min_idx = i",
    "  for j from i+1 to n-1:",
    "    if A[j] < A[min_idx]:",
    "      min_idx = j",
    "  swap(A[i], A[min_idx])",
];

const INSERTION: &[&str] = &[
    "for i from 1 to n-1:",
    "  key = A[i]",
    "  j = i-1",
    "  while j>=0 and A[j] > key:",
    "    A[j+1] = A[j]",
    "    j = j-1",
    "  A[j+1] = key",
];

const MERGE: &[&str] = &[
    "width = 1",
    "while width < n:",
    "  for i in range(0, n, 2*width):",
    "    merge A[i:i+width] and A[i+width:i+2*width]",
    "  width *= 2",
];

const QUICK: &[&str] = &[
    "use a stack of ranges",
    "pop range (low, high)",
    "partition with pivot = A[high]",
    "push subranges (low, p-1) and (p+1, high)",
];

const SUBSET: &[&str] = &[
    "def backtrack(i, sum):",
    "  if i==n: check sum",
    "  choose exclude i, backtrack(i+1, sum)",
    "  choose include i, backtrack(i+1, sum+arr[i])",
];

/// The pseudocode listing for an algorithm
pub fn listing(algorithm: Algorithm) -> &'static [&'static str] {
    match algorithm {
        Algorithm::Bubble => BUBBLE,
        Algorithm::Selection => SELECTION,
        Algorithm::Insertion => INSERTION,
        Algorithm::Merge => MERGE,
        Algorithm::Quick => QUICK,
        Algorithm::SubsetSum => SUBSET,
    }
}

/// Which listing line corresponds to `operation`
pub fn line_for(algorithm: Algorithm, operation: &Operation) -> LineMarker {
    use Operation as Op;

    if operation.is_terminal() {
        return LineMarker::Clear;
    }

    let line = match (algorithm, operation) {
        (Algorithm::Bubble, Op::Compare(..)) => 2,
        (Algorithm::Bubble, Op::Swap { .. }) => 3,

        (Algorithm::Selection, Op::Compare(..)) => 3,
        (Algorithm::Selection, Op::Highlight(_)) => 4,
        (Algorithm::Selection, Op::Swap { .. }) => 5,

        (Algorithm::Insertion, Op::Highlight(_)) => 1,
        (Algorithm::Insertion, Op::Compare(..)) => 3,
        (Algorithm::Insertion, Op::Shift { .. }) => 4,
        (Algorithm::Insertion, Op::Insert { .. }) => 6,

        (Algorithm::Merge, Op::Compare(..) | Op::MergeWrite { .. }) => 3,

        (Algorithm::Quick, Op::Compare(..) | Op::Swap { .. }) => 2,

        (Algorithm::SubsetSum, Op::Decide { include: false, .. }) => 2,
        (Algorithm::SubsetSum, Op::Decide { include: true, .. }) => 3,
        (Algorithm::SubsetSum, Op::Check { .. } | Op::Solution { .. }) => 1,

        _ => return LineMarker::Keep,
    };
    LineMarker::Line(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_line_exists_in_listing() {
        let samples = [
            Operation::Compare(0, 1),
            Operation::Swap {
                indices: (0, 1),
                array: vec![],
            },
            Operation::Shift {
                indices: (0, 1),
                array: vec![],
            },
            Operation::Insert {
                index: 0,
                array: vec![],
            },
            Operation::MergeWrite {
                index: 0,
                value: 1,
                array: vec![],
            },
            Operation::Highlight(vec![0]),
            Operation::Decide {
                index: 0,
                include: true,
                chosen: vec![true],
                sum: 1,
            },
            Operation::Check {
                chosen: vec![false],
                sum: 0,
            },
        ];

        for algorithm in Algorithm::ALL {
            for op in &samples {
                if let LineMarker::Line(line) = line_for(algorithm, op) {
                    assert!(
                        line < listing(algorithm).len(),
                        "{} line {} out of range",
                        algorithm,
                        line
                    );
                }
            }
        }
    }

    #[test]
    fn test_done_clears_and_unmapped_keeps() {
        assert_eq!(
            line_for(Algorithm::Quick, &Operation::Done(Some(vec![1]))),
            LineMarker::Clear
        );
        assert_eq!(
            line_for(Algorithm::Bubble, &Operation::Highlight(vec![1])),
            LineMarker::Keep
        );
        assert_eq!(LineMarker::Keep.apply(Some(2)), Some(2));
        assert_eq!(LineMarker::Clear.apply(Some(2)), None);
    }
}
