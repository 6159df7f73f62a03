//! Operation events emitted by the algorithm generators
//!
//! An [`Operation`] describes one observable step of an algorithm. Variants
//! that mutate the array carry a snapshot taken *after* the mutation, so a
//! consumer can present any event on its own without replaying the ones
//! before it.
//!
//! [`Operation::Done`] is terminal: a generator never yields anything after it.

use std::fmt;

/// One observable step of an algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Two positions were inspected; nothing moved
    Compare(usize, usize),

    /// Two positions exchanged values
    Swap {
        indices: (usize, usize),
        array: Vec<u32>,
    },

    /// Insertion sort moved the element at `indices.0` one slot right
    Shift {
        indices: (usize, usize),
        array: Vec<u32>,
    },

    /// Insertion sort placed the held key
    Insert { index: usize, array: Vec<u32> },

    /// Merge sort wrote `value` into the output range
    MergeWrite {
        index: usize,
        value: u32,
        array: Vec<u32>,
    },

    /// Advisory marker (new running minimum, lifted key)
    Highlight(Vec<usize>),

    /// Subset sum took a branch; `chosen` and `sum` are after the choice
    Decide {
        index: usize,
        include: bool,
        chosen: Vec<bool>,
        sum: i64,
    },

    /// Subset sum reached a full assignment
    Check { chosen: Vec<bool>, sum: i64 },

    /// Subset sum reached a full assignment whose sum equals the target
    Solution { chosen: Vec<bool>, sum: i64 },

    /// The generator is exhausted. Sorts carry the final array.
    Done(Option<Vec<u32>>),
}

/// Fieldless mirror of [`Operation`], used as a lookup key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Compare,
    Swap,
    Shift,
    Insert,
    MergeWrite,
    Highlight,
    Decide,
    Check,
    Solution,
    Done,
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Compare(..) => OperationKind::Compare,
            Operation::Swap { .. } => OperationKind::Swap,
            Operation::Shift { .. } => OperationKind::Shift,
            Operation::Insert { .. } => OperationKind::Insert,
            Operation::MergeWrite { .. } => OperationKind::MergeWrite,
            Operation::Highlight(_) => OperationKind::Highlight,
            Operation::Decide { .. } => OperationKind::Decide,
            Operation::Check { .. } => OperationKind::Check,
            Operation::Solution { .. } => OperationKind::Solution,
            Operation::Done(_) => OperationKind::Done,
        }
    }

    /// The array snapshot carried by this event, if any
    pub fn array(&self) -> Option<&[u32]> {
        match self {
            Operation::Swap { array, .. }
            | Operation::Shift { array, .. }
            | Operation::Insert { array, .. }
            | Operation::MergeWrite { array, .. } => Some(array.as_slice()),
            Operation::Done(array) => array.as_deref(),
            _ => None,
        }
    }

    /// The subset-sum chosen set carried by this event, if any
    pub fn chosen(&self) -> Option<&[bool]> {
        match self {
            Operation::Decide { chosen, .. }
            | Operation::Check { chosen, .. }
            | Operation::Solution { chosen, .. } => Some(chosen.as_slice()),
            _ => None,
        }
    }

    /// Array positions this event points at
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Operation::Compare(a, b) => vec![*a, *b],
            Operation::Swap { indices, .. } | Operation::Shift { indices, .. } => {
                vec![indices.0, indices.1]
            }
            Operation::Insert { index, .. }
            | Operation::MergeWrite { index, .. }
            | Operation::Decide { index, .. } => vec![*index],
            Operation::Highlight(indices) => indices.clone(),
            Operation::Check { .. } | Operation::Solution { .. } | Operation::Done(_) => {
                Vec::new()
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Operation::Done(_))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Compare(a, b) => write!(f, "Comparing indices {} and {}", a, b),
            Operation::Swap { indices, .. } => {
                write!(f, "Swapped indices {} and {}", indices.0, indices.1)
            }
            Operation::Shift { .. } => write!(f, "Shifting elements"),
            Operation::Insert { index, .. } => write!(f, "Inserted at index {}", index),
            Operation::MergeWrite { index, .. } => {
                write!(f, "Writing merged value at index {}", index)
            }
            Operation::Highlight(indices) => write!(f, "Highlight index {:?}", indices),
            Operation::Decide { index, include, .. } => write!(
                f,
                "Index {} -> {}",
                index,
                if *include { "Include" } else { "Exclude" }
            ),
            Operation::Check { sum, .. } => write!(f, "Checked sum = {}", sum),
            Operation::Solution { sum, .. } => write!(f, "Solution! sum={}", sum),
            Operation::Done(_) => write!(f, "Done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_accessor() {
        let swap = Operation::Swap {
            indices: (0, 1),
            array: vec![1, 2],
        };
        assert_eq!(swap.array(), Some(&[1, 2][..]));
        assert_eq!(Operation::Compare(0, 1).array(), None);
        assert_eq!(Operation::Done(None).array(), None);
        assert_eq!(Operation::Done(Some(vec![4])).array(), Some(&[4][..]));
    }

    #[test]
    fn test_only_done_is_terminal() {
        assert!(Operation::Done(None).is_terminal());
        assert!(!Operation::Highlight(vec![2]).is_terminal());
        assert!(!Operation::Check {
            chosen: vec![true],
            sum: 3
        }
        .is_terminal());
    }

    #[test]
    fn test_status_text() {
        assert_eq!(
            Operation::Compare(2, 3).to_string(),
            "Comparing indices 2 and 3"
        );
        assert_eq!(
            Operation::Decide {
                index: 1,
                include: true,
                chosen: vec![false, true],
                sum: 3,
            }
            .to_string(),
            "Index 1 -> Include"
        );
        assert_eq!(
            Operation::Solution {
                chosen: vec![true],
                sum: 10
            }
            .to_string(),
            "Solution! sum=10"
        );
        assert_eq!(Operation::Highlight(vec![4]).to_string(), "Highlight index [4]");
    }

    #[test]
    fn test_kind_and_indices() {
        let op = Operation::MergeWrite {
            index: 3,
            value: 9,
            array: vec![0; 4],
        };
        assert_eq!(op.kind(), OperationKind::MergeWrite);
        assert_eq!(op.indices(), vec![3]);
        assert_eq!(Operation::Compare(1, 4).indices(), vec![1, 4]);
    }
}
