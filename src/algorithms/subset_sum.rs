//! Subset-sum backtracking generator
//!
//! Explores every include/exclude assignment of the input elements in
//! depth-first preorder, exclude branch first. The recursion is kept on an
//! explicit frame stack so the traversal can be suspended between any two
//! events.
//!
//! # Events
//!
//! - Each branch taken emits `Decide` with the chosen set and running sum
//!   *after* the choice, before descending.
//! - Each full assignment (a leaf at depth `n`) emits `Solution` when its sum
//!   equals the target and `Check` otherwise.
//! - Clearing the include flag when a node is finished emits nothing.
//!
//! `n` elements produce `2^n` leaves and `2^(n+1) - 2` decisions, followed by
//! a single `Done(None)`.

use crate::array::ArrayModel;
use crate::operation::Operation;
use std::iter::FusedIterator;

/// What a frame does the next time it is on top of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Exclude,
    Include,
    Unwind,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    depth: usize,
    sum: i64,
    branch: Branch,
}

impl Frame {
    fn new(depth: usize, sum: i64) -> Self {
        Frame {
            depth,
            sum,
            branch: Branch::Exclude,
        }
    }
}

/// Step-by-step subset-sum search over a private copy of the input
#[derive(Debug, Clone)]
pub struct SubsetSum {
    values: ArrayModel,
    target: i64,
    chosen: Vec<bool>,
    stack: Vec<Frame>,
    finished: bool,
}

impl SubsetSum {
    pub fn new(base: &[u32], target: i64) -> Self {
        SubsetSum {
            values: ArrayModel::from(base),
            target,
            chosen: vec![false; base.len()],
            stack: vec![Frame::new(0, 0)],
            finished: false,
        }
    }

    fn leaf(&self, sum: i64) -> Operation {
        let chosen = self.chosen.clone();
        if sum == self.target {
            Operation::Solution { chosen, sum }
        } else {
            Operation::Check { chosen, sum }
        }
    }
}

impl Iterator for SubsetSum {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        let n = self.values.len();
        loop {
            let Some(top) = self.stack.last_mut() else {
                if self.finished {
                    return None;
                }
                self.finished = true;
                return Some(Operation::Done(None));
            };

            let (depth, sum) = (top.depth, top.sum);
            if depth == n {
                self.stack.pop();
                return Some(self.leaf(sum));
            }

            match top.branch {
                Branch::Exclude => {
                    top.branch = Branch::Include;
                    self.chosen[depth] = false;
                    self.stack.push(Frame::new(depth + 1, sum));
                    return Some(Operation::Decide {
                        index: depth,
                        include: false,
                        chosen: self.chosen.clone(),
                        sum,
                    });
                }
                Branch::Include => {
                    top.branch = Branch::Unwind;
                    self.chosen[depth] = true;
                    let sum = sum + i64::from(self.values[depth]);
                    self.stack.push(Frame::new(depth + 1, sum));
                    return Some(Operation::Decide {
                        index: depth,
                        include: true,
                        chosen: self.chosen.clone(),
                        sum,
                    });
                }
                Branch::Unwind => {
                    self.chosen[depth] = false;
                    self.stack.pop();
                }
            }
        }
    }
}

impl FusedIterator for SubsetSum {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_has_single_leaf() {
        let ops: Vec<Operation> = SubsetSum::new(&[], 0).collect();
        assert_eq!(
            ops,
            vec![
                Operation::Solution {
                    chosen: vec![],
                    sum: 0,
                },
                Operation::Done(None),
            ]
        );
    }

    #[test]
    fn test_single_element_preorder() {
        let ops: Vec<Operation> = SubsetSum::new(&[4], 9).collect();
        assert_eq!(
            ops,
            vec![
                Operation::Decide {
                    index: 0,
                    include: false,
                    chosen: vec![false],
                    sum: 0,
                },
                Operation::Check {
                    chosen: vec![false],
                    sum: 0,
                },
                Operation::Decide {
                    index: 0,
                    include: true,
                    chosen: vec![true],
                    sum: 4,
                },
                Operation::Check {
                    chosen: vec![true],
                    sum: 4,
                },
                Operation::Done(None),
            ]
        );
    }
}
