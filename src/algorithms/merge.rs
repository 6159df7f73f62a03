//! Bottom-up merge sort generator
//!
//! Runs of length `width` are merged pairwise, with `width` doubling from 1
//! until it covers the whole array. An auxiliary copy of the array is taken
//! at the start of every width pass and the merge reads from it while
//! writing into the working array.
//!
//! Each comparison emits `Compare(i, j)` and every written cell emits
//! `MergeWrite`, including the cells drained from whichever run is left over.
//! Equal elements are taken from the left run first.

use crate::array::ArrayModel;
use crate::operation::Operation;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Start a width pass, or finish once the width covers the array
    Pass,
    /// Set up the next pair of runs in the current pass
    Block,
    /// Compare the heads of both runs
    Merge,
    /// Write the smaller head
    Take,
    /// Copy whatever is left of either run
    Drain,
    Finish,
    Exhausted,
}

/// Step-by-step merge sort over a private copy of the input
#[derive(Debug, Clone)]
pub struct MergeSort {
    array: ArrayModel,
    aux: Vec<u32>,
    width: usize,
    /// Start of the current block
    lo: usize,
    mid: usize,
    hi: usize,
    /// Head of the left run
    i: usize,
    /// Head of the right run
    j: usize,
    /// Next output cell
    k: usize,
    state: State,
}

impl MergeSort {
    pub fn new(base: &[u32]) -> Self {
        MergeSort {
            array: ArrayModel::from(base),
            aux: base.to_vec(),
            width: 1,
            lo: 0,
            mid: 0,
            hi: 0,
            i: 0,
            j: 0,
            k: 0,
            state: State::Pass,
        }
    }

    fn write(&mut self, value: u32) -> Operation {
        let index = self.k;
        self.array.set(index, value);
        self.k += 1;
        Operation::MergeWrite {
            index,
            value,
            array: self.array.snapshot(),
        }
    }
}

impl Iterator for MergeSort {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        loop {
            match self.state {
                State::Pass => {
                    if self.width >= self.array.len() {
                        self.state = State::Finish;
                        continue;
                    }
                    self.aux = self.array.snapshot();
                    self.lo = 0;
                    self.state = State::Block;
                }
                State::Block => {
                    let n = self.array.len();
                    if self.lo >= n {
                        self.width *= 2;
                        self.state = State::Pass;
                        continue;
                    }
                    self.mid = (self.lo + self.width).min(n);
                    self.hi = (self.lo + 2 * self.width).min(n);
                    self.i = self.lo;
                    self.j = self.mid;
                    self.k = self.lo;
                    self.state = State::Merge;
                }
                State::Merge => {
                    if self.i < self.mid && self.j < self.hi {
                        self.state = State::Take;
                        return Some(Operation::Compare(self.i, self.j));
                    }
                    self.state = State::Drain;
                }
                State::Take => {
                    let value = if self.aux[self.i] <= self.aux[self.j] {
                        self.i += 1;
                        self.aux[self.i - 1]
                    } else {
                        self.j += 1;
                        self.aux[self.j - 1]
                    };
                    self.state = State::Merge;
                    return Some(self.write(value));
                }
                State::Drain => {
                    let value = if self.i < self.mid {
                        self.i += 1;
                        self.aux[self.i - 1]
                    } else if self.j < self.hi {
                        self.j += 1;
                        self.aux[self.j - 1]
                    } else {
                        self.lo += 2 * self.width;
                        self.state = State::Block;
                        continue;
                    };
                    return Some(self.write(value));
                }
                State::Finish => {
                    self.state = State::Exhausted;
                    return Some(Operation::Done(Some(self.array.snapshot())));
                }
                State::Exhausted => return None,
            }
        }
    }
}

impl FusedIterator for MergeSort {}
