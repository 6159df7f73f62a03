//! Bubble sort generator
//!
//! Pass `p` compares every adjacent pair `(j, j + 1)` with `j + 1 < n - p`
//! and swaps when the left element is larger. A `Compare` is emitted for
//! every pair, a `Swap` only when the pair is exchanged, so an array of
//! length `n` always produces `n(n-1)/2` comparisons.

use crate::array::ArrayModel;
use crate::operation::Operation;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Look for the next pair to compare
    Scan,
    /// The pair at `j` was compared; exchange it if needed
    Exchange,
    Finish,
    Exhausted,
}

/// Step-by-step bubble sort over a private copy of the input
#[derive(Debug, Clone)]
pub struct BubbleSort {
    array: ArrayModel,
    pass: usize,
    j: usize,
    state: State,
}

impl BubbleSort {
    pub fn new(base: &[u32]) -> Self {
        BubbleSort {
            array: ArrayModel::from(base),
            pass: 0,
            j: 0,
            state: State::Scan,
        }
    }
}

impl Iterator for BubbleSort {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        loop {
            match self.state {
                State::Scan => {
                    let n = self.array.len();
                    if self.pass >= n {
                        self.state = State::Finish;
                        continue;
                    }
                    if self.j + 1 < n - self.pass {
                        self.state = State::Exchange;
                        return Some(Operation::Compare(self.j, self.j + 1));
                    }
                    self.pass += 1;
                    self.j = 0;
                }
                State::Exchange => {
                    let j = self.j;
                    self.j += 1;
                    self.state = State::Scan;
                    if self.array[j] > self.array[j + 1] {
                        self.array.swap(j, j + 1);
                        return Some(Operation::Swap {
                            indices: (j, j + 1),
                            array: self.array.snapshot(),
                        });
                    }
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

impl FusedIterator for BubbleSort {}
