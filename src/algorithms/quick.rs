//! Quick sort generator
//!
//! Iterative quick sort using an explicit stack of inclusive `(low, high)`
//! ranges and the Lomuto partition scheme with the last element as pivot.
//!
//! During a partition every scanned element emits `Compare(j, high)`; each
//! element smaller than the pivot is swapped into the `< pivot` prefix and
//! emits `Swap(i, j)` (even when `i == j`). The final `Swap(i, high)` puts
//! the pivot in place. After a partition `(low, p - 1)` is pushed before
//! `(p + 1, high)`, so the right side is processed first.

use crate::array::ArrayModel;
use crate::operation::Operation;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Pop the next range to partition
    Pop,
    /// Compare the next element against the pivot
    Scan,
    /// The element at `j` was compared; move it if it is smaller
    Test,
    Finish,
    Exhausted,
}

/// Step-by-step quick sort over a private copy of the input
#[derive(Debug, Clone)]
pub struct QuickSort {
    array: ArrayModel,
    stack: Vec<(usize, usize)>,
    low: usize,
    high: usize,
    pivot: u32,
    /// End of the `< pivot` prefix
    i: usize,
    /// Scan position
    j: usize,
    state: State,
}

impl QuickSort {
    pub fn new(base: &[u32]) -> Self {
        let mut stack = Vec::new();
        if base.len() > 1 {
            stack.push((0, base.len() - 1));
        }
        QuickSort {
            array: ArrayModel::from(base),
            stack,
            low: 0,
            high: 0,
            pivot: 0,
            i: 0,
            j: 0,
            state: State::Pop,
        }
    }

    /// Queue both sides of the pivot. Ranges shorter than two are already sorted.
    fn push_partitions(&mut self, p: usize) {
        if p > self.low + 1 {
            self.stack.push((self.low, p - 1));
        }
        if p + 1 < self.high {
            self.stack.push((p + 1, self.high));
        }
    }
}

impl Iterator for QuickSort {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        loop {
            match self.state {
                State::Pop => {
                    let Some((low, high)) = self.stack.pop() else {
                        self.state = State::Finish;
                        continue;
                    };
                    self.low = low;
                    self.high = high;
                    self.pivot = self.array[high];
                    self.i = low;
                    self.j = low;
                    self.state = State::Scan;
                }
                State::Scan => {
                    if self.j < self.high {
                        self.state = State::Test;
                        return Some(Operation::Compare(self.j, self.high));
                    }
                    let p = self.i;
                    self.array.swap(p, self.high);
                    self.push_partitions(p);
                    self.state = State::Pop;
                    return Some(Operation::Swap {
                        indices: (p, self.high),
                        array: self.array.snapshot(),
                    });
                }
                State::Test => {
                    let j = self.j;
                    self.j += 1;
                    self.state = State::Scan;
                    if self.array[j] < self.pivot {
                        let i = self.i;
                        self.array.swap(i, j);
                        self.i += 1;
                        return Some(Operation::Swap {
                            indices: (i, j),
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

impl FusedIterator for QuickSort {}
