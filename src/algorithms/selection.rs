//! Selection sort generator
//!
//! For each position `i` the remaining suffix is scanned for its minimum.
//! Every scan step emits `Compare(min, j)`; a new running minimum emits
//! `Highlight`. The closing `Swap` is only emitted when the minimum is not
//! already at `i`, so positions that are already in place produce no swap.

use crate::array::ArrayModel;
use crate::operation::Operation;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Start the next outer iteration
    Outer,
    /// Compare the next suffix element against the running minimum
    Scan,
    /// The element at `j` was compared; update the minimum
    Track,
    /// Move the minimum into position `i`
    Place,
    Finish,
    Exhausted,
}

/// Step-by-step selection sort over a private copy of the input
#[derive(Debug, Clone)]
pub struct SelectionSort {
    array: ArrayModel,
    i: usize,
    j: usize,
    min: usize,
    state: State,
}

impl SelectionSort {
    pub fn new(base: &[u32]) -> Self {
        SelectionSort {
            array: ArrayModel::from(base),
            i: 0,
            j: 0,
            min: 0,
            state: State::Outer,
        }
    }
}

impl Iterator for SelectionSort {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        loop {
            match self.state {
                State::Outer => {
                    if self.i >= self.array.len() {
                        self.state = State::Finish;
                        continue;
                    }
                    self.min = self.i;
                    self.j = self.i + 1;
                    self.state = State::Scan;
                }
                State::Scan => {
                    if self.j < self.array.len() {
                        self.state = State::Track;
                        return Some(Operation::Compare(self.min, self.j));
                    }
                    self.state = State::Place;
                }
                State::Track => {
                    let j = self.j;
                    self.j += 1;
                    self.state = State::Scan;
                    if self.array[j] < self.array[self.min] {
                        self.min = j;
                        return Some(Operation::Highlight(vec![j]));
                    }
                }
                State::Place => {
                    let i = self.i;
                    self.i += 1;
                    self.state = State::Outer;
                    if self.min != i {
                        self.array.swap(i, self.min);
                        return Some(Operation::Swap {
                            indices: (i, self.min),
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

impl FusedIterator for SelectionSort {}
