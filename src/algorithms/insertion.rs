//! Insertion sort generator
//!
//! The key at position `i` is lifted (`Highlight`), then every larger
//! predecessor is compared and shifted one slot right. The `hole` index
//! tracks where the key will land. While shifting, the snapshot shows the
//! shifted value twice since the key is held outside the array.

use crate::array::ArrayModel;
use crate::operation::Operation;
use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Lift the key at `i`
    Lift,
    /// Compare the key against the element left of the hole
    Probe,
    /// Move the larger predecessor into the hole
    Shift,
    /// Drop the key into the hole
    Land,
    Finish,
    Exhausted,
}

/// Step-by-step insertion sort over a private copy of the input
#[derive(Debug, Clone)]
pub struct InsertionSort {
    array: ArrayModel,
    i: usize,
    hole: usize,
    key: u32,
    state: State,
}

impl InsertionSort {
    pub fn new(base: &[u32]) -> Self {
        InsertionSort {
            array: ArrayModel::from(base),
            i: 1,
            hole: 0,
            key: 0,
            state: State::Lift,
        }
    }
}

impl Iterator for InsertionSort {
    type Item = Operation;

    fn next(&mut self) -> Option<Operation> {
        loop {
            match self.state {
                State::Lift => {
                    if self.i >= self.array.len() {
                        self.state = State::Finish;
                        continue;
                    }
                    self.key = self.array[self.i];
                    self.hole = self.i;
                    self.state = State::Probe;
                    return Some(Operation::Highlight(vec![self.i]));
                }
                State::Probe => {
                    if self.hole > 0 && self.array[self.hole - 1] > self.key {
                        self.state = State::Shift;
                        return Some(Operation::Compare(self.hole - 1, self.hole));
                    }
                    self.state = State::Land;
                }
                State::Shift => {
                    let moved = self.array[self.hole - 1];
                    self.array.set(self.hole, moved);
                    self.hole -= 1;
                    self.state = State::Probe;
                    return Some(Operation::Shift {
                        indices: (self.hole, self.hole + 1),
                        array: self.array.snapshot(),
                    });
                }
                State::Land => {
                    self.array.set(self.hole, self.key);
                    self.i += 1;
                    self.state = State::Lift;
                    return Some(Operation::Insert {
                        index: self.hole,
                        array: self.array.snapshot(),
                    });
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

impl FusedIterator for InsertionSort {}
