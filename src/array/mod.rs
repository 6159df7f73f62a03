//! Array model shared by the generators and the playback controller
//!
//! [`ArrayModel`] owns an ordered sequence of non-negative integers. The
//! controller keeps one as the base array of the next run; every generator
//! keeps its own private copy and hands out [`ArrayModel::snapshot`]s, so no
//! snapshot is ever aliased to state that is still being mutated.
//!
//! # Size Policy
//!
//! Generated arrays are clamped to [`MIN_ARRAY_SIZE`]..=[`MAX_ARRAY_SIZE`]
//! elements. The size control in the UI steps within the narrower
//! [`CONTROL_MIN_SIZE`]..=[`CONTROL_MAX_SIZE`] range (see `playback::settings`).

pub mod constants;

pub use constants::*;

use rand::Rng;
use std::ops::{Index, RangeInclusive};

/// The working array of a run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArrayModel {
    values: Vec<u32>,
}

impl ArrayModel {
    /// Wrap an explicit array
    pub fn new(values: Vec<u32>) -> Self {
        ArrayModel { values }
    }

    /// Generate an array of uniformly random values
    ///
    /// `size` is clamped to the generation bounds before allocation.
    pub fn random<R: Rng>(size: usize, range: RangeInclusive<u32>, rng: &mut R) -> Self {
        let size = Self::clamp_size(size);
        let values = (0..size).map(|_| rng.gen_range(range.clone())).collect();
        ArrayModel { values }
    }

    /// Clamp a requested size to the generation bounds
    pub fn clamp_size(size: usize) -> usize {
        size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE)
    }

    /// Defensive copy of the current contents
    pub fn snapshot(&self) -> Vec<u32> {
        self.values.clone()
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set(&mut self, index: usize, value: u32) {
        self.values[index] = value;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }
}

impl Index<usize> for ArrayModel {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.values[index]
    }
}

impl From<&[u32]> for ArrayModel {
    fn from(values: &[u32]) -> Self {
        ArrayModel::new(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_size_is_clamped() {
        let mut rng = StdRng::seed_from_u64(7);

        let tiny = ArrayModel::random(0, MIN_VALUE..=MAX_VALUE, &mut rng);
        assert_eq!(tiny.len(), MIN_ARRAY_SIZE);

        let huge = ArrayModel::random(10_000, MIN_VALUE..=MAX_VALUE, &mut rng);
        assert_eq!(huge.len(), MAX_ARRAY_SIZE);

        let normal = ArrayModel::random(42, MIN_VALUE..=MAX_VALUE, &mut rng);
        assert_eq!(normal.len(), 42);
    }

    #[test]
    fn test_random_values_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        let array = ArrayModel::random(200, 10..=20, &mut rng);
        assert!(array.values().iter().all(|v| (10..=20).contains(v)));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut array = ArrayModel::new(vec![3, 1, 2]);
        let before = array.snapshot();
        array.swap(0, 1);
        array.set(2, 9);

        assert_eq!(before, vec![3, 1, 2]);
        assert_eq!(array.values(), &[1, 3, 9]);
        assert_eq!(array[2], 9);
    }
}
