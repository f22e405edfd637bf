use crate::disjoint_set::check_index;
use crate::UnionFindError;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A sequence of `(x, y)` pairs over elements `0..element_count`, replayed as `union` calls
/// against every benchmarked variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    element_count: usize,
    pairs: Vec<(usize, usize)>,
}

impl Workload {
    /// Draws `operation_count` pairs with both components uniform over `0..element_count`.
    /// The same arguments always produce the same pairs.
    ///
    /// # Returns
    /// * The workload, or `UnionFindError::InvalidParameters` if `element_count` is zero.
    pub fn generate(
        element_count: usize,
        operation_count: usize,
        seed: u64,
    ) -> Result<Self, UnionFindError> {
        validate_element_count(element_count)?;
        let mut rng = StdRng::seed_from_u64(seed);
        let pairs = (0..operation_count)
            .map(|_| (rng.gen_range(0..element_count), rng.gen_range(0..element_count)))
            .collect();
        trace!("Generated {operation_count} pairs over {element_count} elements (seed {seed})");
        Ok(Workload { element_count, pairs })
    }

    /// Wraps a caller supplied sequence of pairs.
    ///
    /// # Returns
    /// * The workload, `UnionFindError::InvalidParameters` if `element_count` is zero, or
    ///   `UnionFindError::IndexOutOfRange` for the first pair holding an invalid index.
    pub fn from_pairs(
        element_count: usize,
        pairs: Vec<(usize, usize)>,
    ) -> Result<Self, UnionFindError> {
        validate_element_count(element_count)?;
        for &(x, y) in &pairs {
            check_index(x, element_count)?;
            check_index(y, element_count)?;
        }
        Ok(Workload { element_count, pairs })
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn validate_element_count(element_count: usize) -> Result<(), UnionFindError> {
    if element_count < 1 {
        return Err(UnionFindError::InvalidParameters(format!(
            "element_count ({element_count}) must be at least 1"
        )));
    }
    Ok(())
}
