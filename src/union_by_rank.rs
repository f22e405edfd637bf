use crate::disjoint_set::{check_index, check_size};
use crate::forest::RankedForest;
use crate::{DisjointSet, UnionFindError};

/// Parent-pointer forest where `union` hangs the lower ranked root beneath the higher
/// ranked one. `find` walks to the root without compressing, so every tree stays within
/// `O(log n)` height.
///
/// * `find`: O(log n)
/// * `union`: O(log n)
#[derive(Debug, Clone)]
pub struct UnionByRank {
    forest: RankedForest,
    sets: usize,
}

impl DisjointSet for UnionByRank {
    fn new(n: usize) -> Result<Self, UnionFindError> {
        check_size(n)?;
        Ok(UnionByRank { forest: RankedForest::new(n), sets: n })
    }

    fn element_count(&self) -> usize {
        self.forest.len()
    }

    fn set_count(&self) -> usize {
        self.sets
    }

    fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        check_index(x, self.forest.len())?;
        Ok(self.forest.root(x))
    }

    fn union(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;
        if root_x == root_y {
            return Ok(false);
        }
        self.forest.link(root_x, root_y);
        self.sets -= 1;
        Ok(true)
    }
}
