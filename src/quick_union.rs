use crate::disjoint_set::{check_index, check_size};
use crate::forest::Forest;
use crate::{DisjointSet, UnionFindError};

/// Parent-pointer forest with no balancing. `union` always hangs `y`'s root beneath `x`'s,
/// so joining `0..n` in increasing order builds a single chain of height `n - 1`.
///
/// * `find`: O(n) worst case
/// * `union`: O(n) worst case
#[derive(Debug, Clone)]
pub struct QuickUnion {
    forest: Forest,
    sets: usize,
}

impl DisjointSet for QuickUnion {
    fn new(n: usize) -> Result<Self, UnionFindError> {
        check_size(n)?;
        Ok(QuickUnion { forest: Forest::new(n), sets: n })
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
        self.forest.attach(root_y, root_x);
        self.sets -= 1;
        Ok(true)
    }
}
