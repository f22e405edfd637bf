use crate::disjoint_set::{check_index, check_size};
use crate::forest::Forest;
use crate::{DisjointSet, UnionFindError};

/// Parent-pointer forest whose `find` repoints every node it visits straight at the root.
/// Unions are unbalanced, as in [`QuickUnion`](crate::QuickUnion).
///
/// * `find`: O(α(n)) amortized
/// * `union`: O(n) worst case
#[derive(Debug, Clone)]
pub struct PathCompressionOnly {
    forest: Forest,
    sets: usize,
}

impl DisjointSet for PathCompressionOnly {
    fn new(n: usize) -> Result<Self, UnionFindError> {
        check_size(n)?;
        Ok(PathCompressionOnly { forest: Forest::new(n), sets: n })
    }

    fn element_count(&self) -> usize {
        self.forest.len()
    }

    fn set_count(&self) -> usize {
        self.sets
    }

    fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        check_index(x, self.forest.len())?;
        Ok(self.forest.root_compressing(x))
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
