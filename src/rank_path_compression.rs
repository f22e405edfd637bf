use crate::disjoint_set::{check_index, check_size};
use crate::forest::RankedForest;
use crate::{DisjointSet, UnionFindError};

/// Union by rank combined with path compressing `find`. The attach rule and tie-break are
/// those of [`UnionByRank`](crate::UnionByRank), the compression that of
/// [`PathCompressionOnly`](crate::PathCompressionOnly).
///
/// * `find`: O(α(n)) amortized
/// * `union`: O(α(n)) amortized
#[derive(Debug, Clone)]
pub struct UnionByRankWithPathCompression {
    forest: RankedForest,
    sets: usize,
}

impl DisjointSet for UnionByRankWithPathCompression {
    fn new(n: usize) -> Result<Self, UnionFindError> {
        check_size(n)?;
        Ok(UnionByRankWithPathCompression { forest: RankedForest::new(n), sets: n })
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
        self.forest.link(root_x, root_y);
        self.sets -= 1;
        Ok(true)
    }
}
