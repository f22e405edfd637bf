/// Parent-pointer storage shared by the tree based variants. Element `i` is a root iff
/// `parent[i] == i`.
#[derive(Debug, Clone)]
pub(crate) struct Forest {
    parent: Vec<usize>,
}

impl Forest {
    pub(crate) fn new(n: usize) -> Self {
        Forest { parent: (0..n).collect() }
    }

    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    /// Follows parent links up to the root without touching the forest.
    pub(crate) fn root(&self, mut n: usize) -> usize {
        while self.parent[n] != n {
            n = self.parent[n];
        }
        n
    }

    /// Finds the root, then walks the same path a second time pointing every node on it
    /// directly at the root.
    pub(crate) fn root_compressing(&mut self, n: usize) -> usize {
        let root = self.root(n);
        let mut p = n;
        while self.parent[p] != root {
            let next = self.parent[p];
            self.parent[p] = root;
            p = next;
        }
        root
    }

    pub(crate) fn attach(&mut self, child_root: usize, new_root: usize) {
        self.parent[child_root] = new_root;
    }

    #[cfg(test)]
    pub(crate) fn parents(&self) -> &[usize] {
        &self.parent
    }

    /// Number of links between `n` and its root.
    #[cfg(test)]
    pub(crate) fn depth(&self, mut n: usize) -> usize {
        let mut depth = 0;
        while self.parent[n] != n {
            n = self.parent[n];
            depth += 1;
        }
        depth
    }

    /// Height of the tree hanging from `root`, i.e. the deepest node that resolves to it.
    #[cfg(test)]
    pub(crate) fn height(&self, root: usize) -> usize {
        (0..self.len())
            .filter(|&n| self.root(n) == root)
            .map(|n| self.depth(n))
            .max()
            .unwrap_or(0)
    }
}

/// A [`Forest`] whose roots carry a rank, an upper bound on the height of their tree.
#[derive(Debug, Clone)]
pub(crate) struct RankedForest {
    forest: Forest,
    rank: Vec<usize>,
}

impl RankedForest {
    pub(crate) fn new(n: usize) -> Self {
        RankedForest { forest: Forest::new(n), rank: vec![0; n] }
    }

    pub(crate) fn len(&self) -> usize {
        self.forest.len()
    }

    pub(crate) fn root(&self, n: usize) -> usize {
        self.forest.root(n)
    }

    pub(crate) fn root_compressing(&mut self, n: usize) -> usize {
        self.forest.root_compressing(n)
    }

    /// Joins two distinct roots, hanging the lower ranked one beneath the other. On a tie
    /// `root_y` goes under `root_x` and `root_x` gains one rank.
    pub(crate) fn link(&mut self, root_x: usize, root_y: usize) {
        debug_assert_ne!(root_x, root_y);
        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.forest.attach(root_x, root_y),
            std::cmp::Ordering::Greater => self.forest.attach(root_y, root_x),
            std::cmp::Ordering::Equal => {
                self.forest.attach(root_y, root_x);
                self.rank[root_x] += 1;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn forest(&self) -> &Forest {
        &self.forest
    }

    #[cfg(test)]
    pub(crate) fn ranks(&self) -> &[usize] {
        &self.rank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> Forest {
        // n-1 -> n-2 -> ... -> 0
        let mut forest = Forest::new(n);
        for i in 1..n {
            forest.attach(i, i - 1);
        }
        forest
    }

    #[test]
    fn new_forest_is_all_roots() {
        let forest = Forest::new(4);
        assert_eq!(&[0, 1, 2, 3], forest.parents());
        assert!((0..4).all(|n| forest.root(n) == n));
    }

    #[test]
    fn root_does_not_mutate() {
        let forest = chain(5);
        assert_eq!(0, forest.root(4));
        assert_eq!(&[0, 0, 1, 2, 3], forest.parents());
    }

    #[test]
    fn root_compressing_flattens_path() {
        let mut forest = chain(5);
        assert_eq!(0, forest.root_compressing(4));
        assert_eq!(&[0, 0, 0, 0, 0], forest.parents());
    }

    #[test]
    fn root_compressing_only_touches_visited_path() {
        let mut forest = chain(5);
        assert_eq!(0, forest.root_compressing(2));
        assert_eq!(&[0, 0, 0, 2, 3], forest.parents());
    }

    #[test]
    fn root_compressing_long_chain() {
        let n = 200_000;
        let mut forest = chain(n);
        assert_eq!(0, forest.root_compressing(n - 1));
        assert_eq!(1, forest.height(0));
    }

    #[test]
    fn link_tie_keeps_x_and_bumps_rank() {
        let mut forest = RankedForest::new(3);
        forest.link(1, 2);
        assert_eq!(1, forest.root(2));
        assert_eq!(&[0, 1, 0], forest.ranks());
    }

    #[test]
    fn link_lower_rank_goes_under_higher() {
        let mut forest = RankedForest::new(3);
        forest.link(1, 2);
        // rank[0] = 0 < rank[1] = 1, so 0 goes under 1 even though it is passed first
        forest.link(0, 1);
        assert_eq!(1, forest.root(0));
        assert_eq!(&[0, 1, 0], forest.ranks());
    }
}
