use crate::disjoint_set::{check_index, check_size};
use crate::{DisjointSet, UnionFindError};

/// Stores the component label of every element directly. `find` is a lookup, `union`
/// relabels every member of `y`'s component with `x`'s label in one scan.
///
/// * `find`: O(1)
/// * `union`: O(n)
#[derive(Debug, Clone)]
pub struct QuickFind {
    id: Vec<usize>,
    sets: usize,
}

impl DisjointSet for QuickFind {
    fn new(n: usize) -> Result<Self, UnionFindError> {
        check_size(n)?;
        Ok(QuickFind { id: (0..n).collect(), sets: n })
    }

    fn element_count(&self) -> usize {
        self.id.len()
    }

    fn set_count(&self) -> usize {
        self.sets
    }

    fn find(&mut self, x: usize) -> Result<usize, UnionFindError> {
        check_index(x, self.id.len())?;
        Ok(self.id[x])
    }

    fn union(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        check_index(x, self.id.len())?;
        check_index(y, self.id.len())?;
        let id_x = self.id[x];
        let id_y = self.id[y];
        if id_x == id_y {
            return Ok(false);
        }
        for id in self.id.iter_mut().filter(|id| **id == id_y) {
            *id = id_x;
        }
        self.sets -= 1;
        Ok(true)
    }
}

impl QuickFind {
    #[cfg(test)]
    pub(crate) fn labels(&self) -> &[usize] {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disjoint_set::contract_tests;

    #[test]
    fn scenario_three_sets() {
        contract_tests::scenario_three_sets::<QuickFind>();
    }

    #[test]
    fn single_element() {
        contract_tests::single_element::<QuickFind>();
    }

    #[test]
    fn rejects_empty() {
        contract_tests::rejects_empty::<QuickFind>();
    }

    #[test]
    fn rejects_out_of_range() {
        contract_tests::rejects_out_of_range::<QuickFind>();
    }

    #[test]
    fn random_unions_keep_invariants() {
        contract_tests::random_unions_keep_invariants::<QuickFind>();
    }

    #[test]
    fn union_keeps_label_of_x() {
        let mut qf = QuickFind::new(5).unwrap();
        qf.union(0, 1).unwrap();
        assert_eq!(&[0, 0, 2, 3, 4], qf.labels());
        qf.union(2, 1).unwrap();
        assert_eq!(&[2, 2, 2, 3, 4], qf.labels());
    }

    #[test]
    fn find_does_not_mutate() {
        let mut qf = QuickFind::new(3).unwrap();
        qf.union(1, 2).unwrap();
        let before = qf.labels().to_vec();
        qf.find(2).unwrap();
        assert_eq!(before, qf.labels());
    }
}
