use crate::UnionFindError;
use std::collections::BTreeMap;

/// The operations every union-find variant in this crate supports, over a fixed universe of
/// elements `0..n`.
///
/// `find` takes `&mut self` because the path compressing variants rewrite parent links while
/// reading. None of the variants synchronise their internal buffers, so an instance must be
/// owned by one thread at a time.
pub trait DisjointSet: Sized {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n - 1}`.
    ///
    /// # Returns
    /// * The new disjoint set, or `UnionFindError::InvalidSize` if `n` is zero.
    fn new(n: usize) -> Result<Self, UnionFindError>;

    /// The number of elements, fixed at construction.
    fn element_count(&self) -> usize;

    /// The number of disjoint sets currently present.
    fn set_count(&self) -> usize;

    /// Returns the representative of the set containing `x`. Calling `find` on a
    /// representative returns the representative itself.
    ///
    /// # Returns
    /// * The representative, or `UnionFindError::IndexOutOfRange` if `x` is not below
    ///   `element_count()`.
    fn find(&mut self, x: usize) -> Result<usize, UnionFindError>;

    /// Merges the sets containing `x` and `y`.
    ///
    /// # Returns
    /// * `true` if two sets were merged, `false` if `x` and `y` were already in the same set,
    ///   or `UnionFindError::IndexOutOfRange` if either index is invalid.
    fn union(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError>;

    /// Whether `x` and `y` are in the same set.
    fn connected(&mut self, x: usize, y: usize) -> Result<bool, UnionFindError> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Lists every set, keyed by its representative. Members are in ascending order.
    fn groups(&mut self) -> Result<BTreeMap<usize, Vec<usize>>, UnionFindError> {
        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for n in 0..self.element_count() {
            let root = self.find(n)?;
            groups.entry(root).or_default().push(n);
        }
        Ok(groups)
    }
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<(), UnionFindError> {
    if index < len {
        Ok(())
    } else {
        Err(UnionFindError::IndexOutOfRange { index, len })
    }
}

pub(crate) fn check_size(n: usize) -> Result<(), UnionFindError> {
    if n < 1 {
        return Err(UnionFindError::InvalidSize);
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_bounds() {
        assert!(check_index(0, 1).is_ok());
        assert!(check_index(9, 10).is_ok());
        assert!(matches!(
            check_index(10, 10),
            Err(UnionFindError::IndexOutOfRange { index: 10, len: 10 })
        ));
    }

    #[test]
    fn check_size_rejects_zero() {
        assert!(matches!(check_size(0), Err(UnionFindError::InvalidSize)));
        assert!(check_size(1).is_ok());
    }
}
