use crate::{
    DisjointSet, PathCompressionOnly, QuickFind, QuickUnion, UnionByRank,
    UnionByRankWithPathCompression, UnionFindError, Workload,
};
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// The union-find variants this crate implements, in the order they are benchmarked.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// [`QuickFind`]: component labels, O(n) union.
    QuickFind,
    /// [`QuickUnion`]: unbalanced parent-pointer trees.
    QuickUnion,
    /// [`UnionByRank`]: rank balanced trees, no compression.
    UnionByRank,
    /// [`PathCompressionOnly`]: compressing find, unbalanced union.
    PathCompressionOnly,
    /// [`UnionByRankWithPathCompression`]: both optimisations.
    UnionByRankWithPathCompression,
}

/// Textbook bounds for the two core operations of a variant.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Complexity {
    pub find: &'static str,
    pub union: &'static str,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::QuickFind,
        Variant::QuickUnion,
        Variant::UnionByRank,
        Variant::PathCompressionOnly,
        Variant::UnionByRankWithPathCompression,
    ];

    /// Human readable name used as the key of benchmark results.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::QuickFind => "Quick Find",
            Variant::QuickUnion => "Quick Union",
            Variant::UnionByRank => "Union by Rank",
            Variant::PathCompressionOnly => "Path Compression",
            Variant::UnionByRankWithPathCompression => "Rank + Path Compression",
        }
    }

    pub fn complexity(&self) -> Complexity {
        match self {
            Variant::QuickFind => Complexity { find: "O(1)", union: "O(N)" },
            Variant::QuickUnion => Complexity { find: "O(N)", union: "O(N)" },
            Variant::UnionByRank => Complexity { find: "O(log N)", union: "O(log N)" },
            Variant::PathCompressionOnly => Complexity {
                find: "O(α(N)) amortized",
                union: "O(N)",
            },
            Variant::UnionByRankWithPathCompression => Complexity {
                find: "O(α(N)) amortized",
                union: "O(α(N)) amortized",
            },
        }
    }

    /// Builds a fresh instance of this variant over the workload's elements and times the
    /// replay of every pair as a `union` call. Construction is not part of the timing.
    pub(crate) fn replay(&self, workload: &Workload) -> Result<Duration, UnionFindError> {
        match self {
            Variant::QuickFind => replay::<QuickFind>(workload),
            Variant::QuickUnion => replay::<QuickUnion>(workload),
            Variant::UnionByRank => replay::<UnionByRank>(workload),
            Variant::PathCompressionOnly => replay::<PathCompressionOnly>(workload),
            Variant::UnionByRankWithPathCompression => {
                replay::<UnionByRankWithPathCompression>(workload)
            }
        }
    }
}

fn replay<S: DisjointSet>(workload: &Workload) -> Result<Duration, UnionFindError> {
    let mut set = S::new(workload.element_count())?;
    let start = Instant::now();
    for &(x, y) in workload.pairs() {
        set.union(x, y)?;
    }
    Ok(start.elapsed())
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
