//! Disjoint-set (union-find) data structures in Rust, from the naive to the asymptotically
//! optimal, and a harness that benchmarks them against an identical random workload.
//!
//! Each variant adds one optimisation to the previous ones:
//!  1. [`QuickFind`] stores a component label per element. `find` is a lookup, but every
//!     `union` rescans all elements;
//!  2. [`QuickUnion`] stores parent pointers, so a `union` only relinks one root. Without
//!     balancing the trees can degenerate into chains;
//!  3. [`UnionByRank`] hangs the shorter tree beneath the taller one, keeping the height
//!     logarithmic;
//!  4. [`PathCompressionOnly`] makes `find` repoint every visited node at the root; and
//!  5. [`UnionByRankWithPathCompression`] combines the two, giving amortized O(α(n)) for both
//!     operations, where α is the inverse Ackermann function.
//!
//! All variants implement the [`DisjointSet`] trait over elements `0..n`, with `n` fixed at
//! construction.
//!
//! # Examples
//! ```
//!use union_find_bench::{DisjointSet, UnionByRankWithPathCompression};
//!
//!let mut set = UnionByRankWithPathCompression::new(5).unwrap();
//!assert!(set.union(0, 1).unwrap());
//!assert!(set.union(1, 2).unwrap());
//!assert!(!set.union(0, 2).unwrap());
//!assert!(set.connected(0, 2).unwrap());
//!assert!(!set.connected(3, 4).unwrap());
//!assert_eq!(3, set.set_count());
//! ```
//!
//! Benchmarking every variant against the same seeded workload:
//! ```
//!use union_find_bench::{BenchParams, Benchmark, Variant};
//!
//!let params = BenchParams::builder()
//!    .element_count(1_000)
//!    .operation_count(5_000)
//!    .seed(42)
//!    .build();
//!let report = Benchmark::new(params).run().unwrap();
//!for timing in report.timings() {
//!    println!("{}: {:?}", timing.variant, timing.elapsed);
//!}
//!assert!(report.get(Variant::UnionByRank).is_some());
//! ```
//!
//! # References
//! * [Tarjan, R. E. Efficiency of a Good But Not Linear Set Union Algorithm.](https://dl.acm.org/doi/10.1145/321879.321884)
//! * [Sedgewick, R.; Wayne, K. Algorithms, 4th Edition, section 1.5: Union-Find.](https://algs4.cs.princeton.edu/15uf/)

pub use crate::bench_params::{BenchParamBuilder, BenchParams, PARAM_MAX, PARAM_MIN};
pub use crate::benchmark::{run, Benchmark};
pub use crate::disjoint_set::DisjointSet;
pub use crate::error::UnionFindError;
pub use crate::path_compression::PathCompressionOnly;
pub use crate::quick_find::QuickFind;
pub use crate::quick_union::QuickUnion;
pub use crate::rank_path_compression::UnionByRankWithPathCompression;
pub use crate::report::{BenchmarkReport, Timing};
pub use crate::union_by_rank::UnionByRank;
pub use crate::variant::{Complexity, Variant};
pub use crate::workload::Workload;

mod bench_params;
mod benchmark;
mod disjoint_set;
mod error;
mod forest;
pub mod logging;
mod path_compression;
mod quick_find;
mod quick_union;
mod rank_path_compression;
mod report;
mod union_by_rank;
mod variant;
mod workload;
