use crate::report::{BenchmarkReport, Timing};
use crate::{BenchParams, UnionFindError, Variant, Workload};
use log::{debug, info};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Times every union-find variant against one shared, seeded workload of random `union`
/// calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Benchmark {
    params: BenchParams,
}

impl Benchmark {
    /// Creates a benchmark using custom parameters.
    ///
    /// # Examples
    /// ```
    ///use union_find_bench::{BenchParams, Benchmark};
    ///
    ///let params = BenchParams::builder()
    ///    .element_count(1_000)
    ///    .operation_count(2_000)
    ///    .seed(7)
    ///    .build();
    ///let benchmark = Benchmark::new(params);
    /// ```
    pub fn new(params: BenchParams) -> Self {
        Benchmark { params }
    }

    /// Creates a benchmark using the default parameters.
    pub fn default_params() -> Self {
        Benchmark::new(BenchParams::default())
    }

    pub fn params(&self) -> &BenchParams {
        &self.params
    }

    /// Generates the workload, then for each variant in [`Variant::ALL`] order builds a fresh
    /// instance and times the replay of the whole workload against it. Variants run one
    /// after another on the calling thread.
    ///
    /// # Returns
    /// * A report holding one timing per variant, or `UnionFindError::InvalidParameters` if
    ///   the element count is zero. No partial report is produced on error.
    ///
    /// # Examples
    /// ```
    ///use union_find_bench::{BenchParams, Benchmark, Variant};
    ///
    ///let params = BenchParams::builder().element_count(100).operation_count(500).build();
    ///let report = Benchmark::new(params).run().unwrap();
    ///assert_eq!(5, report.timings().len());
    ///assert!(report.get(Variant::QuickFind).is_some());
    /// ```
    pub fn run(&self) -> Result<BenchmarkReport, UnionFindError> {
        let workload = self.workload()?;
        let timings = Variant::ALL
            .iter()
            .map(|variant| time_variant(*variant, &workload))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BenchmarkReport::new(self.params, timings))
    }

    /// Same as [`Benchmark::run`] but replays the shared workload against each variant on
    /// its own rayon task. Every instance is built and mutated by a single task; the
    /// workload is only read. Timings are still reported in [`Variant::ALL`] order.
    #[cfg(feature = "parallel")]
    pub fn run_par(&self) -> Result<BenchmarkReport, UnionFindError> {
        let workload = self.workload()?;
        let timings = Variant::ALL
            .par_iter()
            .map(|variant| time_variant(*variant, &workload))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(BenchmarkReport::new(self.params, timings))
    }

    fn workload(&self) -> Result<Workload, UnionFindError> {
        let BenchParams { element_count, operation_count, seed } = self.params;
        let workload = Workload::generate(element_count, operation_count, seed)?;
        info!(
            "Benchmarking {} variants: {element_count} elements, {operation_count} operations, seed {seed}",
            Variant::ALL.len()
        );
        Ok(workload)
    }
}

fn time_variant(variant: Variant, workload: &Workload) -> Result<Timing, UnionFindError> {
    let elapsed = variant.replay(workload)?;
    debug!("{variant}: {:.5} s", elapsed.as_secs_f64());
    Ok(Timing { variant, elapsed })
}

/// Runs the benchmark with `n` elements and `operation_count` random unions drawn from
/// `seed`. Shorthand for building [`BenchParams`] and calling [`Benchmark::run`].
///
/// # Examples
/// ```
///use union_find_bench::run;
///
///let report = run(100, 0, 1).unwrap();
///assert_eq!(5, report.to_map().len());
/// ```
pub fn run(n: usize, operation_count: usize, seed: u64) -> Result<BenchmarkReport, UnionFindError> {
    let params = BenchParams::builder()
        .element_count(n)
        .operation_count(operation_count)
        .seed(seed)
        .build();
    Benchmark::new(params).run()
}
