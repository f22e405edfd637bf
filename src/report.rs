use crate::{BenchParams, Variant};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Wall-clock time one variant took to replay the whole workload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Timing {
    pub variant: Variant,
    pub elapsed: Duration,
}

/// The outcome of a benchmark run: the parameters it ran with and one timing per variant,
/// in [`Variant::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    params: BenchParams,
    timings: Vec<Timing>,
}

impl BenchmarkReport {
    pub(crate) fn new(params: BenchParams, timings: Vec<Timing>) -> Self {
        BenchmarkReport { params, timings }
    }

    pub fn params(&self) -> &BenchParams {
        &self.params
    }

    pub fn timings(&self) -> &[Timing] {
        &self.timings
    }

    pub fn get(&self, variant: Variant) -> Option<Duration> {
        self.timings
            .iter()
            .find(|timing| timing.variant == variant)
            .map(|timing| timing.elapsed)
    }

    /// Timings keyed by variant name.
    pub fn to_map(&self) -> BTreeMap<&'static str, Duration> {
        self.timings
            .iter()
            .map(|timing| (timing.variant.name(), timing.elapsed))
            .collect()
    }

    pub fn fastest(&self) -> Option<&Timing> {
        self.timings.iter().min_by_key(|timing| timing.elapsed)
    }
}

impl Display for BenchmarkReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Parameters: {} elements, {} operations, seed {}",
            self.params.element_count, self.params.operation_count, self.params.seed
        )?;
        for timing in &self.timings {
            writeln!(f, "{}: {:.5} s", timing.variant.name(), timing.elapsed.as_secs_f64())?;
        }
        Ok(())
    }
}
