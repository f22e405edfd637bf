use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Defaults for parameters
const ELEMENT_COUNT_DEFAULT: usize = 10_000;
const OPERATION_COUNT_DEFAULT: usize = 50_000;
const SEED_DEFAULT: u64 = 42;

/// Smallest element or operation count offered to users.
pub const PARAM_MIN: usize = 10;
/// Largest element or operation count offered to users.
pub const PARAM_MAX: usize = 100_000;

/// The parameters of a benchmark run: how many elements each disjoint set holds, how many
/// `union` calls are replayed against it, and the seed the workload is drawn from.
/// Use `BenchParams::default()` unless you want to tune them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BenchParams {
    pub(crate) element_count: usize,
    pub(crate) operation_count: usize,
    pub(crate) seed: u64,
}

/// Builder object to set custom benchmark parameters.
pub struct BenchParamBuilder {
    element_count: Option<usize>,
    operation_count: Option<usize>,
    seed: Option<u64>,
}

impl Default for BenchParams {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BenchParams {
    /// Enters the builder pattern, allowing custom parameters to be set using
    /// various setter methods.
    ///
    /// # Returns
    /// * the benchmark parameter builder
    pub fn builder() -> BenchParamBuilder {
        BenchParamBuilder {
            element_count: None,
            operation_count: None,
            seed: None,
        }
    }

    /// Draws both the element count and the operation count uniformly from
    /// `PARAM_MIN..=PARAM_MAX`. The same seed always picks the same counts, and is also
    /// the seed of the workload.
    ///
    /// # Parameters
    /// * seed - the random seed
    ///
    /// # Returns
    /// * the randomly sized benchmark parameters
    pub fn random(seed: u64) -> BenchParams {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::builder()
            .element_count(rng.gen_range(PARAM_MIN..=PARAM_MAX))
            .operation_count(rng.gen_range(PARAM_MIN..=PARAM_MAX))
            .seed(seed)
            .build()
    }

    pub fn element_count(&self) -> usize {
        self.element_count
    }

    pub fn operation_count(&self) -> usize {
        self.operation_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BenchParamBuilder {
    /// Sets the number of elements, `n`, every variant is constructed over. Must be at
    /// least 1 for the benchmark to run. Defaults to 10,000.
    ///
    /// # Parameters
    /// * element_count - the number of elements
    ///
    /// # Returns
    /// * the benchmark parameter builder
    pub fn element_count(mut self, element_count: usize) -> BenchParamBuilder {
        self.element_count = Some(element_count);
        self
    }

    /// Sets the number of random `(x, y)` pairs replayed as `union` calls against each
    /// variant. Defaults to 50,000.
    ///
    /// # Parameters
    /// * operation_count - the number of union operations
    ///
    /// # Returns
    /// * the benchmark parameter builder
    pub fn operation_count(mut self, operation_count: usize) -> BenchParamBuilder {
        self.operation_count = Some(operation_count);
        self
    }

    /// Sets the seed of the random source the workload is drawn from. Runs with equal
    /// parameters replay identical workloads.
    ///
    /// # Parameters
    /// * seed - the random seed
    ///
    /// # Returns
    /// * the benchmark parameter builder
    pub fn seed(mut self, seed: u64) -> BenchParamBuilder {
        self.seed = Some(seed);
        self
    }

    /// Finishes the building of the benchmark parameters.
    ///
    /// # Returns
    /// * The completed benchmark parameters.
    pub fn build(self) -> BenchParams {
        BenchParams {
            element_count: self.element_count.unwrap_or(ELEMENT_COUNT_DEFAULT),
            operation_count: self.operation_count.unwrap_or(OPERATION_COUNT_DEFAULT),
            seed: self.seed.unwrap_or(SEED_DEFAULT),
        }
    }
}
