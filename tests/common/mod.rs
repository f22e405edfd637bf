use std::collections::HashSet;
use std::time::Duration;
use union_find_bench::{BenchParams, Benchmark, BenchmarkReport, UnionFindError, Variant};

pub(crate) type RunFn = fn(&Benchmark) -> Result<BenchmarkReport, UnionFindError>;

pub(crate) fn test_all_variants_reported(run: RunFn) {
    let params = BenchParams::builder().element_count(100).operation_count(0).seed(9).build();
    let report = run(&Benchmark::new(params)).unwrap();
    let names: HashSet<_> = report.to_map().into_keys().collect();
    let expected: HashSet<_> = Variant::ALL.iter().map(|v| v.name()).collect();
    assert_eq!(expected, names);
    assert!(report.timings().iter().all(|t| t.elapsed >= Duration::ZERO));
}

pub(crate) fn test_fixed_variant_order(run: RunFn) {
    let params = BenchParams::builder().element_count(500).operation_count(2_000).build();
    let report = run(&Benchmark::new(params)).unwrap();
    let order: Vec<_> = report.timings().iter().map(|t| t.variant).collect();
    assert_eq!(Variant::ALL.to_vec(), order);
}

pub(crate) fn test_zero_elements_rejected(run: RunFn) {
    let params = BenchParams::builder().element_count(0).build();
    let result = run(&Benchmark::new(params));
    assert!(matches!(result, Err(UnionFindError::InvalidParameters(..))));
}

pub(crate) fn test_single_element(run: RunFn) {
    let params = BenchParams::builder().element_count(1).operation_count(100).build();
    let report = run(&Benchmark::new(params)).unwrap();
    assert_eq!(5, report.timings().len());
}

pub(crate) fn test_default_params(run: RunFn) {
    let benchmark = Benchmark::default_params();
    let report = run(&benchmark).unwrap();
    assert_eq!(benchmark.params(), report.params());
    assert!(report.fastest().is_some());
}
