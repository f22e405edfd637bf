use clap::builder::RangedU64ValueParser;
use clap::Parser;
use log::info;
use std::io::Write;
use std::process::ExitCode;
use union_find_bench::{logging, BenchParams, Benchmark, Variant, PARAM_MAX, PARAM_MIN};

/// Benchmarks five union-find variants against one shared random workload of unions.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of elements in each disjoint set
    #[arg(short = 'n', long, default_value_t = 10_000, value_parser = param_parser())]
    elements: usize,

    /// Number of random union operations replayed against each variant
    #[arg(short, long, default_value_t = 50_000, value_parser = param_parser())]
    operations: usize,

    /// Seed of the random workload, and of the counts picked by --random-params
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Pick the element and operation counts at random from the allowed range
    #[arg(short, long, conflicts_with_all = ["elements", "operations"])]
    random_params: bool,

    /// Replay the workload against all variants concurrently
    #[cfg(feature = "parallel")]
    #[arg(short, long)]
    parallel: bool,

    /// Print the textbook complexity of each variant before benchmarking
    #[arg(long)]
    theory: bool,
}

fn param_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::<usize>::new().range(PARAM_MIN as u64..=PARAM_MAX as u64)
}

fn main() -> ExitCode {
    if let Err(err) = logging::try_init() {
        eprintln!("Failed to initialise logging: {err}");
    }
    let args = Args::parse();
    if execute(&args, &mut std::io::stdout(), &mut std::io::stderr()) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn bench_params(args: &Args) -> BenchParams {
    if args.random_params {
        let params = BenchParams::random(args.seed);
        info!(
            "Picked {} elements and {} operations at random",
            params.element_count(),
            params.operation_count()
        );
        params
    } else {
        BenchParams::builder()
            .element_count(args.elements)
            .operation_count(args.operations)
            .seed(args.seed)
            .build()
    }
}

/// Runs the benchmark and writes the report to `out`, or the error to `err_out`.
/// Returns whether the run succeeded.
fn execute(args: &Args, out: &mut impl Write, err_out: &mut impl Write) -> bool {
    let benchmark = Benchmark::new(bench_params(args));

    #[cfg(feature = "parallel")]
    let result = if args.parallel { benchmark.run_par() } else { benchmark.run() };
    #[cfg(not(feature = "parallel"))]
    let result = benchmark.run();

    let written = match result {
        Ok(report) => {
            if args.theory {
                write_theory(out);
            }
            write!(out, "{report}").and_then(|_| match report.fastest() {
                Some(fastest) => writeln!(out, "Fastest: {}", fastest.variant),
                None => Ok(()),
            })
        }
        Err(err) => {
            let _ = writeln!(err_out, "Error: {err}");
            return false;
        }
    };
    match written {
        Ok(()) => true,
        Err(err) => {
            let _ = writeln!(err_out, "Error: failed to write report: {err}");
            false
        }
    }
}

fn write_theory(out: &mut impl Write) {
    let _ = writeln!(out, "{:<25} {:<20} {:<20}", "Variant", "find", "union");
    for variant in Variant::ALL {
        let complexity = variant.complexity();
        let _ = writeln!(
            out,
            "{:<25} {:<20} {:<20}",
            variant.name(),
            complexity.find,
            complexity.union
        );
    }
    let _ = writeln!(out);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("union-find-bench").chain(args.iter().copied()))
    }

    #[test]
    fn elements_bounded() {
        assert_eq!(10, parse(&["--elements", "10"]).unwrap().elements);
        assert_eq!(100_000, parse(&["-n", "100000"]).unwrap().elements);
        assert!(parse(&["--elements", "9"]).is_err());
        assert!(parse(&["--elements", "100001"]).is_err());
        assert!(parse(&["--elements", "0"]).is_err());
    }

    #[test]
    fn operations_bounded() {
        assert_eq!(10, parse(&["--operations", "10"]).unwrap().operations);
        assert!(parse(&["--operations", "9"]).is_err());
        assert!(parse(&["--operations", "100001"]).is_err());
    }

    #[test]
    fn random_params_conflicts_with_explicit_counts() {
        assert!(parse(&["--random-params"]).unwrap().random_params);
        assert!(parse(&["--random-params", "--elements", "50"]).is_err());
        assert!(parse(&["--random-params", "--operations", "50"]).is_err());
    }

    #[test]
    fn random_params_drawn_from_seed() {
        let args = parse(&["--random-params", "--seed", "3"]).unwrap();
        let params = bench_params(&args);
        assert_eq!(BenchParams::random(3), params);
        assert!((PARAM_MIN..=PARAM_MAX).contains(&params.element_count()));
        assert!((PARAM_MIN..=PARAM_MAX).contains(&params.operation_count()));
    }

    #[test]
    fn explicit_params_used_without_random_flag() {
        let args = parse(&["-n", "500", "-o", "700", "-s", "9"]).unwrap();
        let params = bench_params(&args);
        assert_eq!(500, params.element_count());
        assert_eq!(700, params.operation_count());
        assert_eq!(9, params.seed());
    }

    #[test]
    fn report_printed_on_success() {
        let args = parse(&["-n", "100", "-o", "200", "--theory"]).unwrap();
        let (mut out, mut err_out) = (Vec::<u8>::new(), Vec::<u8>::new());
        assert!(execute(&args, &mut out, &mut err_out));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Quick Find: "));
        assert!(text.contains("Fastest: "));
    }

    #[test]
    fn failure_written_to_stderr() {
        let mut args = parse(&[]).unwrap();
        args.elements = 0;
        let (mut out, mut err_out) = (Vec::<u8>::new(), Vec::<u8>::new());
        assert!(!execute(&args, &mut out, &mut err_out));
        assert!(out.is_empty());
        let message = String::from_utf8(err_out).unwrap();
        assert!(message.starts_with("Error: Invalid benchmark parameters"));
    }
}
