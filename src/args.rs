use std::path::PathBuf;

use crate::constants::{
    DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_TOLERANCE,
};
use crate::rank::ConvergenceCheck;

const HELP: &str = "\
corpusrank

USAGE:
  corpusrank [OPTIONS] CORPUS_DIR

ARGS:
  CORPUS_DIR             Directory with the HTML pages of the corpus

OPTIONS:
  -h, --help             Prints help information
  --damping FACTOR       Damping factor in [0, 1] [default: 0.85]
  --samples NR           Number of samples drawn by the sampling
                         estimator [default: 10000]
  --tolerance EPS        Convergence tolerance for the iterative
                         estimator [default: 0.001]
  --max-iterations NR    Safety bound for the iterative estimator
                         [default: 10000]
  --check MODE           Convergence check mode: 'all' compares every
                         page, 'single' probes one random page per
                         round [default: all]
  --seed NR              Seed for the random source, random if not given
  --output FILENAME      Also dump results as JSON lines to this file
";

#[derive(Debug, Clone)]
pub struct CorpusRankArgs {
    pub corpus_dir: Option<PathBuf>,
    pub damping: f64,
    pub samples: usize,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub check: ConvergenceCheck,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

fn parse_check(value: &str) -> Result<ConvergenceCheck, String> {
    match value {
        "all" => Ok(ConvergenceCheck::MaxDifference),
        "single" => Ok(ConvergenceCheck::SampledPage),
        other => Err(format!("expected 'all' or 'single', got '{}'", other)),
    }
}

pub fn parse_args() -> Result<CorpusRankArgs, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = CorpusRankArgs {
        damping: pargs
            .opt_value_from_str("--damping")?
            .unwrap_or(DEFAULT_DAMPING),
        samples: pargs
            .opt_value_from_str("--samples")?
            .unwrap_or(DEFAULT_SAMPLES),
        tolerance: pargs
            .opt_value_from_str("--tolerance")?
            .unwrap_or(DEFAULT_TOLERANCE),
        max_iterations: pargs
            .opt_value_from_str("--max-iterations")?
            .unwrap_or(DEFAULT_MAX_ITERATIONS),
        check: pargs
            .opt_value_from_fn("--check", parse_check)?
            .unwrap_or_default(),
        seed: pargs.opt_value_from_str("--seed")?,
        output: pargs.opt_value_from_str("--output")?,
        corpus_dir: pargs.opt_free_from_str()?,
    };

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        eprintln!("Error: unexpected arguments: {:?}.", remaining);
        eprintln!("Usage: corpusrank [OPTIONS] CORPUS_DIR");
        std::process::exit(2);
    }

    Ok(args)
}
