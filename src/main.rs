use log::{debug, info, LevelFilter};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs::File;
use std::io;

use corpusrank::args::parse_args;
use corpusrank::corpus;
use corpusrank::rank::{iterate_pagerank, sample_pagerank, IterateOptions, SampleOptions};
use corpusrank::report;

fn main() {
    env_logger::Builder::new()
        .format_timestamp(Some(env_logger::fmt::TimestampPrecision::Micros))
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();

    let args = match parse_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };
    debug!("{:#?}", args);

    let corpus_dir = match &args.corpus_dir {
        Some(d) => d,
        None => {
            eprintln!("Usage: corpusrank [OPTIONS] CORPUS_DIR");
            std::process::exit(2);
        }
    };

    let graph = match corpus::crawl(corpus_dir) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if graph.is_empty() {
        eprintln!("Error: no HTML pages found in {}.", corpus_dir.display());
        std::process::exit(1);
    }

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using fixed seed {}.", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let sample_options = SampleOptions {
        damping: args.damping,
        samples: args.samples,
    };
    let sampled = match sample_pagerank(&graph, &sample_options, &mut rng) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let iterate_options = IterateOptions {
        damping: args.damping,
        tolerance: args.tolerance,
        max_iterations: args.max_iterations,
        check: args.check,
    };
    let iterated = match iterate_pagerank(&graph, &iterate_options, &mut rng) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut out = io::stdout();
    report::write_ranks(
        &mut out,
        &format!("PageRank Results from Sampling (n = {})", args.samples),
        &graph,
        &sampled,
    )
    .expect("write to stdout");
    report::write_ranks(
        &mut out,
        "PageRank Results from Iteration",
        &graph,
        &iterated,
    )
    .expect("write to stdout");

    if let Some(path) = &args.output {
        let mut file = match File::create(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error: cannot create {}: {}", path.display(), e);
                std::process::exit(1);
            }
        };
        report::write_jsonl(&mut file, &graph, &sampled, &iterated).expect("write output file");
        info!("Wrote results to {}.", path.display());
    }
}
