//! Monte Carlo estimation of PageRank by simulating the random surfer.

use log::info;
use rand::Rng;
use std::time::SystemTime;

use crate::constants::{DEFAULT_DAMPING, DEFAULT_SAMPLES};
use crate::graph_store::graph::{LinkGraph, PageId};
use crate::rank::transition::transition_from;
use crate::rank::{check_damping, RankError, RankVector};

#[derive(Debug, Clone, Copy)]
pub struct SampleOptions {
    pub damping: f64,
    pub samples: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: DEFAULT_SAMPLES,
        }
    }
}

/// Estimate PageRank from `options.samples` steps of a random walk.
///
/// The walk starts on a uniformly chosen page. Each step draws the next
/// page from the current page's transition distribution and records it;
/// a page's estimate is its share of the recorded draws, so the result
/// sums to 1.0 exactly. The estimate is unbiased but noisy, more samples
/// mean less variance. All randomness comes from the passed `rng`, a
/// seeded generator reproduces the walk draw for draw.
pub fn sample_pagerank<R: Rng>(
    graph: &LinkGraph,
    options: &SampleOptions,
    rng: &mut R,
) -> Result<RankVector, RankError> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    check_damping(options.damping)?;
    if options.samples < 1 {
        return Err(RankError::InvalidSampleCount(options.samples));
    }

    info!("Running sampling page rank with {} samples...", options.samples);
    let start = SystemTime::now();
    let n = graph.page_count();
    let mut visits = vec![0u64; n];
    let mut current = PageId::new(rng.gen_range(0..n));
    for _ in 0..options.samples {
        let distribution = transition_from(graph, current, options.damping)?;
        let next = distribution.sample(rng);
        visits[next.to_usize()] += 1;
        current = next;
    }
    info!("Sampling page rank completed in {:?}.", start.elapsed());

    let total = options.samples as f64;
    Ok(RankVector::new(
        visits.iter().map(|&v| v as f64 / total).collect(),
    ))
}
