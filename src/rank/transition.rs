//! One step of the random surfer: the transition distribution of a page.

use crate::graph_store::graph::{LinkGraph, PageId};
use crate::rank::{check_damping, RankError};
use rand::Rng;

/// A probability distribution over all pages of a graph, one entry per
/// page. Entries are non-negative and sum to 1.0 up to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionDistribution {
    probabilities: Vec<f64>,
}

impl TransitionDistribution {
    pub fn probability(&self, page: PageId) -> f64 {
        self.probabilities[page.to_usize()]
    }

    pub fn page_count(&self) -> usize {
        self.probabilities.len()
    }

    pub fn sum(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageId, f64)> + '_ {
        self.probabilities
            .iter()
            .enumerate()
            .map(|(i, p)| (PageId::new(i), *p))
    }

    /// Draw one page, weighted by the distribution.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> PageId {
        let draw: f64 = rng.gen();
        let mut acc = 0.0;
        for (i, p) in self.probabilities.iter().enumerate() {
            acc += p;
            if draw < acc {
                return PageId::new(i);
            }
        }
        // draw is in [0, 1), so only rounding in acc can get us here.
        PageId::new(self.probabilities.len() - 1)
    }
}

/// The distribution over which page a random surfer on `page` visits next.
///
/// With probability `damping` the surfer follows one of the page's
/// outbound links, each equally likely; with probability `1 - damping` it
/// jumps to any corpus page, each equally likely. A sink page is treated
/// as linking to every page including itself, which makes its
/// distribution uniform.
pub fn transition_model(
    graph: &LinkGraph,
    page: &str,
    damping: f64,
) -> Result<TransitionDistribution, RankError> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    let source = graph
        .page_id(page)
        .ok_or_else(|| RankError::UnknownPage(page.to_string()))?;
    transition_from(graph, source, damping)
}

// Id-keyed variant, used per step by the sampling estimator.
pub(crate) fn transition_from(
    graph: &LinkGraph,
    source: PageId,
    damping: f64,
) -> Result<TransitionDistribution, RankError> {
    if graph.is_empty() {
        return Err(RankError::EmptyGraph);
    }
    check_damping(damping)?;

    let n = graph.page_count();
    let links = graph.out_links(source);
    if links.is_empty() {
        return Ok(TransitionDistribution {
            probabilities: vec![1.0 / n as f64; n],
        });
    }

    let mut probabilities = vec![(1.0 - damping) / n as f64; n];
    let follow = damping / links.len() as f64;
    for target in links {
        probabilities[target.to_usize()] += follow;
    }
    Ok(TransitionDistribution { probabilities })
}
