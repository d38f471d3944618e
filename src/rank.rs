pub mod iterate;
pub mod sample;
pub mod transition;

pub use iterate::{has_converged, iterate_pagerank, ConvergenceCheck, IterateOptions};
pub use sample::{sample_pagerank, SampleOptions};
pub use transition::{transition_model, TransitionDistribution};

use crate::graph_store::graph::PageId;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankError {
    #[error("link graph contains no pages")]
    EmptyGraph,
    #[error("page '{0}' is not part of the corpus")]
    UnknownPage(String),
    #[error("damping factor {0} is outside [0, 1]")]
    InvalidDamping(f64),
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),
    #[error("no convergence after {iterations} iterations")]
    NonConvergence { iterations: usize },
}

/// Estimated PageRank per page, one score per page of the graph the
/// estimate was computed for. Scores sum to 1.0 (sampling: exactly,
/// iteration: within the convergence tolerance).
#[derive(Debug, Clone, PartialEq)]
pub struct RankVector {
    pub(crate) scores: Vec<f64>,
}

impl RankVector {
    pub(crate) fn new(scores: Vec<f64>) -> RankVector {
        RankVector { scores }
    }

    pub fn score(&self, page: PageId) -> f64 {
        self.scores[page.to_usize()]
    }

    pub fn page_count(&self) -> usize {
        self.scores.len()
    }

    pub fn sum(&self) -> f64 {
        self.scores.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PageId, f64)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .map(|(i, s)| (PageId::new(i), *s))
    }
}

pub(crate) fn check_damping(damping: f64) -> Result<(), RankError> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(RankError::InvalidDamping(damping));
    }
    Ok(())
}
