//! Loads a corpus directory of HTML pages into a [`LinkGraph`].

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::graph_store::graph::LinkGraph;

static HREF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap());

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("cannot read corpus: {0}")]
    Io(#[from] std::io::Error),
}

/// Read every `*.html` file in `directory` and build the link graph of
/// the corpus: one page per file, one link per anchor-tag href that
/// points at another file of the corpus. Other files are ignored.
pub fn crawl(directory: &Path) -> Result<LinkGraph, CorpusError> {
    let mut pages: Vec<String> = Vec::new();
    let mut links: Vec<(String, String)> = Vec::new();
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(n) => n,
            None => continue,
        };
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path())?;
        for captures in HREF_PATTERN.captures_iter(&contents) {
            links.push((name.to_string(), captures[1].to_string()));
        }
        pages.push(name.to_string());
    }

    // Directory iteration order is platform dependent; sorting keeps page
    // ids stable so that seeded runs reproduce.
    pages.sort();
    info!(
        "Crawled corpus at {} with {} pages.",
        directory.display(),
        pages.len()
    );
    Ok(LinkGraph::create(pages, links))
}
