//! Formats rank results for humans and for machine consumption.

use serde::Serialize;
use std::io::{self, Write};

use crate::graph_store::graph::LinkGraph;
use crate::rank::RankVector;

/// One line per page, sorted by page name, ranks at 4 decimal places.
pub fn write_ranks<W: Write>(
    out: &mut W,
    title: &str,
    graph: &LinkGraph,
    ranks: &RankVector,
) -> io::Result<()> {
    writeln!(out, "{}", title)?;
    for (name, score) in sorted_rows(graph, ranks) {
        writeln!(out, "  {}: {:.4}", name, score)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct RankRecord<'a> {
    page: &'a str,
    sampled: f64,
    iterated: f64,
}

/// One JSON record per page, sorted by page name, for downstream tools.
pub fn write_jsonl<W: Write>(
    out: &mut W,
    graph: &LinkGraph,
    sampled: &RankVector,
    iterated: &RankVector,
) -> io::Result<()> {
    let mut names: Vec<&str> = graph.pages().collect();
    names.sort_unstable();
    for name in names {
        let page = graph.page_id(name).expect("name comes from the graph");
        let record = RankRecord {
            page: name,
            sampled: sampled.score(page),
            iterated: iterated.score(page),
        };
        serde_json::to_writer(&mut *out, &record)?;
        writeln!(out)?;
    }
    Ok(())
}

fn sorted_rows<'a>(graph: &'a LinkGraph, ranks: &RankVector) -> Vec<(&'a str, f64)> {
    let mut rows: Vec<(&str, f64)> = ranks
        .iter()
        .map(|(page, score)| (graph.page_name(page), score))
        .collect();
    rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
    rows
}
