#![allow(dead_code)]
// Functions in here are only used in tests.

use super::graph::LinkGraph;

/// n pages in a ring, page i linking to page i+1.
pub fn make_cycle_graph(n: u32) -> LinkGraph {
    let pages: Vec<String> = (0..n).map(|i| format!("{i}.html")).collect();
    let links: Vec<(String, String)> = (0..n)
        .map(|i| {
            let from = format!("{}.html", i);
            let to = format!("{}.html", (i + 1) % n);
            (from, to)
        })
        .collect();
    LinkGraph::create(pages, links)
}

/// n - 1 pages all linking to the last page, which links nowhere.
pub fn make_star_graph(n: u32) -> LinkGraph {
    let pages: Vec<String> = (0..n).map(|i| format!("{i}.html")).collect();
    let links: Vec<(String, String)> = (0..n - 1)
        .map(|i| {
            let from = format!("{}.html", i);
            let to = format!("{}.html", n - 1);
            (from, to)
        })
        .collect();
    LinkGraph::create(pages, links)
}

/// Two pages linking to each other.
pub fn make_two_page_cycle() -> LinkGraph {
    make_cycle_graph(2)
}

/// "a.html" has no outbound links, "b.html" links to it.
pub fn make_sink_pair() -> LinkGraph {
    LinkGraph::create(
        vec!["a.html".to_string(), "b.html".to_string()],
        vec![("b.html".to_string(), "a.html".to_string())],
    )
}

/// A corpus of exactly one page without links.
pub fn make_single_page() -> LinkGraph {
    LinkGraph::create(vec!["a.html".to_string()], vec![])
}
