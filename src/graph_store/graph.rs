use log::{debug, info};
use std::collections::HashMap;

#[derive(Eq, Hash, PartialEq, Clone, Copy, Ord, PartialOrd, Debug)]
pub struct PageId(usize);

impl PageId {
    pub fn new(x: usize) -> PageId {
        PageId(x)
    }
    pub fn to_usize(self) -> usize {
        self.0
    }
}

/// The link structure of a corpus: every page of the corpus together with
/// its outbound links to other corpus pages.
///
/// Pages get dense indices (`PageId`) in the order they are handed to
/// [`LinkGraph::create`]; all per-page data lives in flat vectors under
/// those indices. The graph is read-only once created.
#[derive(Debug)]
pub struct LinkGraph {
    // Maps indices of pages to their names:
    names: Vec<String>,

    // Maps page names to their indices:
    index: HashMap<String, PageId>,

    // Outbound links per page, deduplicated, no self-links, only
    // targets that are themselves corpus pages:
    links: Vec<Vec<PageId>>,
}

impl LinkGraph {
    /// Build a graph from page names and `(from, to)` link pairs.
    ///
    /// Duplicate page names are ignored after the first occurrence.
    /// Links are dropped when they are self-links or when either endpoint
    /// is not a page of the corpus, so the resulting link sets only ever
    /// point at other pages within the same graph.
    pub fn create(pages: Vec<String>, link_pairs: Vec<(String, String)>) -> LinkGraph {
        let mut names: Vec<String> = Vec::with_capacity(pages.len());
        let mut index: HashMap<String, PageId> = HashMap::with_capacity(pages.len());
        for name in pages {
            if index.contains_key(&name) {
                debug!("Ignoring duplicate page: {}", name);
                continue;
            }
            index.insert(name.clone(), PageId::new(names.len()));
            names.push(name);
        }

        let mut links: Vec<Vec<PageId>> = vec![vec![]; names.len()];
        let mut nr_links: usize = 0;
        let mut nr_dropped: usize = 0;
        for (from, to) in link_pairs {
            if from == to {
                nr_dropped += 1;
                continue;
            }
            let (f, t) = match (index.get(&from), index.get(&to)) {
                (Some(f), Some(t)) => (*f, *t),
                _ => {
                    debug!("Dropping link outside the corpus: {} -> {}", from, to);
                    nr_dropped += 1;
                    continue;
                }
            };
            let out = &mut links[f.to_usize()];
            if out.contains(&t) {
                continue;
            }
            out.push(t);
            nr_links += 1;
        }

        info!(
            "Built link graph with {} pages and {} links ({} dropped).",
            names.len(),
            nr_links,
            nr_dropped
        );
        LinkGraph { names, index, links }
    }

    pub fn page_count(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn page_id(&self, name: &str) -> Option<PageId> {
        self.index.get(name).copied()
    }

    pub fn page_name(&self, page: PageId) -> &str {
        &self.names[page.to_usize()]
    }

    pub fn page_ids(&self) -> impl Iterator<Item = PageId> {
        (0..self.names.len()).map(PageId::new)
    }

    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|n| n.as_str())
    }

    pub fn out_links(&self, source: PageId) -> &[PageId] {
        &self.links[source.to_usize()]
    }

    pub fn out_link_count(&self, source: PageId) -> usize {
        self.links[source.to_usize()].len()
    }

    /// A sink has no outbound links at all.
    pub fn is_sink(&self, source: PageId) -> bool {
        self.links[source.to_usize()].is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn pairs(links: &[(&str, &str)]) -> Vec<(String, String)> {
        links
            .iter()
            .map(|(f, t)| (f.to_string(), t.to_string()))
            .collect()
    }

    mod create {
        use super::*;

        #[test]
        fn assigns_ids_in_insertion_order() {
            let g = LinkGraph::create(pages(&["a.html", "b.html", "c.html"]), vec![]);

            assert_eq!(g.page_count(), 3);
            assert_eq!(g.page_id("a.html"), Some(PageId::new(0)));
            assert_eq!(g.page_id("b.html"), Some(PageId::new(1)));
            assert_eq!(g.page_id("c.html"), Some(PageId::new(2)));
            assert_eq!(g.page_name(PageId::new(1)), "b.html");
        }

        #[test]
        fn ignores_duplicate_pages() {
            let g = LinkGraph::create(pages(&["a.html", "a.html", "b.html"]), vec![]);

            assert_eq!(g.page_count(), 2);
            assert_eq!(g.page_id("b.html"), Some(PageId::new(1)));
        }

        #[test]
        fn drops_self_links() {
            let g = LinkGraph::create(
                pages(&["a.html", "b.html"]),
                pairs(&[("a.html", "a.html"), ("a.html", "b.html")]),
            );

            let a = g.page_id("a.html").unwrap();
            let b = g.page_id("b.html").unwrap();
            assert_eq!(g.out_links(a), &[b]);
        }

        #[test]
        fn drops_links_leaving_the_corpus() {
            let g = LinkGraph::create(
                pages(&["a.html"]),
                pairs(&[
                    ("a.html", "https://example.com/"),
                    ("nosuch.html", "a.html"),
                ]),
            );

            let a = g.page_id("a.html").unwrap();
            assert!(g.out_links(a).is_empty());
            assert!(g.is_sink(a));
        }

        #[test]
        fn deduplicates_repeated_links() {
            let g = LinkGraph::create(
                pages(&["a.html", "b.html"]),
                pairs(&[("a.html", "b.html"), ("a.html", "b.html")]),
            );

            let a = g.page_id("a.html").unwrap();
            assert_eq!(g.out_link_count(a), 1);
        }
    }

    mod lookups {
        use super::*;

        #[test]
        fn gives_none_for_unknown_page() {
            let g = LinkGraph::create(pages(&["a.html"]), vec![]);

            assert_eq!(g.page_id("z.html"), None);
        }

        #[test]
        fn iterates_pages_and_ids_in_step() {
            let g = LinkGraph::create(pages(&["a.html", "b.html"]), vec![]);

            let by_id: Vec<&str> = g.page_ids().map(|id| g.page_name(id)).collect();
            let by_name: Vec<&str> = g.pages().collect();
            assert_eq!(by_id, by_name);
        }

        #[test]
        fn empty_graph_reports_empty() {
            let g = LinkGraph::create(vec![], vec![]);

            assert!(g.is_empty());
            assert_eq!(g.page_count(), 0);
        }
    }
}
