use crate::{common::*, error::*, page_rank};
use algograph::graph::*;
use regex::Regex;
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt, fs,
    path::Path,
    sync::LazyLock,
};
use tracing::debug;
use walkdir::WalkDir;

const LINK_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINK_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// A closed set of named pages and the links between them.
///
/// Every link target is itself a page of the corpus. Vertices are allocated
/// in page-name order.
pub struct Corpus {
    graph: directed::TreeBackedGraph,
    vertices: HashMap<String, VertexId, ahash::RandomState>,
    pages: HashMap<VertexId, String, ahash::RandomState>,
}

impl Corpus {
    /// Builds a corpus from `(page, links)` pairs.
    ///
    /// Repeated pages have their links merged, duplicate links collapse, and
    /// links to pages that are not keys of the input are dropped.
    pub fn from_links<I, P, L, S>(links: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let links = {
            let mut merged: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
            for (page, targets) in links {
                merged
                    .entry(page.into())
                    .or_default()
                    .extend(targets.into_iter().map(Into::into));
            }
            merged
        };

        let mut graph = directed::TreeBackedGraph::new();
        let mut vertices = HashMap::with_hasher(ahash::RandomState::new());
        let mut pages = HashMap::with_hasher(ahash::RandomState::new());
        for page in links.keys() {
            let v = graph.add_vertex();
            vertices.insert(page.clone(), v);
            pages.insert(v, page.clone());
        }

        let mut dropped = 0usize;
        for (page, targets) in links.iter() {
            let u = vertices[page];
            for target in targets.iter() {
                if let Some(v) = vertices.get(target) {
                    graph.add_edge(u, *v);
                } else {
                    dropped += 1;
                }
            }
        }
        debug!(
            pages = graph.vertex_size(),
            links = graph.edge_size(),
            dropped,
            "corpus built"
        );

        Self {
            graph,
            vertices,
            pages,
        }
    }

    pub fn vertex(&self, page: &str) -> Option<VertexId> {
        self.vertices.get(page).copied()
    }

    pub fn page(&self, v: VertexId) -> Option<&str> {
        self.pages.get(&v).map(String::as_str)
    }

    /// All pages with their vertices, sorted by name.
    pub fn iter_pages(&self) -> impl Iterator<Item = (&str, VertexId)> + '_ {
        let sorted: BTreeMap<&str, VertexId> = self
            .vertices
            .iter()
            .map(|(name, v)| (name.as_str(), *v))
            .collect();
        sorted.into_iter()
    }

    pub fn out_links(&self, page: &str) -> Option<BTreeSet<&str>> {
        let u = self.vertex(page)?;
        Some(
            self.graph
                .out_edges(&u)
                .filter_map(|e| self.page(e.sink))
                .collect(),
        )
    }

    /// Re-keys a distribution by page name.
    pub fn named(&self, dist: &Distribution) -> BTreeMap<&str, f64> {
        dist.iter()
            .filter_map(|(v, p)| self.page(*v).map(|name| (name, *p)))
            .collect()
    }

    /// [`page_rank::transition_model`] addressed by page name.
    pub fn transition_model(&self, page: &str, damping: f64) -> Result<Distribution> {
        let v = self
            .vertex(page)
            .ok_or_else(|| Error::InvalidPage(page.to_string()))?;
        page_rank::transition_model(self, v, damping)
    }
}

/// Reads every `*.html` file directly inside `dir` into a corpus.
///
/// Links come from `href` attributes of `<a>` tags. Self-links and links to
/// documents outside the directory are discarded.
pub fn crawl<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let mut docs: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    let walker = WalkDir::new(dir.as_ref())
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(".html") {
            continue;
        }
        let contents = fs::read_to_string(entry.path()).map_err(|source| Error::Io {
            source,
            path: entry.path().to_path_buf(),
        })?;
        let links = extract_links(&contents)
            .filter(|link| *link != name)
            .map(str::to_string)
            .collect();
        docs.insert(name, links);
    }
    debug!(dir = %dir.as_ref().display(), documents = docs.len(), "crawled");
    Ok(Corpus::from_links(docs))
}

fn extract_links(contents: &str) -> impl Iterator<Item = &str> {
    LINK_RE
        .captures_iter(contents)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
}

impl fmt::Debug for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter_pages()
                    .map(|(name, _)| (name, self.out_links(name).unwrap_or_default())),
            )
            .finish()
    }
}

impl QueryableGraph for Corpus {
    fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.graph.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.graph.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.graph.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.iter_edges()
    }

    fn contains_edge(&self, e: &EdgeId) -> bool {
        self.graph.contains_edge(e)
    }

    fn find_edge(&self, e: &EdgeId) -> Option<Edge> {
        self.graph.find_edge(e)
    }

    fn edges_connecting(
        &self,
        source: &VertexId,
        sink: &VertexId,
    ) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.edges_connecting(source, sink)
    }

    fn in_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.in_edges(v)
    }

    fn out_edges(&self, v: &VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.out_edges(v)
    }
}
