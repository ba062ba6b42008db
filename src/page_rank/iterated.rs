use super::*;
use crate::{common::*, error::Error, Corpus};
use algograph::graph::{QueryableGraph, VertexId};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

/// Power iteration of the random-surfer chain.
///
/// Each sweep recomputes every page from the previous sweep's ranks:
///
/// ```text
/// new(p) = (1 - d) / N
///        + d * sum(old(q) / out(q) for q linking to p)
///        + d * sum(old(z) / N for dead ends z)
/// ```
///
/// Dead ends spread their rank over every page, the same way the transition
/// model treats them, so total mass stays 1.
pub struct IteratedPageRank<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    threshold: f64,
    max_iterations: usize,
    // (sink, source) -> share of source's rank flowing to sink along its edges
    transitions: BTreeMap<(VertexId, VertexId), f64>,
    dead_ends: Vec<VertexId>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    /// Stop once no page moves by more than this between sweeps.
    pub threshold: f64,
    /// Upper bound on sweeps. Reaching it returns the current estimate.
    pub max_iterations: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: 0.001,
            max_iterations: 20_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankEstimate,
    /// Per-page change made by the last sweep.
    pub delta: HashMap<VertexId, f64, ahash::RandomState>,
    pub iterations: usize,
    pub converged: bool,
}

impl<'a, G: QueryableGraph> IteratedPageRank<'a, G> {
    pub fn new(g: &'a G, config: &Config) -> crate::Result<Self> {
        let damping = config.damping;
        check_damping(damping)?;
        let threshold = config.threshold;
        if threshold.is_nan() || threshold <= 0.0 {
            return Err(Error::InvalidThreshold(threshold));
        }
        check_not_empty(g)?;

        let mut dead_ends = vec![];
        let transitions = {
            let mut transitions = BTreeMap::new();
            for u in g.iter_vertices() {
                let n = g.out_edges(&u).count();
                if n == 0 {
                    dead_ends.push(u);
                    continue;
                }
                let unit = 1.0 / (n as f64);
                for v in g.out_edges(&u).map(|e| e.sink) {
                    if let Some(w) = transitions.get_mut(&(v, u)) {
                        *w += unit;
                    } else {
                        transitions.insert((v, u), unit);
                    }
                }
            }
            transitions
        };
        Ok(Self {
            graph: g,
            damping,
            threshold,
            max_iterations: config.max_iterations,
            transitions,
            dead_ends,
        })
    }

    /// Writes the sweep following `p` into `r`, touching every page.
    fn sweep(
        &self,
        p: &HashMap<VertexId, f64, ahash::RandomState>,
        r: &mut HashMap<VertexId, f64, ahash::RandomState>,
    ) {
        let damping = self.damping;
        let n = self.graph.vertex_size() as f64;
        let dangling: f64 = self.dead_ends.iter().map(|z| p[z]).sum();
        let floor = (1.0 - damping) / n + damping * dangling / n;

        r.clear();
        for v in self.graph.iter_vertices() {
            r.insert(v, floor);
        }
        let mut inbound = self.transitions.iter().peekable();
        while let Some(((sink, _), _)) = inbound.peek() {
            let sink = *sink;
            let mut flow = 0.0;
            while let Some(((_, source), w)) = inbound.next_if(|((v, _), _)| *v == sink) {
                flow += p[source] * w;
            }
            if let Some(to) = r.get_mut(&sink) {
                *to += damping * flow;
            }
        }
    }
}

impl<G: QueryableGraph> PageRank for IteratedPageRank<'_, G> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        let mut p = uniform(self.graph);
        let mut r = HashMap::with_capacity_and_hasher(p.len(), ahash::RandomState::new());
        let mut delta = HashMap::with_capacity_and_hasher(p.len(), ahash::RandomState::new());
        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.max_iterations {
            iterations += 1;
            self.sweep(&p, &mut r);

            delta.clear();
            for v in self.graph.iter_vertices() {
                delta.insert(v, r[&v] - p[&v]);
            }
            std::mem::swap(&mut p, &mut r);

            if norm_inf(&delta) <= self.threshold {
                converged = true;
                break;
            }
        }

        if converged {
            debug!(iterations, damping = self.damping, "page rank converged");
        } else {
            warn!(
                iterations,
                delta = norm_inf(&delta),
                threshold = self.threshold,
                "page rank did not converge, returning the last sweep"
            );
        }
        Ok(self::Result {
            page_rank: p,
            delta,
            iterations,
            converged,
        })
    }
}

impl PageRankResult for self::Result {
    fn page_rank(&self) -> &RankEstimate {
        &self.page_rank
    }

    fn debug<'a>(&'a self, corpus: &'a Corpus) -> impl std::fmt::Debug + 'a {
        RanksDebug {
            corpus,
            ranks: &self.page_rank,
            decimals: Some(5),
        }
    }
}
