use super::*;
use crate::{common::*, error::Error, Corpus};
use algograph::graph::{QueryableGraph, VertexId};
use rand::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Random-surfer estimate: walk the transition model for `samples` steps and
/// report how often each page was visited.
pub struct SampledPageRank<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    damping: f64,
    samples: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub damping: f64,
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            samples: 10_000,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Result {
    pub page_rank: RankEstimate,
    pub visits: HashMap<VertexId, usize, ahash::RandomState>,
    pub samples: usize,
}

impl<'a, G: QueryableGraph> SampledPageRank<'a, G> {
    pub fn new(g: &'a G, config: &Config) -> crate::Result<Self> {
        check_damping(config.damping)?;
        if config.samples < 1 {
            return Err(Error::InvalidSampleCount(config.samples));
        }
        check_not_empty(g)?;
        Ok(Self {
            graph: g,
            damping: config.damping,
            samples: config.samples,
        })
    }

    /// Runs the walk with a caller-supplied generator. A seeded generator
    /// makes the estimate reproducible.
    pub fn calc_with_rng<R: Rng>(&self, rng: &mut R) -> crate::Result<self::Result> {
        let vertices: Vec<VertexId> = self.graph.iter_vertices().collect();
        let mut visits: HashMap<_, _, ahash::RandomState> =
            vertices.iter().map(|v| (*v, 0usize)).collect();

        let mut cur = *vertices.choose(rng).ok_or(Error::EmptyGraph)?;
        for _ in 0..self.samples {
            let dist = transition_model(self.graph, cur, self.damping)?;
            let next = Cumulative::new(self.graph, &dist).select(rng.random::<f64>())?;
            *visits.entry(next).or_insert(0) += 1;
            cur = next;
        }

        let n = self.samples as f64;
        let page_rank = visits
            .iter()
            .map(|(v, count)| (*v, *count as f64 / n))
            .collect();
        debug!(
            pages = vertices.len(),
            samples = self.samples,
            damping = self.damping,
            "sampling finished"
        );
        Ok(self::Result {
            page_rank,
            visits,
            samples: self.samples,
        })
    }
}

impl<G: QueryableGraph> PageRank for SampledPageRank<'_, G> {
    type Result = self::Result;

    fn calc(&self) -> crate::Result<Self::Result> {
        self.calc_with_rng(&mut rand::rng())
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
            decimals: None,
        }
    }
}
