use crate::error::*;
use algograph::graph::*;
use std::{collections::HashMap, hash::Hash};

/// Probability mass per page. Used both for one-step transition
/// distributions and for rank estimates.
pub type Distribution = HashMap<VertexId, f64, ahash::RandomState>;

/// Output of both estimators: values in `[0, 1]` summing to 1.
pub type RankEstimate = Distribution;

pub const DEFAULT_DAMPING: f64 = 0.85;

pub fn mass<K: Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().sum()
}

pub fn norm_inf<K: Hash>(v: &HashMap<K, f64, ahash::RandomState>) -> f64 {
    v.values().map(|x| x.abs()).fold(0.0, f64::max)
}

pub fn uniform<G: QueryableGraph>(graph: &G) -> Distribution {
    let n = graph.vertex_size() as f64;
    graph.iter_vertices().map(|v| (v, 1.0 / n)).collect()
}

pub(crate) fn check_damping(damping: f64) -> Result<()> {
    if (0.0..=1.0).contains(&damping) {
        Ok(())
    } else {
        Err(Error::InvalidDampingFactor(damping))
    }
}

pub(crate) fn check_not_empty<G: QueryableGraph>(graph: &G) -> Result<()> {
    if graph.vertex_size() == 0 {
        Err(Error::EmptyGraph)
    } else {
        Ok(())
    }
}
