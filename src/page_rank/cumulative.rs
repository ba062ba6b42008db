use crate::{common::*, error::*};
use algograph::graph::*;

/// Absolute slack allowed between the total mass and 1 when a draw lands past
/// the last cumulative bound.
const ROUNDING_SLACK: f64 = 1e-9;

/// Running sums of a distribution in the graph's vertex order.
pub struct Cumulative {
    pages: Vec<VertexId>,
    probs: Vec<f64>,
    bounds: Vec<f64>,
}

impl Cumulative {
    /// Pages missing from `dist` get probability 0.
    pub fn new<G: QueryableGraph>(graph: &G, dist: &Distribution) -> Self {
        let pages: Vec<VertexId> = graph.iter_vertices().collect();
        let probs: Vec<f64> = pages
            .iter()
            .map(|v| dist.get(v).copied().unwrap_or(0.0))
            .collect();
        let bounds = probs
            .iter()
            .scan(0.0, |acc, p| {
                *acc += p;
                Some(*acc)
            })
            .collect();
        Self {
            pages,
            probs,
            bounds,
        }
    }

    pub fn total(&self) -> f64 {
        self.bounds.last().copied().unwrap_or(0.0)
    }

    /// Inverse-CDF lookup of `draw`, a uniform sample from `[0, 1)`.
    ///
    /// Picks the first page whose cumulative bound exceeds `draw`, so pages
    /// without mass are never chosen. A draw beyond the last bound is
    /// attributed to the last page with mass when the total is 1 up to
    /// rounding, and is an [`Error::InternalConsistency`] otherwise.
    pub fn select(&self, draw: f64) -> Result<VertexId> {
        if (0.0..1.0).contains(&draw) {
            let idx = self.bounds.partition_point(|bound| *bound <= draw);
            if let Some(v) = self.pages.get(idx) {
                return Ok(*v);
            }
            if (self.total() - 1.0).abs() <= ROUNDING_SLACK {
                let last = self
                    .probs
                    .iter()
                    .rposition(|p| *p > 0.0)
                    .map(|idx| self.pages[idx]);
                if let Some(v) = last {
                    return Ok(v);
                }
            }
        }
        Err(Error::InternalConsistency {
            draw,
            distribution: self
                .pages
                .iter()
                .copied()
                .zip(self.probs.iter().copied())
                .collect(),
        })
    }
}
