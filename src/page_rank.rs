mod cumulative;
pub mod iterated;
pub mod sampled;
mod traits;
mod transition;
pub use self::cumulative::Cumulative;
pub use self::traits::*;
pub use self::transition::transition_model;

use crate::{common::*, error::*};
use algograph::graph::QueryableGraph;

/// Random-surfer estimate from `n` steps, using the thread-local generator.
pub fn sample_pagerank<G: QueryableGraph>(
    graph: &G,
    damping: f64,
    n: usize,
) -> Result<RankEstimate> {
    let cfg = sampled::Config {
        damping,
        samples: n,
    };
    let res = sampled::SampledPageRank::new(graph, &cfg)?.calc()?;
    Ok(res.page_rank)
}

/// Fixed-point estimate with the default threshold and sweep cap.
pub fn iterate_pagerank<G: QueryableGraph>(graph: &G, damping: f64) -> Result<RankEstimate> {
    let cfg = iterated::Config {
        damping,
        ..iterated::Config::default()
    };
    let res = iterated::IteratedPageRank::new(graph, &cfg)?.calc()?;
    Ok(res.page_rank)
}
