use algograph::graph::VertexId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a corpus or ranking its pages.
#[derive(Debug, Error)]
pub enum Error {
    /// The page is not a vertex of the graph being ranked.
    #[error("page {0} is not in the graph")]
    InvalidPage(String),

    /// Damping factors live in `[0, 1]`.
    #[error("damping factor {0} is outside [0, 1]")]
    InvalidDampingFactor(f64),

    /// The sampler needs at least one sample.
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    /// Convergence thresholds must be strictly positive.
    #[error("convergence threshold must be positive, got {0}")]
    InvalidThreshold(f64),

    #[error("graph has no pages")]
    EmptyGraph,

    /// A cumulative draw missed every page. The distribution it was drawn
    /// from does not sum to 1, which is a bug in the transition model.
    #[error("draw {draw} selected no page from distribution {distribution:?}")]
    InternalConsistency {
        draw: f64,
        distribution: Vec<(VertexId, f64)>,
    },

    #[error("I/O error on {}", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("cannot walk corpus directory")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
