mod common;
pub use self::common::*;
pub mod corpus;
pub use self::corpus::{crawl, Corpus};
mod error;
pub use self::error::{Error, Result};

pub mod page_rank;
pub use self::page_rank::{iterate_pagerank, sample_pagerank, transition_model};

#[cfg(test)]
mod arbitrary;
