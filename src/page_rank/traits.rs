use crate::{Corpus, Distribution};

pub trait PageRank {
    type Result: PageRankResult;

    fn calc(&self) -> crate::Result<Self::Result>;
}

pub trait PageRankResult {
    fn page_rank(&self) -> &Distribution;
    fn debug<'a>(&'a self, corpus: &'a Corpus) -> impl std::fmt::Debug + 'a;
}

/// Prints one `  page: rank` line per page, sorted by page name.
///
/// With `decimals` set, ranks are rounded to that many decimal places.
pub struct RanksDebug<'a> {
    pub(crate) corpus: &'a Corpus,
    pub(crate) ranks: &'a Distribution,
    pub(crate) decimals: Option<i32>,
}

impl std::fmt::Debug for RanksDebug<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (page, v) in self.corpus.iter_pages() {
            let p = self.ranks.get(&v).copied().unwrap_or(0.0);
            let p = match self.decimals {
                Some(d) => {
                    let scale = 10f64.powi(d);
                    (p * scale).round() / scale
                }
                None => p,
            };
            writeln!(f, "  {page}: {p}")?;
        }
        Ok(())
    }
}
