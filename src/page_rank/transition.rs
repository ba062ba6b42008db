use crate::{common::*, error::*};
use algograph::graph::*;

/// One step of the random surfer standing on `page`.
///
/// With probability `1 - damping` the surfer jumps to a page chosen uniformly
/// from the whole graph; otherwise it follows one of `page`'s out-links, each
/// edge equally likely. A dead end behaves as if it linked to every page, so
/// its distribution is uniform.
pub fn transition_model<G: QueryableGraph>(
    graph: &G,
    page: VertexId,
    damping: f64,
) -> Result<Distribution> {
    check_damping(damping)?;
    if !graph.contains_vertex(&page) {
        return Err(Error::InvalidPage(format!("{page:?}")));
    }

    let n = graph.vertex_size() as f64;
    let out_degree = graph.out_edges(&page).count();
    if out_degree == 0 {
        return Ok(uniform(graph));
    }

    let mut dist: Distribution = graph
        .iter_vertices()
        .map(|v| (v, (1.0 - damping) / n))
        .collect();
    let unit = damping / (out_degree as f64);
    for e in graph.out_edges(&page) {
        *dist.entry(e.sink).or_insert(0.0) += unit;
    }
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{arbitrary::RandomLinks, Corpus};
    use quickcheck_macros::quickcheck;

    fn abc() -> Corpus {
        Corpus::from_links([("A", vec!["B", "C"]), ("B", vec![]), ("C", vec!["A"])])
    }

    #[test]
    fn follows_links() {
        let corpus = abc();
        let dist = corpus.named(&corpus.transition_model("A", 0.85).unwrap());
        assert_eq!(dist.len(), 3);
        assert!((dist["A"] - 0.05).abs() < 1e-12, "{dist:?}");
        assert!((dist["B"] - 0.475).abs() < 1e-12, "{dist:?}");
        assert!((dist["C"] - 0.475).abs() < 1e-12, "{dist:?}");
    }

    #[test]
    fn dead_end_is_uniform() {
        let corpus = abc();
        let dist = corpus.named(&corpus.transition_model("B", 0.85).unwrap());
        assert_eq!(dist.len(), 3);
        for p in dist.values() {
            assert!((p - 1.0 / 3.0).abs() < 1e-12, "{dist:?}");
        }
        assert!((dist.values().sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn damping_extremes() {
        let corpus = abc();
        let all_jump = corpus.named(&corpus.transition_model("C", 0.0).unwrap());
        for p in all_jump.values() {
            assert!((p - 1.0 / 3.0).abs() < 1e-12, "{all_jump:?}");
        }
        let all_follow = corpus.named(&corpus.transition_model("C", 1.0).unwrap());
        assert_eq!(all_follow["A"], 1.0);
        assert_eq!(all_follow["B"], 0.0);
        assert_eq!(all_follow["C"], 0.0);
    }

    #[test]
    fn rejects_bad_input() {
        let corpus = abc();
        assert!(matches!(
            corpus.transition_model("D", 0.85),
            Err(Error::InvalidPage(p)) if p == "D"
        ));
        assert!(matches!(
            corpus.transition_model("A", 1.01),
            Err(Error::InvalidDampingFactor(_))
        ));

        let other = Corpus::from_links((0..8).map(|i| (format!("x{i}"), Vec::<String>::new())));
        let foreign = other
            .iter_vertices()
            .find(|v| !corpus.contains_vertex(v))
            .unwrap();
        assert!(matches!(
            transition_model(&corpus, foreign, 0.85),
            Err(Error::InvalidPage(_))
        ));
    }

    #[quickcheck]
    fn sums_to_one(g: RandomLinks, damping: u8) {
        let damping = f64::from(damping) / f64::from(u8::MAX);
        let corpus = g.corpus();
        for v in corpus.iter_vertices() {
            let dist = transition_model(&corpus, v, damping).unwrap();
            assert_eq!(dist.len(), corpus.vertex_size());
            assert!((mass(&dist) - 1.0).abs() < 1e-9, "{dist:?}");
            assert!(dist.values().all(|p| *p >= 0.0), "{dist:?}");
        }
    }
}
