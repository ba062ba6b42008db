use crate::Corpus;
use quickcheck::{Arbitrary, Gen};

/// Random link lists over pages `p0..pN`, `0 < N < 10`.
///
/// Targets are drawn with replacement, so duplicates, self-links and dead
/// ends all show up.
#[derive(Debug, Clone)]
pub struct RandomLinks {
    pub links: Vec<(String, Vec<String>)>,
}

impl RandomLinks {
    pub fn corpus(&self) -> Corpus {
        Corpus::from_links(self.links.clone())
    }
}

impl Arbitrary for RandomLinks {
    fn arbitrary(g: &mut Gen) -> Self {
        const N: usize = 10;

        let n = usize::arbitrary(g) % (N - 1) + 1;
        let names: Vec<_> = (0..n).map(|i| format!("p{i}")).collect();
        let links = names
            .iter()
            .map(|name| {
                let k = usize::arbitrary(g) % (n + 1);
                let targets = (0..k)
                    .map(|_| names[usize::arbitrary(g) % n].clone())
                    .collect();
                (name.clone(), targets)
            })
            .collect();
        Self { links }
    }
}
