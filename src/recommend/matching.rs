use std::cmp::Ordering;

#[derive(Copy, Clone, Debug)]
pub struct Matched {
    pub index: usize,
    pub similarity: f64,
}

impl PartialOrd for Matched {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.similarity.partial_cmp(&other.similarity)
    }
}

impl Ord for Matched {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

impl PartialEq for Matched {
    fn eq(&self, other: &Self) -> bool {
        self.similarity == other.similarity
    }
}

impl Eq for Matched {}

/// Rank one row of the similarity matrix, skipping `exclude`.
///
/// Highest similarity first; the sort is stable so ties keep row order.
/// Returns at most `n` entries.
pub fn match_top_n(similarities: &[f64], exclude: usize, n: usize) -> Vec<Matched> {
    let mut matched = similarities
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != exclude)
        .map(|(index, &similarity)| {
            debug!("index: {}, similarity: {}", index, similarity);
            Matched { index, similarity }
        })
        .collect::<Vec<_>>();
    matched.sort_by(|a, b| b.cmp(a));
    matched.truncate(n);
    debug!("top_n: {:?}", matched);

    matched
}
