// TF-IDF weighting with the usual library defaults:
//
// token   -> lowercase runs of two or more word characters
// tf      -> raw count in the document
// idf     -> ln((1 + n) / (1 + df)) + 1
// row     -> l2 normalized, all-zero rows stay zero

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

lazy_static! {
    static ref TOKEN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Clone, Debug, Default)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn vocabulary and idf weights.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let tokenized = documents
            .iter()
            .map(|d| tokenize(d.as_ref()))
            .collect::<Vec<_>>();

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for tokens in tokenized.iter() {
            let unique = tokens.iter().collect::<BTreeSet<_>>();
            for token in unique {
                *doc_freq.entry(token.clone()).or_insert(0) += 1;
            }
        }
        if doc_freq.is_empty() {
            return Err(anyhow::anyhow!(
                "empty vocabulary; documents contain no tokens"
            ));
        }

        let n = documents.len() as f64;
        self.vocabulary = doc_freq
            .keys()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();
        self.idf = doc_freq
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        debug!(
            "tfidf fit: documents: {}, vocabulary: {}",
            documents.len(),
            self.vocabulary.len()
        );

        Ok(())
    }

    /// Weight documents against the fitted vocabulary, one dense row each.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        if self.vocabulary.is_empty() {
            return Err(anyhow::anyhow!("vectorizer not fitted"));
        }

        let rows = documents
            .iter()
            .map(|d| {
                let mut row = vec![0f64; self.vocabulary.len()];
                for token in tokenize(d.as_ref()) {
                    if let Some(&i) = self.vocabulary.get(&token) {
                        row[i] += 1.0;
                    }
                }
                for (w, idf) in row.iter_mut().zip(self.idf.iter()) {
                    *w *= idf;
                }
                l2_normalize(&mut row);
                row
            })
            .collect();

        Ok(rows)
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<Vec<f64>>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = super::magnitude(row);
    if norm > 0.0 {
        row.iter_mut().for_each(|w| *w /= norm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_drops_single_chars_and_lowercases() {
        assert_eq!(
            tokenize("A Fantastic product, for YOU."),
            vec!["fantastic", "product", "for", "you"]
        );
    }

    #[test]
    fn fit_builds_sorted_vocabulary() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&["beta alpha", "gamma alpha"]).unwrap();

        assert_eq!(vectorizer.vocabulary_size(), 3);
        assert_eq!(vectorizer.vocabulary()["alpha"], 0);
        assert_eq!(vectorizer.vocabulary()["beta"], 1);
        assert_eq!(vectorizer.vocabulary()["gamma"], 2);
    }

    #[test]
    fn smoothed_idf_weights_rare_terms_higher() {
        let mut vectorizer = TfidfVectorizer::new();
        let rows = vectorizer.fit_transform(&["alpha beta", "alpha"]).unwrap();

        // alpha: df 2 -> idf 1, beta: df 1 -> idf ln(1.5) + 1
        let beta_idf = 1.5f64.ln() + 1.0;
        let norm = (1.0 + beta_idf * beta_idf).sqrt();
        assert!((rows[0][0] - 1.0 / norm).abs() < 1e-12);
        assert!((rows[0][1] - beta_idf / norm).abs() < 1e-12);
        assert_eq!(rows[1], vec![1.0, 0.0]);
    }

    #[test]
    fn rows_are_unit_length() {
        let mut vectorizer = TfidfVectorizer::new();
        let rows = vectorizer
            .fit_transform(&["red red shoes", "blue shoes", "green hat"])
            .unwrap();
        for row in rows {
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn document_without_tokens_is_zero_row() {
        let mut vectorizer = TfidfVectorizer::new();
        let rows = vectorizer.fit_transform(&["plain words", "a !"]).unwrap();
        assert!(rows[1].iter().all(|&w| w == 0.0));
    }

    #[test]
    fn unknown_tokens_are_ignored_on_transform() {
        let mut vectorizer = TfidfVectorizer::new();
        vectorizer.fit(&["known words"]).unwrap();
        let rows = vectorizer.transform(&["unseen text"]).unwrap();
        assert_eq!(rows, vec![vec![0.0, 0.0]]);
    }

    #[test]
    fn empty_vocabulary_fails() {
        let mut vectorizer = TfidfVectorizer::new();
        assert!(vectorizer.fit::<&str>(&[]).is_err());
        assert!(vectorizer.fit(&["a b c", "!"]).is_err());
    }

    #[test]
    fn transform_before_fit_fails() {
        let vectorizer = TfidfVectorizer::new();
        assert!(vectorizer.transform(&["anything"]).is_err());
    }
}
