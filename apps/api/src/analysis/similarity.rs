//! Similarity scoring over two normalized documents, behind a pluggable trait.
//!
//! Default: `TfIdfScorer`, TF-IDF vectors fit over exactly the two documents being
//! compared, then cosine similarity.
//!
//! `AppState` holds an `Arc<dyn SimilarityScorer>`, like any other swappable backend.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::nlp::NormalizedDocument;

/// Raw cosine in [0, 1] and the same value as a percentage rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScore {
    pub score: f64,
    pub percentage: f64,
}

impl SimilarityScore {
    pub const ZERO: SimilarityScore = SimilarityScore {
        score: 0.0,
        percentage: 0.0,
    };

    pub fn from_raw(raw: f64) -> Self {
        let score = if raw.is_finite() {
            raw.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            score,
            percentage: (score * 100.0 * 100.0).round() / 100.0,
        }
    }
}

/// Implement this to swap the scoring backend without touching callers.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, a: &NormalizedDocument, b: &NormalizedDocument) -> SimilarityScore;

    /// Backend label, reported for transparency.
    fn backend(&self) -> &'static str;
}

/// TF-IDF + cosine similarity.
///
/// Matches the usual vectorizer defaults: tokens of two or more characters, raw
/// term counts, smoothed idf `ln((1 + n) / (1 + df)) + 1` with n = 2. A document
/// with no surviving terms has a zero vector and scores 0.0 against anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl SimilarityScorer for TfIdfScorer {
    fn score(&self, a: &NormalizedDocument, b: &NormalizedDocument) -> SimilarityScore {
        SimilarityScore::from_raw(tfidf_cosine(a, b))
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

fn term_counts(doc: &NormalizedDocument) -> BTreeMap<&str, f64> {
    let mut counts = BTreeMap::new();
    for token in doc.tokens().filter(|t| t.chars().count() >= 2) {
        *counts.entry(token).or_insert(0.0) += 1.0;
    }
    counts
}

fn tfidf_cosine(a: &NormalizedDocument, b: &NormalizedDocument) -> f64 {
    const N_DOCS: f64 = 2.0;

    let counts_a = term_counts(a);
    let counts_b = term_counts(b);
    // Sorted union keeps the summation order independent of argument order.
    let vocabulary: BTreeSet<&str> = counts_a.keys().chain(counts_b.keys()).copied().collect();

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for term in vocabulary {
        let tf_a = counts_a.get(term).copied().unwrap_or(0.0);
        let tf_b = counts_b.get(term).copied().unwrap_or(0.0);
        let df = f64::from(u8::from(tf_a > 0.0) + u8::from(tf_b > 0.0));
        let idf = ((1.0 + N_DOCS) / (1.0 + df)).ln() + 1.0;

        let wa = tf_a * idf;
        let wb = tf_b * idf;
        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::Normalizer;
    use proptest::prelude::*;

    fn doc(s: &str) -> NormalizedDocument {
        NormalizedDocument::from_normalized(s)
    }

    #[test]
    fn test_empty_documents_score_zero() {
        let score = TfIdfScorer.score(&doc(""), &doc(""));
        assert_eq!(score, SimilarityScore::ZERO);
        assert_eq!(TfIdfScorer.score(&doc("python"), &doc("")).score, 0.0);
    }

    #[test]
    fn test_identical_documents_score_full() {
        let d = doc("python developer docker aws skill");
        let score = TfIdfScorer.score(&d, &d.clone());
        assert!((score.score - 1.0).abs() < 1e-12);
        assert_eq!(score.percentage, 100.0);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let score = TfIdfScorer.score(&doc("python django"), &doc("java spring"));
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_known_value() {
        // shared "python" has idf 1, the others ln(1.5) + 1
        let score = TfIdfScorer.score(&doc("python rust"), &doc("python go"));
        assert!((score.score - 0.336097).abs() < 1e-5, "got {}", score.score);
        assert_eq!(score.percentage, 33.61);
    }

    #[test]
    fn test_single_character_terms_are_ignored() {
        let score = TfIdfScorer.score(&doc("c r"), &doc("c r"));
        assert_eq!(score.score, 0.0);
    }

    #[test]
    fn test_from_raw_clamps() {
        assert_eq!(SimilarityScore::from_raw(1.0000000002).score, 1.0);
        assert_eq!(SimilarityScore::from_raw(-0.1).score, 0.0);
        assert_eq!(SimilarityScore::from_raw(f64::NAN), SimilarityScore::ZERO);
        assert_eq!(SimilarityScore::from_raw(0.123456).percentage, 12.35);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(TfIdfScorer.backend(), "tfidf");
    }

    proptest! {
        #[test]
        fn prop_score_is_symmetric(a in "\\PC{0,120}", b in "\\PC{0,120}") {
            let normalizer = Normalizer::english();
            let (a, b) = (normalizer.normalize(&a), normalizer.normalize(&b));
            prop_assert_eq!(TfIdfScorer.score(&a, &b), TfIdfScorer.score(&b, &a));
        }

        #[test]
        fn prop_score_is_bounded(a in "[a-z ]{0,120}", b in "[a-z ]{0,120}") {
            let normalizer = Normalizer::english();
            let score = TfIdfScorer.score(&normalizer.normalize(&a), &normalizer.normalize(&b));
            prop_assert!((0.0..=1.0).contains(&score.score));
            prop_assert!((0.0..=100.0).contains(&score.percentage));
        }
    }
}
