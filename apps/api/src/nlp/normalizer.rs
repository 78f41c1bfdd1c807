//! Text normalization for statistical comparison.
//!
//! Pipeline: lowercase → replace non `[a-z\s]` with spaces → collapse whitespace →
//! tokenize → drop stopwords → lemmatize → drop stopword lemmas → join with spaces.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::nlp::lemma::Lemmatizer;
use crate::nlp::stopwords::StopWords;

static NON_ALPHA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("static pattern compiles"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static pattern compiles"));

/// A document reduced to lowercase alphabetic lemmas separated by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedDocument(String);

impl NormalizedDocument {
    /// Wraps text that is already in normalized form.
    #[cfg(test)]
    pub(crate) fn from_normalized(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lowercases, strips everything but ASCII letters and whitespace, and collapses whitespace.
///
/// Digits vanish with the punctuation: "python 3.8" becomes "python".
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let letters_only = NON_ALPHA.replace_all(&lowered, " ");
    WHITESPACE_RUN
        .replace_all(&letters_only, " ")
        .trim()
        .to_string()
}

#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    stopwords: StopWords,
    lemmatizer: Lemmatizer,
}

impl Normalizer {
    pub fn new(stopwords: StopWords, lemmatizer: Lemmatizer) -> Self {
        Self {
            stopwords,
            lemmatizer,
        }
    }

    pub fn english() -> Self {
        Self::new(StopWords::english(), Lemmatizer::english())
    }

    /// Normalizes a raw document. Total over any input; empty in, empty out.
    pub fn normalize(&self, text: &str) -> NormalizedDocument {
        let cleaned = clean_text(text);
        let lemmas: Vec<String> = cleaned
            .split(' ')
            .filter(|token| !token.is_empty() && !self.stopwords.contains(token))
            .map(|token| self.lemmatizer.lemmatize(token))
            .filter(|lemma| !lemma.is_empty() && !self.stopwords.contains(lemma))
            .collect();
        NormalizedDocument(lemmas.join(" "))
    }
}
