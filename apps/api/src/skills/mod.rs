//! Vocabulary-driven skill extraction.
//!
//! Works on raw (lowercased) text rather than normalizer output: stopword removal
//! and lemmatization would break multi-word skill phrases.

pub mod matcher;
pub mod tokenizer;
pub mod vocabulary;

pub use matcher::{SkillMatcher, SkillSet};
pub use vocabulary::{SkillVocabulary, VocabularyError, VocabularySource};
