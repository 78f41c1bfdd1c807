//! Phrase matcher that maps free text onto vocabulary skill labels.

use std::collections::{BTreeSet, HashMap};

use crate::skills::tokenizer::tokenize;
use crate::skills::vocabulary::SkillVocabulary;

/// Deduplicated skill labels, ordered for stable output.
pub type SkillSet = BTreeSet<String>;

/// Precompiled from a vocabulary once; immutable and shareable across threads.
///
/// Each entry is tokenized exactly like the input text and indexed by its first
/// token. A match is a contiguous run of input tokens equal to an entry's tokens,
/// so `java` never fires inside `javascript`.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    patterns: Vec<Pattern>,
    by_head: HashMap<String, Vec<usize>>,
}

#[derive(Debug, Clone)]
struct Pattern {
    label: String,
    tokens: Vec<String>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &SkillVocabulary) -> Self {
        let mut patterns = Vec::with_capacity(vocabulary.len());
        let mut by_head: HashMap<String, Vec<usize>> = HashMap::new();

        for label in vocabulary.entries() {
            let tokens: Vec<String> = tokenize(label)
                .into_iter()
                .map(|t| t.text.to_string())
                .collect();
            let Some(head) = tokens.first() else {
                continue;
            };
            by_head.entry(head.clone()).or_default().push(patterns.len());
            patterns.push(Pattern {
                label: label.clone(),
                tokens,
            });
        }

        Self { patterns, by_head }
    }

    /// Extracts every vocabulary skill that occurs in `text`. Overlapping
    /// matches all count: "apache spark" yields `apache`, `spark` and `apache spark`.
    pub fn extract(&self, text: &str) -> SkillSet {
        let mut skills = SkillSet::new();
        if text.is_empty() {
            return skills;
        }

        let lowered = text.to_lowercase();
        let tokens = tokenize(&lowered);

        for (i, token) in tokens.iter().enumerate() {
            let Some(candidates) = self.by_head.get(token.text) else {
                continue;
            };
            for &id in candidates {
                let pattern = &self.patterns[id];
                let Some(window) = tokens.get(i..i + pattern.tokens.len()) else {
                    continue;
                };
                if window
                    .iter()
                    .zip(&pattern.tokens)
                    .all(|(t, p)| t.text == p.as_str())
                {
                    skills.insert(pattern.label.clone());
                }
            }
        }

        skills
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
