//! Language resources shared by every analysis.
//!
//! `NlpContext` is built once at startup and then only read. Wrap it in an `Arc`
//! to share it across requests.

pub mod lemma;
pub mod normalizer;
pub mod stopwords;

use tracing::info;

use crate::skills::{SkillMatcher, SkillSet, SkillVocabulary, VocabularyError, VocabularySource};

pub use normalizer::{NormalizedDocument, Normalizer};

#[derive(Debug, Clone)]
pub struct NlpContext {
    normalizer: Normalizer,
    vocabulary: SkillVocabulary,
    matcher: SkillMatcher,
}

impl NlpContext {
    /// Builds a context around an explicit vocabulary. Tests inject stub vocabularies here.
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        let matcher = SkillMatcher::new(&vocabulary);
        Self {
            normalizer: Normalizer::english(),
            vocabulary,
            matcher,
        }
    }

    /// Loads the vocabulary from `source`. Failure here is fatal to the process.
    pub fn load(source: &VocabularySource) -> Result<Self, VocabularyError> {
        let context = Self::new(SkillVocabulary::load(source)?);
        info!(
            "NLP context ready: {} skill patterns",
            context.matcher.pattern_count()
        );
        Ok(context)
    }

    pub fn normalize(&self, text: &str) -> NormalizedDocument {
        self.normalizer.normalize(text)
    }

    pub fn extract_skills(&self, text: &str) -> SkillSet {
        self.matcher.extract(text)
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }
}

impl Default for NlpContext {
    fn default() -> Self {
        Self::new(SkillVocabulary::builtin())
    }
}
