//! Resume vs job description analysis.
//!
//! Similarity runs on normalized text. Skill extraction runs on raw text, since
//! phrases need the original word order and inflection.

pub mod gap;
pub mod recommendation;
pub mod report;
pub mod similarity;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::nlp::NlpContext;
use crate::skills::SkillSet;

pub use gap::SkillGap;
pub use recommendation::{build_recommendation, MatchTier};
pub use similarity::{SimilarityScore, SimilarityScorer, TfIdfScorer};

pub const NO_JD_SKILLS_WARNING: &str = "No technical skills were detected in the job description, so no skills can be reported as missing. Check that the job description text was extracted correctly.";

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("Resume text is empty. Please provide both a resume and a job description.")]
    MissingResume,

    #[error("Job description text is empty. Please provide both a resume and a job description.")]
    MissingJobDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub similarity: SimilarityScore,
    pub resume_skills: SkillSet,
    pub jd_skills: SkillSet,
    pub matched: SkillSet,
    pub missing: SkillSet,
    pub tier: MatchTier,
    pub recommendation: String,
    pub scorer_backend: String,
    pub warnings: Vec<String>,
}

/// Runs one resume against one job description. Cheap to clone; all state is shared read-only.
#[derive(Clone)]
pub struct Analyzer {
    nlp: Arc<NlpContext>,
    scorer: Arc<dyn SimilarityScorer>,
}

impl Analyzer {
    pub fn new(nlp: Arc<NlpContext>, scorer: Arc<dyn SimilarityScorer>) -> Self {
        Self { nlp, scorer }
    }

    pub fn with_default_scorer(nlp: Arc<NlpContext>) -> Self {
        Self::new(nlp, Arc::new(TfIdfScorer))
    }

    pub fn nlp(&self) -> &NlpContext {
        &self.nlp
    }

    /// Refuses blank input rather than reporting a misleading 0% score.
    pub fn analyze(&self, resume: &str, jd: &str) -> Result<AnalysisReport, AnalysisError> {
        if resume.trim().is_empty() {
            return Err(AnalysisError::MissingResume);
        }
        if jd.trim().is_empty() {
            return Err(AnalysisError::MissingJobDescription);
        }

        let normalized_resume = self.nlp.normalize(resume);
        let normalized_jd = self.nlp.normalize(jd);
        debug!(
            "Normalized resume to {} bytes, JD to {} bytes",
            normalized_resume.as_str().len(),
            normalized_jd.as_str().len()
        );

        let similarity = self.scorer.score(&normalized_resume, &normalized_jd);

        let resume_skills = self.nlp.extract_skills(resume);
        let jd_skills = self.nlp.extract_skills(jd);
        let SkillGap { matched, missing } = SkillGap::between(&resume_skills, &jd_skills);

        let mut warnings = Vec::new();
        if jd_skills.is_empty() {
            warn!("No skills detected in job description");
            warnings.push(NO_JD_SKILLS_WARNING.to_string());
        }

        let tier = MatchTier::from_percentage(similarity.percentage);
        let recommendation = build_recommendation(similarity.percentage, &missing);

        info!(
            "Analysis complete: {}% ({:?}), {} matched, {} missing",
            similarity.percentage,
            tier,
            matched.len(),
            missing.len()
        );

        Ok(AnalysisReport {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            similarity,
            resume_skills,
            jd_skills,
            matched,
            missing,
            tier,
            recommendation,
            scorer_backend: self.scorer.backend().to_string(),
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::NormalizedDocument;
    use pretty_assertions::assert_eq;

    fn analyzer() -> Analyzer {
        Analyzer::with_default_scorer(Arc::new(NlpContext::default()))
    }

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_python_docker_scenario() {
        let report = analyzer()
            .analyze(
                "Experienced Python developer with Docker and AWS skills.",
                "Looking for a Python developer familiar with Docker.",
            )
            .unwrap();
        assert!(report.resume_skills.is_superset(&set(&["python", "docker", "aws"])));
        assert_eq!(report.jd_skills, set(&["docker", "python"]));
        assert_eq!(report.matched, set(&["docker", "python"]));
        assert!(report.missing.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.scorer_backend, "tfidf");
    }

    #[test]
    fn test_no_overlap_scenario() {
        let report = analyzer()
            .analyze(
                "I know Java.",
                "Need someone skilled in Python and Machine Learning.",
            )
            .unwrap();
        assert!(report.matched.is_empty());
        assert_eq!(report.missing, set(&["machine learning", "python"]));
        assert_eq!(report.tier, MatchTier::Low);
    }

    #[test]
    fn test_identical_documents_are_a_full_match() {
        let text = "Senior data engineer building Spark and Kafka pipelines on AWS.";
        let report = analyzer().analyze(text, text).unwrap();
        assert_eq!(report.similarity.percentage, 100.0);
        assert_eq!(report.tier, MatchTier::Excellent);
        assert!(report.recommendation.starts_with("Excellent match"));
    }

    #[test]
    fn test_blank_inputs_are_refused() {
        let a = analyzer();
        assert_eq!(
            a.analyze("", "Python required.").unwrap_err(),
            AnalysisError::MissingResume
        );
        assert_eq!(
            a.analyze("Python", "  \n ").unwrap_err(),
            AnalysisError::MissingJobDescription
        );
    }

    #[test]
    fn test_core_handles_empty_resume_without_orchestrator() {
        let nlp = NlpContext::default();
        let resume = nlp.normalize("");
        let jd = nlp.normalize("Python required.");
        assert_eq!(TfIdfScorer.score(&resume, &jd).score, 0.0);

        let resume_skills = nlp.extract_skills("");
        let jd_skills = nlp.extract_skills("Python required.");
        assert!(resume_skills.is_empty());
        assert_eq!(jd_skills, set(&["python"]));
        assert_eq!(SkillGap::between(&resume_skills, &jd_skills).missing, set(&["python"]));
    }

    #[test]
    fn test_jd_without_skills_warns() {
        let report = analyzer()
            .analyze("Python developer", "Friendly team player wanted")
            .unwrap();
        assert!(report.jd_skills.is_empty());
        assert_eq!(report.warnings, vec![NO_JD_SKILLS_WARNING.to_string()]);
    }

    struct FixedScorer(f64);

    impl SimilarityScorer for FixedScorer {
        fn score(&self, _a: &NormalizedDocument, _b: &NormalizedDocument) -> SimilarityScore {
            SimilarityScore::from_raw(self.0)
        }

        fn backend(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_scorer_is_pluggable() {
        let analyzer = Analyzer::new(Arc::new(NlpContext::default()), Arc::new(FixedScorer(0.6)));
        let report = analyzer
            .analyze("Java developer", "Looking for Java and Kotlin")
            .unwrap();
        assert_eq!(report.scorer_backend, "fixed");
        assert_eq!(report.tier, MatchTier::Good);
        assert!(report.recommendation.contains("kotlin"));
    }
}
