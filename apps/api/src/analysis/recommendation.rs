use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;

/// Coarse match band derived from the similarity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Excellent,
    Good,
    Low,
}

impl MatchTier {
    /// ≥ 80 excellent, ≥ 50 good, otherwise low.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            MatchTier::Excellent
        } else if percentage >= 50.0 {
            MatchTier::Good
        } else {
            MatchTier::Low
        }
    }
}

const MAX_LISTED_SKILLS: usize = 3;

/// Builds the user-facing advice. Missing skills are listed alphabetically, at most three.
pub fn build_recommendation(percentage: f64, missing: &SkillSet) -> String {
    match MatchTier::from_percentage(percentage) {
        MatchTier::Excellent => {
            "Excellent match! Your profile aligns well with the job description. Highlight your projects."
                .to_string()
        }
        MatchTier::Good if !missing.is_empty() => {
            let top: Vec<&str> = missing
                .iter()
                .take(MAX_LISTED_SKILLS)
                .map(String::as_str)
                .collect();
            format!(
                "Good match, but you are missing some key skills like {}. Consider learning these.",
                top.join(", ")
            )
        }
        MatchTier::Good => {
            "Good match. Focus on quantifying your achievements in the resume.".to_string()
        }
        MatchTier::Low => {
            "Low match. You might want to tailor your resume more significantly or acquire the missing skills."
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(MatchTier::from_percentage(100.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_percentage(80.0), MatchTier::Excellent);
        assert_eq!(MatchTier::from_percentage(79.99), MatchTier::Good);
        assert_eq!(MatchTier::from_percentage(50.0), MatchTier::Good);
        assert_eq!(MatchTier::from_percentage(49.99), MatchTier::Low);
        assert_eq!(MatchTier::from_percentage(0.0), MatchTier::Low);
    }

    #[test]
    fn test_excellent_ignores_missing_skills() {
        let rec = build_recommendation(85.0, &set(&["kafka"]));
        assert!(rec.starts_with("Excellent match"));
        assert!(!rec.contains("kafka"));
    }

    #[test]
    fn test_good_lists_first_three_missing_alphabetically() {
        let rec = build_recommendation(65.0, &set(&["terraform", "aws", "kafka", "docker"]));
        assert!(rec.starts_with("Good match, but"));
        assert!(rec.contains("aws, docker, kafka."));
        assert!(!rec.contains("terraform"));
    }

    #[test]
    fn test_good_without_missing_skills() {
        let rec = build_recommendation(50.0, &SkillSet::new());
        assert!(rec.contains("quantifying your achievements"));
    }

    #[test]
    fn test_low_match() {
        let rec = build_recommendation(49.99, &set(&["rust"]));
        assert!(rec.starts_with("Low match"));
    }
}
