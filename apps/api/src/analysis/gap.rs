use serde::{Deserialize, Serialize};

use crate::skills::SkillSet;

/// Matched and missing skills for one resume/JD pair.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    /// resume ∩ jd
    pub matched: SkillSet,
    /// jd − resume
    pub missing: SkillSet,
}

impl SkillGap {
    pub fn between(resume_skills: &SkillSet, jd_skills: &SkillSet) -> Self {
        Self {
            matched: resume_skills.intersection(jd_skills).cloned().collect(),
            missing: jd_skills.difference(resume_skills).cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_required_skills_present() {
        let gap = SkillGap::between(&set(&["python", "docker", "aws"]), &set(&["python", "docker"]));
        assert_eq!(gap.matched, set(&["docker", "python"]));
        assert!(gap.missing.is_empty());
    }

    #[test]
    fn test_nothing_in_common() {
        let gap = SkillGap::between(&set(&["java"]), &set(&["python", "machine learning"]));
        assert!(gap.matched.is_empty());
        assert_eq!(gap.missing, set(&["machine learning", "python"]));
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let gap = SkillGap::between(&SkillSet::new(), &set(&["python"]));
        assert_eq!(gap.missing, set(&["python"]));
    }

    proptest! {
        #[test]
        fn prop_partition_of_jd_skills(
            resume in proptest::collection::btree_set("[a-e]{1,2}", 0..8),
            jd in proptest::collection::btree_set("[a-e]{1,2}", 0..8),
        ) {
            let gap = SkillGap::between(&resume, &jd);
            prop_assert!(gap.matched.is_disjoint(&gap.missing));
            let union: SkillSet = gap.matched.union(&gap.missing).cloned().collect();
            prop_assert_eq!(union, jd);
        }
    }
}
