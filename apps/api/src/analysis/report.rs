//! Plain-text rendering of an analysis for terminal output.

use std::fmt::Write;

use crate::analysis::AnalysisReport;
use crate::skills::SkillSet;

const RULE: &str = "==============================";

pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Resume Match Score: {:.1}%", report.similarity.percentage);
    let _ = writeln!(out, "{RULE}");

    let _ = writeln!(out, "\nMatched Skills:");
    write_skills(&mut out, &report.matched);

    let _ = writeln!(out, "\nMissing Skills:");
    write_skills(&mut out, &report.missing);

    for warning in &report.warnings {
        let _ = writeln!(out, "\nWarning: {warning}");
    }

    let _ = writeln!(out, "\nRecommendation:\n{}", report.recommendation);
    let _ = writeln!(out, "{RULE}");
    out
}

fn write_skills(out: &mut String, skills: &SkillSet) {
    if skills.is_empty() {
        let _ = writeln!(out, "- None");
    }
    for skill in skills {
        let _ = writeln!(out, "- {skill}");
    }
}
