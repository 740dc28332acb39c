// src/catalog/classify.rs

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static OR_CONSENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bor\s+consent\b").expect("valid consent regex")
});

static AP_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bap\s+(?P<subject>.*?)\s+(?:score|subscore|exam)\s+(?:of\s+)?(?P<value>\d+(?:\s+or\s+\d+)?)",
    )
    .expect("valid AP score regex")
});

/// Display metadata for one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    pub title: String,
    pub special_requirements: Vec<String>,
}

impl CourseInfo {
    pub fn special_summary(&self) -> String {
        self.special_requirements.join("; ")
    }
}

/// Pull non-course requirements out of free-text prerequisite prose.
///
/// Matching is keyword based on the lowercased text; the order of the
/// returned entries is fixed (standing, consent, restrictions, AP scores).
pub fn classify_special_requirements(raw_prereq: &str) -> Vec<String> {
    let lower = raw_prereq.to_lowercase();
    let mut reqs = Vec::new();

    if lower.contains("upper") {
        reqs.push("Upper Division Standing".to_string());
    }

    if lower.contains("consent") {
        // "or consent of instructor" offers consent as an alternative path.
        if OR_CONSENT.is_match(&lower) {
            reqs.push("Consent of Instructor (alternative)".to_string());
        } else {
            reqs.push("Consent of Instructor required".to_string());
        }
    }

    if lower.contains("restricted") {
        reqs.push("Restricted Enrollment".to_string());
    }

    if lower.contains("transfer") {
        reqs.push("Transfer Credit Only".to_string());
    }

    if lower.contains("standing") {
        for (needle, label) in [
            ("senior", "Senior"),
            ("junior", "Junior"),
            ("sophomore", "Sophomore"),
            ("freshman", "Freshman"),
        ] {
            if lower.contains(needle) {
                reqs.push(format!("{label} Standing required"));
            }
        }
    }

    for caps in AP_SCORE.captures_iter(&lower) {
        let subject = caps.name("subject").map_or("", |m| m.as_str());
        let value = caps.name("value").map_or("", |m| m.as_str());
        reqs.push(format!(
            "AP {}: {} (alternative)",
            subject.to_uppercase(),
            value
        ));
    }

    reqs
}
