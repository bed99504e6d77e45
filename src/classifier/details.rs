//! Coarse descriptive tags extracted alongside the category

use super::category::TaskCategory;
use serde::{Deserialize, Serialize};

const SIMPLE_MARKERS: &[&str] = &["simple", "basic", "quick"];
const COMPLEX_MARKERS: &[&str] = &["complex", "advanced", "detailed"];
const HIGH_URGENCY_MARKERS: &[&str] = &["urgent", "asap", "quickly", "now"];
const LOW_URGENCY_MARKERS: &[&str] = &["whenever", "no rush"];

const MATH_SUBJECTS: &[&str] = &["algebra", "calculus", "geometry", "statistics", "trigonometry"];
const PRESENTATION_SUBJECTS: &[&str] = &["business", "sales", "marketing", "education", "pitch"];
const ESSAY_SUBJECTS: &[&str] = &[
    "argumentative",
    "narrative",
    "expository",
    "persuasive",
    "research",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Normal,
    High,
}

/// Tags describing a classified request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub complexity: Complexity,
    pub urgency: Urgency,
    /// Keywords of the chosen category found in the input, in table order
    #[serde(default)]
    pub context: Vec<String>,
}

impl TaskDetails {
    /// Extract tags from already-lowercased input
    pub fn extract(normalized: &str, category: TaskCategory, context: Vec<String>) -> Self {
        Self {
            subject: detect_subject(normalized, category).map(str::to_string),
            complexity: detect_complexity(normalized),
            urgency: detect_urgency(normalized),
            context,
        }
    }
}

fn contains_any(input: &str, markers: &[&str]) -> bool {
    markers.iter().any(|marker| input.contains(marker))
}

/// Subject sub-keywords exist only for math, presentation and essay
pub fn subject_keywords(category: TaskCategory) -> &'static [&'static str] {
    match category {
        TaskCategory::Math => MATH_SUBJECTS,
        TaskCategory::Presentation => PRESENTATION_SUBJECTS,
        TaskCategory::Essay => ESSAY_SUBJECTS,
        _ => &[],
    }
}

pub fn detect_subject(normalized: &str, category: TaskCategory) -> Option<&'static str> {
    subject_keywords(category)
        .iter()
        .copied()
        .find(|subject| normalized.contains(subject))
}

/// "simple" markers are checked before "complex" ones
pub fn detect_complexity(normalized: &str) -> Complexity {
    if contains_any(normalized, SIMPLE_MARKERS) {
        Complexity::Simple
    } else if contains_any(normalized, COMPLEX_MARKERS) {
        Complexity::Complex
    } else {
        Complexity::Medium
    }
}

/// "high" markers are checked before "low" ones
pub fn detect_urgency(normalized: &str) -> Urgency {
    if contains_any(normalized, HIGH_URGENCY_MARKERS) {
        Urgency::High
    } else if contains_any(normalized, LOW_URGENCY_MARKERS) {
        Urgency::Low
    } else {
        Urgency::Normal
    }
}
