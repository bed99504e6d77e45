//! Keyword-scoring task detector
//!
//! Each category scores one point per distinct keyword found in the
//! lowercased input (substring containment, repeated occurrences count once).
//! The best-scoring category wins, with ties going to the category declared
//! first in [`CATEGORY_KEYWORDS`]. Confidence is `min(score / 3, 1)`, a
//! heuristic that treats three keyword hits as full confidence.

use super::category::{TaskCategory, CATEGORY_KEYWORDS};
use super::details::TaskDetails;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Confidence above which a non-general result counts as a task request
pub const TASK_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Number of keyword hits treated as full confidence
pub const FULL_CONFIDENCE_MATCHES: usize = 3;

/// Outcome of classifying one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: TaskCategory,
    pub confidence: f64,
    pub details: TaskDetails,
}

impl ClassificationResult {
    pub fn is_task_request(&self) -> bool {
        !self.category.is_general() && self.confidence > TASK_CONFIDENCE_THRESHOLD
    }
}

/// Score of a single category for an input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScore {
    pub category: TaskCategory,
    pub score: usize,
    pub matched: Vec<&'static str>,
}

/// Stateless classifier over the static keyword tables
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskDetector;

impl TaskDetector {
    pub fn new() -> Self {
        Self
    }

    /// Score every category in table order
    pub fn score_categories(&self, input: &str) -> Vec<CategoryScore> {
        score_normalized(&input.to_lowercase())
    }

    /// Classify free text into a task category. Total over all inputs.
    pub fn classify(&self, input: &str) -> ClassificationResult {
        let normalized = input.to_lowercase();
        let scores = score_normalized(&normalized);

        // Strictly-greater comparison keeps the first-declared category on ties
        let mut best: Option<&CategoryScore> = None;
        for candidate in &scores {
            if best.map_or(true, |current| candidate.score > current.score) {
                best = Some(candidate);
            }
        }

        let (category, confidence, context) = match best {
            Some(top) if top.score > 0 => (
                top.category,
                confidence_for(top.score),
                top.matched.iter().map(|k| k.to_string()).collect(),
            ),
            _ => (TaskCategory::General, 0.0, Vec::new()),
        };

        let details = TaskDetails::extract(&normalized, category, context);

        debug!(
            category = %category,
            confidence,
            complexity = ?details.complexity,
            urgency = ?details.urgency,
            "Classified input"
        );

        ClassificationResult {
            category,
            confidence,
            details,
        }
    }

    /// True when the input should be routed into a task-specific flow
    pub fn is_task_request(&self, input: &str) -> bool {
        self.classify(input).is_task_request()
    }
}

fn score_normalized(normalized: &str) -> Vec<CategoryScore> {
    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| {
            let matched: Vec<&'static str> = keywords
                .iter()
                .copied()
                .filter(|keyword| normalized.contains(keyword))
                .collect();
            CategoryScore {
                category: *category,
                score: matched.len(),
                matched,
            }
        })
        .collect()
}

/// `min(score / 3, 1)`
pub fn confidence_for(score: usize) -> f64 {
    (score as f64 / FULL_CONFIDENCE_MATCHES as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::details::{Complexity, Urgency};

    #[test]
    fn test_empty_input_is_general() {
        let result = TaskDetector::new().classify("");
        assert_eq!(result.category, TaskCategory::General);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.details.complexity, Complexity::Medium);
        assert_eq!(result.details.urgency, Urgency::Normal);
        assert!(result.details.context.is_empty());
        assert!(result.details.subject.is_none());
    }

    #[test]
    fn test_repeated_keyword_counts_once() {
        let result = TaskDetector::new().classify("essay essay essay");
        assert_eq!(result.category, TaskCategory::Essay);
        assert!((result.confidence - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        // one presentation keyword, one essay keyword
        let result = TaskDetector::new().classify("slides and an essay");
        assert_eq!(result.category, TaskCategory::Presentation);
    }

    #[test]
    fn test_confidence_caps_at_one() {
        assert_eq!(confidence_for(0), 0.0);
        assert_eq!(confidence_for(3), 1.0);
        assert_eq!(confidence_for(7), 1.0);
    }

    #[test]
    fn test_context_lists_matched_keywords() {
        let result = TaskDetector::new().classify("Solve this equation");
        assert_eq!(result.category, TaskCategory::Math);
        assert_eq!(result.details.context, vec!["solve", "equation"]);
    }

    #[test]
    fn test_is_task_request_threshold() {
        let detector = TaskDetector::new();
        assert!(detector.is_task_request("essay"));
        assert!(!detector.is_task_request(""));
        assert!(!detector.is_task_request("good morning"));
    }

    #[test]
    fn test_uppercase_input_is_normalized() {
        let result = TaskDetector::new().classify("HOMEWORK WORKSHEET");
        assert_eq!(result.category, TaskCategory::Homework);
        assert_eq!(result.details.context, vec!["homework", "worksheet"]);
    }
}
