//! Boundary wrapper around the detector
//!
//! Applies the input policy, classifies, and records metrics. Both the CLI
//! and the HTTP server go through this type.

use crate::classifier::{ClassificationResult, InputPolicy, TaskDetector};
use crate::classification_span;
use crate::config::ClassifierConfig;
use crate::error::ClassifierResult;
use crate::observability::metrics::metrics;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassifierService {
    detector: TaskDetector,
    policy: InputPolicy,
}

impl ClassifierService {
    pub fn new(policy: InputPolicy) -> Self {
        Self {
            detector: TaskDetector::new(),
            policy,
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(config.input_policy())
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    /// Bound the input, then classify it
    pub fn classify(&self, text: &str) -> ClassifierResult<ClassificationResult> {
        let span = classification_span!(input_chars = text.chars().count());
        let _enter = span.enter();

        let bounded = match self.policy.apply(text) {
            Ok(bounded) => bounded,
            Err(e) => {
                warn!(error = %e, "Rejected classification input");
                metrics().input_rejected();
                return Err(e);
            }
        };
        if bounded.truncated {
            metrics().input_truncated();
        }

        let result = self.detector.classify(&bounded.text);
        metrics().record_classification(&result);
        debug!(
            category = %result.category,
            task_request = result.is_task_request(),
            "Classification complete"
        );

        Ok(result)
    }

    pub fn is_task_request(&self, text: &str) -> ClassifierResult<bool> {
        Ok(self.classify(text)?.is_task_request())
    }
}
