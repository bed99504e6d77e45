//! Task intent classification
//!
//! Maps free-form user text to one of a fixed set of task categories by
//! keyword scoring, and tags it with subject, complexity and urgency.
//!
//! ```rust
//! use motto_classifier::classifier::{TaskCategory, TaskDetector};
//!
//! let detector = TaskDetector::new();
//! let result = detector.classify("Can you solve this algebra equation?");
//!
//! assert_eq!(result.category, TaskCategory::Math);
//! assert_eq!(result.details.subject.as_deref(), Some("algebra"));
//! assert!(detector.is_task_request("Can you solve this algebra equation?"));
//! ```

pub mod category;
pub mod details;
pub mod detector;
pub mod guard;

pub use category::{TaskCategory, UnknownCategory, CATEGORY_KEYWORDS};
pub use details::{Complexity, TaskDetails, Urgency};
pub use detector::{
    confidence_for, CategoryScore, ClassificationResult, TaskDetector, FULL_CONFIDENCE_MATCHES,
    TASK_CONFIDENCE_THRESHOLD,
};
pub use guard::{BoundedInput, InputPolicy, OversizeAction, DEFAULT_MAX_INPUT_CHARS};
