//! MOTTO task intent classifier
//!
//! Maps free-form user text to the kind of help being requested (essay,
//! math, email, code, ...) using keyword scoring over static tables, and
//! exposes the classifier as a library, a CLI and a small HTTP service.
//!
//! # Quick Start
//!
//! ```rust
//! use motto_classifier::{Complexity, TaskCategory, TaskDetector, Urgency};
//!
//! let detector = TaskDetector::new();
//! let result = detector.classify("I need help with calculus homework, it's urgent");
//!
//! assert_eq!(result.category, TaskCategory::Homework);
//! assert_eq!(result.details.urgency, Urgency::High);
//! assert_eq!(result.details.complexity, Complexity::Medium);
//!
//! let json = serde_json::to_string(&result).unwrap();
//! assert!(json.contains("\"category\":\"homework\""));
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod observability;
pub mod server;
pub mod service;

pub use classifier::{
    ClassificationResult, Complexity, InputPolicy, OversizeAction, TaskCategory, TaskDetails,
    TaskDetector, Urgency,
};
pub use config::{ClassifierConfig, ConfigError};
pub use error::{ClassifierError, ClassifierResult};
pub use service::ClassifierService;
