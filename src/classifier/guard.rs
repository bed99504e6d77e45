//! Input bound applied at the boundary before classification
//!
//! The classifier accepts any string, so oversized input is handled here,
//! by the CLI and HTTP layers, rather than inside the detector.

use crate::error::{ClassifierError, ClassifierResult};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::warn;

/// Default maximum input length in characters
pub const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// What to do with input longer than the configured bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OversizeAction {
    #[default]
    Truncate,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    pub max_chars: usize,
    pub oversize: OversizeAction,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_INPUT_CHARS,
            oversize: OversizeAction::Truncate,
        }
    }
}

/// Input after the policy was applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedInput<'a> {
    pub text: Cow<'a, str>,
    pub truncated: bool,
}

impl InputPolicy {
    pub fn new(max_chars: usize, oversize: OversizeAction) -> Self {
        Self {
            max_chars,
            oversize,
        }
    }

    /// Pass input through, truncate it on a char boundary, or reject it
    pub fn apply<'a>(&self, input: &'a str) -> ClassifierResult<BoundedInput<'a>> {
        let cut = match input.char_indices().nth(self.max_chars) {
            None => {
                return Ok(BoundedInput {
                    text: Cow::Borrowed(input),
                    truncated: false,
                })
            }
            Some((byte_index, _)) => byte_index,
        };

        match self.oversize {
            OversizeAction::Truncate => {
                warn!(
                    max_chars = self.max_chars,
                    input_bytes = input.len(),
                    "Truncating oversized input"
                );
                Ok(BoundedInput {
                    text: Cow::Borrowed(&input[..cut]),
                    truncated: true,
                })
            }
            OversizeAction::Reject => Err(ClassifierError::invalid_input(format!(
                "input exceeds {} characters",
                self.max_chars
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_passes_through() {
        let policy = InputPolicy::new(5, OversizeAction::Reject);
        let bounded = policy.apply("hello").unwrap();
        assert_eq!(bounded.text, "hello");
        assert!(!bounded.truncated);
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        let policy = InputPolicy::new(3, OversizeAction::Truncate);
        let bounded = policy.apply("héllo").unwrap();
        assert_eq!(bounded.text, "hél");
        assert!(bounded.truncated);
    }

    #[test]
    fn test_rejects_oversized_input() {
        let policy = InputPolicy::new(3, OversizeAction::Reject);
        let err = policy.apply("hello").unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidInput { .. }));
        assert_eq!(err.to_string(), "Invalid input: input exceeds 3 characters");
    }

    #[test]
    fn test_default_policy() {
        let policy = InputPolicy::default();
        assert_eq!(policy.max_chars, 10_000);
        assert_eq!(policy.oversize, OversizeAction::Truncate);
        assert!(!policy.apply(&"a".repeat(10_000)).unwrap().truncated);
        assert!(policy.apply(&"a".repeat(10_001)).unwrap().truncated);
    }
}
