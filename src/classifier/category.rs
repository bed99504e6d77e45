//! Task categories and their diagnostic keyword table
//!
//! The table order is significant: when two categories score the same number
//! of keyword hits, the one declared first wins.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of help a user is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Presentation,
    Math,
    Essay,
    Message,
    Email,
    Code,
    Resume,
    Social,
    Study,
    Brainstorm,
    Meeting,
    Assignment,
    Homework,
    /// Fallback when no category keyword matched
    General,
}

/// Keyword table in declaration order. `General` has no entry.
pub static CATEGORY_KEYWORDS: [(TaskCategory, &[&str]); 13] = [
    (
        TaskCategory::Presentation,
        &[
            "presentation",
            "slides",
            "powerpoint",
            "keynote",
            "pitch deck",
            "slide deck",
            "present",
            "ppt",
            "slideshow",
            "deck",
        ],
    ),
    (
        TaskCategory::Math,
        &[
            "calculate",
            "solve",
            "math",
            "equation",
            "formula",
            "algebra",
            "geometry",
            "calculus",
            "statistics",
            "problem",
            "compute",
            "add",
            "subtract",
            "multiply",
            "divide",
            "integral",
            "derivative",
        ],
    ),
    (
        TaskCategory::Essay,
        &[
            "essay",
            "write",
            "paper",
            "article",
            "report",
            "thesis",
            "paragraph",
            "composition",
            "draft",
            "writing",
            "document",
        ],
    ),
    (
        TaskCategory::Message,
        &[
            "message",
            "text",
            "reply",
            "respond",
            "chat",
            "dm",
            "sms",
            "whatsapp",
            "telegram",
            "quick message",
        ],
    ),
    (
        TaskCategory::Email,
        &[
            "email",
            "mail",
            "letter",
            "correspondence",
            "professional email",
            "business email",
            "formal email",
            "send email",
        ],
    ),
    (
        TaskCategory::Code,
        &[
            "code",
            "function",
            "programming",
            "debug",
            "script",
            "algorithm",
            "api",
            "component",
            "class",
            "method",
            "javascript",
            "python",
            "react",
            "coding",
            "developer",
            "program",
        ],
    ),
    (
        TaskCategory::Resume,
        &[
            "resume",
            "cv",
            "curriculum vitae",
            "job application",
            "cover letter",
            "career",
            "work experience",
            "professional summary",
        ],
    ),
    (
        TaskCategory::Social,
        &[
            "tweet",
            "post",
            "instagram",
            "facebook",
            "linkedin",
            "social media",
            "twitter",
            "caption",
            "hashtag",
            "share",
        ],
    ),
    (
        TaskCategory::Study,
        &[
            "study",
            "flashcard",
            "exam",
            "quiz",
            "learn",
            "review",
            "notes",
            "memorize",
            "test prep",
            "study guide",
        ],
    ),
    (
        TaskCategory::Brainstorm,
        &[
            "brainstorm",
            "ideas",
            "creative",
            "think",
            "suggest",
            "generate ideas",
            "come up with",
            "ideation",
            "concept",
        ],
    ),
    (
        TaskCategory::Meeting,
        &[
            "meeting",
            "agenda",
            "standup",
            "sync",
            "conference",
            "call",
            "discussion",
            "team meeting",
            "meeting notes",
        ],
    ),
    (
        TaskCategory::Assignment,
        &[
            "assignment",
            "research paper",
            "lab report",
            "case study",
            "book report",
            "project",
            "term paper",
            "literature review",
            "annotated bibliography",
            "analysis",
            "compare and contrast",
        ],
    ),
    (
        TaskCategory::Homework,
        &[
            "homework",
            "practice problems",
            "exercises",
            "worksheet",
            "daily work",
            "help with",
            "question about",
            "don't understand",
        ],
    ),
];

impl TaskCategory {
    /// Every category in declaration order, fallback last
    pub fn all() -> [TaskCategory; 14] {
        [
            TaskCategory::Presentation,
            TaskCategory::Math,
            TaskCategory::Essay,
            TaskCategory::Message,
            TaskCategory::Email,
            TaskCategory::Code,
            TaskCategory::Resume,
            TaskCategory::Social,
            TaskCategory::Study,
            TaskCategory::Brainstorm,
            TaskCategory::Meeting,
            TaskCategory::Assignment,
            TaskCategory::Homework,
            TaskCategory::General,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Presentation => "presentation",
            TaskCategory::Math => "math",
            TaskCategory::Essay => "essay",
            TaskCategory::Message => "message",
            TaskCategory::Email => "email",
            TaskCategory::Code => "code",
            TaskCategory::Resume => "resume",
            TaskCategory::Social => "social",
            TaskCategory::Study => "study",
            TaskCategory::Brainstorm => "brainstorm",
            TaskCategory::Meeting => "meeting",
            TaskCategory::Assignment => "assignment",
            TaskCategory::Homework => "homework",
            TaskCategory::General => "general",
        }
    }

    /// Diagnostic keywords for this category (empty for `General`)
    pub fn keywords(&self) -> &'static [&'static str] {
        CATEGORY_KEYWORDS
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, keywords)| *keywords)
            .unwrap_or(&[])
    }

    pub fn is_general(&self) -> bool {
        matches!(self, TaskCategory::General)
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown task category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for TaskCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        TaskCategory::all()
            .into_iter()
            .find(|category| category.as_str() == name)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
