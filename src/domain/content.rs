//! Learning content records returned by category providers.

use serde::{Deserialize, Serialize};

/// Opaque deep-link identifier into the lesson/course system
/// (e.g. `lesson-13-1-1`). No structure is validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(String);

impl LessonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LessonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LessonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A link to academy lesson material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademyLink {
    /// Link text
    pub title: String,

    /// Target URL or in-app route
    pub url: String,

    /// Lesson this link opens, if it deep-links into a course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<LessonId>,
}

impl AcademyLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            lesson_id: None,
        }
    }

    /// Set the lesson this link opens
    pub fn with_lesson(mut self, lesson_id: impl Into<LessonId>) -> Self {
        self.lesson_id = Some(lesson_id.into());
        self
    }
}

/// A piece of learning content owned by a category provider.
///
/// The registry only ever reads `brief` and `academy_links`; the other fields
/// are passed through for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// One or two sentence summary shown next to the checklist item
    pub brief: String,

    /// Links to lesson material
    #[serde(default, alias = "academyLinks")]
    pub academy_links: Vec<AcademyLink>,

    /// Optional heading
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Optional longer explanation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ContentRecord {
    pub fn new(brief: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            academy_links: Vec::new(),
            title: None,
            details: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the longer explanation
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Add a link
    pub fn with_link(mut self, link: AcademyLink) -> Self {
        self.academy_links.push(link);
        self
    }
}
