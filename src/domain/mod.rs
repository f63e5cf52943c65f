//! Domain types for the sailcheck registry.
//!
//! This module contains the core data structures:
//! - Category: The closed set of content domains
//! - ContentRecord: Learning content returned by providers
//! - LessonId / AcademyLink: Pointers into lesson material

pub mod category;
pub mod content;

// Re-export commonly used types
pub use category::Category;
pub use content::{AcademyLink, ContentRecord, LessonId};
