//! sailcheck - Checklist item to learning content registry
//!
//! Maps free-form checklist item keys (typed by a user or produced by a
//! wizard) to curated learning content from six fixed categories: weather,
//! tactics, equipment, rules, crew and rig setting.
//!
//! # Resolution
//!
//! - Keys are normalized (lower-case, whitespace runs become `_`)
//! - Mapped items are looked up in their mapped category under their mapped key
//! - Unmapped items are tried against every category in a fixed order
//! - Missing content is always `None`, never an error
//!
//! # Modules
//!
//! - `domain`: Data structures (Category, ContentRecord, LessonId)
//! - `providers`: Per-category content lookups
//! - `registry`: Mapping table, normalization and resolution
//! - `config`: Layered path configuration
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Resolve a checklist item
//! sailcheck resolve "Check Forecast"
//!
//! # List rig-setting checklist items
//! sailcheck items rig
//!
//! # Find mappings with no content in the pack
//! sailcheck audit --content-dir ./content
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod providers;
pub mod registry;

// Re-export main types at crate root for convenience
pub use domain::{AcademyLink, Category, ContentRecord, LessonId};
pub use providers::{ContentProvider, EmptyProvider, ProviderSet, TableProvider};
pub use registry::{
    normalize, AuditReport, ContentRegistry, MappingEntry, MappingTable, RegistryError,
    Resolution, ResolutionSource,
};
