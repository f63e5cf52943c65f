//! Checklist item → learning content registry.
//!
//! Resolution is two-stage:
//!
//! ```text
//! raw key → normalize → mapping table
//!             [hit]  → provider(entry.category).lookup(entry.key)
//!             [miss] → weather, tactics, equipment, rules, crew, rig
//!                      .lookup(normalized key), first hit wins
//! ```
//!
//! A mapping hit is final: if the mapped provider has nothing for the mapped
//! key the item resolves to `None`, and the sweep is not tried. Category and
//! lesson metadata come from the mapping table only, so items that resolve
//! through the sweep have neither.
//!
//! Absence of content is always `None`; resolution has no error path.

pub mod audit;
pub mod builtin;
pub mod error;
pub mod mapping;
pub mod normalize;

use std::borrow::Cow;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{AcademyLink, Category, ContentRecord, LessonId};
use crate::providers::ProviderSet;

pub use audit::{AmbiguousKey, AuditReport, DanglingMapping};
pub use error::RegistryError;
pub use mapping::{MappingEntry, MappingTable};
pub use normalize::normalize;

/// How a checklist item was resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "via", rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Direct hit in the mapping table
    Mapped {
        category: Category,
        key: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        lesson_id: Option<LessonId>,
    },

    /// Unmapped key answered by the category sweep
    Sweep { category: Category },
}

impl ResolutionSource {
    /// Category that supplied the content
    pub fn category(&self) -> Category {
        match self {
            ResolutionSource::Mapped { category, .. } | ResolutionSource::Sweep { category } => {
                *category
            }
        }
    }
}

/// Resolved content plus provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Normalized checklist item key
    pub item: String,

    pub source: ResolutionSource,

    pub record: ContentRecord,
}

/// Registry of checklist item mappings and category providers
#[derive(Debug)]
pub struct ContentRegistry {
    mappings: Cow<'static, MappingTable>,
    providers: ProviderSet,
}

impl ContentRegistry {
    /// Create a registry over an owned mapping table
    pub fn new(mappings: MappingTable, providers: ProviderSet) -> Self {
        Self {
            mappings: Cow::Owned(mappings),
            providers,
        }
    }

    /// Create a registry over the built-in mapping table
    pub fn with_builtin(providers: ProviderSet) -> Self {
        Self {
            mappings: Cow::Borrowed(MappingTable::builtin()),
            providers,
        }
    }

    /// Load providers from a content pack directory and, when given, an
    /// external mapping table in place of the built-in one
    pub async fn load(content_dir: &Path, mappings_file: Option<&Path>) -> Result<Self> {
        let providers = ProviderSet::load(content_dir).await?;

        let registry = match mappings_file {
            Some(path) => Self::new(MappingTable::load(path).await?, providers),
            None => Self::with_builtin(providers),
        };

        info!(
            content_dir = %content_dir.display(),
            mappings = registry.mappings.len(),
            "Registry loaded"
        );
        Ok(registry)
    }

    pub fn mappings(&self) -> &MappingTable {
        &self.mappings
    }

    pub fn providers(&self) -> &ProviderSet {
        &self.providers
    }

    /// Ask one category's provider for a key, passing the result through.
    pub fn resolve_by_category(&self, category: Category, key: &str) -> Option<ContentRecord> {
        self.providers.provider(category).lookup(key)
    }

    /// Resolve a checklist item and report how it was found.
    pub fn resolve_detailed(&self, item_key: &str) -> Option<Resolution> {
        let item = normalize(item_key);

        if let Some(entry) = self.mappings.get(&item) {
            debug!(%item, category = %entry.category, key = %entry.key, "Mapped checklist item");
            let Some(record) = self.resolve_by_category(entry.category, &entry.key) else {
                debug!(%item, category = %entry.category, key = %entry.key, "Mapped content missing");
                return None;
            };

            return Some(Resolution {
                item,
                source: ResolutionSource::Mapped {
                    category: entry.category,
                    key: entry.key.clone(),
                    lesson_id: entry.lesson_id.clone(),
                },
                record,
            });
        }

        for category in Category::ALL {
            if let Some(record) = self.resolve_by_category(category, &item) {
                debug!(%item, %category, "Resolved by category sweep");
                return Some(Resolution {
                    item,
                    source: ResolutionSource::Sweep { category },
                    record,
                });
            }
        }

        debug!(%item, "No content for checklist item");
        None
    }

    /// Resolve a checklist item to its content
    pub fn resolve_item(&self, item_key: &str) -> Option<ContentRecord> {
        self.resolve_detailed(item_key).map(|resolution| resolution.record)
    }

    /// Brief text for a checklist item
    pub fn brief(&self, item_key: &str) -> Option<String> {
        self.resolve_item(item_key).map(|record| record.brief)
    }

    /// Academy links for a checklist item
    pub fn links(&self, item_key: &str) -> Option<Vec<AcademyLink>> {
        self.resolve_item(item_key).map(|record| record.academy_links)
    }

    /// Whether a checklist item resolves to any content
    pub fn has_content(&self, item_key: &str) -> bool {
        self.resolve_item(item_key).is_some()
    }

    /// Mapped checklist item keys in a category, in table order
    pub fn items_in_category(&self, category: Category) -> Vec<String> {
        self.mappings
            .iter()
            .filter(|(_, entry)| entry.category == category)
            .map(|(item, _)| item.to_string())
            .collect()
    }

    /// The mapping entry for a checklist item, if it is mapped
    pub fn mapping_of(&self, item_key: &str) -> Option<&MappingEntry> {
        self.mappings.get(&normalize(item_key))
    }

    /// Mapped category of a checklist item (mapping table only)
    pub fn category_of(&self, item_key: &str) -> Option<Category> {
        self.mapping_of(item_key).map(|entry| entry.category)
    }

    /// Mapped lesson id of a checklist item (mapping table only)
    pub fn lesson_id_of(&self, item_key: &str) -> Option<&LessonId> {
        self.mapping_of(item_key)?.lesson_id.as_ref()
    }

    /// Report mappings whose provider lacks the mapped key
    pub fn audit(&self) -> AuditReport {
        AuditReport {
            dangling: audit::dangling_mappings(self),
            ambiguous: Vec::new(),
        }
    }

    /// Like [`audit`](Self::audit), also reporting which of `keys` would be
    /// answered by more than one category during the sweep
    pub fn audit_keys<I, S>(&self, keys: I) -> AuditReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        AuditReport {
            dangling: audit::dangling_mappings(self),
            ambiguous: audit::ambiguous_keys(self, keys),
        }
    }
}
