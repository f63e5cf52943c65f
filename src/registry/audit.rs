//! Read-only consistency checks between the mapping table and providers.
//!
//! Nothing here changes how items resolve. The report only makes two known
//! quirks visible: mappings whose provider lacks the mapped key (these resolve
//! to nothing), and unmapped keys that more than one category answers (the
//! sweep order silently picks the first).

use std::collections::BTreeSet;

use serde::Serialize;

use super::{normalize, ContentRegistry};
use crate::domain::Category;

/// A mapping entry whose provider has no content for the mapped key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingMapping {
    pub item: String,
    pub category: Category,
    pub key: String,
}

/// An unmapped key answered by several categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmbiguousKey {
    pub key: String,

    /// Every answering category, in sweep order; the first one wins
    pub categories: Vec<Category>,
}

impl AmbiguousKey {
    /// The category the sweep resolves this key to
    pub fn winner(&self) -> Option<Category> {
        self.categories.first().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub dangling: Vec<DanglingMapping>,
    pub ambiguous: Vec<AmbiguousKey>,
}

impl AuditReport {
    /// True when no issues were found
    pub fn is_clean(&self) -> bool {
        self.dangling.is_empty() && self.ambiguous.is_empty()
    }
}

pub(super) fn dangling_mappings(registry: &ContentRegistry) -> Vec<DanglingMapping> {
    registry
        .mappings()
        .iter()
        .filter(|(_, entry)| registry.resolve_by_category(entry.category, &entry.key).is_none())
        .map(|(item, entry)| DanglingMapping {
            item: item.to_string(),
            category: entry.category,
            key: entry.key.clone(),
        })
        .collect()
}

pub(super) fn ambiguous_keys<I, S>(registry: &ContentRegistry, keys: I) -> Vec<AmbiguousKey>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = BTreeSet::new();
    let mut ambiguous = Vec::new();

    for key in keys {
        let key = normalize(key.as_ref());
        // Mapped items never reach the sweep
        if registry.mappings().get(&key).is_some() || !seen.insert(key.clone()) {
            continue;
        }

        let categories: Vec<Category> = Category::ALL
            .into_iter()
            .filter(|&category| registry.resolve_by_category(category, &key).is_some())
            .collect();

        if categories.len() > 1 {
            ambiguous.push(AmbiguousKey { key, categories });
        }
    }

    ambiguous
}
