//! Checklist item → content mapping table.
//!
//! The table is keyed by normalized checklist item key and keeps insertion
//! order so category listings come out in the order the table was authored.
//!
//! # File format
//!
//! An externalized table is a YAML sequence of rows:
//!
//! ```yaml
//! - item: check_forecast
//!   category: weather
//!   key: weather_window
//!   lesson_id: lesson-13-1-1
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use super::builtin::BUILTIN_MAPPINGS;
use super::error::RegistryError;
use super::normalize::normalize;
use crate::domain::{Category, LessonId};

/// Process-wide built-in table (built once on first use)
static BUILTIN: OnceLock<MappingTable> = OnceLock::new();

/// Where a checklist item's content lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    /// Category whose provider holds the content
    pub category: Category,

    /// Content key inside that category (may differ from the item key)
    pub key: String,

    /// Deep link into the lesson system
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<LessonId>,
}

impl MappingEntry {
    pub fn new(category: Category, key: impl Into<String>) -> Self {
        Self {
            category,
            key: key.into(),
            lesson_id: None,
        }
    }

    /// Set the lesson id
    pub fn with_lesson(mut self, lesson_id: impl Into<LessonId>) -> Self {
        self.lesson_id = Some(lesson_id.into());
        self
    }
}

/// Raw row schema for mapping files
#[derive(Debug, Clone, Deserialize)]
struct MappingRow {
    item: String,
    category: String,
    key: String,
    #[serde(default)]
    lesson_id: Option<String>,
}

/// Read-only table of checklist item mappings
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    rows: Vec<(String, MappingEntry)>,
    by_item: HashMap<String, usize>,
}

impl MappingTable {
    /// The built-in table compiled into the crate
    pub fn builtin() -> &'static MappingTable {
        BUILTIN.get_or_init(|| {
            Self::from_entries(BUILTIN_MAPPINGS.iter().map(|row| {
                let mut entry = MappingEntry::new(row.category, row.key);
                entry.lesson_id = row.lesson_id.map(LessonId::from);
                (row.item, entry)
            }))
        })
    }

    /// Build a table, keeping the first entry for each normalized item key.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, MappingEntry)>,
    {
        let mut table = Self::default();
        for (item, entry) in entries {
            let item = normalize(item.as_ref());
            if table.by_item.contains_key(&item) {
                debug!(%item, "Ignoring duplicate mapping");
                continue;
            }
            table.push(item, entry);
        }
        table
    }

    /// Build a table, rejecting duplicate normalized item keys.
    pub fn try_from_entries<K, I>(entries: I) -> Result<Self, RegistryError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, MappingEntry)>,
    {
        let mut table = Self::default();
        for (item, entry) in entries {
            let item = normalize(item.as_ref());
            if table.by_item.contains_key(&item) {
                return Err(RegistryError::DuplicateMapping(item));
            }
            table.push(item, entry);
        }
        Ok(table)
    }

    /// Parse a mapping file's contents
    pub fn from_yaml_str(content: &str) -> Result<Self, RegistryError> {
        let rows: Vec<MappingRow> = serde_yaml::from_str(content)?;

        let entries = rows
            .into_iter()
            .map(|row| {
                let category = row.category.parse::<Category>().map_err(|_| {
                    RegistryError::UnknownCategory {
                        item: row.item.clone(),
                        category: row.category.clone(),
                    }
                })?;
                let entry = MappingEntry {
                    category,
                    key: row.key,
                    lesson_id: row.lesson_id.map(LessonId::new),
                };
                Ok((row.item, entry))
            })
            .collect::<Result<Vec<_>, RegistryError>>()?;

        Self::try_from_entries(entries)
    }

    /// Load a mapping file from disk
    pub async fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| RegistryError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let table = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), entries = table.len(), "Loaded mapping table");
        Ok(table)
    }

    fn push(&mut self, item: String, entry: MappingEntry) {
        self.by_item.insert(item.clone(), self.rows.len());
        self.rows.push((item, entry));
    }

    /// Get the entry for an already-normalized item key
    pub fn get(&self, item: &str) -> Option<&MappingEntry> {
        self.by_item.get(item).map(|&idx| &self.rows[idx].1)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappingEntry)> {
        self.rows.iter().map(|(item, entry)| (item.as_str(), entry))
    }

    /// Get the number of mapped items
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
