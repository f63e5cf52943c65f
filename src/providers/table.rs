//! Table-backed content provider.
//!
//! Content files are YAML mappings from content key to record:
//!
//! ```yaml
//! weather_window:
//!   title: Weather window
//!   brief: Pick a departure time with steady breeze and no fronts.
//!   academy_links:
//!     - title: Reading a forecast
//!       url: /academy/weather/forecast
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use super::ContentProvider;
use crate::domain::{Category, ContentRecord};

/// Path of a category's content file inside a content pack directory
pub fn category_file(dir: &Path, category: Category) -> PathBuf {
    dir.join(format!("{}.yaml", category.as_str()))
}

/// In-memory key → record table
#[derive(Debug, Clone, Default)]
pub struct TableProvider {
    entries: HashMap<String, ContentRecord>,
}

impl TableProvider {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        let entries: Option<HashMap<String, ContentRecord>> =
            serde_yaml::from_str(content).context("Failed to parse content YAML")?;
        Ok(Self {
            entries: entries.unwrap_or_default(),
        })
    }

    /// Load a table from a YAML file
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read content file: {}", path.display()))?;

        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to load content file: {}", path.display()))
    }

    /// Add a record
    pub fn insert(&mut self, key: impl Into<String>, record: ContentRecord) {
        self.entries.insert(key.into(), record);
    }

    /// Add a record (builder style)
    pub fn with(mut self, key: impl Into<String>, record: ContentRecord) -> Self {
        self.insert(key, record);
        self
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, ContentRecord)> for TableProvider {
    fn from_iter<I: IntoIterator<Item = (String, ContentRecord)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl ContentProvider for TableProvider {
    fn lookup(&self, key: &str) -> Option<ContentRecord> {
        self.entries.get(key).cloned()
    }
}
