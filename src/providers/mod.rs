//! Category content providers.
//!
//! Each of the six categories is backed by one provider exposing a single
//! pure lookup. The registry never looks inside a provider; it only calls
//! `lookup` and passes the result through.

pub mod table;

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::{Category, ContentRecord};

// Re-export the table-backed provider
pub use table::TableProvider;

/// Trait for category content providers
pub trait ContentProvider: Send + Sync {
    /// Look up content by its category-internal key.
    ///
    /// `None` means "no content for this key", never an error.
    fn lookup(&self, key: &str) -> Option<ContentRecord>;
}

impl<F> ContentProvider for F
where
    F: Fn(&str) -> Option<ContentRecord> + Send + Sync,
{
    fn lookup(&self, key: &str) -> Option<ContentRecord> {
        self(key)
    }
}

/// Provider with no content
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyProvider;

impl ContentProvider for EmptyProvider {
    fn lookup(&self, _key: &str) -> Option<ContentRecord> {
        None
    }
}

/// One provider per category
pub struct ProviderSet {
    weather: Box<dyn ContentProvider>,
    tactics: Box<dyn ContentProvider>,
    equipment: Box<dyn ContentProvider>,
    rules: Box<dyn ContentProvider>,
    crew: Box<dyn ContentProvider>,
    rig: Box<dyn ContentProvider>,
}

impl Default for ProviderSet {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl std::fmt::Debug for ProviderSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderSet").finish_non_exhaustive()
    }
}

impl ProviderSet {
    /// Start building a provider set; unset categories have no content
    pub fn builder() -> ProviderSetBuilder {
        ProviderSetBuilder::default()
    }

    /// The provider responsible for `category`
    pub fn provider(&self, category: Category) -> &dyn ContentProvider {
        match category {
            Category::Weather => self.weather.as_ref(),
            Category::Tactics => self.tactics.as_ref(),
            Category::Equipment => self.equipment.as_ref(),
            Category::Rules => self.rules.as_ref(),
            Category::Crew => self.crew.as_ref(),
            Category::Rig => self.rig.as_ref(),
        }
    }

    /// Load a content pack directory.
    ///
    /// Each category is read from `<dir>/<category>.yaml`. Missing files leave
    /// that category empty; unreadable or malformed files are an error.
    pub async fn load(dir: &Path) -> Result<Self> {
        let mut builder = Self::builder();

        for category in Category::ALL {
            let path = table::category_file(dir, category);
            let exists = fs::try_exists(&path)
                .await
                .with_context(|| format!("Failed to check content file: {}", path.display()))?;
            if !exists {
                warn!(%category, path = %path.display(), "No content file for category");
                continue;
            }

            let provider = TableProvider::load(&path).await?;
            debug!(%category, entries = provider.len(), "Loaded category content");
            builder = builder.with(category, provider);
        }

        Ok(builder.build())
    }
}

/// Builder for [`ProviderSet`]
#[derive(Default)]
pub struct ProviderSetBuilder {
    weather: Option<Box<dyn ContentProvider>>,
    tactics: Option<Box<dyn ContentProvider>>,
    equipment: Option<Box<dyn ContentProvider>>,
    rules: Option<Box<dyn ContentProvider>>,
    crew: Option<Box<dyn ContentProvider>>,
    rig: Option<Box<dyn ContentProvider>>,
}

impl ProviderSetBuilder {
    /// Set the provider for a category, replacing any earlier one
    pub fn with(mut self, category: Category, provider: impl ContentProvider + 'static) -> Self {
        let slot = match category {
            Category::Weather => &mut self.weather,
            Category::Tactics => &mut self.tactics,
            Category::Equipment => &mut self.equipment,
            Category::Rules => &mut self.rules,
            Category::Crew => &mut self.crew,
            Category::Rig => &mut self.rig,
        };
        *slot = Some(Box::new(provider));
        self
    }

    pub fn build(self) -> ProviderSet {
        fn or_empty(provider: Option<Box<dyn ContentProvider>>) -> Box<dyn ContentProvider> {
            provider.unwrap_or_else(|| Box::new(EmptyProvider))
        }

        ProviderSet {
            weather: or_empty(self.weather),
            tactics: or_empty(self.tactics),
            equipment: or_empty(self.equipment),
            rules: or_empty(self.rules),
            crew: or_empty(self.crew),
            rig: or_empty(self.rig),
        }
    }
}
