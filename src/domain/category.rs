//! Content categories.
//!
//! Every piece of learning content belongs to exactly one of six fixed
//! categories. The set is closed; there is no "other" bucket.

use serde::{Deserialize, Serialize};

/// Category of learning content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Forecasts, weather windows, sea state
    Weather,

    /// Starts, mark roundings, boat-on-boat tactics
    Tactics,

    /// Safety gear, sails, boat equipment
    Equipment,

    /// Racing rules and protests
    Rules,

    /// Crew roles and communication
    Crew,

    /// Mast tune and rig setting
    Rig,
}

impl Category {
    /// All categories, in fallback sweep order.
    pub const ALL: [Category; 6] = [
        Category::Weather,
        Category::Tactics,
        Category::Equipment,
        Category::Rules,
        Category::Crew,
        Category::Rig,
    ];

    /// Lower-case name, as used in mapping and content files
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Weather => "weather",
            Category::Tactics => "tactics",
            Category::Equipment => "equipment",
            Category::Rules => "rules",
            Category::Crew => "crew",
            Category::Rig => "rig",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "weather" => Ok(Category::Weather),
            "tactics" => Ok(Category::Tactics),
            "equipment" => Ok(Category::Equipment),
            "rules" => Ok(Category::Rules),
            "crew" => Ok(Category::Crew),
            "rig" | "rig_setting" | "rig-setting" => Ok(Category::Rig),
            _ => anyhow::bail!("Unknown category: {}", s),
        }
    }
}
