use crate::error::{BookshelfError, Result};
use crate::model::DEFAULT_CATEGORY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// How the next book identifier is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdStrategy {
    /// One past the highest id ever issued or present; ids are never reused.
    #[default]
    Monotonic,
    /// One past the current collection size. Can hand out an id that is
    /// still in use once a book other than the last has been deleted.
    CollectionSize,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Monotonic => f.write_str("monotonic"),
            IdStrategy::CollectionSize => f.write_str("collection-size"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "monotonic" => Ok(IdStrategy::Monotonic),
            "collection-size" | "size" => Ok(IdStrategy::CollectionSize),
            other => Err(format!(
                "Invalid id strategy: {} (expected monotonic or collection-size)",
                other
            )),
        }
    }
}

/// Configuration for bookshelf, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Category given to books added without one
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Identifier assignment scheme for new books
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Start each session with the built-in seed dataset
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// Refuse books whose ISBN is already in the catalog
    #[serde(default)]
    pub unique_isbn: bool,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            id_strategy: IdStrategy::default(),
            seed: default_seed(),
            unique_isbn: false,
        }
    }
}

impl ShelfConfig {
    pub const KEYS: [&'static str; 4] = ["default-category", "id-strategy", "seed", "unique-isbn"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ShelfConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        tracing::info!(path = %config_path.display(), "saved config");
        Ok(())
    }

    /// Value of a config key, formatted for display
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-category" => Some(self.default_category.clone()),
            "id-strategy" => Some(self.id_strategy.to_string()),
            "seed" => Some(self.seed.to_string()),
            "unique-isbn" => Some(self.unique_isbn.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-category" => {
                if value.is_empty() {
                    return Err(BookshelfError::Config(
                        "default-category cannot be empty".to_string(),
                    ));
                }
                self.default_category = value.to_string();
            }
            "id-strategy" => {
                self.id_strategy = value.parse().map_err(BookshelfError::Config)?;
            }
            "seed" => self.seed = parse_bool(key, value)?,
            "unique-isbn" => self.unique_isbn = parse_bool(key, value)?,
            other => {
                return Err(BookshelfError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(BookshelfError::Config(format!(
            "Invalid value for {}: {} (expected true or false)",
            key, value
        ))),
    }
}
