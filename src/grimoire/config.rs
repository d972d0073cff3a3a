use crate::catalog::DEFAULT_SELECTION_KEY;
use crate::error::{GrimoireError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CARDS_FILE: &str = "./public/cards.json";

/// Configuration for grimoire, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrimoireConfig {
    /// JSON file holding the card collection
    #[serde(default = "default_cards_file")]
    pub cards_file: String,

    /// Storage key the selection is persisted under
    #[serde(default = "default_selection_key")]
    pub selection_key: String,
}

fn default_cards_file() -> String {
    DEFAULT_CARDS_FILE.to_string()
}

fn default_selection_key() -> String {
    DEFAULT_SELECTION_KEY.to_string()
}

impl Default for GrimoireConfig {
    fn default() -> Self {
        Self {
            cards_file: default_cards_file(),
            selection_key: default_selection_key(),
        }
    }
}

/// A settable configuration entry, named on the command line in kebab case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    CardsFile,
    SelectionKey,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::CardsFile, ConfigKey::SelectionKey];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::CardsFile => "cards-file",
            ConfigKey::SelectionKey => "selection-key",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigKey {
    type Err = GrimoireError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s.trim())
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(ConfigKey::as_str).collect();
                GrimoireError::Config(format!(
                    "Unknown config key: {} (known: {})",
                    s,
                    known.join(", ")
                ))
            })
    }
}

impl GrimoireConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(GrimoireError::Io)?;
        let config: GrimoireConfig =
            serde_json::from_str(&content).map_err(GrimoireError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(GrimoireError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(GrimoireError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(GrimoireError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::CardsFile => &self.cards_file,
            ConfigKey::SelectionKey => &self.selection_key,
        }
    }

    /// Both entries name something (a file, a storage key), so blank values are rejected.
    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(GrimoireError::Config(format!("{} cannot be empty", key)));
        }
        match key {
            ConfigKey::CardsFile => self.cards_file = value.to_string(),
            ConfigKey::SelectionKey => self.selection_key = value.to_string(),
        }
        Ok(())
    }
}
