use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Class applied to a rendered content branch while its translation is dirty
pub const DEFAULT_DIRTY_CLASS: &str = "ve-ce-contentBranchNode-ll-dirty";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config in {config_path}: {reason}")]
    InvalidConfig { config_path: PathBuf, reason: String },
}

/// The two languages of a parallel translation, by language code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub lang1: String,
    pub lang2: String,
}

impl LanguagePair {
    pub fn new(lang1: impl Into<String>, lang2: impl Into<String>) -> Self {
        Self {
            lang1: lang1.into(),
            lang2: lang2.into(),
        }
    }

    /// Returns the other language of the pair, if `lang` belongs to it
    pub fn other(&self, lang: &str) -> Option<&str> {
        if lang == self.lang1 {
            Some(&self.lang2)
        } else if lang == self.lang2 {
            Some(&self.lang1)
        } else {
            None
        }
    }
}

/// How translation state is presented in the rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_dirty_class")]
    pub dirty_class: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            dirty_class: default_dirty_class(),
        }
    }
}

fn default_dirty_class() -> String {
    DEFAULT_DIRTY_CLASS.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub languages: LanguagePair,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    pub fn new(languages: LanguagePair) -> Self {
        Self {
            languages,
            display: DisplayConfig::default(),
        }
    }

    /// Checks the values serde cannot: two distinct, non-empty language
    /// codes and a usable class name.
    pub fn validate(&self) -> Result<(), String> {
        let LanguagePair { lang1, lang2 } = &self.languages;
        if lang1.trim().is_empty() || lang2.trim().is_empty() {
            return Err("language codes must not be empty".to_string());
        }
        if lang1 == lang2 {
            return Err(format!("both languages are '{lang1}'"));
        }
        let class = &self.display.dirty_class;
        if class.is_empty() || class.contains(char::is_whitespace) {
            return Err(format!("dirty_class '{class}' is not a single class name"));
        }
        Ok(())
    }

    /// Parses and validates TOML read from `config_path`.
    pub fn parse(content: &str, config_path: &Path) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;
        config
            .validate()
            .map_err(|reason| ConfigError::InvalidConfig {
                config_path: config_path.to_path_buf(),
                reason,
            })?;
        Ok(config)
    }

    /// Loads the config at `config_path`; a missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        match std::fs::read_to_string(config_path) {
            Ok(content) => Self::parse(&content, config_path).map(Some),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Writes the config, refusing values that would not load back.
    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        self.validate().map_err(anyhow::Error::msg)?;
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/ll-translate");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }
}
