use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Root application configuration, loaded from `~/.config/strata/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub vocab: VocabularyConfig,
}

/// Locations of the static vocabulary files the ingestion pipeline reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub ror_affiliations_file: String,
    pub msl_laboratories_file: String,
    pub resource_types_file: String,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vocab: VocabularyConfig::default(),
        }
    }
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        let vocab_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("strata")
            .join("vocab");

        Self {
            ror_affiliations_file: vocab_dir
                .join("ror_affiliations.json")
                .to_string_lossy()
                .to_string(),
            msl_laboratories_file: vocab_dir
                .join("msl_laboratories.json")
                .to_string_lossy()
                .to_string(),
            resource_types_file: vocab_dir
                .join("resource_types.json")
                .to_string_lossy()
                .to_string(),
        }
    }
}

// ─── Load / Save ───────────────────────────────────────────

impl AppConfig {
    /// Standard config file path: `~/.config/strata/config.toml`
    pub fn config_path() -> PathBuf {
        // Allow override via env var
        if let Ok(path) = std::env::var("STRATA_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("strata")
            .join("config.toml")
    }

    /// Load config from disk, falling back to defaults if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        Self::load_from(&path)
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_points_into_data_dir() {
        let config = AppConfig::default();
        assert!(config.vocab.ror_affiliations_file.ends_with("ror_affiliations.json"));
        assert!(config.vocab.msl_laboratories_file.ends_with("msl_laboratories.json"));
        assert!(config.vocab.resource_types_file.ends_with("resource_types.json"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(
            config.vocab.resource_types_file,
            AppConfig::default().vocab.resource_types_file
        );
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[vocab]\nror_affiliations_file = \"/srv/vocab/ror.json\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.vocab.ror_affiliations_file, "/srv/vocab/ror.json");
        assert!(config.vocab.msl_laboratories_file.ends_with("msl_laboratories.json"));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.vocab.resource_types_file = "/srv/vocab/types.json".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.vocab.resource_types_file, "/srv/vocab/types.json");
    }
}
