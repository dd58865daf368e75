//! Game configuration stored as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::dictionary::DEFAULT_LANGUAGE;

/// Game configuration (TOML).
///
/// Every field is optional in the file; missing fields fall back to the
/// embedded word lists and English.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Language tag passed to the dictionary on every lookup.
    pub language: String,

    /// Plain-text list of root words. Uses the embedded list when unset.
    pub start_words: Option<PathBuf>,

    /// Plain-text dictionary. Uses the embedded dictionary when unset.
    pub dictionary: Option<PathBuf>,

    /// Seed for root-word selection, for reproducible rounds.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            start_words: None,
            dictionary: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(anyhow!("language must be a non-empty tag"));
        }
        Ok(())
    }
}

/// Parse and validate config from TOML text.
pub fn parse_config(contents: &str) -> Result<GameConfig> {
    let cfg: GameConfig = toml::from_str(contents).context("parse config toml")?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `GameConfig::default()`.
pub fn load_config(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("load {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.language, "en");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = parse_config("seed = 7\n").expect("parse");
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.language, "en");
        assert_eq!(cfg.start_words, None);
    }

    #[test]
    fn full_file_loads() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "language = \"fr\"\nstart_words = \"roots.txt\"\ndictionary = \"mots.txt\"\n",
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.language, "fr");
        assert_eq!(cfg.start_words, Some(PathBuf::from("roots.txt")));
        assert_eq!(cfg.dictionary, Some(PathBuf::from("mots.txt")));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn empty_language_is_invalid() {
        assert!(parse_config("language = \"  \"\n").is_err());
    }

    #[test]
    fn malformed_toml_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "seed = \"not a number\"\n").expect("write");

        let err = load_config(&path).expect_err("should fail");
        assert!(format!("{err:#}").contains("config.toml"));
    }
}
