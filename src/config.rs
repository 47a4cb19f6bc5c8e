use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_ROW_LIMIT: usize = 500;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AqcConfig {
    pub lang: Option<String>,
    pub timeout_secs: Option<u64>,
    pub row_limit: Option<usize>,
    pub ads_token: Option<String>,
}

impl AqcConfig {
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    pub fn row_limit(&self) -> usize {
        self.row_limit.unwrap_or(DEFAULT_ROW_LIMIT)
    }

    /// Parse either the TOML layout or the legacy layout, where the whole
    /// file is a single language code.
    pub fn parse(contents: &str) -> Result<Self> {
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        if !trimmed.contains('=') && !trimmed.contains(char::is_whitespace) {
            return Ok(Self {
                lang: Some(trimmed.to_string()),
                ..Self::default()
            });
        }
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }
}

/// `$AQC_CONFIG`, else `~/.aqc_config`.
pub fn default_config_path() -> PathBuf {
    if let Some(path) = std::env::var_os("AQC_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::home_dir().unwrap_or_default().join(".aqc_config")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<AqcConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config = AqcConfig::parse(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &AqcConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

/// Persist `lang` as the default language, keeping every other setting.
pub fn save_default_lang(path: Option<&Path>, lang: &str) -> Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    // A broken file is replaced rather than blocking the save.
    let mut config = match load_config(Some(&path)) {
        Ok(existing) => existing.unwrap_or_default(),
        Err(err) => {
            tracing::warn!("ignoring unreadable config {}: {}", path.display(), err);
            AqcConfig::default()
        }
    };
    config.lang = Some(lang.to_string());
    write_config(&path, &config)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_single_code() {
        let config = AqcConfig::parse("zh\n").unwrap();
        assert_eq!(config.lang.as_deref(), Some("zh"));
        assert_eq!(config.row_limit(), DEFAULT_ROW_LIMIT);
    }

    #[test]
    fn test_toml_layout() {
        let config = AqcConfig::parse("lang = \"en\"\ntimeout_secs = 5\nrow_limit = 20\n").unwrap();
        assert_eq!(config.lang.as_deref(), Some("en"));
        assert_eq!(config.timeout_secs(), 5);
        assert_eq!(config.row_limit(), 20);
    }

    #[test]
    fn test_empty_and_invalid() {
        assert_eq!(AqcConfig::parse("   ").unwrap(), AqcConfig::default());
        assert!(AqcConfig::parse("lang = [").is_err());
    }

    #[test]
    fn test_save_default_lang_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aqc_config");
        std::fs::write(&path, "timeout_secs = 7\n").unwrap();

        save_default_lang(Some(&path), "zh").unwrap();

        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.lang.as_deref(), Some("zh"));
        assert_eq!(config.timeout_secs(), 7);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("nope"))).unwrap().is_none());
    }
}
