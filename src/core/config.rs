use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Path to the currency table (JSON).
    pub currencies: PathBuf,
    /// Path to the rate table (JSON).
    pub rates: PathBuf,
    /// Decimal places for printed amounts. Falls back to the target
    /// currency's minor unit when unset.
    #[serde(default)]
    pub precision: Option<u32>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(currencies: impl Into<PathBuf>, rates: impl Into<PathBuf>) -> Self {
        Self {
            currencies: currencies.into(),
            rates: rates.into(),
            precision: None,
            base_dir: None,
        }
    }

    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "currcvt")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn currencies_path(&self) -> PathBuf {
        self.resolve(&self.currencies)
    }

    pub fn rates_path(&self) -> PathBuf {
        self.resolve(&self.rates)
    }

    // Relative table paths are relative to the config file, not the working directory.
    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
currencies: "tables/curr-codes.json"
rates: "/var/lib/currcvt/curr-rates.json"
precision: 4
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.currencies, PathBuf::from("tables/curr-codes.json"));
        assert_eq!(config.rates, PathBuf::from("/var/lib/currcvt/curr-rates.json"));
        assert_eq!(config.precision, Some(4));

        let without_precision: AppConfig =
            serde_yaml::from_str("currencies: a.json\nrates: b.json\n").unwrap();
        assert!(without_precision.precision.is_none());
    }

    #[test]
    fn test_missing_tables_fail_to_parse() {
        let result: Result<AppConfig, _> = serde_yaml::from_str("precision: 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_relative_paths_resolve_against_config_dir() -> Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(
            &config_path,
            "currencies: curr-codes.json\nrates: /absolute/curr-rates.json\n",
        )?;

        let config = AppConfig::load_from_path(&config_path)?;
        assert_eq!(config.currencies_path(), temp_dir.path().join("curr-codes.json"));
        assert_eq!(config.rates_path(), PathBuf::from("/absolute/curr-rates.json"));
        Ok(())
    }

    #[test]
    fn test_unloaded_config_keeps_paths() {
        let config = AppConfig::new("codes.json", "rates.json");
        assert_eq!(config.currencies_path(), PathBuf::from("codes.json"));
        assert_eq!(config.rates_path(), PathBuf::from("rates.json"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::load_from_path("/nonexistent/currcvt/config.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/currcvt/config.yaml"));
    }
}
