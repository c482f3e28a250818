use std::fs;
use std::path::Path;

use crate::model::config::AppConfig;

/// Error type for config reading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("could not parse config.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read config.toml from the data directory. A missing file yields the
/// default config; a malformed file is reported so the caller can log it
/// and fall back to defaults.
pub fn read_config(data_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = data_dir.join("config.toml");
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&text)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path()).unwrap();
        assert!(config.ui.colors.is_empty());
        assert!(config.ui.category_colors.is_empty());
    }

    #[test]
    fn parses_color_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r##"[ui.colors]
background = "#000000"

[ui.category_colors]
study = "#112233"
"##,
        )
        .unwrap();
        let config = read_config(dir.path()).unwrap();
        assert_eq!(config.ui.colors.get("background").unwrap(), "#000000");
        assert_eq!(config.ui.category_colors.get("study").unwrap(), "#112233");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "not [ toml").unwrap();
        assert!(read_config(dir.path()).is_err());
    }
}
