use crate::core::config::AppConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Creates a default configuration file with example content at the default location
pub fn setup() -> Result<()> {
    let path = AppConfig::default_config_path()?;
    setup_at_path(path)
}

/// Creates a default configuration file with example content at the specified path
pub fn setup_at_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Include the example config as a string literal in the binary
    let default_config = include_str!("../../docs/example_config.yaml");

    std::fs::write(path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_setup_creates_config_file() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");

        setup_at_path(&config_path)?;

        assert!(config_path.exists());
        let written = fs::read_to_string(&config_path)?;
        let parsed: AppConfig = serde_yaml::from_str(&written)?;
        assert_eq!(parsed.catalog.seed, 42);
        assert_eq!(parsed.catalog.size, 24);
        Ok(())
    }

    #[test]
    fn test_setup_refuses_to_overwrite() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "catalog:\n  seed: 1\n  size: 2\n")?;

        let result = setup_at_path(&config_path);
        assert!(result.is_err());

        // Existing content is untouched
        let parsed: AppConfig = serde_yaml::from_str(&fs::read_to_string(&config_path)?)?;
        assert_eq!(parsed.catalog.seed, 1);
        Ok(())
    }
}
