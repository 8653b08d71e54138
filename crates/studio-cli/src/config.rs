//! TOML configuration file.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use studio_codegen::GeneratorConfig;
use studio_core::DesignConfig;

/// Contents of a `studio.toml` file. Every section is optional.
///
/// ```toml
/// [generator]
/// default_screen_name = "FormScreen"
/// success_message = "Saved!"
///
/// [generator.style]
/// padding = 24
///
/// [design]
/// ttl_minutes = 120
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub generator: GeneratorConfig,
    pub design: DesignConfig,
}

impl StudioConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_path() {
        let config = StudioConfig::load(None).unwrap();
        assert_eq!(config, StudioConfig::default());
        assert_eq!(config.design.ttl_minutes, 60);
    }

    #[test]
    fn test_partial_toml() {
        let config = StudioConfig::from_toml(
            r#"
            [generator]
            success_message = "Saved!"

            [generator.style]
            padding = 24

            [design]
            ttl_minutes = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.generator.success_message, "Saved!");
        assert_eq!(config.generator.style.padding, 24);
        assert_eq!(config.generator.style.background_color, "#fff");
        assert_eq!(config.generator.default_screen_name, "MyScreen");
        assert_eq!(config.design.ttl_minutes, 120);
        assert_eq!(config.design.storage_key, "nativecn_studio");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[generator]\ndefault_screen_name = \"FormScreen\"").unwrap();

        let config = StudioConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.generator.default_screen_name, "FormScreen");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(StudioConfig::from_toml("[generator]\npadding = ").is_err());
        assert!(StudioConfig::load(Some(Path::new("/nonexistent/studio.toml"))).is_err());
    }
}
