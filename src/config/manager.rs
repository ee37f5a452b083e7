//! Holds the validated settings for a workspace.

use std::path::Path;

use super::{
    ConfigError,
    I18nSettings,
    loader,
};

#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    current_settings: I18nSettings,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: I18nSettings::default() }
    }

    /// Loads settings for a workspace.
    ///
    /// `config_path` overrides the `.i18n-resolver.json` lookup. Without
    /// either, defaults are used.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(
        &mut self,
        workspace_root: Option<&Path>,
        config_path: Option<&Path>,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let settings = match (config_path, workspace_root) {
            (Some(path), _) => loader::load_from_file(path)?,
            (None, Some(root)) => loader::load_from_workspace(root)?.unwrap_or_default(),
            (None, None) => I18nSettings::default(),
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &I18nSettings {
        &self.current_settings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().default_locale, "en_US");
    }

    #[rstest]
    fn test_load_settings_without_workspace() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None, None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().key_separator, ".");
    }

    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"keySeparator": "-"}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path()), None);

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().key_separator, "-");
    }

    #[rstest]
    fn test_load_settings_explicit_path_wins() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"keySeparator": "-"}"#).unwrap();
        let explicit = temp_dir.path().join("custom.json");
        fs::write(&explicit, r#"{"keySeparator": ":"}"#).unwrap();

        let mut manager = ConfigManager::new();
        manager.load_settings(Some(temp_dir.path()), Some(explicit.as_path())).unwrap();

        assert_eq!(manager.get_settings().key_separator, ":");
    }

    #[rstest]
    fn test_load_settings_invalid_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), r#"{"defaultLocale": "??"}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path()), None);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings().default_locale, "en_US");
    }
}
