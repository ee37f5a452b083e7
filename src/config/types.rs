use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::plural::PluralMode;
use crate::resolver::TranslationResolver;
use crate::types::{
    Locale,
    LocaleParseError,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "translationFiles.includePatterns[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid locale in configuration: {0}")]
    Locale(#[from] LocaleParseError),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Locale activated after translations are loaded, if the table has it.
    pub default_locale: String,

    /// Consulted when the active locale lacks a key. Not checked against
    /// the table.
    pub fallback_locale: Option<String>,

    pub plural_mode: PluralMode,

    /// Joins nested JSON object keys into flat translation keys.
    pub key_separator: String,

    pub translation_files: TranslationFilesConfig,

    /// Excluded from the workspace walk entirely.
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
}

impl I18nSettings {
    /// # Errors
    /// - Unparsable locale
    /// - Empty separator
    /// - Missing or invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.default_locale.parse::<Locale>() {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("'{}' is not a locale ({e}). Example: \"en_US\"", self.default_locale),
            ));
        }

        if let Some(fallback) = &self.fallback_locale
            && let Err(e) = fallback.parse::<Locale>()
        {
            errors.push(ValidationError::new(
                "fallbackLocale",
                format!("'{fallback}' is not a locale ({e}). Example: \"en\", or remove this field"),
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.translation_files.include_patterns.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.includePatterns",
                "At least one pattern is required. Example: [\"**/locales/**/*.json\"]",
            ));
        }

        let pattern_groups = [
            ("translationFiles.includePatterns", &self.translation_files.include_patterns),
            ("translationFiles.excludePatterns", &self.translation_files.exclude_patterns),
            ("excludePatterns", &self.exclude_patterns),
        ];
        for (field, patterns) in pattern_groups {
            for (index, pattern) in patterns.iter().enumerate() {
                if let Err(e) = globset::Glob::new(pattern) {
                    errors.push(ValidationError::new(
                        format!("{field}[{index}]"),
                        format!("Invalid glob pattern '{pattern}': {e}"),
                    ));
                }
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Applies locale and plural settings to `resolver`.
    ///
    /// Load translations first: the default locale is only accepted when
    /// the table has it. Returns whether it was accepted.
    ///
    /// # Errors
    /// Returns error if a configured locale cannot be parsed.
    pub fn apply_to(&self, resolver: &mut TranslationResolver) -> Result<bool, ConfigError> {
        resolver.set_plural_mode(self.plural_mode);

        if let Some(fallback) = &self.fallback_locale {
            resolver.set_fallback_locale(fallback.parse()?);
        }

        let default_locale: Locale = self.default_locale.parse()?;
        let accepted = resolver.set_locale(default_locale);
        if !accepted {
            tracing::warn!(
                default_locale = %self.default_locale,
                "Default locale has no translations, keeping {}",
                resolver.locale()
            );
        }

        Ok(accepted)
    }
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self {
            include_patterns: vec!["**/{locales,translations,i18n,lang}/**/*.json".to_string()],
            exclude_patterns: Vec::new(),
        }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: "en_US".to_string(),
            fallback_locale: None,
            plural_mode: PluralMode::default(),
            key_separator: ".".to_string(),
            translation_files: TranslationFilesConfig::default(),
            exclude_patterns: vec!["node_modules/**".to_string(), "target/**".to_string()],
        }
    }
}
