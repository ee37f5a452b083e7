//! Core types used throughout the project.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Locale key → (translation key → translation text).
///
/// Outer keys are expected in [`LocaleKey`] form (`en`, `en_US`). Keys in any
/// other shape are kept as data but never match a [`Locale`].
pub type TranslationTable = HashMap<String, HashMap<String, String>>;

/// Language codes whose script is written right-to-left.
///
/// `ji` is the withdrawn ISO 639 code for Yiddish, still seen in the wild.
const RTL_LANGUAGES: &[&str] = &["ar", "fa", "he", "ur", "yi", "ji"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleParseError {
    #[error("Locale string is empty")]
    Empty,

    #[error("Invalid language code '{0}': expected 2 or 3 ASCII letters")]
    InvalidLanguage(String),

    #[error("Invalid region code '{0}': expected 2 ASCII letters or 3 digits")]
    InvalidRegion(String),

    #[error("Unexpected trailing subtag '{0}'")]
    TrailingSubtag(String),
}

/// A language/region pair such as `("en", Some("US"))`.
///
/// Fields are stored verbatim. Use [`str::parse`] to get the normalized
/// casing (`en_US`) that translation tables are keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    #[must_use]
    pub fn new(language: impl Into<String>, region: Option<&str>) -> Self {
        Self { language: language.into(), region: region.map(String::from) }
    }

    #[must_use]
    pub fn language_only(language: impl Into<String>) -> Self {
        Self { language: language.into(), region: None }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Table key for this locale: `language` or `language_REGION`.
    #[must_use]
    pub fn key(&self) -> LocaleKey {
        LocaleKey::from(self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new("en", Some("US"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}_{region}", self.language),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Parses `en`, `en_US`, `en-us` and friends into normalized casing.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(LocaleParseError::Empty);
        }

        let mut parts = trimmed.split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(LocaleParseError::InvalidLanguage(language.to_string()));
        }

        let region = match parts.next() {
            None => None,
            Some(region) => {
                let is_alpha = region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic());
                let is_numeric = region.len() == 3 && region.chars().all(|c| c.is_ascii_digit());
                if !is_alpha && !is_numeric {
                    return Err(LocaleParseError::InvalidRegion(region.to_string()));
                }
                Some(region.to_ascii_uppercase())
            }
        };

        if let Some(rest) = parts.next() {
            return Err(LocaleParseError::TrailingSubtag(rest.to_string()));
        }

        Ok(Self { language: language.to_ascii_lowercase(), region })
    }
}

/// String form of a [`Locale`] used to index a [`TranslationTable`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleKey(String);

impl LocaleKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Locale> for LocaleKey {
    fn from(locale: &Locale) -> Self {
        Self(locale.to_string())
    }
}

impl AsRef<str> for LocaleKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocaleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Script direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    /// Classifies by language code only; the region is ignored.
    #[must_use]
    pub fn for_locale(locale: &Locale) -> Self {
        if RTL_LANGUAGES.contains(&locale.language()) { Self::Rtl } else { Self::Ltr }
    }

    #[must_use]
    pub const fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
