//! Translation file input definitions

use std::collections::{
    HashMap,
    HashSet,
};
use std::path::{
    Path,
    PathBuf,
};
use std::sync::LazyLock;

use serde_json::Value;
use thiserror::Error;

use crate::types::Locale;

/// ISO 639 language codes recognised in translation file paths.
static LANGUAGE_CODES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "af", "am", "ar", "az", "be", "bg", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en",
        "eo", "es", "et", "eu", "fa", "fi", "fil", "fo", "fr", "ga", "gl", "gu", "he", "hi", "hr",
        "hu", "hy", "id", "is", "it", "ja", "ji", "ka", "kk", "km", "kn", "ko", "kok", "ky", "lo",
        "lt", "lv", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "nb", "ne", "nl", "nn", "no",
        "pa", "pl", "ps", "pt", "qu", "ro", "ru", "sa", "si", "sk", "sl", "sq", "sr", "sv", "sw",
        "syr", "ta", "te", "th", "tl", "tr", "tt", "uk", "ur", "uz", "vi", "xh", "yi", "zh", "zu",
    ]
    .into_iter()
    .collect()
});

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read translation file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not detect a locale from path {0:?}")]
    UnknownLocale(PathBuf),
}

/// One parsed translation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    pub locale: Locale,
    pub file_path: PathBuf,
    /// Flattened translation key map (e.g., "common.hello" -> "Hello").
    pub keys: HashMap<String, String>,
}

/// Detect the locale from a file path.
///
/// Splits the path by separators and '.', then searches backwards for a
/// part that parses as a locale with a known language code.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `messages/ja-JP.json` → `ja_JP`
/// - `translations/en_us/common.json` → `en_US`
#[must_use]
pub fn detect_locale_from_path(file_path: &Path) -> Option<Locale> {
    let path_str = file_path.to_string_lossy();

    path_str.split(['/', '\\', '.']).rev().find_map(|part| {
        part.parse::<Locale>().ok().filter(|locale| LANGUAGE_CODES.contains(locale.language()))
    })
}

/// Flatten nested JSON object into separator-joined key map.
///
/// Arrays are indexed as `key[0]`; numbers, booleans and null are kept as
/// their JSON text.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use i18n_resolver::input::translation::flatten_json;
///
/// let json = json!({
///     "common": {
///         "hello": "Hello",
///         "goodbye": "Goodbye"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("common.hello"), Some(&"Hello".to_string()));
/// assert_eq!(flattened.get("common.goodbye"), Some(&"Goodbye".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// Load a translation file found under `workspace_root`.
///
/// The locale is detected from the part of the path below
/// `workspace_root`, so directories above the workspace never name it.
///
/// # Errors
/// Returns error if the locale cannot be detected from the path, or the
/// file cannot be read or parsed.
pub fn load_translation_file(
    file_path: &Path,
    workspace_root: &Path,
    separator: &str,
) -> Result<TranslationFile, LoadError> {
    let relative = file_path.strip_prefix(workspace_root).unwrap_or(file_path);
    let locale = detect_locale_from_path(relative)
        .ok_or_else(|| LoadError::UnknownLocale(file_path.to_path_buf()))?;

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| LoadError::Read { path: file_path.to_path_buf(), source })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|source| LoadError::Parse { path: file_path.to_path_buf(), source })?;

    let keys = flatten_json(&json, separator, None);
    tracing::debug!(path = ?file_path, %locale, keys = keys.len(), "Loaded translation file");

    Ok(TranslationFile { locale, file_path: file_path.to_path_buf(), keys })
}
