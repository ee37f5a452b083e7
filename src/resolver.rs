//! Translation resolution: active locale → fallback locale → key as text.
//!
//! # Failure modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Key missing everywhere | The key itself is returned |
//! | `set_locale` with a locale absent from the table | Ignored, returns `false` |
//! | No fallback configured | Lookup stops after the active locale |
//! | No params | `@tokens` stay visible in the text |

use std::collections::{
    BTreeSet,
    HashMap,
};
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};

use crate::interpolate::interpolate;
use crate::plural::{
    PluralMode,
    plural_params,
    select_plural_key,
};
use crate::types::{
    Locale,
    TextDirection,
    TranslationTable,
};

/// Owns a translation table together with the active and fallback locale.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use i18n_resolver::{Locale, TranslationResolver};
///
/// let mut resolver = TranslationResolver::new();
/// resolver.set_translations(HashMap::from([
///     ("en_US".to_string(), HashMap::from([("hello".to_string(), "Hello @name".to_string())])),
///     ("es_ES".to_string(), HashMap::new()),
/// ]));
///
/// assert!(resolver.set_locale(Locale::new("es", Some("ES"))));
/// resolver.set_fallback_locale(Locale::new("en", Some("US")));
///
/// assert_eq!(resolver.resolve_with("hello", &[("name", "Ana")]), "Hello Ana");
/// assert_eq!(resolver.resolve("missing.key"), "missing.key");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranslationResolver {
    translations: TranslationTable,
    locale: Locale,
    fallback_locale: Option<Locale>,
    plural_mode: PluralMode,
}

impl TranslationResolver {
    /// Empty table, `en_US` active, no fallback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_plural_mode(plural_mode: PluralMode) -> Self {
        Self { plural_mode, ..Self::default() }
    }

    /// Replaces the whole table. Nothing is merged with the previous one.
    pub fn set_translations(&mut self, translations: TranslationTable) {
        tracing::debug!(locales = translations.len(), "Replacing translation table");
        self.translations = translations;
    }

    #[must_use]
    pub const fn translations(&self) -> &TranslationTable {
        &self.translations
    }

    /// Whether the table has an entry for `locale`, even an empty one.
    #[must_use]
    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.translations.contains_key(locale.key().as_str())
    }

    /// Activates `locale` if the table has an entry for it.
    ///
    /// Returns `false` and keeps the current locale otherwise.
    pub fn set_locale(&mut self, locale: Locale) -> bool {
        if !self.has_locale(&locale) {
            tracing::debug!(
                requested = %locale,
                current = %self.locale,
                "Locale not in translation table, keeping current locale"
            );
            return false;
        }

        self.locale = locale;
        true
    }

    /// Stores the fallback locale without checking the table.
    ///
    /// A fallback that is not (yet) in the table is simply never hit, so
    /// the fallback may be configured before translations are loaded.
    pub fn set_fallback_locale(&mut self, locale: Locale) {
        if !self.has_locale(&locale) {
            tracing::debug!(fallback = %locale, "Fallback locale not in translation table");
        }
        self.fallback_locale = Some(locale);
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    #[must_use]
    pub const fn fallback_locale(&self) -> Option<&Locale> {
        self.fallback_locale.as_ref()
    }

    #[must_use]
    pub const fn plural_mode(&self) -> PluralMode {
        self.plural_mode
    }

    pub const fn set_plural_mode(&mut self, plural_mode: PluralMode) {
        self.plural_mode = plural_mode;
    }

    /// Looks `key` up without any placeholder substitution.
    ///
    /// Returns `None` when neither the active nor the fallback locale has it.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.lookup_in(&self.locale, key).or_else(|| {
            self.fallback_locale.as_ref().and_then(|fallback| self.lookup_in(fallback, key))
        })
    }

    fn lookup_in(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.translations
            .get(locale.key().as_str())
            .and_then(|keys| keys.get(key))
            .map(String::as_str)
    }

    /// Resolves `key`, falling back to the key itself.
    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.lookup(key).unwrap_or(key).to_string()
    }

    /// Resolves `key` and substitutes `@name` tokens from `params`.
    ///
    /// Substitution also applies when the key itself is returned.
    #[must_use]
    pub fn resolve_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(self.lookup(key).unwrap_or(key), params)
    }

    /// Resolves the singular key when `count == 1`, the plural key otherwise.
    #[must_use]
    pub fn resolve_plural(
        &self,
        singular_key: &str,
        plural_key: &str,
        count: i64,
        params: &[(&str, &str)],
    ) -> String {
        let key = select_plural_key(singular_key, plural_key, count);
        let count_text = count.to_string();
        let params = plural_params(self.plural_mode, &count_text, params);
        self.resolve_with(key, &params)
    }

    /// Direction of `locale`, or of the active locale when `None`.
    #[must_use]
    pub fn text_direction(&self, locale: Option<&Locale>) -> TextDirection {
        TextDirection::for_locale(locale.unwrap_or(&self.locale))
    }

    #[must_use]
    pub fn is_rtl(&self, locale: Option<&Locale>) -> bool {
        self.text_direction(locale).is_rtl()
    }

    /// Keys used by any locale in the table that `locale` cannot resolve,
    /// even through the fallback locale. Sorted.
    #[must_use]
    pub fn missing_keys(&self, locale: &Locale) -> Vec<String> {
        let all_keys: BTreeSet<&str> =
            self.translations.values().flat_map(HashMap::keys).map(String::as_str).collect();

        all_keys
            .into_iter()
            .filter(|key| {
                self.lookup_in(locale, key).is_none()
                    && self
                        .fallback_locale
                        .as_ref()
                        .is_none_or(|fallback| self.lookup_in(fallback, key).is_none())
            })
            .map(String::from)
            .collect()
    }

    /// Empty table, `en_US` active, no fallback. The plural mode is kept.
    pub fn reset(&mut self) {
        self.translations.clear();
        self.locale = Locale::default();
        self.fallback_locale = None;
    }
}

/// Cloneable handle for sharing one resolver across threads.
///
/// A poisoned lock is recovered rather than propagated, so reads keep
/// returning text.
#[derive(Debug, Clone, Default)]
pub struct SharedResolver {
    inner: Arc<RwLock<TranslationResolver>>,
}

impl SharedResolver {
    #[must_use]
    pub fn new(resolver: TranslationResolver) -> Self {
        Self { inner: Arc::new(RwLock::new(resolver)) }
    }

    /// Runs `f` with shared access.
    pub fn read<R>(&self, f: impl FnOnce(&TranslationResolver) -> R) -> R {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Runs `f` with exclusive access.
    pub fn write<R>(&self, f: impl FnOnce(&mut TranslationResolver) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    #[must_use]
    pub fn resolve(&self, key: &str) -> String {
        self.read(|resolver| resolver.resolve(key))
    }

    #[must_use]
    pub fn resolve_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.read(|resolver| resolver.resolve_with(key, params))
    }

    #[must_use]
    pub fn resolve_plural(
        &self,
        singular_key: &str,
        plural_key: &str,
        count: i64,
        params: &[(&str, &str)],
    ) -> String {
        self.read(|resolver| resolver.resolve_plural(singular_key, plural_key, count, params))
    }

    pub fn set_locale(&self, locale: Locale) -> bool {
        self.write(|resolver| resolver.set_locale(locale))
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.read(|resolver| resolver.locale().clone())
    }
}
