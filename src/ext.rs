//! Call-site sugar: `"settings.title".tr(&resolver)`.

use crate::resolver::TranslationResolver;

/// Translation shortcuts on string keys.
pub trait Translate {
    /// Same as [`TranslationResolver::resolve`].
    fn tr(&self, resolver: &TranslationResolver) -> String;

    /// Same as [`TranslationResolver::resolve_with`].
    fn tr_params(&self, resolver: &TranslationResolver, params: &[(&str, &str)]) -> String;

    /// Same as [`TranslationResolver::resolve_plural`], with `self` as the
    /// singular key.
    fn tr_plural(
        &self,
        resolver: &TranslationResolver,
        plural_key: &str,
        count: i64,
        params: &[(&str, &str)],
    ) -> String;
}

impl Translate for str {
    fn tr(&self, resolver: &TranslationResolver) -> String {
        resolver.resolve(self)
    }

    fn tr_params(&self, resolver: &TranslationResolver, params: &[(&str, &str)]) -> String {
        resolver.resolve_with(self, params)
    }

    fn tr_plural(
        &self,
        resolver: &TranslationResolver,
        plural_key: &str,
        count: i64,
        params: &[(&str, &str)],
    ) -> String {
        resolver.resolve_plural(self, plural_key, count, params)
    }
}
