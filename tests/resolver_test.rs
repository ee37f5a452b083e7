//! Resolution behavior seen from outside the crate.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::collections::HashMap;

use googletest::prelude::*;
use i18n_resolver::{
    Locale,
    TextDirection,
    Translate,
    TranslationResolver,
    TranslationTable,
};
use rstest::*;

fn en_us() -> Locale {
    Locale::new("en", Some("US"))
}

fn es_es() -> Locale {
    Locale::new("es", Some("ES"))
}

fn keys(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

fn sample_table() -> TranslationTable {
    HashMap::from([
        (
            "en_US".to_string(),
            keys(&[
                ("hello", "Hello"),
                ("greeting", "Hi @count"),
                ("welcome", "Welcome @name"),
                ("item", "One item"),
                ("item_plural", "@count items"),
            ]),
        ),
        ("es_ES".to_string(), keys(&[("hello", "Hola")])),
    ])
}

#[fixture]
fn resolver() -> TranslationResolver {
    let mut resolver = TranslationResolver::new();
    resolver.set_translations(sample_table());
    resolver
}

#[rstest]
#[case("hello")]
#[case("")]
#[case("some.nested.key")]
#[case("Welcome @name")]
fn resolve_before_any_table_returns_key(#[case] key: &str) {
    let resolver = TranslationResolver::new();

    assert_that!(resolver.resolve(key), eq(key));
}

#[rstest]
fn resolve_in_default_locale() {
    let mut resolver = TranslationResolver::new();
    resolver.set_translations(HashMap::from([("en_US".to_string(), keys(&[("hello", "Hello")]))]));

    assert_that!(resolver.resolve("hello"), eq("Hello"));
}

#[rstest]
fn set_locale_to_absent_locale_keeps_current(mut resolver: TranslationResolver) {
    let accepted = resolver.set_locale(Locale::new("de", Some("DE")));

    assert_that!(accepted, eq(false));
    assert_that!(resolver.locale(), eq(&en_us()));
}

#[rstest]
fn set_locale_matches_exact_key_only(mut resolver: TranslationResolver) {
    let mut table = sample_table();
    table.insert("es-ES".to_string(), keys(&[("hello", "¡Hola!")]));
    resolver.set_translations(table);

    assert_that!(resolver.set_locale(Locale::new("es", Some("es"))), eq(false));
    assert_that!(resolver.set_locale(es_es()), eq(true));
    assert_that!(resolver.resolve("hello"), eq("Hola"));
}

#[rstest]
fn fallback_precedes_raw_key(mut resolver: TranslationResolver) {
    resolver.set_locale(es_es());
    resolver.set_fallback_locale(en_us());

    assert_that!(resolver.resolve("greeting"), eq("Hi @count"));
}

#[rstest]
fn primary_translation_beats_fallback(mut resolver: TranslationResolver) {
    resolver.set_locale(es_es());
    resolver.set_fallback_locale(en_us());

    assert_that!(resolver.resolve("hello"), eq("Hola"));
}

#[rstest]
fn params_are_substituted(resolver: TranslationResolver) {
    assert_that!(resolver.resolve_with("welcome", &[("name", "John")]), eq("Welcome John"));
    assert_that!(resolver.resolve("welcome"), eq("Welcome @name"));
}

#[rstest]
#[case::zero(0, "0 items")]
#[case::one(1, "One item")]
#[case::two(2, "2 items")]
fn plural_selection(resolver: TranslationResolver, #[case] count: i64, #[case] expected: &str) {
    assert_that!(resolver.resolve_plural("item", "item_plural", count, &[]), eq(expected));
}

#[rstest]
#[case("ar", TextDirection::Rtl)]
#[case("en", TextDirection::Ltr)]
#[case("es", TextDirection::Ltr)]
#[case("fr", TextDirection::Ltr)]
fn text_direction_by_language(
    resolver: TranslationResolver,
    #[case] language: &str,
    #[case] expected: TextDirection,
) {
    let locale = Locale::language_only(language);

    assert_that!(resolver.text_direction(Some(&locale)), eq(expected));
    assert_that!(resolver.is_rtl(Some(&locale)), eq(expected == TextDirection::Rtl));
}

#[rstest]
fn set_translations_twice_matches_once(mut resolver: TranslationResolver) {
    let once: Vec<String> =
        ["hello", "welcome", "missing"].iter().map(|key| resolver.resolve(key)).collect();

    resolver.set_translations(sample_table());
    resolver.set_translations(sample_table());
    let twice: Vec<String> =
        ["hello", "welcome", "missing"].iter().map(|key| resolver.resolve(key)).collect();

    assert_that!(twice, eq(&once));
}

#[rstest]
fn reset_restores_defaults(mut resolver: TranslationResolver) {
    resolver.set_locale(es_es());
    resolver.set_fallback_locale(en_us());

    resolver.reset();

    assert_that!(resolver.locale(), eq(&en_us()));
    assert_that!(resolver.fallback_locale(), none());
    assert_that!(resolver.resolve("hello"), eq("hello"));
}

#[rstest]
fn call_site_sugar(resolver: TranslationResolver) {
    assert_that!("hello".tr(&resolver), eq("Hello"));
    assert_that!("welcome".tr_params(&resolver, &[("name", "Eve")]), eq("Welcome Eve"));
    assert_that!("item".tr_plural(&resolver, "item_plural", 5, &[]), eq("5 items"));
}
