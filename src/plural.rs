//! Singular/plural key selection.
//!
//! The rule is binary: a count of exactly one selects the singular key and
//! everything else, zero and negatives included, selects the plural key.
//! Languages with richer CLDR categories (Arabic, Russian, ...) are not
//! modelled.

use serde::{
    Deserialize,
    Serialize,
};

/// Parameter name under which [`PluralMode::CountParam`] injects the count.
pub const COUNT_PARAM: &str = "count";

/// How `resolve_plural` treats the count when filling placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PluralMode {
    /// Only caller-supplied params are substituted.
    Simple,
    /// The count is also available as `@count`. A caller param named
    /// `count` takes precedence over the injected value.
    #[default]
    CountParam,
}

/// Picks `singular_key` when `count == 1`, otherwise `plural_key`.
#[must_use]
pub const fn select_plural_key<'a>(
    singular_key: &'a str,
    plural_key: &'a str,
    count: i64,
) -> &'a str {
    if count == 1 { singular_key } else { plural_key }
}

/// Builds the parameter list for a plural lookup.
///
/// `count_text` must outlive the result, so the caller owns the formatted
/// count.
#[must_use]
pub fn plural_params<'a>(
    mode: PluralMode,
    count_text: &'a str,
    params: &[(&'a str, &'a str)],
) -> Vec<(&'a str, &'a str)> {
    let mut merged = Vec::with_capacity(params.len() + 1);
    if mode == PluralMode::CountParam && !params.iter().any(|(name, _)| *name == COUNT_PARAM) {
        merged.push((COUNT_PARAM, count_text));
    }
    merged.extend_from_slice(params);
    merged
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::one(1, "item")]
    #[case::zero(0, "item_plural")]
    #[case::two(2, "item_plural")]
    #[case::many(100, "item_plural")]
    #[case::negative_one(-1, "item_plural")]
    fn test_select_plural_key(#[case] count: i64, #[case] expected: &str) {
        assert_that!(select_plural_key("item", "item_plural", count), eq(expected));
    }

    #[rstest]
    fn test_count_param_is_injected() {
        let params = plural_params(PluralMode::CountParam, "3", &[("name", "Bob")]);

        assert_that!(params, elements_are![eq(&("count", "3")), eq(&("name", "Bob"))]);
    }

    #[rstest]
    fn test_caller_count_overrides_injected() {
        let params = plural_params(PluralMode::CountParam, "3", &[("count", "three")]);

        assert_that!(params, elements_are![eq(&("count", "three"))]);
    }

    #[rstest]
    fn test_simple_mode_does_not_inject() {
        let params = plural_params(PluralMode::Simple, "3", &[]);

        assert_that!(params, is_empty());
    }

    #[rstest]
    fn test_deserialize_mode() {
        let mode: PluralMode = serde_json::from_str(r#""simple""#).unwrap_or_default();

        assert_that!(mode, eq(PluralMode::Simple));
        assert_that!(PluralMode::default(), eq(PluralMode::CountParam));
    }
}
