//! `@name` placeholder substitution.

/// Prefix marking a placeholder token in translation text.
pub const TOKEN_PREFIX: char = '@';

/// Replaces every `@name` token whose name appears in `params`.
///
/// The text is scanned once. Where several names match at the same
/// position (`@name` vs `@names`) the longest one wins, and replacement
/// values are copied through without being scanned again. Tokens with no
/// matching parameter and a lone `@` are left as-is.
///
/// This differs from replacing each parameter in turn, in parameter order,
/// only when one name is a prefix of another: `@names` with
/// `[("name", "N"), ("names", "L")]` gives `L` here, not `Ns`.
///
/// # Examples
/// ```
/// use i18n_resolver::interpolate::interpolate;
///
/// assert_eq!(interpolate("Welcome @name", &[("name", "John")]), "Welcome John");
/// assert_eq!(interpolate("@names", &[("name", "N"), ("names", "L")]), "L");
/// assert_eq!(interpolate("Welcome @name", &[]), "Welcome @name");
/// ```
#[must_use]
pub fn interpolate(text: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() || !text.contains(TOKEN_PREFIX) {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some((before, after)) = rest.split_once(TOKEN_PREFIX) {
        result.push_str(before);

        match longest_match(after, params) {
            Some((name, value)) => {
                result.push_str(value);
                rest = after.strip_prefix(name).unwrap_or(after);
            }
            None => {
                result.push(TOKEN_PREFIX);
                rest = after;
            }
        }
    }
    result.push_str(rest);

    result
}

/// Finds the longest parameter name that `text` starts with.
fn longest_match<'p>(text: &str, params: &[(&'p str, &'p str)]) -> Option<(&'p str, &'p str)> {
    params
        .iter()
        .filter(|(name, _)| !name.is_empty() && text.starts_with(name))
        .max_by_key(|(name, _)| name.len())
        .copied()
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::single("Welcome @name", &[("name", "John")], "Welcome John")]
    #[case::repeated("@x and @x", &[("x", "A")], "A and A")]
    #[case::multiple(
        "@greeting, @name!",
        &[("name", "Ana"), ("greeting", "Hola")],
        "Hola, Ana!"
    )]
    #[case::no_params("Welcome @name", &[], "Welcome @name")]
    #[case::unknown_token("Hi @who", &[("name", "John")], "Hi @who")]
    #[case::lone_at("mail me @ home", &[("home", "x")], "mail me @ home")]
    #[case::trailing_at("ends with @", &[("name", "x")], "ends with @")]
    #[case::embedded("user@name.com", &[("name", "example")], "userexample.com")]
    #[case::unicode("¡Hola @nombre! ✓", &[("nombre", "Zoë")], "¡Hola Zoë! ✓")]
    fn test_interpolate(
        #[case] text: &str,
        #[case] params: &[(&str, &str)],
        #[case] expected: &str,
    ) {
        assert_that!(interpolate(text, params), eq(expected));
    }

    #[rstest]
    fn test_values_are_not_rescanned() {
        let params = [("a", "@b"), ("b", "B")];

        assert_that!(interpolate("@a @b", &params), eq("@b B"));
    }

    #[rstest]
    fn test_longest_name_wins() {
        let params = [("name", "N"), ("names", "LIST")];

        assert_that!(interpolate("@names / @name", &params), eq("LIST / N"));
    }

    #[rstest]
    fn test_empty_name_is_ignored() {
        assert_that!(interpolate("a @ b", &[("", "X")]), eq("a @ b"));
    }
}
