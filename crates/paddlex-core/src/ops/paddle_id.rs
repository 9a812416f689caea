/// Derive the business identifier for a paddle from its brand and model
///
/// Each part is split on whitespace and on the URL delimiters `/ ? # %`,
/// upper-cased and joined with `-`; the two parts are then joined with `-`.
/// An identifier is therefore always a single path segment. The result is deterministic,
/// so resubmitting the same paddle yields the same identifier and collides
/// on the unique index.
///
/// ```
/// use paddlex_core::generate_paddle_id;
///
/// assert_eq!(
///     generate_paddle_id("Engage", "Pursuit MX 6.0"),
///     "ENGAGE-PURSUIT-MX-6.0"
/// );
/// ```
pub fn generate_paddle_id(brand: &str, model: &str) -> String {
    format!("{}-{}", slug(brand), slug(model))
}

fn slug(part: &str) -> String {
    part.split(is_separator)
        .filter(|word| !word.is_empty())
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '/' | '?' | '#' | '%')
}
