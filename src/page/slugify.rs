//! Slug generation for section ids.

/// Generate a URL/id-safe slug from a title.
///
/// Lowercases the text and replaces runs of non-alphanumeric characters with
/// a single hyphen, trimming leading and trailing hyphens. Titles with no
/// alphanumeric content slug to the empty string; the partitioner falls back
/// to a positional id in that case.
///
/// # Examples
///
/// ```
/// use folio::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("  API -- Reference!  "), "api-reference");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
