//! HTML escaping.
//!
//! The renderer is the trust boundary for user-authored text: everything it
//! emits must be safe to inject into a document without further escaping.

/// Escape the five HTML special characters in text.
///
/// Replaces `& < > " '` with `&amp; &lt; &gt; &quot; &#039;`. Applied to raw
/// text before mark wrapping and to attribute values, so generated markup is
/// never itself escaped and user text can never inject markup.
///
/// # Examples
///
/// ```
/// use folio::escape_html;
///
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_html("it's \"fine\""), "it&#039;s &quot;fine&quot;");
/// ```
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#039;"),
            _ => result.push(c),
        }
    }

    result
}
