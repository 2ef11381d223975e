//! Snippet placeholder escaping
//!
//!     Editors that insert the converted text as a template treat one character as the
//!     start of a placeholder (`$` in the common snippet syntax). Text coming from user
//!     source has to have that character escaped before conversion, or `'$name'` inside a
//!     string literal turns into a tab stop.
//!
//!     Conversion itself never escapes anything; callers opt in.

/// Placeholder character of the common editor snippet syntax.
pub const DEFAULT_PLACEHOLDER: char = '$';

/// Prefix every occurrence of `placeholder` with a backslash.
pub fn escape_placeholders(text: &str, placeholder: char) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == placeholder {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
