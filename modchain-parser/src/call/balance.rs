//! Paren balance of a text fragment

/// Net paren depth of `text`: `(` counts +1, `)` counts -1.
///
/// Zero means every paren in the fragment is matched, positive means it is still inside
/// an open call, negative means it closed more than it opened.
pub fn bracket_balance(text: &str) -> isize {
    text.chars().fold(0, |depth, ch| match ch {
        '(' => depth + 1,
        ')' => depth - 1,
        _ => depth,
    })
}
