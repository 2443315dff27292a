//! String trimming and splitting helpers.

/// Removes leading whitespace in place.
pub fn trim_left(text: &mut String) {
    let trimmed = text.len() - text.trim_start().len();
    if trimmed > 0 {
        text.drain(..trimmed);
    }
}

/// Removes trailing whitespace in place.
pub fn trim_right(text: &mut String) {
    text.truncate(text.trim_end().len());
}

/// Removes leading and trailing whitespace in place.
pub fn trim(text: &mut String) {
    trim_right(text);
    trim_left(text);
}

/// Splits `text` on `delimiter`, skipping empty segments.
///
/// Consecutive delimiters collapse into one boundary; leading and trailing
/// delimiters produce no empty tokens.
#[must_use]
pub fn split(text: &str, delimiter: char) -> Vec<&str> {
    text.split(delimiter)
        .filter(|segment| !segment.is_empty())
        .collect()
}
