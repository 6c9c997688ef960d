use super::types::DeclarationKind;

/// Kinds recognized by the legacy simple sorter, as one undistinguished set.
const SIMPLE_KEYWORDS: [&str; 3] = ["require", "require_relative", "include"];

/// Does `text` start with `keyword` immediately followed by whitespace?
/// The whitespace requirement keeps `require` from swallowing
/// `require_relative`.
fn starts_with_keyword(text: &str, keyword: &str) -> bool {
    match text.strip_prefix(keyword) {
        Some(rest) => rest.starts_with([' ', '\t']),
        None => false,
    }
}

/// Classify a line for the grouping sorter. Patterns are anchored at
/// column 0: an indented declaration inside a class or module body never
/// matches and stays where it is. The classifier has no scope awareness.
pub fn classify_grouped(line: &str) -> Option<DeclarationKind> {
    DeclarationKind::ALL
        .into_iter()
        .find(|kind| starts_with_keyword(line, kind.keyword()))
}

/// Classify a line for the simple sorter: leading whitespace is allowed
/// and only the three historic keywords are recognized.
pub fn matches_simple(line: &str) -> bool {
    let trimmed = line.trim_start();
    SIMPLE_KEYWORDS
        .iter()
        .any(|keyword| starts_with_keyword(trimmed, keyword))
}

/// Check if line is blank or a line comment.
pub fn is_comment_or_blank(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
