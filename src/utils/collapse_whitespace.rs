/// Collapses every run of whitespace in `text` to a single space and trims
/// both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
