use std::collections::HashSet;

use crate::types::Word;

/// Splits `text` into its unique lowercase whitespace-delimited words.
///
/// Duplicates within the text collapse; word order is not preserved. Matching
/// against the resulting set is exact whole-word matching, never substring
/// matching.
pub fn unique_lowercase_words(text: &str) -> HashSet<Word> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
