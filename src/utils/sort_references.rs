use crate::models::Content;

/// Returns a new sequence of `references` ordered most-recent-first.
///
/// ### Sorting Order:
/// - **Primary:** timestamp, descending.
/// - **Ties:** the sort is stable, so items sharing a timestamp keep their
///   original relative order.
pub fn sort_references(references: &[Content]) -> Vec<Content> {
    let mut sorted_references: Vec<Content> = references.to_vec();

    sorted_references.sort_by(|a, b| b.time().cmp(&a.time()));

    sorted_references
}
