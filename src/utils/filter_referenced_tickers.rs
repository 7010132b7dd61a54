use crate::models::{Ticker, TickerContainer};

/// Bounds for the reference-count report filter. Both bounds are exclusive.
pub struct ReferenceFilterConfig {
    pub min_references: usize,
    pub max_references: usize,
}

/// Returns every ticker whose reference count lies strictly between the
/// configured bounds, ranked by how often it was referenced.
///
/// ### Sorting Order:
/// - **Primary:** reference count, descending.
/// - **Secondary:** ticker symbol, ascending, for deterministic output.
pub fn filter_referenced_tickers<'a>(
    container: &'a TickerContainer,
    config: &ReferenceFilterConfig,
) -> Vec<&'a Ticker> {
    let mut filtered: Vec<&Ticker> = container
        .iter()
        .filter(|ticker| {
            ticker.references.len() > config.min_references
                && ticker.references.len() < config.max_references
        })
        .collect();

    filtered.sort_by(|a, b| {
        b.references
            .len()
            .cmp(&a.references.len())
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    filtered
}
