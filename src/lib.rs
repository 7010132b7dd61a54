mod config;
pub use config::DEFAULT_REFERENCE_FILTER_CONFIG;
mod constants;
pub use constants::DEFAULT_BUCKET_COUNT;
pub mod models;
pub use models::{Comment, Content, ContentIndex, Error, Exchange, Post, Ticker, TickerContainer};
pub mod types;
pub mod utils;
pub use types::{BucketCounts, BucketIndex, DisplayName, TickerSymbol, Timestamp, Word};
pub use utils::{
    equal_interval_buckets, filter_referenced_tickers, read_comments_from_jsonl,
    read_comments_from_jsonl_path, read_posts_from_jsonl, read_posts_from_jsonl_path,
    read_tickers_from_csv, read_tickers_from_csv_path, sort_references, ReferenceFilterConfig,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

/// Builds the inverted indexes over `posts` and `comments` and attaches every
/// match to the supplied tickers' reference lists.
///
/// Tickers whose symbol occurs in neither index are left untouched. Call this
/// once per fresh corpus load; clear `references` before re-matching an
/// already-populated ticker set.
pub fn generate_references<'a, I>(posts: &[Post], comments: &[Comment], tickers: I)
where
    I: IntoIterator<Item = &'a mut Ticker>,
{
    let content_index = ContentIndex::new(posts, comments);

    for ticker in tickers {
        content_index.attach_references_to(ticker);
    }
}

/// Re-orders every supplied ticker's references most-recent-first.
pub fn sort_ticker_references<'a, I>(tickers: I)
where
    I: IntoIterator<Item = &'a mut Ticker>,
{
    for ticker in tickers {
        ticker.sort_references_by_recency();
    }
}

/// Buckets one ticker's reference timestamps into `bucket_count` equal-width
/// intervals and returns `(bucket_index, count)` pairs, lowest interval
/// first.
///
/// Fails with `Error::InvalidInput` when the ticker has no references or
/// `bucket_count` is zero.
pub fn reference_time_distribution(
    ticker: &Ticker,
    bucket_count: usize,
) -> Result<BucketCounts, Error> {
    let times: Vec<f64> = ticker
        .references
        .iter()
        .map(|content| content.time() as f64)
        .collect();

    let buckets = equal_interval_buckets(&times, bucket_count)?;

    Ok(buckets
        .iter()
        .enumerate()
        .map(|(bucket_index, bucket)| (bucket_index, bucket.len()))
        .collect())
}
