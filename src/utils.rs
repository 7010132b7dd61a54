pub mod collapse_whitespace;
pub mod equal_interval_buckets;
pub mod filter_referenced_tickers;
pub mod read_corpus;
pub mod read_ticker_list;
pub mod sort_references;
pub mod strip_emojis;
pub mod tokenize;

pub use collapse_whitespace::collapse_whitespace;
pub use equal_interval_buckets::equal_interval_buckets;
pub use filter_referenced_tickers::{filter_referenced_tickers, ReferenceFilterConfig};
pub use read_corpus::{
    read_comments_from_jsonl, read_comments_from_jsonl_path, read_posts_from_jsonl,
    read_posts_from_jsonl_path,
};
pub use read_ticker_list::{read_tickers_from_csv, read_tickers_from_csv_path};
pub use sort_references::sort_references;
pub use strip_emojis::strip_emojis;
pub use tokenize::unique_lowercase_words;
