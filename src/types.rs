use std::collections::HashMap;

use crate::models::{Comment, Post};

// Types listed here are either shared across multiple files and/or exposed via the library.

/// A lowercase whitespace-delimited word, used as an inverted-index key.
pub type Word = String;

/// Represents a ticker symbol (e.g., stock ticker) as an owned `String`.
pub type TickerSymbol = String;

/// The display name of the company behind a ticker symbol.
pub type DisplayName = String;

/// Epoch timestamp, in whole seconds, attached to every piece of content.
pub type Timestamp = i64;

/// Index of a bucket produced by `equal_interval_buckets`. Index 0 is the
/// lowest interval.
pub type BucketIndex = usize;

/// Bucketed reference counts for a single ticker, one `(bucket_index, count)`
/// pair per bucket, lowest interval first.
pub type BucketCounts = Vec<(BucketIndex, usize)>;

/// Inverted index over posts: maps a word to every post containing it.
pub type PostIndexMap<'a> = HashMap<Word, Vec<&'a Post>>;

/// Inverted index over comments: maps a word to every comment containing it.
pub type CommentIndexMap<'a> = HashMap<Word, Vec<&'a Comment>>;
