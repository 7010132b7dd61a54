//! Shared fixtures for the integration tests and benchmarks.

use ticker_mentions::{Comment, Exchange, Post, Ticker, Timestamp};

/// Builds a post with no comments attached.
pub fn post(title: &str, body: &str, time: Timestamp) -> Post {
    Post {
        title: title.to_string(),
        body: body.to_string(),
        num_comments: 0,
        time,
    }
}

/// Builds a comment.
pub fn comment(content: &str, time: Timestamp) -> Comment {
    Comment {
        content: content.to_string(),
        time,
    }
}

/// Builds a NASDAQ ticker with an empty display name, the way the CLI does
/// for standalone-symbol lookups.
pub fn ticker(symbol: &str) -> Ticker {
    Ticker::new(symbol.to_string(), String::new(), Exchange::Nasdaq)
}

/// Small corpus with a handful of VLCN mentions spread over time.
pub fn sample_posts() -> Vec<Post> {
    vec![
        post("VLCN to the moon", "Loading up before the squeeze", 100),
        post("Market update", "Volcon VLCN is ripping today", 200),
        post("Unrelated discussion", "nothing to see here", 300),
        post("DD inside", "vlcn short interest is wild. VLCN baby", 450),
    ]
}

/// Comments matching [`sample_posts`].
pub fn sample_comments() -> Vec<Comment> {
    vec![
        comment("buying more vlcn today", 150),
        comment("this sub has lost its mind", 250),
        comment("VLCN calls printed", 500),
    ]
}
