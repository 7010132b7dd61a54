use std::env;

use log::{error, info};
use ticker_mentions::{
    generate_references, read_comments_from_jsonl_path, read_posts_from_jsonl_path,
    reference_time_distribution, Exchange, Ticker, DEFAULT_BUCKET_COUNT,
};

fn main() {
    // Initialize the logger
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!(
            "Usage: {} SYMBOL POSTS_JSONL COMMENTS_JSONL [BUCKET_COUNT]",
            args[0]
        );
        std::process::exit(1);
    }

    let symbol = &args[1];
    let posts_path = &args[2];
    let comments_path = &args[3];

    let bucket_count = match args.get(4) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(count) => count,
            Err(e) => {
                error!("Invalid bucket count {:?}: {}", raw, e);
                std::process::exit(1);
            }
        },
        None => DEFAULT_BUCKET_COUNT,
    };

    let posts = match read_posts_from_jsonl_path(posts_path) {
        Ok(posts) => posts,
        Err(e) => {
            error!("Failed to load posts from {}: {}", posts_path, e);
            std::process::exit(1);
        }
    };

    let comments = match read_comments_from_jsonl_path(comments_path) {
        Ok(comments) => comments,
        Err(e) => {
            error!("Failed to load comments from {}: {}", comments_path, e);
            std::process::exit(1);
        }
    };

    info!(
        "Loaded {} posts and {} comments",
        posts.len(),
        comments.len()
    );

    // Match a single standalone symbol against the corpus
    let mut ticker = Ticker::new(symbol.to_uppercase(), String::new(), Exchange::Nasdaq);
    generate_references(&posts, &comments, std::iter::once(&mut ticker));
    ticker.sort_references_by_recency();

    println!("{}", ticker);

    match reference_time_distribution(&ticker, bucket_count) {
        Ok(distribution) => {
            for (bucket_index, count) in distribution {
                println!("{}: {}", bucket_index, count);
            }
        }
        Err(e) => {
            error!("Error bucketing references: {}", e);
            std::process::exit(1);
        }
    }
}
