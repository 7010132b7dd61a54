use ticker_mentions::{
    generate_references, reference_time_distribution, Comment, Exchange, Post, Ticker,
    DEFAULT_BUCKET_COUNT,
};

fn main() {
    env_logger::init();

    let posts = vec![
        Post {
            title: "VLCN to the moon".to_string(),
            body: "Loading up before the squeeze".to_string(),
            num_comments: 4,
            time: 100,
        },
        Post {
            title: "Weekly market thread".to_string(),
            body: "Nothing about electric dirt bikes here".to_string(),
            num_comments: 52,
            time: 400,
        },
    ];
    let comments = vec![
        Comment {
            content: "vlcn is my biggest position".to_string(),
            time: 250,
        },
        Comment {
            content: "buying the dip".to_string(),
            time: 300,
        },
    ];

    let mut ticker = Ticker::new("VLCN".to_string(), "Volcon Inc.".to_string(), Exchange::Nasdaq);
    generate_references(&posts, &comments, std::iter::once(&mut ticker));
    ticker.sort_references_by_recency();

    println!("{}", ticker);
    println!("{}", ticker.references_summary());

    let distribution = reference_time_distribution(&ticker, DEFAULT_BUCKET_COUNT).unwrap();
    for (bucket_index, count) in distribution {
        println!("{}: {}", bucket_index, count);
    }
}
