use test_utils::{comment, post, ticker};
use ticker_mentions::{
    generate_references, sort_references, sort_ticker_references, Content, Exchange, Ticker,
    TickerContainer,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_post_reference() {
        let posts = vec![post("VLCN to the moon", "", 100)];
        let comments = vec![];

        let mut vlcn = ticker("VLCN");
        generate_references(&posts, &comments, std::iter::once(&mut vlcn));

        assert_eq!(vlcn.references, vec![Content::Post(posts[0].clone())]);
    }

    #[test]
    fn test_symbol_matching_is_case_insensitive() {
        let posts = vec![];
        let comments = vec![comment("loading up on vlcn", 100)];

        let mut vlcn = ticker("VLCN");
        generate_references(&posts, &comments, std::iter::once(&mut vlcn));

        assert_eq!(vlcn.references.len(), 1);
    }

    #[test]
    fn test_lookup_miss_leaves_references_empty() {
        let posts = vec![post("nothing relevant here", "at all", 100)];
        let comments = vec![comment("still nothing", 200)];

        let mut vlcn = ticker("VLCN");
        generate_references(&posts, &comments, std::iter::once(&mut vlcn));

        assert!(vlcn.references.is_empty());
    }

    #[test]
    fn test_posts_attach_before_comments() {
        let posts = vec![post("vlcn post", "", 300)];
        let comments = vec![comment("vlcn comment", 100)];

        let mut vlcn = ticker("VLCN");
        generate_references(&posts, &comments, std::iter::once(&mut vlcn));

        assert_eq!(vlcn.references.len(), 2);
        assert!(matches!(vlcn.references[0], Content::Post(_)));
        assert!(matches!(vlcn.references[1], Content::Comment(_)));
    }

    #[test]
    fn test_no_duplicate_attach_for_title_and_body_overlap() {
        let posts = vec![post("VLCN is moving", "vlcn is really moving", 100)];
        let comments = vec![];

        let mut vlcn = ticker("VLCN");
        generate_references(&posts, &comments, std::iter::once(&mut vlcn));

        assert_eq!(vlcn.references.len(), 1);
    }

    #[test]
    fn test_rematching_does_not_duplicate_references() {
        let posts = vec![post("vlcn thread", "", 100)];
        let comments = vec![comment("vlcn mention", 200)];

        let mut vlcn = ticker("VLCN");
        generate_references(&posts, &comments, std::iter::once(&mut vlcn));
        generate_references(&posts, &comments, std::iter::once(&mut vlcn));

        assert_eq!(vlcn.references.len(), 2);
    }

    #[test]
    fn test_matching_through_container() {
        let posts = vec![post("vlcn and aapl in one post", "", 100)];
        let comments = vec![comment("only aapl here", 200)];

        let tickers = vec![
            Ticker::new("VLCN".to_string(), "Volcon Inc.".to_string(), Exchange::Nasdaq),
            Ticker::new("AAPL".to_string(), "Apple Inc.".to_string(), Exchange::Nasdaq),
            Ticker::new("GME".to_string(), "GameStop Corp.".to_string(), Exchange::Nyse),
        ];
        let mut container = TickerContainer::new(tickers).expect("no duplicate symbols");

        generate_references(&posts, &comments, container.iter_mut());

        assert_eq!(container.get("VLCN").unwrap().references.len(), 1);
        assert_eq!(container.get("AAPL").unwrap().references.len(), 2);
        assert!(container.get("GME").unwrap().references.is_empty());
    }

    #[test]
    fn test_sort_references_most_recent_first() {
        let references = vec![
            Content::Post(post("oldest", "", 100)),
            Content::Comment(comment("newest", 400)),
            Content::Comment(comment("middle", 250)),
        ];

        let sorted = sort_references(&references);

        let times: Vec<i64> = sorted.iter().map(|content| content.time()).collect();
        assert_eq!(times, vec![400, 250, 100]);
    }

    #[test]
    fn test_sort_references_is_stable_on_ties() {
        let references = vec![
            Content::Comment(comment("first at 200", 200)),
            Content::Comment(comment("second at 200", 200)),
            Content::Comment(comment("at 100", 100)),
        ];

        let sorted = sort_references(&references);

        assert_eq!(sorted[0], references[0]);
        assert_eq!(sorted[1], references[1]);
        assert_eq!(sorted[2], references[2]);
    }

    #[test]
    fn test_sort_ticker_references_in_place() {
        let posts = vec![post("vlcn early", "", 100), post("vlcn late", "", 500)];
        let comments = vec![comment("vlcn in between", 300)];

        let mut vlcn = ticker("VLCN");
        generate_references(&posts, &comments, std::iter::once(&mut vlcn));
        sort_ticker_references(std::iter::once(&mut vlcn));

        assert_eq!(vlcn.reference_times(), vec![500, 300, 100]);
    }
}
