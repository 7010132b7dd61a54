use ticker_mentions::{Error, Exchange, Ticker, TickerContainer};

#[cfg(test)]
mod tests {
    use super::*;

    fn volcon() -> Ticker {
        Ticker::new("VLCN".to_string(), "Volcon Inc.".to_string(), Exchange::Nasdaq)
    }

    fn apple() -> Ticker {
        Ticker::new("AAPL".to_string(), "Apple Inc.".to_string(), Exchange::Nasdaq)
    }

    #[test]
    fn test_lookup_by_symbol() {
        let container = TickerContainer::new(vec![volcon(), apple()]).unwrap();

        assert_eq!(container.len(), 2);
        assert_eq!(container.get("VLCN").unwrap().display_name, "Volcon Inc.");
        assert!(container.contains("AAPL"));
    }

    #[test]
    fn test_absent_symbol_yields_none() {
        let container = TickerContainer::new(vec![volcon()]).unwrap();

        assert!(container.get("GME").is_none());
        assert!(!container.contains("GME"));
    }

    #[test]
    fn test_identical_duplicates_collapse() {
        let container = TickerContainer::new(vec![volcon(), volcon()]).unwrap();

        assert_eq!(container.len(), 1);
    }

    #[test]
    fn test_colliding_symbols_are_rejected() {
        let impostor = Ticker::new(
            "VLCN".to_string(),
            "Some Other Volcon".to_string(),
            Exchange::Otc,
        );

        let result = TickerContainer::new(vec![volcon(), impostor]);

        match result {
            Err(Error::DuplicateSymbol(symbol)) => assert_eq!(symbol, "VLCN"),
            other => panic!("expected DuplicateSymbol, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_container() {
        let container = TickerContainer::new(Vec::new()).unwrap();

        assert!(container.is_empty());
        assert_eq!(container.iter().count(), 0);
    }
}
