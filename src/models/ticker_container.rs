use std::collections::HashMap;

use crate::models::{Error, Ticker};
use crate::types::TickerSymbol;

/// Holds every loaded ticker, keyed by symbol for O(1) lookup.
///
/// Construction fails fast when two tickers collide on the same symbol with
/// different identities. Fully identical entries (same symbol and display
/// name, e.g. the same row repeated across exchange files) collapse silently
/// and keep the first occurrence.
#[derive(Debug, Default)]
pub struct TickerContainer {
    tickers: HashMap<TickerSymbol, Ticker>,
}

impl TickerContainer {
    pub fn new(tickers: Vec<Ticker>) -> Result<Self, Error> {
        let mut by_symbol: HashMap<TickerSymbol, Ticker> = HashMap::with_capacity(tickers.len());

        for ticker in tickers {
            match by_symbol.get(&ticker.symbol) {
                None => {
                    by_symbol.insert(ticker.symbol.clone(), ticker);
                }
                Some(existing) if *existing == ticker => {}
                Some(_) => return Err(Error::DuplicateSymbol(ticker.symbol)),
            }
        }

        Ok(TickerContainer { tickers: by_symbol })
    }

    /// Looks up a ticker by its exact symbol. An absent symbol yields `None`,
    /// never an error.
    pub fn get(&self, symbol: &str) -> Option<&Ticker> {
        self.tickers.get(symbol)
    }

    /// Mutable lookup, for callers that re-sort a single ticker's references.
    pub fn get_mut(&mut self, symbol: &str) -> Option<&mut Ticker> {
        self.tickers.get_mut(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.tickers.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Iterates over all tickers in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Ticker> {
        self.tickers.values()
    }

    /// Mutable iteration, used by the reference matcher to populate each
    /// ticker's reference list in place.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Ticker> {
        self.tickers.values_mut()
    }
}
