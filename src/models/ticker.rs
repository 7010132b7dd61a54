use std::fmt;
use std::hash::{Hash, Hasher};

use crate::models::Content;
use crate::types::{DisplayName, TickerSymbol, Timestamp};

/// Listing venue classification of a ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exchange {
    Nyse,
    Nasdaq,
    Otc,
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Nyse => write!(f, "NYSE"),
            Exchange::Nasdaq => write!(f, "NASDAQ"),
            Exchange::Otc => write!(f, "OTC"),
        }
    }
}

/// A ticker symbol plus every piece of content that mentions it.
///
/// `references` is the single mutation point in the crate: it grows while the
/// reference matcher runs and is read-only everywhere else. Identity is
/// derived from `(symbol, display_name)`.
#[derive(Debug, Clone)]
pub struct Ticker {
    pub symbol: TickerSymbol,
    pub display_name: DisplayName,
    pub exchange: Exchange,
    pub references: Vec<Content>,
}

impl Ticker {
    /// Creates a ticker with an empty reference list.
    pub fn new(symbol: TickerSymbol, display_name: DisplayName, exchange: Exchange) -> Self {
        Ticker {
            symbol,
            display_name,
            exchange,
            references: Vec::new(),
        }
    }

    /// Appends `content` unless an identical item is already referenced.
    ///
    /// Returns `true` when the reference was attached.
    pub fn attach_reference(&mut self, content: Content) -> bool {
        if self.references.contains(&content) {
            return false;
        }
        self.references.push(content);
        true
    }

    /// Re-orders `references` most-recent-first. The sort is stable, so items
    /// sharing a timestamp keep their original relative order.
    pub fn sort_references_by_recency(&mut self) {
        self.references.sort_by(|a, b| b.time().cmp(&a.time()));
    }

    /// Timestamps of all attached references, in reference order.
    pub fn reference_times(&self) -> Vec<Timestamp> {
        self.references
            .iter()
            .map(|content| content.time())
            .collect()
    }

    /// Multi-line human-readable listing of every reference.
    pub fn references_summary(&self) -> String {
        let mut res = format!("Number of references: {}\n", self.references.len());
        for reference in &self.references {
            match reference {
                Content::Comment(comment) => {
                    res.push_str(&format!("\tComment body: {}\n", comment.content));
                }
                Content::Post(post) => {
                    res.push_str(&format!("\tPost title: {}\n", post.title));
                    res.push_str(&format!("\tPost body: {}\n", post.body));
                }
            }
        }
        res
    }
}

impl PartialEq for Ticker {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.display_name == other.display_name
    }
}

impl Eq for Ticker {}

impl Hash for Ticker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        self.display_name.hash(state);
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticker: {:<10}\tReferences: {}\tExchange: {:<8}\tName: {:<20}",
            self.symbol,
            self.references.len(),
            self.exchange.to_string(),
            self.display_name
        )
    }
}
