use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::models::{Error, Exchange, Ticker};

/// Reads headerless `symbol,name` CSV rows into tickers listed on `exchange`.
///
/// Rows repeating an already-seen `(symbol, name)` identity collapse to a
/// single ticker; input order is otherwise preserved.
pub fn read_tickers_from_csv<R: Read>(reader: R, exchange: Exchange) -> Result<Vec<Ticker>, Error> {
    let mut csv_reader = ReaderBuilder::new().has_headers(false).from_reader(reader);

    let mut seen: HashSet<Ticker> = HashSet::new();
    let mut tickers: Vec<Ticker> = Vec::new();

    for record in csv_reader.records() {
        let record =
            record.map_err(|e| Error::ParserError(format!("Failed to read record: {}", e)))?;

        let symbol = record
            .get(0)
            .ok_or_else(|| Error::ParserError("Missing symbol field".to_string()))?;

        let display_name = record
            .get(1)
            .ok_or_else(|| Error::ParserError("Missing name field".to_string()))?;

        let ticker = Ticker::new(symbol.to_string(), display_name.to_string(), exchange);
        if seen.insert(ticker.clone()) {
            tickers.push(ticker);
        }
    }

    Ok(tickers)
}

/// Convenience wrapper opening `path` for [`read_tickers_from_csv`].
pub fn read_tickers_from_csv_path<P: AsRef<Path>>(
    path: P,
    exchange: Exchange,
) -> Result<Vec<Ticker>, Error> {
    let file = File::open(path)?;

    read_tickers_from_csv(file, exchange)
}
