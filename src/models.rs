pub mod content;
pub use content::{Comment, Content, Post};

pub mod content_index;
pub use content_index::ContentIndex;

pub mod error;
pub use error::Error;

pub mod ticker;
pub use ticker::{Exchange, Ticker};

pub mod ticker_container;
pub use ticker_container::TickerContainer;
