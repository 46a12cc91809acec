//! btc-fund-radar: a one-page Bitcoin dashboard.
//!
//! Each page load fetches the spot price, the Fear & Greed index and the latest
//! news (with translated headlines), then renders them as a single HTML page.
//! Nothing is cached between loads.

pub mod asset;
pub mod core;
pub mod dashboard;
pub mod news;
pub mod price;
pub mod sentiment;
pub mod server;
pub mod translate;

pub use crate::core::{RadarClient, RadarClientBuilder, RadarError, Secrets};
pub use asset::{Logo, load_logo};
pub use dashboard::{Dashboard, DashboardOptions, NEWS_LIMIT, NewsItem, NewsSection, Page, PriceView};
pub use news::{NewsBuilder, NewsPost};
pub use price::{PriceQuote, fetch_price};
pub use sentiment::{Band, SentimentReading, classify, fetch_sentiment};
pub use translate::{FALLBACK_MARKER, Translator};
