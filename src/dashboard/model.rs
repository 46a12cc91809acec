use askama::Template;
use chrono_tz::Tz;
use serde::Serialize;

use crate::{
    core::RadarError,
    price::PriceQuote,
    sentiment::SentimentReading,
};

/// Maximum number of news items shown on the page.
pub const NEWS_LIMIT: usize = 5;

/// Price section values, pre-formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceView {
    /// The quote the strings below were produced from.
    pub quote: PriceQuote,
    /// e.g. `$65,000`
    pub usd: String,
    /// e.g. `¥9,800,000`
    pub jpy: String,
    /// Capture time, `YYYY-MM-DD HH:MM:SS` in the display zone.
    pub captured_at: String,
}

impl PriceView {
    /// Formats `quote`, rendering the capture time in `tz` (host local time when `None`).
    #[must_use]
    pub fn new(quote: PriceQuote, tz: Option<Tz>) -> Self {
        Self {
            usd: quote.usd_display(),
            jpy: quote.jpy_display(),
            captured_at: quote.fetched_at_display(tz),
            quote,
        }
    }
}

/// One rendered headline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// `YYYY-MM-DD` of publication.
    pub published_date: String,
    /// Headline as published.
    pub title_original: String,
    /// Translated headline, or the original plus the fallback marker.
    pub title_translated: String,
    /// Article link.
    pub url: Option<String>,
}

/// News section: at most [`NEWS_LIMIT`] items plus an optional error banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsSection {
    /// Translated headlines in feed order.
    pub items: Vec<NewsItem>,
    /// Fetch failure message, shown above the (then empty) list.
    pub banner: Option<String>,
}

/// Everything one page load shows. Each section either holds its data or the
/// banner text that replaces it.
#[derive(Debug, Clone, Template)]
#[template(path = "dashboard.html")]
pub struct Page {
    /// Logo markup, or the missing-file banner.
    pub logo: Result<String, String>,
    /// Price metrics, or the price failure banner.
    pub price: Result<PriceView, String>,
    /// Index reading, or the sentiment failure banner.
    pub sentiment: Result<SentimentReading, String>,
    /// Headlines and their optional banner.
    pub news: NewsSection,
}

impl Page {
    /// Renders the full HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Template`] if rendering fails.
    pub fn to_html(&self) -> Result<String, RadarError> {
        Ok(self.render()?)
    }
}
