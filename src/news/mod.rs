mod api;
mod model;
mod wire;

pub use model::NewsPost;

use crate::core::{RadarClient, RadarError};

/// A builder for fetching the news feed for one currency symbol.
pub struct NewsBuilder {
    client: RadarClient,
    symbol: String,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` filtered by the client's configured symbol.
    pub fn new(client: &RadarClient) -> Self {
        Self {
            client: client.clone(),
            symbol: client.news_symbol().to_string(),
        }
    }

    /// Overrides the currency filter for this request.
    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Executes the request and returns every post in source order.
    ///
    /// The list is neither filtered nor truncated here.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Status`] if the endpoint answers with anything but
    /// `200 OK`, or an HTTP/JSON error if the request or body is unusable.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol))]
    pub async fn fetch(self) -> Result<Vec<NewsPost>, RadarError> {
        api::fetch_news(&self.client, &self.symbol).await
    }
}
