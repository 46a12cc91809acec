//! Crypto Fear & Greed index and its three-band reading.

mod api;
mod model;
mod wire;

pub use model::{Band, FEAR_MAX, GREED_MIN, SentimentReading, classify};

use crate::core::{RadarClient, RadarError};

/// Fetches the latest index value and classifies it.
///
/// # Errors
///
/// Returns [`RadarError::Status`] on a non-2xx response, and [`RadarError::Json`]
/// or [`RadarError::Data`] if the first record is missing or its value is not
/// an integer between 0 and 100.
#[tracing::instrument(skip(client), err)]
pub async fn fetch_sentiment(client: &RadarClient) -> Result<SentimentReading, RadarError> {
    api::fetch_sentiment(client).await
}
