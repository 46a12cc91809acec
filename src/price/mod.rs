//! Spot price of the tracked asset in USD and JPY.

mod api;
mod model;
mod wire;

pub use model::{PriceQuote, group_thousands};

use crate::core::{RadarClient, RadarError};

/// Fetches the current USD/JPY price of the client's asset.
///
/// # Errors
///
/// Returns [`RadarError::Status`] on a non-2xx response, and [`RadarError::Json`]
/// or [`RadarError::Data`] if the body does not carry both currencies for the asset.
#[tracing::instrument(skip(client), err, fields(asset = %client.asset_id()))]
pub async fn fetch_price(client: &RadarClient) -> Result<PriceQuote, RadarError> {
    api::fetch_price(client).await
}
