use chrono::Utc;

use crate::{
    core::{RadarClient, RadarError, net},
    price::{model::PriceQuote, wire},
};

/// Currencies requested from the price endpoint.
const VS_CURRENCIES: &str = "usd,jpy";

pub(super) async fn fetch_price(client: &RadarClient) -> Result<PriceQuote, RadarError> {
    let asset_id = client.asset_id();
    let mut url = client.base_price().join("simple/price")?;
    url.query_pairs_mut()
        .append_pair("ids", asset_id)
        .append_pair("vs_currencies", VS_CURRENCIES);

    tracing::debug!(url = %url, "requesting price quote");
    let resp = client.http().get(url).send().await?;
    net::ensure_success(&resp)?;

    let body = net::get_text(resp, "price").await?;
    let fetched_at = Utc::now();
    let envelope: wire::PriceEnvelope = serde_json::from_str(&body)?;

    let node = envelope
        .assets
        .get(asset_id)
        .ok_or_else(|| RadarError::Data(format!("price: no entry for asset '{asset_id}'")))?;
    let usd = node
        .usd
        .ok_or_else(|| RadarError::Data(format!("price: '{asset_id}' has no usd value")))?;
    let jpy = node
        .jpy
        .ok_or_else(|| RadarError::Data(format!("price: '{asset_id}' has no jpy value")))?;

    Ok(PriceQuote {
        usd,
        jpy,
        fetched_at,
    })
}
