use crate::{
    core::{RadarClient, RadarError, net},
    sentiment::{
        model::SentimentReading,
        wire::{self, ScoreValue},
    },
};

pub(super) async fn fetch_sentiment(client: &RadarClient) -> Result<SentimentReading, RadarError> {
    let url = client.base_sentiment().join("fng/")?;

    tracing::debug!(url = %url, "requesting fear & greed index");
    let resp = client.http().get(url).send().await?;
    net::ensure_success(&resp)?;

    let body = net::get_text(resp, "sentiment").await?;
    let envelope: wire::FngEnvelope = serde_json::from_str(&body)?;

    let first = envelope
        .data
        .into_iter()
        .next()
        .ok_or_else(|| RadarError::Data("sentiment: empty data array".into()))?;

    let raw = match first.value {
        ScoreValue::Number(n) => n,
        ScoreValue::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| RadarError::Data(format!("sentiment: value '{s}' is not an integer: {e}")))?,
    };
    let score = u8::try_from(raw)
        .ok()
        .filter(|s| *s <= 100)
        .ok_or_else(|| RadarError::Data(format!("sentiment: value {raw} outside 0..=100")))?;

    Ok(SentimentReading::new(score, first.value_classification))
}
