use url::Url;

use crate::{
    core::{RadarClient, RadarError, net},
    news::{model::NewsPost, wire},
};

pub(super) async fn fetch_news(
    client: &RadarClient,
    symbol: &str,
) -> Result<Vec<NewsPost>, RadarError> {
    let mut url = client.base_news().join("api/v1/posts/")?;
    url.query_pairs_mut()
        .append_pair("auth_token", client.secrets().news_api_key())
        .append_pair("currencies", symbol);

    tracing::debug!(url = %net::redacted(&url), "requesting news posts");
    // The token rides in the query string; keep it out of error messages.
    let resp = client
        .http()
        .get(url)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;
    net::ensure_ok(&resp)?;

    let body = net::get_text(resp, "news")
        .await
        .map_err(reqwest::Error::without_url)?;
    let envelope: wire::PostsEnvelope = serde_json::from_str(&body)?;

    let posts = envelope
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|raw| NewsPost {
            published_at: raw.published_at.unwrap_or_default(),
            title: raw.title.unwrap_or_default(),
            url: raw.url.and_then(|u| web_link(&u)),
        })
        .collect();

    Ok(posts)
}

// Only http(s) links are rendered as anchors; anything else is dropped.
fn web_link(raw: &str) -> Option<String> {
    let raw = raw.trim();
    match Url::parse(raw) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => Some(raw.to_string()),
        _ => None,
    }
}
