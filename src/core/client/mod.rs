//! Public client surface + builder.
//! Endpoint defaults live in `constants`.

mod constants;

use crate::core::{RadarError, Secrets};
use constants::{
    DEFAULT_ASSET_ID, DEFAULT_BASE_NEWS, DEFAULT_BASE_PRICE, DEFAULT_BASE_SENTIMENT,
    DEFAULT_BASE_TRANSLATE, DEFAULT_NEWS_SYMBOL, DEFAULT_TARGET_LANG, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared HTTP client plus the endpoint and credential configuration for every fetcher.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct RadarClient {
    http: Client,
    base_price: Url,
    base_sentiment: Url,
    base_news: Url,
    base_translate: Url,

    asset_id: String,
    news_symbol: String,
    target_lang: String,

    secrets: Secrets,
}

impl RadarClient {
    /// Create a new builder.
    pub fn builder() -> RadarClientBuilder {
        RadarClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_price(&self) -> &Url {
        &self.base_price
    }
    pub(crate) fn base_sentiment(&self) -> &Url {
        &self.base_sentiment
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_translate(&self) -> &Url {
        &self.base_translate
    }
    pub(crate) fn secrets(&self) -> &Secrets {
        &self.secrets
    }

    /// CoinGecko id of the tracked asset (e.g. `bitcoin`).
    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    /// Currency symbol the news feed is filtered by (e.g. `BTC`).
    pub fn news_symbol(&self) -> &str {
        &self.news_symbol
    }

    /// Target language code sent to the translator (e.g. `JA`).
    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`RadarClient`]. Only [`secrets`](Self::secrets) is required.
#[derive(Default)]
pub struct RadarClientBuilder {
    user_agent: Option<String>,
    base_price: Option<Url>,
    base_sentiment: Option<Url>,
    base_news: Option<Url>,
    base_translate: Option<Url>,

    asset_id: Option<String>,
    news_symbol: Option<String>,
    target_lang: Option<String>,

    secrets: Option<Secrets>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl RadarClientBuilder {
    /// Provide the API credentials. Required.
    #[must_use]
    pub fn secrets(mut self, secrets: Secrets) -> Self {
        self.secrets = Some(secrets);
        self
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the price API base (e.g., `https://api.coingecko.com/api/v3/`).
    #[must_use]
    pub fn base_price(mut self, url: Url) -> Self {
        self.base_price = Some(url);
        self
    }

    /// Override the sentiment API base (e.g., `https://api.alternative.me/`).
    #[must_use]
    pub fn base_sentiment(mut self, url: Url) -> Self {
        self.base_sentiment = Some(url);
        self
    }

    /// Override the news API base (e.g., `https://cryptopanic.com/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the translation API base (e.g., `https://api-free.deepl.com/`).
    #[must_use]
    pub fn base_translate(mut self, url: Url) -> Self {
        self.base_translate = Some(url);
        self
    }

    /// Point every endpoint at one base URL. Handy for a single mock server.
    #[must_use]
    pub fn base_all(self, url: &Url) -> Self {
        self.base_price(url.clone())
            .base_sentiment(url.clone())
            .base_news(url.clone())
            .base_translate(url.clone())
    }

    /// Price asset id. Default: `bitcoin`.
    #[must_use]
    pub fn asset_id(mut self, id: impl Into<String>) -> Self {
        self.asset_id = Some(id.into());
        self
    }

    /// News currency filter. Default: `BTC`.
    #[must_use]
    pub fn news_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.news_symbol = Some(symbol.into());
        self
    }

    /// Translation target language. Default: `JA`.
    #[must_use]
    pub fn target_lang(mut self, lang: impl Into<String>) -> Self {
        self.target_lang = Some(lang.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Config`] if no secrets were supplied, or an HTTP/URL
    /// error if the underlying client cannot be constructed.
    pub fn build(self) -> Result<RadarClient, RadarError> {
        let secrets = self
            .secrets
            .ok_or_else(|| RadarError::Config("API secrets were not provided".into()))?;

        let base_price = with_trailing_slash(self.base_price.unwrap_or(Url::parse(DEFAULT_BASE_PRICE)?));
        let base_sentiment =
            with_trailing_slash(self.base_sentiment.unwrap_or(Url::parse(DEFAULT_BASE_SENTIMENT)?));
        let base_news = with_trailing_slash(self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?));
        let base_translate =
            with_trailing_slash(self.base_translate.unwrap_or(Url::parse(DEFAULT_BASE_TRANSLATE)?));

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(RadarClient {
            http,
            base_price,
            base_sentiment,
            base_news,
            base_translate,
            asset_id: self.asset_id.unwrap_or_else(|| DEFAULT_ASSET_ID.into()),
            news_symbol: self.news_symbol.unwrap_or_else(|| DEFAULT_NEWS_SYMBOL.into()),
            target_lang: self.target_lang.unwrap_or_else(|| DEFAULT_TARGET_LANG.into()),
            secrets,
        })
    }
}

// `Url::join` drops the last path segment unless the base ends in '/'.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
