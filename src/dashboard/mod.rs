//! Page assembly: runs every section in order and collects the results into a [`Page`].

mod model;

pub use model::{NEWS_LIMIT, NewsItem, NewsSection, Page, PriceView};

use std::path::PathBuf;

use chrono_tz::Tz;

use crate::{
    asset::{self, DEFAULT_LOGO_FILE, DEFAULT_LOGO_WIDTH},
    core::{RadarClient, RadarError},
    news::{NewsBuilder, NewsPost},
    price, sentiment,
    translate::Translator,
};

/// Page-level settings that are not tied to any remote endpoint.
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Image embedded in the header.
    pub logo_path: PathBuf,
    /// Where the logo links to.
    pub logo_link: String,
    /// Logo width in pixels.
    pub logo_width: u32,
    /// Zone for the price capture caption; `None` means the host's local time.
    pub timezone: Option<Tz>,
    /// Translation requests allowed in flight at once. 1 keeps them strictly sequential.
    pub translate_concurrency: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from("assets").join(DEFAULT_LOGO_FILE),
            logo_link: "/".into(),
            logo_width: DEFAULT_LOGO_WIDTH,
            timezone: None,
            translate_concurrency: 1,
        }
    }
}

/// Builds a fresh [`Page`] on every call.
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: RadarClient,
    translator: Translator,
    options: DashboardOptions,
}

impl Dashboard {
    /// A dashboard sharing `client`'s connection pool and credentials.
    pub fn new(client: &RadarClient, options: DashboardOptions) -> Self {
        Self {
            client: client.clone(),
            translator: Translator::new(client).concurrency(options.translate_concurrency),
            options,
        }
    }

    /// Runs logo, price, sentiment and news in that order.
    ///
    /// Never fails: a section that cannot be produced carries a banner instead.
    #[tracing::instrument(skip(self))]
    pub async fn build(&self) -> Page {
        let logo = self.logo_section().await;
        let price = self.price_section().await;
        let sentiment = self.sentiment_section().await;
        let news = self.news_section().await;

        tracing::info!(
            logo = logo.is_ok(),
            price = price.is_ok(),
            sentiment = sentiment.is_ok(),
            news_items = news.items.len(),
            "dashboard built"
        );

        Page {
            logo,
            price,
            sentiment,
            news,
        }
    }

    async fn logo_section(&self) -> Result<String, String> {
        let opts = &self.options;
        let loaded = asset::load_logo(&opts.logo_path, opts.logo_link.as_str(), opts.logo_width)
            .await
            .and_then(|logo| logo.markup());
        loaded.map_err(|e| {
            tracing::warn!(error = %e, "logo unavailable");
            format!(
                "エラー: 画像ファイルが見つかりません。パスを確認してください: {}",
                opts.logo_path.display()
            )
        })
    }

    async fn price_section(&self) -> Result<PriceView, String> {
        price::fetch_price(&self.client)
            .await
            .map(|quote| PriceView::new(quote, self.options.timezone))
            .map_err(|e| {
                tracing::warn!(error = %e, "price section degraded");
                format!("価格データの取得に失敗しました: {e}")
            })
    }

    async fn sentiment_section(&self) -> Result<sentiment::SentimentReading, String> {
        sentiment::fetch_sentiment(&self.client).await.map_err(|e| {
            tracing::warn!(error = %e, "sentiment section degraded");
            format!("心理指数の取得に失敗しました: {e}")
        })
    }

    async fn news_section(&self) -> NewsSection {
        let (posts, banner) = match NewsBuilder::new(&self.client).fetch().await {
            Ok(posts) => (posts, None),
            Err(e) => {
                tracing::warn!(error = %e, "news section degraded");
                (Vec::new(), Some(news_banner(&e)))
            }
        };

        NewsSection {
            items: self.translate_posts(posts).await,
            banner,
        }
    }

    async fn translate_posts(&self, mut posts: Vec<NewsPost>) -> Vec<NewsItem> {
        posts.truncate(NEWS_LIMIT);
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        let translated = self.translator.translate_all(&titles).await;

        posts
            .into_iter()
            .zip(translated)
            .map(|(post, title_translated)| NewsItem {
                published_date: post.published_date().to_string(),
                title_original: post.title,
                title_translated,
                url: post.url,
            })
            .collect()
    }
}

fn news_banner(err: &RadarError) -> String {
    match err.status() {
        Some(code) => format!("ニュース取得失敗（Status: {code}）"),
        None => format!("ニュース取得失敗（{err}）"),
    }
}
