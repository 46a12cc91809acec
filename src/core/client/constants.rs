//! Centralized constants for default endpoints and UA.

/// Identifies the dashboard to the upstream APIs.
pub(crate) const USER_AGENT: &str = concat!("btc-fund-radar/", env!("CARGO_PKG_VERSION"));

/// CoinGecko API base (`simple/price` is joined onto it).
pub(crate) const DEFAULT_BASE_PRICE: &str = "https://api.coingecko.com/api/v3/";

/// alternative.me base (`fng/` is joined onto it).
pub(crate) const DEFAULT_BASE_SENTIMENT: &str = "https://api.alternative.me/";

/// CryptoPanic base (`api/v1/posts/` is joined onto it).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://cryptopanic.com/";

/// DeepL free-tier base (`v2/translate` is joined onto it).
pub(crate) const DEFAULT_BASE_TRANSLATE: &str = "https://api-free.deepl.com/";

/// CoinGecko asset id.
pub(crate) const DEFAULT_ASSET_ID: &str = "bitcoin";

/// CryptoPanic currency filter.
pub(crate) const DEFAULT_NEWS_SYMBOL: &str = "BTC";

/// DeepL target language code.
pub(crate) const DEFAULT_TARGET_LANG: &str = "JA";
