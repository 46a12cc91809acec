//! Startup secrets.
//!
//! Both API keys are read exactly once, validated, and then handed to the
//! [`RadarClient`](crate::RadarClient) builder. Nothing in the request path
//! looks them up again.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::core::RadarError;

/// Environment variable holding the CryptoPanic token.
pub const NEWS_KEY_ENV: &str = "CRYPTOPANIC_API_KEY";
/// Environment variable holding the DeepL auth key.
pub const TRANSLATE_KEY_ENV: &str = "DEEPL_API_KEY";

/// The two credentials the dashboard needs.
#[derive(Clone, PartialEq, Eq)]
pub struct Secrets {
    news_api_key: String,
    translate_api_key: String,
}

// Keys never reach logs.
impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("news_api_key", &"***")
            .field("translate_api_key", &"***")
            .finish()
    }
}

#[derive(Deserialize)]
struct SecretsFile {
    cryptopanic: Option<KeyTable>,
    deepl: Option<KeyTable>,
}

#[derive(Deserialize)]
struct KeyTable {
    api_key: Option<String>,
}

impl Secrets {
    /// Builds secrets from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Config`] if either key is empty or whitespace.
    pub fn new(
        news_api_key: impl Into<String>,
        translate_api_key: impl Into<String>,
    ) -> Result<Self, RadarError> {
        let news_api_key = require("news API key", NEWS_KEY_ENV, Some(news_api_key.into()))?;
        let translate_api_key = require(
            "translation API key",
            TRANSLATE_KEY_ENV,
            Some(translate_api_key.into()),
        )?;
        Ok(Self {
            news_api_key,
            translate_api_key,
        })
    }

    /// Reads both keys from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Config`] naming the first missing variable.
    pub fn from_env() -> Result<Self, RadarError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads both keys through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Config`] naming the first missing variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, RadarError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            news_api_key: require("news API key", NEWS_KEY_ENV, lookup(NEWS_KEY_ENV))?,
            translate_api_key: require(
                "translation API key",
                TRANSLATE_KEY_ENV,
                lookup(TRANSLATE_KEY_ENV),
            )?,
        })
    }

    /// Parses a secrets document of the form
    ///
    /// ```toml
    /// [cryptopanic]
    /// api_key = "..."
    ///
    /// [deepl]
    /// api_key = "..."
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Config`] if the document is not valid TOML or a key is missing.
    pub fn from_toml_str(doc: &str) -> Result<Self, RadarError> {
        let file: SecretsFile = toml::from_str(doc)
            .map_err(|e| RadarError::Config(format!("invalid secrets file: {e}")))?;
        Ok(Self {
            news_api_key: require(
                "news API key",
                "[cryptopanic] api_key",
                file.cryptopanic.and_then(|t| t.api_key),
            )?,
            translate_api_key: require(
                "translation API key",
                "[deepl] api_key",
                file.deepl.and_then(|t| t.api_key),
            )?,
        })
    }

    /// Reads and parses a secrets file.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RadarError> {
        let path = path.as_ref();
        let doc = std::fs::read_to_string(path).map_err(|e| {
            RadarError::Config(format!("cannot read secrets file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&doc)
    }

    pub(crate) fn news_api_key(&self) -> &str {
        &self.news_api_key
    }

    pub(crate) fn translate_api_key(&self) -> &str {
        &self.translate_api_key
    }
}

fn require(what: &str, source: &str, value: Option<String>) -> Result<String, RadarError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(RadarError::Config(format!("missing {what} ({source})"))),
    }
}
