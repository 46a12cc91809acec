//! Headline translation with a fixed, never-failing fallback.

mod api;
mod wire;

use futures::{StreamExt, stream};

use crate::core::RadarClient;

/// Appended to the original text when translation is unavailable.
pub const FALLBACK_MARKER: &str = "（翻訳失敗）";

/// The value substituted for `text` when it could not be translated.
#[must_use]
pub fn fallback(text: &str) -> String {
    format!("{text}{FALLBACK_MARKER}")
}

/// Translates headlines into the client's target language.
///
/// Every call yields a string: the translation on success, otherwise the
/// original followed by [`FALLBACK_MARKER`].
#[derive(Debug, Clone)]
pub struct Translator {
    client: RadarClient,
    concurrency: usize,
}

impl Translator {
    /// A sequential translator (one request in flight at a time).
    pub fn new(client: &RadarClient) -> Self {
        Self {
            client: client.clone(),
            concurrency: 1,
        }
    }

    /// Allow up to `n` requests in flight during [`translate_all`](Self::translate_all).
    /// Output order always matches input order. Values below 1 are treated as 1.
    #[must_use]
    pub fn concurrency(mut self, n: usize) -> Self {
        self.concurrency = n.max(1);
        self
    }

    /// Translates one text.
    pub async fn translate(&self, text: &str) -> String {
        match api::request_translation(&self.client, text).await {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(error = %e, "translation failed, keeping original text");
                fallback(text)
            }
        }
    }

    /// Translates every text, preserving order. Each item falls back independently.
    pub async fn translate_all<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        // Owned items keep the returned future `Send` for axum handlers.
        let owned: Vec<String> = texts.iter().map(|t| t.as_ref().to_owned()).collect();
        stream::iter(owned)
            .map(|t| async move { self.translate(&t).await })
            .buffered(self.concurrency)
            .collect()
            .await
    }
}
