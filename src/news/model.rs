use serde::Serialize;

/// A single post from the news feed, as returned by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsPost {
    /// Publication timestamp as sent by the source (ISO 8601).
    pub published_at: String,
    /// The headline, untranslated.
    pub title: String,
    /// Link to the article, if the source provided a non-empty one.
    pub url: Option<String>,
}

impl NewsPost {
    /// The `YYYY-MM-DD` prefix of `published_at`.
    #[must_use]
    pub fn published_date(&self) -> &str {
        match self.published_at.char_indices().nth(10) {
            Some((idx, _)) => &self.published_at[..idx],
            None => &self.published_at,
        }
    }
}
