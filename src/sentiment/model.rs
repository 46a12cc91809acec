use serde::Serialize;

/// Scores at or below this are [`Band::Fear`].
pub const FEAR_MAX: u8 = 25;
/// Scores at or above this are [`Band::Greed`].
pub const GREED_MIN: u8 = 75;

/// Qualitative band of the Fear & Greed index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    /// Score at or below [`FEAR_MAX`].
    Fear,
    /// Anything between the two thresholds.
    Neutral,
    /// Score at or above [`GREED_MIN`].
    Greed,
}

impl Band {
    /// Banner text shown next to the score.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fear => "🟢 恐怖（買い傾向）",
            Self::Neutral => "🟡 中立（様子見）",
            Self::Greed => "🔴 欲望（売り傾向）",
        }
    }

    /// The fixed advisory message for the band.
    #[must_use]
    pub const fn advice(self) -> &'static str {
        match self {
            Self::Fear => "現在は市場に恐怖が広がっています。買いのチャンスかもしれません。",
            Self::Neutral => "市場は比較的落ち着いています。状況を見ながら戦略を立てましょう。",
            Self::Greed => "市場が強気すぎる状態です。利確や警戒が必要かもしれません。",
        }
    }

    /// Stable lowercase name, used as a CSS class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fear => "fear",
            Self::Neutral => "neutral",
            Self::Greed => "greed",
        }
    }
}

/// Maps a 0–100 score onto its band.
#[must_use]
pub const fn classify(score: u8) -> Band {
    if score <= FEAR_MAX {
        Band::Fear
    } else if score >= GREED_MIN {
        Band::Greed
    } else {
        Band::Neutral
    }
}

/// The latest Fear & Greed reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentReading {
    /// Index value, 0 (extreme fear) to 100 (extreme greed).
    pub score: u8,
    /// The source's own label, e.g. `Extreme Fear`.
    pub classification: String,
    /// Band derived from `score`.
    pub band: Band,
    /// Advisory message for `band`.
    pub advice: &'static str,
}

impl SentimentReading {
    /// Classifies `score` and attaches the band's advice.
    #[must_use]
    pub fn new(score: u8, classification: impl Into<String>) -> Self {
        let band = classify(score);
        Self {
            score,
            classification: classification.into(),
            band,
            advice: band.advice(),
        }
    }
}
