use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::Serialize;

/// Timestamp layout used for the capture caption.
pub(crate) const CAPTION_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A two-currency price snapshot, stamped when it was received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    /// Price in US dollars.
    pub usd: Decimal,
    /// Price in Japanese yen.
    pub jpy: Decimal,
    /// Client-side capture time (not the source's timestamp).
    pub fetched_at: DateTime<Utc>,
}

impl PriceQuote {
    /// `$65,000`
    #[must_use]
    pub fn usd_display(&self) -> String {
        format!("${}", group_thousands(self.usd))
    }

    /// `¥9,800,000`
    #[must_use]
    pub fn jpy_display(&self) -> String {
        format!("¥{}", group_thousands(self.jpy))
    }

    /// Capture time formatted in `tz`, or in the host's local zone when `None`.
    #[must_use]
    pub fn fetched_at_display(&self, tz: Option<Tz>) -> String {
        match tz {
            Some(tz) => self
                .fetched_at
                .with_timezone(&tz)
                .format(CAPTION_TIME_FORMAT)
                .to_string(),
            None => self
                .fetched_at
                .with_timezone(&Local)
                .format(CAPTION_TIME_FORMAT)
                .to_string(),
        }
    }
}

/// Formats `value` with `,` between every three integer digits.
///
/// Fractional digits are kept as returned by the source, minus trailing zeros.
#[must_use]
pub fn group_thousands(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}
