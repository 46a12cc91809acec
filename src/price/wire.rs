use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;

/// `{"bitcoin": {"usd": 65000, "jpy": 9800000}}`, keyed by asset id.
#[derive(Deserialize)]
#[serde(transparent)]
pub(crate) struct PriceEnvelope {
    pub(crate) assets: HashMap<String, CurrencyMap>,
}

#[derive(Deserialize)]
pub(crate) struct CurrencyMap {
    pub(crate) usd: Option<Decimal>,
    pub(crate) jpy: Option<Decimal>,
}
