use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct TranslateForm<'a> {
    pub(crate) auth_key: &'a str,
    pub(crate) text: &'a str,
    pub(crate) target_lang: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct TranslateEnvelope {
    #[serde(default)]
    pub(crate) translations: Vec<Translation>,
}

#[derive(Deserialize)]
pub(crate) struct Translation {
    pub(crate) text: String,
}
