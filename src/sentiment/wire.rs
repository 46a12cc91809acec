use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct FngEnvelope {
    #[serde(default)]
    pub(crate) data: Vec<FngNode>,
}

#[derive(Deserialize)]
pub(crate) struct FngNode {
    pub(crate) value: ScoreValue,
    pub(crate) value_classification: String,
}

// The index ships the score as a string ("18"); accept a bare number too.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ScoreValue {
    Text(String),
    Number(i64),
}
