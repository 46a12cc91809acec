use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct PostsEnvelope {
    pub(crate) results: Option<Vec<RawPost>>,
}

#[derive(Deserialize)]
pub(crate) struct RawPost {
    pub(crate) published_at: Option<String>,
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
}
