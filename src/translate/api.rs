use crate::{
    core::{RadarClient, RadarError, net},
    translate::wire,
};

pub(super) async fn request_translation(
    client: &RadarClient,
    text: &str,
) -> Result<String, RadarError> {
    let url = client.base_translate().join("v2/translate")?;
    let form = wire::TranslateForm {
        auth_key: client.secrets().translate_api_key(),
        text,
        target_lang: client.target_lang(),
    };

    let resp = client.http().post(url).form(&form).send().await?;
    net::ensure_ok(&resp)?;

    let body = net::get_text(resp, "translate").await?;
    let envelope: wire::TranslateEnvelope = serde_json::from_str(&body)?;

    envelope
        .translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .ok_or_else(|| RadarError::Data("translate: empty translations array".into()))
}
