use reqwest::{Response, StatusCode};
use url::Url;

use crate::core::RadarError;

/// Query parameters that carry credentials and must never be logged.
const SECRET_PARAMS: &[&str] = &["auth_token", "auth_key"];

/// Read the response body as text, logging its size.
pub(crate) async fn get_text(resp: Response, endpoint: &str) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;
    tracing::trace!(endpoint, bytes = text.len(), "response body received");
    Ok(text)
}

/// Map any non-2xx status to [`RadarError::Status`].
pub(crate) fn ensure_success(resp: &Response) -> Result<(), RadarError> {
    if resp.status().is_success() {
        return Ok(());
    }
    Err(status_error(resp.status(), resp.url()))
}

/// Map anything but exactly `200 OK` to [`RadarError::Status`].
pub(crate) fn ensure_ok(resp: &Response) -> Result<(), RadarError> {
    if resp.status() == StatusCode::OK {
        return Ok(());
    }
    Err(status_error(resp.status(), resp.url()))
}

fn status_error(status: StatusCode, url: &Url) -> RadarError {
    RadarError::Status {
        status: status.as_u16(),
        url: redacted(url),
    }
}

/// Render `url` with credential query values replaced by `***`.
pub(crate) fn redacted(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| is_secret(&k)) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if is_secret(&k) {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut out = url.clone();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}

fn is_secret(key: &str) -> bool {
    SECRET_PARAMS.contains(&key)
}
