//! Inline logo: a local image embedded as a base64 `data:` URI inside a link.

use std::path::Path;

use askama::Template;
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::core::RadarError;

/// File name of the bundled logo inside the asset directory.
pub const DEFAULT_LOGO_FILE: &str = "hiroalufa8001.png";
/// Rendered logo width in pixels.
pub const DEFAULT_LOGO_WIDTH: u32 = 80;

/// An image ready to be embedded in the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    /// Where the image links to.
    pub link: String,
    /// MIME type inferred from the file extension.
    pub mime: &'static str,
    /// Base64 (standard alphabet, padded) of the file bytes.
    pub data: String,
    /// Width attribute in pixels.
    pub width: u32,
}

#[derive(Template)]
#[template(
    source = r#"<a href="{{ link }}"><img src="{{ data_uri|safe }}" width="{{ width }}"></a>"#,
    ext = "html"
)]
struct LogoMarkup<'a> {
    link: &'a str,
    data_uri: &'a str,
    width: u32,
}

impl Logo {
    /// `data:<mime>;base64,<data>`
    #[must_use]
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data)
    }

    /// The anchor-wrapped `<img>` element.
    ///
    /// # Errors
    ///
    /// Returns [`RadarError::Template`] if rendering fails.
    pub fn markup(&self) -> Result<String, RadarError> {
        let data_uri = self.data_uri();
        Ok(LogoMarkup {
            link: &self.link,
            data_uri: &data_uri,
            width: self.width,
        }
        .render()?)
    }
}

/// Reads `path` and prepares it for inline embedding behind `link`.
///
/// # Errors
///
/// Returns [`RadarError::Asset`] if the file cannot be read.
pub async fn load_logo(
    path: impl AsRef<Path>,
    link: impl Into<String>,
    width: u32,
) -> Result<Logo, RadarError> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| RadarError::Asset {
        path: path.display().to_string(),
        source,
    })?;

    Ok(Logo {
        link: link.into(),
        mime: mime_for(path),
        data: STANDARD.encode(bytes),
        width,
    })
}

/// Image MIME type by extension; unknown extensions are treated as PNG.
#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}
