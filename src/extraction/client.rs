// SPDX-License-Identifier: MPL-2.0
//! The single HTTP call this application makes: upload an image, get a
//! metadata record back.

use crate::error::UploadError;
use crate::extraction::record::MetadataRecord;
use std::path::{Path, PathBuf};

/// Multipart field name the extraction service expects the image under.
pub const UPLOAD_FIELD: &str = "image";

/// Uploads the image at `path` to the extraction endpoint and decodes the
/// response into a [`MetadataRecord`].
///
/// The request is a single multipart POST carrying the raw file bytes, the
/// original filename, and a MIME type inferred from the extension. Success is
/// an HTTP 2xx status whose body decodes as one record; everything else maps
/// onto the [`UploadError`] taxonomy. No retry, no timeout beyond the
/// transport's own defaults.
pub async fn upload_image(
    endpoint: String,
    path: PathBuf,
) -> Result<MetadataRecord, UploadError> {
    let bytes = std::fs::read(&path).map_err(|e| UploadError::File(e.to_string()))?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image.png")
        .to_string();

    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime_for(&path))
        .map_err(|e| UploadError::File(e.to_string()))?;
    let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

    let client = reqwest::Client::builder()
        .user_agent(concat!("PromptLens/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| UploadError::Network(e.to_string()))?;

    let response = client
        .post(&endpoint)
        .multipart(form)
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(UploadError::status_from_body(status.as_u16(), &body));
    }

    serde_json::from_slice(&body).map_err(|e| UploadError::MalformedBody(e.to_string()))
}

/// MIME type for the upload part, inferred from the file extension the same
/// way a browser would label the file. Unknown extensions fall back to a
/// generic binary type and let the service decide.
fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_for_recognizes_png() {
        assert_eq!(mime_for(Path::new("/tmp/shot.png")), "image/png");
        assert_eq!(mime_for(Path::new("/tmp/SHOT.PNG")), "image/png");
    }

    #[test]
    fn mime_for_recognizes_jpeg_variants() {
        assert_eq!(mime_for(Path::new("a.jpg")), "image/jpeg");
        assert_eq!(mime_for(Path::new("a.jpeg")), "image/jpeg");
    }

    #[test]
    fn mime_for_falls_back_for_unknown_extensions() {
        assert_eq!(mime_for(Path::new("archive.zip")), "application/octet-stream");
        assert_eq!(mime_for(Path::new("no_extension")), "application/octet-stream");
    }

    #[tokio::test]
    async fn missing_file_maps_to_file_error() {
        let result = upload_image(
            "http://localhost:8000/api/extract-metadata".to_string(),
            PathBuf::from("/definitely/not/a/real/file.png"),
        )
        .await;
        assert!(matches!(result, Err(UploadError::File(_))));
    }
}
