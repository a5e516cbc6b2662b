// SPDX-License-Identifier: MPL-2.0
use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Upload(UploadError),
}

/// Specific error types for metadata upload failures.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The request never produced an HTTP response (DNS, refused, reset).
    Network(String),

    /// The service answered with a non-success status. `message` carries the
    /// human-readable text extracted from the response body, when present.
    Status { code: u16, message: Option<String> },

    /// The service answered 2xx but the body was not a metadata record.
    MalformedBody(String),

    /// The selected file could not be read before uploading.
    File(String),
}

/// Structured error payload the extraction service may return.
///
/// The original service emits `{"error": "..."}`; `message` is accepted as a
/// common alternative shape. Anything else decodes to no message and the UI
/// falls back to a generic localized string.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl UploadError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UploadError::Network(_) => "upload-error-network",
            UploadError::Status { .. } => "upload-error-status",
            UploadError::MalformedBody(_) => "upload-error-malformed",
            UploadError::File(_) => "upload-error-file",
        }
    }

    /// Builds a `Status` error from a non-2xx response body, extracting the
    /// service-provided message when the body decodes to a known error shape.
    pub fn status_from_body(code: u16, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.error.or(parsed.message))
            .filter(|text| !text.trim().is_empty());

        UploadError::Status { code, message }
    }

    /// The message supplied by the service, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            UploadError::Status {
                message: Some(text),
                ..
            } => Some(text.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Network(msg) => write!(f, "Network error: {}", msg),
            UploadError::Status {
                code,
                message: Some(msg),
            } => write!(f, "HTTP {}: {}", code, msg),
            UploadError::Status {
                code,
                message: None,
            } => write!(f, "HTTP {}", code),
            UploadError::MalformedBody(msg) => write!(f, "Malformed response: {}", msg),
            UploadError::File(msg) => write!(f, "File error: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Upload(e) => write!(f, "Upload Error: {}", e),
        }
    }
}

impl From<UploadError> for Error {
    fn from(err: UploadError) -> Self {
        Error::Upload(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
