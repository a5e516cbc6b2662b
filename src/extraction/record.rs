// SPDX-License-Identifier: MPL-2.0
//! The metadata record returned by the extraction service.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

/// Fixed placeholder rendered for absent optional fields, keeping table
/// column alignment stable.
pub const FIELD_PLACEHOLDER: &str = "-";

/// The structured result of analyzing one image.
///
/// `prompt`, `width` and `height` are always present; everything else depends
/// on what the generating model embedded in the file. The service may send
/// optional fields as empty strings rather than omitting them, so display
/// accessors treat blank text the same as an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub prompt: String,
    pub width: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
    /// ISO-8601 timestamp, with or without a UTC offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Name of the AI model family the metadata was extracted from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_model: Option<String>,
}

impl MetadataRecord {
    pub fn origin_text(&self) -> String {
        text_or_placeholder(&self.source_model)
    }

    pub fn version_text(&self) -> String {
        text_or_placeholder(&self.version)
    }

    pub fn profile_text(&self) -> String {
        text_or_placeholder(&self.profile)
    }

    pub fn job_id_text(&self) -> String {
        text_or_placeholder(&self.job_id)
    }

    pub fn author_text(&self) -> String {
        text_or_placeholder(&self.author)
    }

    /// The creation timestamp rendered in the viewer's local time, the raw
    /// string when it cannot be parsed, or the placeholder when absent.
    pub fn date_text(&self) -> String {
        match &self.created_date {
            Some(raw) if !raw.trim().is_empty() => {
                format_local_timestamp(raw).unwrap_or_else(|| raw.clone())
            }
            _ => FIELD_PLACEHOLDER.to_string(),
        }
    }
}

fn text_or_placeholder(value: &Option<String>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.clone(),
        _ => FIELD_PLACEHOLDER.to_string(),
    }
}

/// Parses an ISO-8601 timestamp and formats it in local time.
///
/// Timestamps carrying a UTC offset are converted; naive timestamps (the
/// extraction service emits `datetime.isoformat()` without an offset) are
/// interpreted as local wall-clock time.
fn format_local_timestamp(raw: &str) -> Option<String> {
    let local: DateTime<Local> = if let Ok(aware) = DateTime::parse_from_rfc3339(raw) {
        aware.with_timezone(&Local)
    } else {
        let naive: NaiveDateTime = raw.parse().ok()?;
        Local.from_local_datetime(&naive).single()?
    };

    Some(local.format("%Y-%m-%d %H:%M:%S").to_string())
}
