// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::app::workflow::RequestId;
use crate::error::UploadError;
use crate::extraction::record::MetadataRecord;
use crate::ui::dropzone;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Dropzone(dropzone::Message),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A dragged file entered the window.
    FileHovered(PathBuf),
    /// The drag left the window without dropping.
    FilesHoveredLeft,
    /// Result from the open file dialog.
    FilePicked(Option<PathBuf>),
    /// An upload request resolved.
    UploadFinished {
        request: RequestId,
        outcome: Result<MetadataRecord, UploadError>,
    },
    /// The theme toggle was pressed.
    ThemeToggled,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional extraction endpoint override.
    /// Takes precedence over the `[upload] endpoint` setting.
    pub endpoint: Option<String>,
    /// Optional image path to upload on startup.
    pub file_path: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `PROMPTLENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
