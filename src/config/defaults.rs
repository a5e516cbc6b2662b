// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Default URL of the metadata-extraction service.
///
/// Matches the development setup where the extraction service listens on a
/// fixed local port. Override with `[upload] endpoint` in `settings.toml` or
/// the `--endpoint` CLI flag.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/extract-metadata";
