// SPDX-License-Identifier: MPL-2.0
//! `promptlens` is a small AI-image metadata inspector built with the Iced
//! GUI framework.
//!
//! Drop a PNG (or pick one with the native dialog), and the image is uploaded
//! to an external metadata-extraction service; the returned record is shown
//! in a table. It demonstrates a typed upload workflow, user preference
//! management with a light/dark theme, internationalization with Fluent, and
//! modular UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod extraction;
pub mod i18n;
pub mod ui;
