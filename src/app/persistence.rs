// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! This module handles saving user preferences to disk. Today that is the
//! theme choice; metadata results are deliberately never persisted.

use super::Message;
use crate::config;
use crate::ui::theming::ThemeChoice;
use iced::Task;

/// Persists the current theme choice to disk.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic by
/// calling `config::save_to_path` directly rather than through `Task`s.
pub fn persist_theme(theme: ThemeChoice) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let (mut cfg, _) = config::load();
    cfg.general.dark_mode = Some(theme.is_dark());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {}", error);
    }

    Task::none()
}
