// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the results table.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Error banner: red text on a faint red tint, visible only while the
/// workflow is in the error state.
pub fn error_banner(_theme: &Theme) -> container::Style {
    container::Style {
        text_color: Some(palette::ERROR_500),
        background: Some(Background::Color(Color {
            a: opacity::TINT,
            ..palette::ERROR_500
        })),
        border: Border {
            color: palette::ERROR_500,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
