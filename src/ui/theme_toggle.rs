// SPDX-License-Identifier: MPL-2.0
//! Theme toggle button, pinned to the page header.
//!
//! Shows the mode the press switches to: "🌙 Night" while light, "☀️ Light"
//! while dark.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeChoice;
use iced::widget::{button, Text};
use iced::Element;

/// Contextual data needed to render the toggle.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: ThemeChoice,
}

/// Messages emitted by the toggle.
#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
}

/// The i18n key for the label matching the current theme.
pub fn label_key(theme: ThemeChoice) -> &'static str {
    if theme.is_dark() {
        "theme-toggle-light"
    } else {
        "theme-toggle-night"
    }
}

/// Render the toggle button.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(label_key(ctx.theme))).size(typography::BODY))
        .on_press(Message::Pressed)
        .padding([spacing::XXS, spacing::MD])
        .style(styles::button::outline)
        .into()
}
