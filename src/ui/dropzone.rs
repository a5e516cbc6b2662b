// SPDX-License-Identifier: MPL-2.0
//! Image intake component: a drop target plus a native file-picker button.
//!
//! Drops arrive through window events routed by the app subscription; this
//! module only owns the per-gesture bookkeeping and the rendering. Policy:
//! one image at a time. When several files are dropped together, the first
//! one wins and the rest are silently ignored.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, container, Column, Container, Text};
use iced::{Background, Border, Color, Element, Length, Theme};

/// Contextual data needed to render the drop target.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether files are currently being dragged over the window.
    pub hovering: bool,
}

/// Messages emitted by the component.
#[derive(Debug, Clone)]
pub enum Message {
    BrowsePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    OpenFilePicker,
}

/// Process a dropzone message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::BrowsePressed => Event::OpenFilePicker,
    }
}

/// Per-gesture drop bookkeeping.
///
/// The windowing layer delivers one `FileDropped` event per file, so a
/// multi-file drop arrives as a burst. Hover events are counted while the
/// drag is over the window; the first drop of a burst is accepted and the
/// remaining `hovered - 1` drops are swallowed. Platforms that do not emit
/// hover events degrade to accepting every drop (last one wins).
#[derive(Debug, Default)]
pub struct State {
    hovered: usize,
    pending_ignores: usize,
}

impl State {
    /// A file entered the window while dragging.
    pub fn file_hovered(&mut self) {
        self.hovered += 1;
    }

    /// The drag left the window without dropping.
    pub fn hover_cancelled(&mut self) {
        self.hovered = 0;
    }

    /// Whether a drag is currently over the window (drives the highlight).
    pub fn is_hovering(&self) -> bool {
        self.hovered > 0
    }

    /// Registers a dropped file. Returns the file when it is the accepted
    /// head of the gesture, `None` for the ignored tail of a multi-file drop.
    pub fn file_dropped(&mut self, path: std::path::PathBuf) -> Option<std::path::PathBuf> {
        if self.pending_ignores > 0 {
            self.pending_ignores -= 1;
            return None;
        }
        self.pending_ignores = self.hovered.saturating_sub(1);
        self.hovered = 0;
        Some(path)
    }
}

/// Render the drop target with its browse button.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let hint = Text::new(ctx.i18n.tr("dropzone-hint")).size(typography::BODY_LG);

    let browse = button(Text::new(ctx.i18n.tr("dropzone-browse")).size(typography::BODY))
        .on_press(Message::BrowsePressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(hint)
        .push(browse);

    let hovering = ctx.hovering;
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(Horizontal::Center)
        .style(move |theme: &Theme| drop_target_style(theme, hovering))
        .into()
}

/// Style function for the drop target outline; highlighted while hovering.
fn drop_target_style(theme: &Theme, hovering: bool) -> container::Style {
    let palette_ext = theme.extended_palette();

    let (border_color, background) = if hovering {
        (
            palette::PRIMARY_500,
            Some(Background::Color(Color {
                a: opacity::TINT,
                ..palette::PRIMARY_500
            })),
        )
    } else {
        (palette_ext.background.strong.color, None)
    };

    container::Style {
        background,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
