// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module renders the single page: header with the theme toggle, the
//! drop target, the workflow status line or error banner, and the results
//! table. What is visible follows the workflow phase.

use super::{Message, Phase, Workflow};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::dropzone::{self, ViewContext as DropzoneViewContext};
use crate::ui::metadata_table::{self, ViewContext as TableViewContext};
use crate::ui::styles;
use crate::ui::theme_toggle::{self, ViewContext as ToggleViewContext};
use crate::ui::theming::ThemeChoice;
use iced::alignment::Vertical;
use iced::widget::{scrollable, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: ThemeChoice,
    pub workflow: &'a Workflow,
    pub drop_hovering: bool,
}

/// Renders the page based on the current workflow phase.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .push(header(&ctx))
        .push(
            dropzone::view(DropzoneViewContext {
                i18n: ctx.i18n,
                hovering: ctx.drop_hovering,
            })
            .map(Message::Dropzone),
        );

    match ctx.workflow.phase() {
        Phase::Loading => {
            page = page.push(
                Text::new(ctx.i18n.tr("status-extracting")).size(typography::BODY_LG),
            );
        }
        Phase::Error => {
            if let Some(error) = ctx.workflow.error() {
                let message = error
                    .server_message()
                    .map(str::to_string)
                    .unwrap_or_else(|| ctx.i18n.tr(error.i18n_key()));
                page = page.push(
                    Container::new(Text::new(message).size(typography::BODY))
                        .width(Length::Fill)
                        .padding(spacing::SM)
                        .style(styles::container::error_banner),
                );
            }
        }
        Phase::Idle | Phase::Success => {}
    }

    page = page.push(metadata_table::view(TableViewContext {
        i18n: ctx.i18n,
        records: ctx.workflow.records(),
    }));

    scrollable(page).width(Length::Fill).height(Length::Fill).into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("app-title")).size(typography::TITLE_LG);

    let toggle = theme_toggle::view(ToggleViewContext {
        i18n: ctx.i18n,
        theme: ctx.theme,
    })
    .map(|theme_toggle::Message::Pressed| Message::ThemeToggled);

    Row::new()
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_page_renders() {
        let i18n = I18n::default();
        let workflow = Workflow::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            theme: ThemeChoice::Light,
            workflow: &workflow,
            drop_hovering: false,
        });
    }

    #[test]
    fn loading_page_renders() {
        let i18n = I18n::default();
        let mut workflow = Workflow::default();
        workflow.begin();
        let _element = view(ViewContext {
            i18n: &i18n,
            theme: ThemeChoice::Dark,
            workflow: &workflow,
            drop_hovering: true,
        });
    }

    #[test]
    fn error_page_renders() {
        let i18n = I18n::default();
        let mut workflow = Workflow::default();
        let request = workflow.begin();
        workflow.finish(
            request,
            Err(crate::error::UploadError::Status {
                code: 500,
                message: Some("Internal server error".to_string()),
            }),
        );
        let _element = view(ViewContext {
            i18n: &i18n,
            theme: ThemeChoice::Light,
            workflow: &workflow,
            drop_hovering: false,
        });
    }
}
