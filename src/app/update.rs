// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to. The upload cycle lives in [`crate::app::workflow`]; the
//! handlers here wire component events to it and spawn the async tasks.

use super::workflow::{RequestId, Workflow};
use super::{persistence, Message};
use crate::error::UploadError;
use crate::extraction::{self, record::MetadataRecord};
use crate::i18n::fluent::I18n;
use crate::ui::dropzone::{self, Event as DropzoneEvent};
use crate::ui::theming::ThemeChoice;
use iced::Task;
use std::path::PathBuf;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a mut ThemeChoice,
    pub workflow: &'a mut Workflow,
    pub dropzone: &'a mut dropzone::State,
    pub endpoint: &'a str,
}

/// Handles dropzone component messages.
pub fn handle_dropzone_message(
    ctx: &mut UpdateContext<'_>,
    message: dropzone::Message,
) -> Task<Message> {
    match dropzone::update(message) {
        DropzoneEvent::None => Task::none(),
        DropzoneEvent::OpenFilePicker => open_file_picker(ctx.i18n),
    }
}

/// Opens the native file dialog. The PNG filter is advisory; platforms may
/// still let the user pick other files, which the extraction service rejects.
fn open_file_picker(i18n: &I18n) -> Task<Message> {
    let filter_name = i18n.tr("dropzone-filter-name");
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, &["png"])
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FilePicked,
    )
}

/// Handles a file dropped on the window. Only the head of a multi-file
/// gesture starts an upload; the tail is swallowed by the dropzone state.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    match ctx.dropzone.file_dropped(path) {
        Some(path) => begin_upload(ctx.workflow, ctx.endpoint, path),
        None => Task::none(),
    }
}

/// Handles the file dialog closing, with or without a selection.
pub fn handle_file_picked(
    ctx: &mut UpdateContext<'_>,
    selection: Option<PathBuf>,
) -> Task<Message> {
    match selection {
        Some(path) => begin_upload(ctx.workflow, ctx.endpoint, path),
        None => Task::none(),
    }
}

/// Starts an upload cycle for the selected file.
pub fn begin_upload(workflow: &mut Workflow, endpoint: &str, path: PathBuf) -> Task<Message> {
    let request = workflow.begin();
    let endpoint = endpoint.to_string();
    Task::perform(
        extraction::upload_image(endpoint, path),
        move |outcome| Message::UploadFinished { request, outcome },
    )
}

/// Applies an upload completion to the workflow. Completions for superseded
/// requests are dropped silently.
pub fn handle_upload_finished(
    ctx: &mut UpdateContext<'_>,
    request: RequestId,
    outcome: Result<MetadataRecord, UploadError>,
) -> Task<Message> {
    ctx.workflow.finish(request, outcome);
    Task::none()
}

/// Flips the theme and persists the new preference.
pub fn handle_theme_toggled(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme = ctx.theme.toggled();
    persistence::persist_theme(*ctx.theme)
}
