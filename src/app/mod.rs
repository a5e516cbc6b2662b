// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires the intake, display, and theme components to the
//! upload workflow and translates messages into side effects like config
//! persistence or the upload request. Policy decisions (window sizing,
//! endpoint resolution, startup upload) stay close to the main update loop
//! so user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;
pub mod workflow;

pub use message::{Flags, Message};
pub use workflow::{Phase, RequestId, Workflow};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::dropzone;
use crate::ui::theming::ThemeChoice;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    theme: ThemeChoice,
    workflow: Workflow,
    dropzone: dropzone::State,
    /// Resolved extraction endpoint (CLI flag > config > default).
    endpoint: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.workflow.phase())
            .field("theme", &self.theme)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 600;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme: ThemeChoice::Light,
            workflow: Workflow::default(),
            dropzone: dropzone::State::default(),
            endpoint: config::DEFAULT_ENDPOINT.to_string(),
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off the startup
    /// upload based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (cfg, config_warning) = config::load();
        if let Some(warning) = config_warning {
            eprintln!("{}", warning);
        }

        let i18n = I18n::new(flags.lang, flags.i18n_dir, &cfg);
        let theme = ThemeChoice::from_stored(cfg.general.dark_mode);
        let endpoint = flags.endpoint.unwrap_or_else(|| cfg.endpoint());

        let mut app = App {
            i18n,
            theme,
            endpoint,
            ..Self::default()
        };

        // A path on the command line behaves exactly like a dropped file.
        let task = match flags.file_path {
            Some(path) => {
                update::begin_upload(&mut app.workflow, &app.endpoint, PathBuf::from(path))
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            theme: &mut self.theme,
            workflow: &mut self.workflow,
            dropzone: &mut self.dropzone,
            endpoint: &self.endpoint,
        };

        match message {
            Message::Dropzone(dropzone_message) => {
                update::handle_dropzone_message(&mut ctx, dropzone_message)
            }
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::FileHovered(_) => {
                ctx.dropzone.file_hovered();
                Task::none()
            }
            Message::FilesHoveredLeft => {
                ctx.dropzone.hover_cancelled();
                Task::none()
            }
            Message::FilePicked(selection) => update::handle_file_picked(&mut ctx, selection),
            Message::UploadFinished { request, outcome } => {
                update::handle_upload_finished(&mut ctx, request, outcome)
            }
            Message::ThemeToggled => update::handle_theme_toggled(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            theme: self.theme,
            workflow: &self.workflow,
            drop_hovering: self.dropzone.is_hovering(),
        })
    }
}
