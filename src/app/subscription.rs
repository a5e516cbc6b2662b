// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The single page only cares about native file drag-and-drop events; they
//! are routed here into top-level messages. Everything else stays with the
//! widgets that produced it.

use super::Message;
use iced::{event, Subscription};

/// Creates the window event subscription for the drop target.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Window(iced::window::Event::FileHovered(path)) => {
            Some(Message::FileHovered(path))
        }
        event::Event::Window(iced::window::Event::FilesHoveredLeft) => {
            Some(Message::FilesHoveredLeft)
        }
        _ => None,
    })
}
