use super::super::super::messages::Message;
use super::super::super::state::{App, HOME_SCROLL_ID, PAGE_SCROLL_ID};
use super::super::Effect;
use crate::cache::{Preferences, save_preferences};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::{self, AbsoluteOffset, RelativeOffset};
use iced::window;
use tracing::{info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollHome { offset } => {
                scrollable::scroll_to(HOME_SCROLL_ID.clone(), AbsoluteOffset { x: 0.0, y: offset })
            }
            Effect::ResetPageScroll => Task::batch([
                scrollable::snap_to(HOME_SCROLL_ID.clone(), RelativeOffset::START),
                scrollable::snap_to(PAGE_SCROLL_ID.clone(), RelativeOffset::START),
            ]),
            Effect::SavePreferences => {
                self.persist_preferences();
                Task::none()
            }
            Effect::QuitSafely => {
                self.persist_preferences();
                info!("Shutting down");
                iced::exit()
            }
        }
    }

    fn persist_preferences(&self) {
        let preferences = Preferences::from_config(&self.config);
        if let Err(err) = save_preferences(&self.preferences_path, &preferences) {
            warn!(
                path = %self.preferences_path.display(),
                "Failed to save preferences: {err:#}"
            );
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    match event {
        // Resizes matter even when a widget captured the event.
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Window(window::Event::CloseRequested) => Some(Message::SafeQuit),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
