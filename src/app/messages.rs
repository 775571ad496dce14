use super::state::{ContactField, NewsletterField};
use crate::routes::Route;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and the runtime subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    OpenLink(String),
    HomeScrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    WindowResized {
        width: f32,
        height: f32,
    },
    Frame(Instant),
    JumpToSlide(usize),
    NextSlide,
    PreviousSlide,
    ToggleReducedMotion,
    ToggleTheme,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    NewsletterFieldChanged(NewsletterField, String),
    NewsletterSubmitted,
    ContactFieldChanged(ContactField, String),
    ContactSubmitted,
    DismissToast(u64),
    ToastTick(Instant),
    SafeQuit,
    PollSystemSignals,
}
