mod reducer;
mod runtime;
mod shortcuts;

use super::super::messages::Message;
use super::super::state::App;
use iced::event;
use iced::time;
use iced::window;
use iced::{Subscription, Task};
use std::time::{Duration, Instant};

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(Duration::from_millis(250)).map(|_| Message::PollSystemSignals),
        ];

        let hero_busy = app.hero.needs_frame(Instant::now(), &app.motion_policy());
        if hero_busy || app.starfield_spinning() {
            subscriptions.push(window::frames().map(Message::Frame));
        }
        if !app.toasts.is_empty() {
            subscriptions.push(time::every(Duration::from_millis(200)).map(Message::ToastTick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
