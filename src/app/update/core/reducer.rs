use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Navigate(route) => self.handle_navigate(route, &mut effects),
            Message::OpenLink(path) => self.handle_open_link(path, &mut effects),
            Message::HomeScrolled {
                offset_y,
                viewport_height,
            } => self.handle_home_scrolled(offset_y, viewport_height, &mut effects),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height, &mut effects);
            }
            Message::Frame(now) => {
                self.handle_frame(now, &mut effects);
                self.handle_starfield_frame(now);
            }
            Message::JumpToSlide(index) => self.handle_jump_to_slide(index, &mut effects),
            Message::NextSlide => self.handle_next_slide(&mut effects),
            Message::PreviousSlide => self.handle_previous_slide(&mut effects),
            Message::ToggleReducedMotion => self.handle_toggle_reduced_motion(&mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(&mut effects),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::NewsletterFieldChanged(field, value) => self.newsletter.set(field, value),
            Message::NewsletterSubmitted => self.handle_newsletter_submitted(),
            Message::ContactFieldChanged(field, value) => self.contact.set(field, value),
            Message::ContactSubmitted => self.handle_contact_submitted(),
            Message::DismissToast(id) => {
                if self.toasts.dismiss(id) {
                    debug!(id, "Dismissed toast");
                }
            }
            Message::ToastTick(now) => {
                let expired = self.toasts.expire(now, self.config.toast_lifetime());
                if expired > 0 {
                    debug!(expired, "Expired toasts");
                }
            }
            Message::SafeQuit => effects.push(Effect::QuitSafely),
            Message::PollSystemSignals => self.handle_poll_system_signals(&mut effects),
        }

        effects
    }

    fn handle_toggle_theme(&mut self, effects: &mut Vec<Effect>) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = %self.config.theme, "Toggled theme");
        effects.push(Effect::SavePreferences);
    }

    fn handle_starfield_frame(&mut self, now: Instant) {
        if self.starfield_spinning() {
            self.starfield.tick(now);
        } else {
            self.starfield.pause();
        }
    }

    fn handle_poll_system_signals(&mut self, effects: &mut Vec<Effect>) {
        if crate::take_sigint_requested() {
            info!("SIGINT received; quitting");
            effects.push(Effect::QuitSafely);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::update::test_support::build_test_app;
    use crate::config::{AppConfig, ThemeMode};
    use crate::routes::Route;
    use std::time::Duration;

    #[test]
    fn theme_toggle_requests_persistence() {
        let mut app = build_test_app(AppConfig::default());
        let effects = app.reduce(Message::ToggleTheme);
        assert_eq!(app.config.theme, ThemeMode::Day);
        assert!(
            effects
                .iter()
                .any(|effect| matches!(effect, Effect::SavePreferences))
        );
    }

    #[test]
    fn safe_quit_is_an_effect() {
        let mut app = build_test_app(AppConfig::default());
        assert_eq!(app.reduce(Message::SafeQuit), vec![Effect::QuitSafely]);
    }

    #[test]
    fn toasts_tick_away() {
        let mut app = build_test_app(AppConfig::default());
        let now = std::time::Instant::now();
        app.toasts.push("Hello", "world", now);
        app.reduce(Message::ToastTick(now + std::time::Duration::from_secs(1)));
        assert!(!app.toasts.is_empty());
        app.reduce(Message::ToastTick(
            now + app.config.toast_lifetime() + std::time::Duration::from_millis(1),
        ));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn starfield_spins_on_pages_and_freezes_under_reduced_motion() {
        let mut app = build_test_app(AppConfig::default());
        let start = Instant::now();
        app.reduce(Message::Frame(start));
        app.reduce(Message::Frame(start + Duration::from_millis(16)));
        assert_eq!(app.starfield.elapsed(), Duration::ZERO);

        app.reduce(Message::Navigate(Route::News));
        app.reduce(Message::Frame(start + Duration::from_millis(32)));
        app.reduce(Message::Frame(start + Duration::from_millis(48)));
        assert_eq!(app.starfield.elapsed(), Duration::from_millis(16));

        app.reduce(Message::ToggleReducedMotion);
        assert!(!app.starfield_spinning());
        app.reduce(Message::Frame(start + Duration::from_millis(64)));
        app.reduce(Message::Frame(start + Duration::from_millis(80)));
        assert_eq!(app.starfield.elapsed(), Duration::from_millis(16));
    }
}
