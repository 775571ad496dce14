use super::super::state::App;
use super::Effect;
use crate::routes::Route;
use tracing::info;

impl App {
    pub(super) fn handle_navigate(&mut self, route: Route, effects: &mut Vec<Effect>) {
        if route == self.route {
            return;
        }
        info!(from = %self.route, to = %route, "Navigating");
        if matches!(route, Route::NotFound(_)) {
            tracing::warn!(path = %route, "Route not found");
        }
        self.route = route;
        if self.route == Route::Home {
            self.reset_hero_scroll(effects);
        }
        effects.push(Effect::ResetPageScroll);
    }

    /// Follows an in-app link such as `/science/black-holes` or `#about`.
    pub(super) fn handle_open_link(&mut self, link: String, effects: &mut Vec<Effect>) {
        if let Some(anchor) = link.strip_prefix('#') {
            if self.route != Route::Home {
                self.handle_navigate(Route::Home, effects);
            }
            let command = self.hero.selector.scroll_to_anchor(anchor);
            self.apply_selector_command(command, effects);
            return;
        }
        self.handle_navigate(Route::parse(&link), effects);
    }
}
