use super::super::state::{App, HERO_TRACK_TOP};
use super::Effect;
use horizons_core::{JumpTarget, ScrollAnimation, SelectorCommand, SelectorEvent};
use std::time::Instant;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_window_resized(
        &mut self,
        width: f32,
        height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            debug!(width, height, "Ignoring degenerate window size");
            return;
        }
        self.window.width = width;
        self.window.height = height;
        self.remeasure_hero(height, effects);
    }

    pub(super) fn handle_home_scrolled(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        effects: &mut Vec<Effect>,
    ) {
        if let Some(animation) = self.hero.animation {
            if animation.is_interrupted_by(offset_y) {
                debug!(
                    observed = offset_y,
                    target = animation.target(),
                    "User scroll interrupted slide animation"
                );
                self.hero.animation = None;
                self.hero.selector.finish_jump();
            }
        }
        if viewport_height.is_finite()
            && viewport_height > 0.0
            && self.hero.viewport_height() != Some(viewport_height)
        {
            self.remeasure_hero(viewport_height, effects);
        }
        self.feed_selector(SelectorEvent::ScrollChanged(offset_y), effects);
    }

    pub(super) fn handle_frame(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        if let Some(animation) = self.hero.animation.as_mut() {
            let sample = animation.sample(now);
            if sample.finished {
                self.hero.animation = None;
                self.hero.selector.finish_jump();
            }
            self.scroll_home_to(sample.offset, effects);
        }
        if let Some(change) = self.hero.selector.on_frame() {
            self.hero.content_changed_at = Some(now);
            self.hero.previous_index = Some(change.previous);
            debug!(
                previous = change.previous,
                current = change.current,
                "Hero content switched"
            );
        }
    }

    pub(super) fn handle_jump_to_slide(&mut self, index: usize, effects: &mut Vec<Effect>) {
        info!(index, "Jump to slide requested");
        self.feed_selector(SelectorEvent::JumpRequested(index), effects);
    }

    pub(super) fn handle_next_slide(&mut self, effects: &mut Vec<Effect>) {
        self.feed_selector(SelectorEvent::NextRequested, effects);
    }

    pub(super) fn handle_previous_slide(&mut self, effects: &mut Vec<Effect>) {
        let active = self.hero.selector.active_index();
        if active == 0 {
            return;
        }
        self.handle_jump_to_slide(active - 1, effects);
    }

    pub(super) fn handle_toggle_reduced_motion(&mut self, effects: &mut Vec<Effect>) {
        self.config.reduced_motion = !self.config.reduced_motion;
        info!(
            reduced_motion = self.config.reduced_motion,
            "Toggled reduced motion"
        );
        self.feed_selector(
            SelectorEvent::ReducedMotionChanged(self.config.reduced_motion),
            effects,
        );
        if self.config.reduced_motion {
            self.hero.content_changed_at = None;
            self.hero.previous_index = None;
            if let Some(animation) = self.hero.animation.take() {
                self.hero.selector.finish_jump();
                self.scroll_home_to(animation.target(), effects);
            }
        }
        effects.push(Effect::SavePreferences);
    }

    /// Resets the hero to the top of the track, e.g. after navigating home.
    pub(super) fn reset_hero_scroll(&mut self, effects: &mut Vec<Effect>) {
        self.hero.animation = None;
        self.hero.selector.finish_jump();
        self.hero.content_changed_at = None;
        self.hero.previous_index = None;
        self.scroll_home_to(0.0, effects);
    }

    /// New viewport height for the track; a running jump is re-aimed at the
    /// same slide or anchor under the new layout.
    fn remeasure_hero(&mut self, viewport_height: f32, effects: &mut Vec<Effect>) {
        self.feed_selector(
            SelectorEvent::Resized {
                viewport_height,
                track_top: Some(HERO_TRACK_TOP),
            },
            effects,
        );
        let Some(mut animation) = self.hero.animation else {
            return;
        };
        let target = match self.hero.selector.jump_target() {
            Some(JumpTarget::Slide(_)) => self.hero.selector.jump_target_offset(),
            Some(JumpTarget::Anchor(anchor)) => self.anchor_offset(anchor),
            None => None,
        };
        let Some(target) = target else {
            return;
        };
        if (target - animation.target()).abs() > f32::EPSILON {
            debug!(
                previous = animation.target(),
                target, "Re-aiming slide animation after resize"
            );
            animation.retarget(target, Instant::now());
            self.hero.animation = Some(animation);
        }
    }

    fn feed_selector(&mut self, event: SelectorEvent, effects: &mut Vec<Effect>) {
        let commands = self.hero.selector.reduce(event);
        for command in commands {
            self.apply_selector_command(command, effects);
        }
    }

    pub(super) fn apply_selector_command(&mut self, command: SelectorCommand, effects: &mut Vec<Effect>) {
        match command {
            SelectorCommand::ScrollTo {
                offset,
                smooth,
                request_id,
            } => self.start_home_scroll(offset, smooth, request_id, effects),
            SelectorCommand::ScrollToAnchor { anchor, smooth } => {
                let Some(offset) = self.anchor_offset(&anchor) else {
                    warn!(%anchor, "Cannot resolve scroll anchor yet");
                    return;
                };
                debug!(%anchor, offset, "Scrolling to anchor");
                self.start_home_scroll(offset, smooth, 0, effects);
            }
        }
    }

    /// Offsets of the named sections on the home page.
    pub(super) fn anchor_offset(&self, anchor: &str) -> Option<f32> {
        match anchor {
            "top" => Some(0.0),
            _ if anchor == self.config.end_anchor || anchor == "about" => self.hero.track_end(),
            _ => None,
        }
    }

    pub(super) fn start_home_scroll(
        &mut self,
        target: f32,
        smooth: bool,
        request_id: u64,
        effects: &mut Vec<Effect>,
    ) {
        let duration = self.config.smooth_scroll();
        if !smooth || duration.is_zero() {
            self.hero.animation = None;
            self.scroll_home_to(target, effects);
            return;
        }
        if let Some(previous) = self.hero.animation {
            debug!(
                superseded = previous.request_id(),
                request_id, "Replacing in-flight slide animation"
            );
        }
        self.hero.animation = Some(ScrollAnimation::new(
            self.hero.selector.scroll_offset(),
            target,
            Instant::now(),
            duration,
            request_id,
        ));
    }

    /// Records the offset with the selector and asks the runtime to move there.
    fn scroll_home_to(&mut self, offset: f32, effects: &mut Vec<Effect>) {
        self.hero
            .selector
            .reduce(SelectorEvent::ScrollChanged(offset));
        effects.push(Effect::ScrollHome { offset });
    }
}
