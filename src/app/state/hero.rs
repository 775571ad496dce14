use horizons_core::motion::apply_crossfade;
use horizons_core::{MotionPolicy, ScrollAnimation, SlideSelector, SlideVisual};
use std::time::Instant;

/// Hero carousel state: the selector plus the in-flight jump animation.
pub struct HeroState {
    pub(in crate::app) selector: SlideSelector,
    pub(in crate::app) animation: Option<ScrollAnimation>,
    /// When the active slide last changed; drives the content fade-in.
    pub(in crate::app) content_changed_at: Option<Instant>,
    /// Slide that was active before the last change, faded out over the slide transition.
    pub(in crate::app) previous_index: Option<usize>,
}

impl HeroState {
    pub fn new(slide_count: usize, end_anchor: &str, reduced_motion: bool) -> Self {
        Self {
            selector: SlideSelector::new(slide_count, end_anchor)
                .with_reduced_motion(reduced_motion),
            animation: None,
            content_changed_at: None,
            previous_index: None,
        }
    }

    pub fn content_fade(&self, now: Instant, policy: &MotionPolicy) -> f32 {
        match self.content_changed_at {
            Some(changed_at) => policy.content_fade(now.saturating_duration_since(changed_at)),
            None => 1.0,
        }
    }

    pub fn slide_fade(&self, now: Instant, policy: &MotionPolicy) -> f32 {
        match self.content_changed_at {
            Some(changed_at) => policy.slide_fade(now.saturating_duration_since(changed_at)),
            None => 1.0,
        }
    }

    /// Scroll-linked visuals with the index-change cross-fade applied.
    pub fn slide_visuals(&self, now: Instant, policy: &MotionPolicy) -> Vec<SlideVisual> {
        let mut visuals = self.selector.visuals();
        if !policy.reduced_motion {
            apply_crossfade(
                &mut visuals,
                self.previous_index,
                self.selector.active_index(),
                self.slide_fade(now, policy),
            );
        }
        visuals
    }

    pub fn needs_frame(&self, now: Instant, policy: &MotionPolicy) -> bool {
        self.selector.needs_frame()
            || self.animation.is_some()
            || self.content_fade(now, policy) < 1.0
            || self.slide_fade(now, policy) < 1.0
    }

    /// Offset at the first pixel below the track, once the viewport is known.
    pub fn track_end(&self) -> Option<f32> {
        self.selector
            .geometry()
            .map(|geometry| geometry.end_offset(self.selector.slide_count()))
    }

    /// False once the page has scrolled past the track and the hero is covered.
    pub fn controls_visible(&self) -> bool {
        self.track_end()
            .is_none_or(|end| self.selector.scroll_offset() < end)
    }

    pub fn viewport_height(&self) -> Option<f32> {
        self.selector
            .geometry()
            .map(|geometry| geometry.viewport_height)
    }
}
