//! Per-slide presentation values derived from the continuous progress.
//!
//! Each slide's look is a function of its distance from the current
//! progress only, so slides can never disagree with each other. On top of
//! that, an index change cross-fades the outgoing and incoming slides over
//! the slide transition.

use std::time::Duration;

pub const ACTIVE_SCALE: f32 = 1.05;
pub const INACTIVE_SCALE: f32 = 1.12;
pub const INACTIVE_BLUR_PX: f32 = 6.0;

pub const DEFAULT_SLIDE_TRANSITION: Duration = Duration::from_millis(950);
pub const DEFAULT_CONTENT_TRANSITION: Duration = Duration::from_millis(450);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisual {
    pub opacity: f32,
    pub scale: f32,
    pub blur_px: f32,
}

impl SlideVisual {
    pub const ACTIVE: SlideVisual = SlideVisual {
        opacity: 1.0,
        scale: ACTIVE_SCALE,
        blur_px: 0.0,
    };

    pub const HIDDEN: SlideVisual = SlideVisual {
        opacity: 0.0,
        scale: INACTIVE_SCALE,
        blur_px: INACTIVE_BLUR_PX,
    };

    fn at_weight(weight: f32) -> Self {
        let t = weight.clamp(0.0, 1.0);
        if t >= 1.0 {
            return Self::ACTIVE;
        }
        SlideVisual {
            opacity: t,
            scale: INACTIVE_SCALE - (INACTIVE_SCALE - ACTIVE_SCALE) * t,
            blur_px: INACTIVE_BLUR_PX * (1.0 - t),
        }
    }
}

/// Transition timing, collapsed to zero when reduced motion is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionPolicy {
    pub reduced_motion: bool,
    pub slide_transition: Duration,
    pub content_transition: Duration,
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            slide_transition: DEFAULT_SLIDE_TRANSITION,
            content_transition: DEFAULT_CONTENT_TRANSITION,
        }
    }
}

impl MotionPolicy {
    pub fn slide_transition(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.slide_transition
        }
    }

    pub fn content_transition(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            self.content_transition
        }
    }

    /// Weight of the incoming slide `elapsed` after the index changed.
    pub fn slide_fade(&self, elapsed: Duration) -> f32 {
        let total = self.slide_transition();
        if total.is_zero() {
            return 1.0;
        }
        let t = (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0);
        ease_in_out_cubic(t)
    }

    /// Fade-in weight of the content panel `elapsed` after the index changed.
    pub fn content_fade(&self, elapsed: Duration) -> f32 {
        let total = self.content_transition();
        if total.is_zero() {
            return 1.0;
        }
        let t = (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0);
        ease_out_cubic(t)
    }
}

/// Visual for slide `index` at continuous `progress`.
pub fn slide_visual(
    index: usize,
    progress: f32,
    active_index: usize,
    reduced_motion: bool,
) -> SlideVisual {
    if reduced_motion || !progress.is_finite() {
        return if index == active_index {
            SlideVisual::ACTIVE
        } else {
            SlideVisual::HIDDEN
        };
    }
    let distance = (progress - index as f32).abs();
    SlideVisual::at_weight(1.0 - distance)
}

pub fn slide_visuals(
    slide_count: usize,
    progress: f32,
    active_index: usize,
    reduced_motion: bool,
) -> Vec<SlideVisual> {
    (0..slide_count)
        .map(|index| slide_visual(index, progress, active_index, reduced_motion))
        .collect()
}

/// Lifts the incoming slide to `weight` and holds the outgoing one at
/// `1 - weight`, never dimming what the scroll position already shows.
pub fn apply_crossfade(
    visuals: &mut [SlideVisual],
    previous: Option<usize>,
    current: usize,
    weight: f32,
) {
    let weight = if weight.is_finite() {
        weight.clamp(0.0, 1.0)
    } else {
        1.0
    };
    let mut lift = |index: usize, floor: f32| {
        if let Some(visual) = visuals.get_mut(index) {
            if floor > visual.opacity {
                *visual = SlideVisual::at_weight(floor);
            }
        }
    };
    lift(current, weight);
    if let Some(previous) = previous.filter(|previous| *previous != current) {
        lift(previous, 1.0 - weight);
    }
}

/// Width fraction of the progress bar under the hero.
pub fn progress_bar_fraction(active_index: usize, slide_count: usize) -> f32 {
    if slide_count == 0 {
        return 0.0;
    }
    ((active_index.min(slide_count - 1) + 1) as f32 / slide_count as f32).clamp(0.0, 1.0)
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}
