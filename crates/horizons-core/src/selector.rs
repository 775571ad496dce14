//! Scroll-linked slide selector.
//!
//! A reducer over platform events: scroll and resize notifications only mark
//! a recompute as pending, and `on_frame` folds any burst of them into a
//! single recompute from the latest offset. Jumps are returned as commands for
//! the caller to execute against the real scroll container.

use crate::motion::{self, SlideVisual};
use crate::track::{TrackGeometry, clamp_index, compute_progress, derive_active_index};
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    ScrollChanged(f32),
    Resized {
        viewport_height: f32,
        track_top: Option<f32>,
    },
    JumpRequested(usize),
    NextRequested,
    ReducedMotionChanged(bool),
}

/// Side effects on the shared viewport scroll position.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorCommand {
    ScrollTo {
        offset: f32,
        smooth: bool,
        request_id: u64,
    },
    ScrollToAnchor {
        anchor: String,
        smooth: bool,
    },
}

/// Where the most recent jump was headed, in layout-independent terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JumpTarget {
    Slide(usize),
    Anchor(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug, Clone)]
pub struct SlideSelector {
    slide_count: usize,
    end_anchor: String,
    geometry: Option<TrackGeometry>,
    scroll_offset: f32,
    progress: f32,
    active_index: usize,
    reduced_motion: bool,
    recompute_pending: bool,
    parked_jump: Option<usize>,
    jump_target: Option<JumpTarget>,
    request_id: u64,
}

impl SlideSelector {
    pub fn new(slide_count: usize, end_anchor: impl Into<String>) -> Self {
        Self {
            slide_count,
            end_anchor: end_anchor.into(),
            geometry: None,
            scroll_offset: 0.0,
            progress: 0.0,
            active_index: 0,
            reduced_motion: false,
            recompute_pending: false,
            parked_jump: None,
            jump_target: None,
            request_id: 0,
        }
    }

    pub fn with_reduced_motion(mut self, reduced_motion: bool) -> Self {
        self.reduced_motion = reduced_motion;
        self
    }

    pub fn reduce(&mut self, event: SelectorEvent) -> Vec<SelectorCommand> {
        let mut commands = Vec::new();
        match event {
            SelectorEvent::ScrollChanged(offset) => self.handle_scroll_changed(offset),
            SelectorEvent::Resized {
                viewport_height,
                track_top,
            } => self.handle_resized(viewport_height, track_top, &mut commands),
            SelectorEvent::JumpRequested(index) => commands.extend(self.scroll_to_slide(index)),
            SelectorEvent::NextRequested => commands.extend(self.scroll_to_next()),
            SelectorEvent::ReducedMotionChanged(reduced) => {
                if self.reduced_motion != reduced {
                    debug!(reduced, "Reduced motion preference changed");
                    self.reduced_motion = reduced;
                }
            }
        }
        commands
    }

    /// Run the coalesced recompute, if one is pending. Call once per frame.
    pub fn on_frame(&mut self) -> Option<IndexChange> {
        if !self.recompute_pending {
            return None;
        }
        self.recompute_pending = false;
        let geometry = self.geometry?;

        self.progress = compute_progress(
            self.scroll_offset,
            geometry.top,
            geometry.viewport_height,
            self.slide_count,
        );
        let previous = self.active_index;
        self.active_index = derive_active_index(self.progress, self.slide_count);
        if previous == self.active_index {
            return None;
        }
        debug!(
            previous,
            current = self.active_index,
            progress = self.progress,
            "Active slide changed"
        );
        Some(IndexChange {
            previous,
            current: self.active_index,
        })
    }

    pub fn needs_frame(&self) -> bool {
        self.recompute_pending
    }

    pub fn scroll_to_slide(&mut self, index: usize) -> Option<SelectorCommand> {
        if self.slide_count == 0 {
            return None;
        }
        let index = clamp_index(index, self.slide_count);
        let Some(geometry) = self.geometry else {
            debug!(index, "Track not measured yet; parking jump");
            self.parked_jump = Some(index);
            return None;
        };
        self.parked_jump = None;
        self.jump_target = Some(JumpTarget::Slide(index));
        self.request_id = self.request_id.wrapping_add(1);
        Some(SelectorCommand::ScrollTo {
            offset: geometry.offset_for_slide(index, self.slide_count),
            smooth: !self.reduced_motion,
            request_id: self.request_id,
        })
    }

    pub fn scroll_to_next(&mut self) -> Option<SelectorCommand> {
        let next = clamp_index(self.active_index + 1, self.slide_count);
        if self.slide_count <= 1 || next == self.active_index {
            let anchor = self.end_anchor.clone();
            return Some(self.scroll_to_anchor(anchor));
        }
        self.scroll_to_slide(next)
    }

    /// Scroll to a named section outside the track.
    pub fn scroll_to_anchor(&mut self, anchor: impl Into<String>) -> SelectorCommand {
        let anchor = anchor.into();
        self.jump_target = Some(JumpTarget::Anchor(anchor.clone()));
        SelectorCommand::ScrollToAnchor {
            anchor,
            smooth: !self.reduced_motion,
        }
    }

    /// Target of the latest jump, kept until `finish_jump` so a resize can
    /// re-aim an animation that is still running.
    pub fn jump_target(&self) -> Option<&JumpTarget> {
        self.jump_target.as_ref()
    }

    /// Offset of the latest slide jump under the current geometry.
    pub fn jump_target_offset(&self) -> Option<f32> {
        match (&self.jump_target, self.geometry) {
            (Some(JumpTarget::Slide(index)), Some(geometry)) => {
                Some(geometry.offset_for_slide(*index, self.slide_count))
            }
            _ => None,
        }
    }

    pub fn finish_jump(&mut self) {
        self.jump_target = None;
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    pub fn geometry(&self) -> Option<TrackGeometry> {
        self.geometry
    }

    pub fn end_anchor(&self) -> &str {
        &self.end_anchor
    }

    pub fn is_last_slide(&self) -> bool {
        self.active_index + 1 >= self.slide_count
    }

    pub fn visuals(&self) -> Vec<SlideVisual> {
        motion::slide_visuals(
            self.slide_count,
            self.progress,
            self.active_index,
            self.reduced_motion,
        )
    }

    pub fn progress_bar_fraction(&self) -> f32 {
        motion::progress_bar_fraction(self.active_index, self.slide_count)
    }

    fn handle_scroll_changed(&mut self, offset: f32) {
        if !offset.is_finite() {
            return;
        }
        self.scroll_offset = offset.max(0.0);
        if self.geometry.is_some() {
            self.recompute_pending = true;
        }
    }

    fn handle_resized(
        &mut self,
        viewport_height: f32,
        track_top: Option<f32>,
        commands: &mut Vec<SelectorCommand>,
    ) {
        let Some(geometry) = TrackGeometry::measured(track_top, viewport_height) else {
            debug!(viewport_height, "Ignoring unusable viewport measurement");
            return;
        };
        if self.geometry != Some(geometry) {
            debug!(
                viewport_height,
                track_top = geometry.top_or_zero(),
                "Track geometry updated"
            );
        }
        self.geometry = Some(geometry);
        self.recompute_pending = true;
        if let Some(index) = self.parked_jump.take() {
            commands.extend(self.scroll_to_slide(index));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f32 = 800.0;

    fn measured(slide_count: usize) -> SlideSelector {
        let mut selector = SlideSelector::new(slide_count, "about");
        selector.reduce(SelectorEvent::Resized {
            viewport_height: VH,
            track_top: Some(0.0),
        });
        selector.on_frame();
        selector
    }

    fn scroll(selector: &mut SlideSelector, offset: f32) -> usize {
        selector.reduce(SelectorEvent::ScrollChanged(offset));
        selector.on_frame();
        selector.active_index()
    }

    #[test]
    fn reference_scenarios() {
        let mut selector = measured(7);
        assert_eq!(scroll(&mut selector, 0.0), 0);
        assert_eq!(scroll(&mut selector, 800.0), 1);
        assert_eq!(scroll(&mut selector, 350.0), 0);
        assert_eq!(scroll(&mut selector, 6200.0), 6);
        assert_eq!(selector.progress(), 6.0);
    }

    #[test]
    fn bursts_coalesce_into_one_recompute_per_frame() {
        let mut selector = measured(7);
        for offset in [100.0, 900.0, 1700.0, 2500.0, 1650.0] {
            selector.reduce(SelectorEvent::ScrollChanged(offset));
        }
        assert!(selector.needs_frame());
        assert_eq!(selector.active_index(), 0);

        let change = selector.on_frame();
        assert_eq!(
            change,
            Some(IndexChange {
                previous: 0,
                current: 2
            })
        );
        assert!(!selector.needs_frame());
        assert_eq!(selector.on_frame(), None);
    }

    #[test]
    fn final_state_depends_only_on_latest_offset() {
        let mut forward = measured(7);
        let mut shuffled = measured(7);
        for offset in [0.0, 800.0, 1600.0, 2400.0] {
            forward.reduce(SelectorEvent::ScrollChanged(offset));
        }
        for offset in [2400.0, 0.0, 1600.0, 800.0, 2400.0] {
            shuffled.reduce(SelectorEvent::ScrollChanged(offset));
        }
        forward.on_frame();
        shuffled.on_frame();
        assert_eq!(forward.active_index(), 3);
        assert_eq!(forward.active_index(), shuffled.active_index());
        assert_eq!(forward.progress(), shuffled.progress());
    }

    #[test]
    fn scroll_before_measurement_is_a_no_op() {
        let mut selector = SlideSelector::new(7, "about");
        selector.reduce(SelectorEvent::ScrollChanged(2400.0));
        assert!(!selector.needs_frame());
        assert_eq!(selector.on_frame(), None);
        assert_eq!(selector.active_index(), 0);

        selector.reduce(SelectorEvent::Resized {
            viewport_height: VH,
            track_top: None,
        });
        selector.on_frame();
        assert_eq!(selector.active_index(), 3);
    }

    #[test]
    fn jump_round_trips_for_every_slide() {
        let mut selector = measured(7);
        for index in 0..7 {
            let commands = selector.reduce(SelectorEvent::JumpRequested(index));
            let Some(SelectorCommand::ScrollTo { offset, .. }) = commands.first().cloned() else {
                panic!("expected scroll command for slide {index}");
            };
            assert_eq!(scroll(&mut selector, offset), index);
        }
    }

    #[test]
    fn jump_index_is_clamped() {
        let mut selector = measured(7);
        let command = selector.scroll_to_slide(99);
        assert!(matches!(
            command,
            Some(SelectorCommand::ScrollTo { offset, .. }) if offset == 6.0 * VH
        ));
    }

    #[test]
    fn later_jump_supersedes_earlier_one() {
        let mut selector = measured(7);
        let first = selector.scroll_to_slide(5);
        let second = selector.scroll_to_slide(2);
        let (
            Some(SelectorCommand::ScrollTo { request_id: a, .. }),
            Some(SelectorCommand::ScrollTo {
                request_id: b,
                offset,
                ..
            }),
        ) = (first, second)
        else {
            panic!("expected two scroll commands");
        };
        assert!(b > a);
        assert_eq!(scroll(&mut selector, offset), 2);
    }

    #[test]
    fn jump_before_measurement_is_parked_until_layout() {
        let mut selector = SlideSelector::new(7, "about");
        assert!(selector.reduce(SelectorEvent::JumpRequested(1)).is_empty());
        assert!(selector.reduce(SelectorEvent::JumpRequested(4)).is_empty());

        let commands = selector.reduce(SelectorEvent::Resized {
            viewport_height: VH,
            track_top: Some(120.0),
        });
        assert_eq!(commands.len(), 1);
        assert!(matches!(
            commands[0],
            SelectorCommand::ScrollTo { offset, .. } if offset == 120.0 + 4.0 * VH
        ));
    }

    #[test]
    fn next_advances_then_falls_through_to_anchor() {
        let mut selector = measured(3);
        let commands = selector.reduce(SelectorEvent::NextRequested);
        assert!(matches!(
            commands.as_slice(),
            [SelectorCommand::ScrollTo { offset, .. }] if *offset == VH
        ));

        scroll(&mut selector, 2.0 * VH);
        let commands = selector.reduce(SelectorEvent::NextRequested);
        assert!(matches!(
            commands.as_slice(),
            [SelectorCommand::ScrollToAnchor { anchor, .. }] if anchor == "about"
        ));
    }

    #[test]
    fn single_slide_never_moves_the_track() {
        let mut selector = measured(1);
        assert_eq!(scroll(&mut selector, 5000.0), 0);
        let before = selector.scroll_offset();
        let commands = selector.reduce(SelectorEvent::NextRequested);
        assert_eq!(
            commands,
            vec![SelectorCommand::ScrollToAnchor {
                anchor: "about".to_string(),
                smooth: true
            }]
        );
        assert_eq!(selector.scroll_offset(), before);
    }

    #[test]
    fn empty_deck_only_falls_through() {
        let mut selector = measured(0);
        assert!(selector.reduce(SelectorEvent::JumpRequested(0)).is_empty());
        assert_eq!(scroll(&mut selector, 1200.0), 0);
        assert!(matches!(
            selector.reduce(SelectorEvent::NextRequested).as_slice(),
            [SelectorCommand::ScrollToAnchor { .. }]
        ));
        assert_eq!(selector.progress_bar_fraction(), 0.0);
    }

    #[test]
    fn reduced_motion_requests_instant_jumps() {
        let mut selector = measured(7);
        selector.reduce(SelectorEvent::ReducedMotionChanged(true));
        let commands = selector.reduce(SelectorEvent::JumpRequested(3));
        assert!(matches!(
            commands.as_slice(),
            [SelectorCommand::ScrollTo { smooth: false, .. }]
        ));
        scroll(&mut selector, 3.0 * VH + 250.0);
        let visuals = selector.visuals();
        assert_eq!(visuals[3], SlideVisual::ACTIVE);
        assert_eq!(visuals[4], SlideVisual::HIDDEN);
    }

    #[test]
    fn resize_recomputes_from_current_offset() {
        let mut selector = measured(7);
        assert_eq!(scroll(&mut selector, 1600.0), 2);
        selector.reduce(SelectorEvent::Resized {
            viewport_height: 400.0,
            track_top: Some(0.0),
        });
        assert!(selector.needs_frame());
        selector.on_frame();
        assert_eq!(selector.active_index(), 4);
    }

    #[test]
    fn unusable_resize_keeps_previous_geometry() {
        let mut selector = measured(7);
        selector.reduce(SelectorEvent::Resized {
            viewport_height: 0.0,
            track_top: Some(0.0),
        });
        assert_eq!(selector.geometry(), Some(TrackGeometry::new(Some(0.0), VH)));
    }

    #[test]
    fn slide_jump_target_follows_geometry() {
        let mut selector = measured(7);
        selector.scroll_to_slide(4);
        assert_eq!(selector.jump_target(), Some(&JumpTarget::Slide(4)));
        assert_eq!(selector.jump_target_offset(), Some(3200.0));

        selector.reduce(SelectorEvent::Resized {
            viewport_height: 600.0,
            track_top: Some(0.0),
        });
        assert_eq!(selector.jump_target_offset(), Some(2400.0));

        selector.finish_jump();
        assert_eq!(selector.jump_target(), None);
        assert_eq!(selector.jump_target_offset(), None);
    }

    #[test]
    fn anchor_fallthrough_records_anchor_target() {
        let mut selector = measured(1);
        selector.scroll_to_next();
        assert_eq!(
            selector.jump_target(),
            Some(&JumpTarget::Anchor("about".to_string()))
        );
        assert_eq!(selector.jump_target_offset(), None);
    }
}
