//! Geometry of the hero scroll track.
//!
//! The track is a tall region whose height is `slide_count * viewport_height`.
//! Everything here is a pure function of the measured layout so the selector
//! can recompute from scratch on every frame.

/// Measured layout of the track inside its scroll container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Document-relative top of the track; `None` until layout has settled.
    pub top: Option<f32>,
    pub viewport_height: f32,
}

impl TrackGeometry {
    pub fn new(top: Option<f32>, viewport_height: f32) -> Self {
        Self {
            top,
            viewport_height,
        }
    }

    /// Returns `None` when the viewport has no usable height yet.
    pub fn measured(top: Option<f32>, viewport_height: f32) -> Option<Self> {
        if viewport_height.is_finite() && viewport_height > 0.0 {
            Some(Self::new(top.filter(|t| t.is_finite()), viewport_height))
        } else {
            None
        }
    }

    pub fn top_or_zero(&self) -> f32 {
        self.top.unwrap_or(0.0)
    }

    /// Offset that puts slide `index` at the top of the viewport.
    pub fn offset_for_slide(&self, index: usize, slide_count: usize) -> f32 {
        let clamped = clamp_index(index, slide_count);
        self.top_or_zero() + clamped as f32 * self.viewport_height
    }

    /// Offset of the first pixel below the track.
    pub fn end_offset(&self, slide_count: usize) -> f32 {
        self.top_or_zero() + slide_count as f32 * self.viewport_height
    }
}

/// Continuous slide position for a scroll offset, in slide units.
pub fn compute_progress(
    scroll_offset: f32,
    track_top: Option<f32>,
    viewport_height: f32,
    slide_count: usize,
) -> f32 {
    if slide_count <= 1 || !viewport_height.is_finite() || viewport_height <= 0.0 {
        return 0.0;
    }
    if !scroll_offset.is_finite() {
        return 0.0;
    }
    let top = track_top.filter(|t| t.is_finite()).unwrap_or(0.0);
    let raw = (scroll_offset - top) / viewport_height;
    raw.clamp(0.0, (slide_count - 1) as f32)
}

/// Discrete slide for a progress value using nearest-integer rounding.
pub fn derive_active_index(progress: f32, slide_count: usize) -> usize {
    if slide_count <= 1 || !progress.is_finite() {
        return 0;
    }
    let rounded = progress.round().max(0.0) as usize;
    clamp_index(rounded, slide_count)
}

pub fn clamp_index(index: usize, slide_count: usize) -> usize {
    index.min(slide_count.saturating_sub(1))
}
