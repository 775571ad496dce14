use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// The hero track is the first child of the home scrollable.
pub(crate) const HERO_TRACK_TOP: f32 = 0.0;
pub(crate) const SIDEBAR_WIDTH_PX: f32 = 220.0;
pub(crate) const MIN_SECTION_HEIGHT_PX: f32 = 480.0;
pub(crate) const MAX_TOASTS: usize = 3;
pub(crate) const MIN_WINDOW_WIDTH: f32 = 480.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 360.0;
pub(crate) const MAX_SMOOTH_SCROLL_MS: u64 = 5_000;
pub(crate) const MAX_TRANSITION_MS: u64 = 5_000;
pub(crate) static HOME_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("home-scroll"));
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
