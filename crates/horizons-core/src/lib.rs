pub mod animation;
pub mod motion;
pub mod selector;
pub mod slides;
pub mod starfield;
pub mod track;

pub use animation::{ScrollAnimation, ScrollSample};
pub use motion::{MotionPolicy, SlideVisual};
pub use selector::{IndexChange, JumpTarget, SelectorCommand, SelectorEvent, SlideSelector};
pub use slides::{Slide, SlideDeck, load_deck, parse_deck};
pub use starfield::{ProjectedStar, Star, Starfield};
pub use track::{TrackGeometry, compute_progress, derive_active_index};
