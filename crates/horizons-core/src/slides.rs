//! Slide dataset for the hero carousel.
//!
//! The default deck is embedded at build time. A deck on disk can replace it;
//! loading never fails hard so the window still opens with the built-in deck.
//!
//! Image paths are resolved against the working directory. The built-in deck
//! expects its pictures under `assets/hero/` (for example
//! `assets/hero/nebula-hero.jpg`); the images are not bundled, and a missing
//! file only leaves that slide's backdrop dark.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

const BUILTIN_DECK: &str = include_str!("../assets/hero_slides.toml");

/// One carousel entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Slide {
    pub image: String,
    pub title: String,
    pub description: String,
    pub link: String,
}

/// Ordered, immutable list of slides. Slides are identified by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

#[derive(Deserialize)]
struct DeckFile {
    #[serde(default)]
    slides: Vec<Slide>,
}

impl SlideDeck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn builtin() -> Self {
        // The embedded deck is covered by tests; an empty deck is still valid.
        parse_deck(BUILTIN_DECK).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

pub fn parse_deck(contents: &str) -> Result<SlideDeck> {
    let file: DeckFile = toml::from_str(contents).context("Invalid slide deck TOML")?;
    Ok(SlideDeck::new(file.slides))
}

/// Load a deck from disk, falling back to the built-in deck on any error.
pub fn load_deck(path: Option<&Path>) -> SlideDeck {
    let Some(path) = path else {
        return SlideDeck::builtin();
    };
    match read_deck(path) {
        Ok(deck) => {
            info!(path = %path.display(), slides = deck.len(), "Loaded slide deck");
            deck
        }
        Err(err) => {
            warn!(path = %path.display(), "Falling back to built-in slide deck: {err:#}");
            SlideDeck::builtin()
        }
    }
}

fn read_deck(path: &Path) -> Result<SlideDeck> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read slide deck {}", path.display()))?;
    parse_deck(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_deck_has_seven_linked_slides() {
        let deck = SlideDeck::builtin();
        assert_eq!(deck.len(), 7);
        assert!(deck.iter().all(|slide| slide.link.starts_with('/')));
        assert!(
            deck.iter()
                .all(|slide| slide.image.starts_with("assets/hero/"))
        );
        assert_eq!(
            deck.get(3).map(|slide| slide.link.as_str()),
            Some("/science/black-holes")
        );
    }

    #[test]
    fn parses_custom_deck() {
        let deck = parse_deck(
            r#"
            [[slides]]
            image = "a.png"
            title = "A"
            description = "first"
            link = "/news"
            "#,
        )
        .expect("deck parses");
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.get(0).map(|s| s.title.as_str()), Some("A"));
    }

    #[test]
    fn missing_slides_table_is_an_empty_deck() {
        let deck = parse_deck("").expect("empty deck parses");
        assert!(deck.is_empty());
    }

    #[test]
    fn unreadable_deck_falls_back_to_builtin() {
        let deck = load_deck(Some(Path::new("/nonexistent/horizons/slides.toml")));
        assert_eq!(deck, SlideDeck::builtin());
    }
}
