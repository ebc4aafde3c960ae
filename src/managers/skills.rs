//! Skills section.
//!
//! Cards and level bars are styled entirely by markup and CSS; the reveal
//! animation belongs to the animation manager. This manager only records what
//! it found so the section has a home for future behavior.

use web_sys::Element;

use crate::util::dom;

const CARD_SELECTOR: &str = ".skill-card";
const LEVEL_FILL_SELECTOR: &str = ".level-fill";

pub struct SkillsManager {
    cards: Vec<Element>,
    level_bars: usize,
}

impl SkillsManager {
    pub fn mount() -> Self {
        let cards = dom::query_all(CARD_SELECTOR);
        let level_bars = cards
            .iter()
            .filter(|card| dom::report(card.query_selector(LEVEL_FILL_SELECTOR), LEVEL_FILL_SELECTOR).flatten().is_some())
            .count();
        log::debug!("skills manager mounted: {} cards, {level_bars} level bars", cards.len());
        Self { cards, level_bars }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn level_bar_count(&self) -> usize {
        self.level_bars
    }
}
