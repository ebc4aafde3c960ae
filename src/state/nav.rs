//! Navigation menu state and scroll-spy decisions.
//!
//! DESIGN
//! ======
//! The mobile menu is a two-state machine owned by the navigation manager.
//! Scroll-spy prefers viewport intersection; [`active_section_at`] is the
//! position-based fallback for browsers without `IntersectionObserver`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

pub const MENU_OPEN_CLASS: &str = "nav-open";
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";
pub const ACTIVE_LINK_CLASS: &str = "active";
/// Section forced active when the page is scrolled above every section.
pub const HERO_SECTION_ID: &str = "hero";

/// Mobile menu visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Value written to the toggle's `aria-expanded` attribute.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        match self {
            Self::Open => "true",
            Self::Closed => "false",
        }
    }
}

/// Navigation state owned by the navigation manager.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu: MenuState,
    pub active_section: Option<String>,
    pub scrolled: bool,
}

impl NavState {
    /// Open the menu. Returns `true` if the state changed.
    pub fn open(&mut self) -> bool {
        self.transition(MenuState::Open)
    }

    /// Close the menu. Returns `true` if the state changed.
    pub fn close(&mut self) -> bool {
        self.transition(MenuState::Closed)
    }

    /// Flip the menu and return the resulting state.
    pub fn toggle(&mut self) -> MenuState {
        if self.menu.is_open() {
            self.close();
        } else {
            self.open();
        }
        self.menu
    }

    /// Escape only acts while the menu is open.
    pub fn on_escape(&mut self) -> bool {
        self.menu.is_open() && self.close()
    }

    /// Close the menu once the viewport grows past the mobile breakpoint.
    pub fn on_resize(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        viewport_width > breakpoint && self.close()
    }

    /// Record the scrolled flag. Returns `true` if it changed.
    pub fn set_scrolled(&mut self, scrolled: bool) -> bool {
        let changed = self.scrolled != scrolled;
        self.scrolled = scrolled;
        changed
    }

    /// Record the active section. Returns `true` if it changed.
    pub fn set_active(&mut self, section_id: &str) -> bool {
        if self.active_section.as_deref() == Some(section_id) {
            return false;
        }
        self.active_section = Some(section_id.to_owned());
        true
    }

    fn transition(&mut self, next: MenuState) -> bool {
        let changed = self.menu != next;
        self.menu = next;
        changed
    }
}

/// Geometry of one `section[id]` in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBand {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBand {
    /// Scroll position at which this section becomes current.
    #[must_use]
    pub fn start(&self, scroll_offset: f64) -> f64 {
        self.offset_top - scroll_offset
    }

    #[must_use]
    pub fn contains(&self, scroll_y: f64, scroll_offset: f64) -> bool {
        let start = self.start(scroll_offset);
        scroll_y >= start && scroll_y < start + self.height
    }
}

/// Position-based scroll-spy.
///
/// The last section whose band contains `scroll_y` wins. Above the first
/// section the hero is forced active. Returns `None` when no section matches
/// (e.g. a gap between sections), leaving the current link as it is.
#[must_use]
pub fn active_section_at<'a>(scroll_y: f64, sections: &'a [SectionBand], scroll_offset: f64) -> Option<&'a str> {
    let current = sections
        .iter()
        .rev()
        .find(|section| section.contains(scroll_y, scroll_offset));
    if let Some(section) = current {
        return Some(section.id.as_str());
    }
    let first = sections.first()?;
    (scroll_y < first.start(scroll_offset)).then_some(HERO_SECTION_ID)
}

/// Whether the header should carry the scrolled style.
#[must_use]
pub fn navbar_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Section id targeted by an in-page link (`#about` -> `about`).
#[must_use]
pub fn link_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Whether a link points at the given section.
#[must_use]
pub fn link_matches(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(link_target) == Some(section_id)
}

/// Scroll destination for a section, leaving room for the fixed header.
#[must_use]
pub fn scroll_target(offset_top: f64, scroll_offset: f64) -> f64 {
    offset_top - scroll_offset
}

/// Whether a nav link click should also close the mobile menu.
#[must_use]
pub fn closes_menu_on_link(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

/// Root margin of the scroll-spy observer: the viewport shrunk by the header
/// offset at the top and by half the viewport at the bottom.
#[must_use]
pub fn spy_root_margin(scroll_offset: f64, viewport_height: f64) -> String {
    format!("-{scroll_offset}px 0px -{}px 0px", viewport_height / 2.0)
}
