//! Theme toggle, persistence and screen reader announcement.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{Element, KeyboardEvent, MouseEvent};

use crate::state::theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY, Theme, ThemeState, is_theme_shortcut};
use crate::util::{dom, storage};

const TOGGLE_ID: &str = "themeToggle";
const PRESS_SCALE: &str = "scale(0.9)";
const REST_SCALE: &str = "scale(1)";
const PRESS_MS: u32 = 150;
const ANNOUNCEMENT_MS: u32 = 1000;

/// Visually hidden live region styling.
const ANNOUNCEMENT_STYLE: [(&str, &str); 5] = [
    ("position", "absolute"),
    ("left", "-10000px"),
    ("width", "1px"),
    ("height", "1px"),
    ("overflow", "hidden"),
];

#[derive(Clone)]
pub struct ThemeManager {
    toggle: Option<Element>,
    state: Rc<RefCell<ThemeState>>,
}

impl ThemeManager {
    /// Apply the stored theme without animation and bind the toggle.
    pub fn mount() -> Self {
        let stored = storage::load_string(THEME_STORAGE_KEY);
        let manager = Self {
            toggle: dom::by_id(TOGGLE_ID),
            state: Rc::new(RefCell::new(ThemeState::from_stored(stored.as_deref()))),
        };
        let initial = manager.current();
        manager.set_theme(initial, false);
        manager.bind_events();
        log::debug!("theme manager mounted with {}", initial.as_str());
        manager
    }

    pub fn current(&self) -> Theme {
        self.state.borrow().current
    }

    pub fn toggle_theme(&self) {
        let next = self.current().toggled();
        self.set_theme(next, true);
    }

    pub fn set_theme(&self, theme: Theme, animate: bool) {
        self.state.borrow_mut().set(theme);

        if let Some(root) = dom::document().and_then(|doc| doc.document_element()) {
            dom::set_attr(&root, THEME_ATTRIBUTE, theme.as_str());
        }
        storage::save_string(THEME_STORAGE_KEY, theme.as_str());

        if animate {
            self.press_toggle();
        }
        self.update_toggle_icon(theme);
        announce(theme);
    }

    fn bind_events(&self) {
        if let Some(toggle) = &self.toggle {
            let this = self.clone();
            dom::listen(toggle, "click", move |_: MouseEvent| this.toggle_theme());
        }

        if let Some(document) = dom::document() {
            let this = self.clone();
            dom::listen(&document, "keydown", move |event: KeyboardEvent| {
                if is_theme_shortcut(&event.key(), event.ctrl_key()) {
                    event.prevent_default();
                    this.toggle_theme();
                }
            });
        }
    }

    fn press_toggle(&self) {
        let Some(toggle) = self.toggle.clone() else {
            return;
        };
        dom::set_styles(&toggle, &[("transform", PRESS_SCALE)]);
        Timeout::new(PRESS_MS, move || dom::set_styles(&toggle, &[("transform", REST_SCALE)])).forget();
    }

    fn update_toggle_icon(&self, theme: Theme) {
        let Some(toggle) = &self.toggle else {
            return;
        };
        let sun = dom::report(toggle.query_selector(".fa-sun"), ".fa-sun").flatten();
        let moon = dom::report(toggle.query_selector(".fa-moon"), ".fa-moon").flatten();
        if let (Some(sun), Some(moon)) = (sun, moon) {
            let (sun_display, moon_display) = theme.icon_display();
            dom::set_styles(&sun, &[("display", sun_display)]);
            dom::set_styles(&moon, &[("display", moon_display)]);
        }
    }
}

/// Announce the change through a transient polite live region.
fn announce(theme: Theme) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Some(region) = dom::report(document.create_element("div"), "createElement") else {
        return;
    };
    dom::set_attr(&region, "aria-live", "polite");
    dom::set_attr(&region, "aria-atomic", "true");
    dom::set_styles(&region, &ANNOUNCEMENT_STYLE);
    region.set_text_content(Some(&theme.announcement()));

    if dom::report(body.append_child(&region), "appendChild").is_some() {
        Timeout::new(ANNOUNCEMENT_MS, move || region.remove()).forget();
    }
}
