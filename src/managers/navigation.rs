//! Mobile menu, smooth in-page navigation and scroll-spy.
//!
//! Scroll-spy runs a single algorithm: an intersection observer over
//! `section[id]` when the browser provides one, otherwise the position-based
//! check on every throttled scroll. The header's scrolled style is updated on
//! scroll in both modes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::{Element, Event, KeyboardEvent, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::PortfolioConfig;
use crate::state::nav::{
    ACTIVE_LINK_CLASS, MENU_OPEN_CLASS, NAVBAR_SCROLLED_CLASS, NavState, SectionBand, active_section_at,
    closes_menu_on_link, link_matches, link_target, navbar_scrolled, scroll_target, spy_root_margin,
};
use crate::util::dom;
use crate::util::timing::throttle;

const NAVBAR_SELECTOR: &str = ".header";
const TOGGLE_SELECTOR: &str = ".nav-toggle";
const LINK_SELECTOR: &str = ".nav-link";
const OVERLAY_SELECTOR: &str = ".nav-overlay";
const SECTION_SELECTOR: &str = "section[id]";

#[derive(Clone)]
pub struct NavigationManager {
    inner: Rc<Inner>,
}

struct Inner {
    navbar: Option<Element>,
    toggle: Option<Element>,
    links: Vec<Element>,
    overlay: Option<Element>,
    config: PortfolioConfig,
    state: RefCell<NavState>,
    observer_spy: Cell<bool>,
}

impl NavigationManager {
    pub fn mount(config: &PortfolioConfig) -> Self {
        let manager = Self {
            inner: Rc::new(Inner {
                navbar: dom::query(NAVBAR_SELECTOR),
                toggle: dom::query(TOGGLE_SELECTOR),
                links: dom::query_all(LINK_SELECTOR),
                overlay: dom::query(OVERLAY_SELECTOR),
                config: *config,
                state: RefCell::new(NavState::default()),
                observer_spy: Cell::new(false),
            }),
        };
        manager.bind_events();
        manager.inner.observer_spy.set(manager.setup_scroll_spy());
        manager.handle_scroll();
        log::debug!(
            "navigation manager mounted: {} links, {} scroll-spy",
            manager.inner.links.len(),
            if manager.inner.observer_spy.get() { "observer" } else { "position" }
        );
        manager
    }

    pub fn is_menu_open(&self) -> bool {
        self.inner.state.borrow().menu.is_open()
    }

    pub fn toggle_menu(&self) {
        self.inner.state.borrow_mut().toggle();
        self.reflect_menu();
    }

    pub fn open_menu(&self) {
        self.inner.state.borrow_mut().open();
        self.reflect_menu();
    }

    pub fn close_menu(&self) {
        self.inner.state.borrow_mut().close();
        self.reflect_menu();
    }

    /// Close the menu when the viewport has grown past the mobile breakpoint.
    pub fn handle_resize(&self, viewport_width: f64) {
        let changed = self
            .inner
            .state
            .borrow_mut()
            .on_resize(viewport_width, self.inner.config.mobile_breakpoint);
        if changed {
            self.reflect_menu();
        }
    }

    /// Smooth-scroll to the section an in-page href points at.
    pub fn scroll_to_section(&self, href: &str) {
        let Some(section_id) = link_target(href) else {
            return;
        };
        let Some(section) = dom::by_id(section_id).and_then(|el| dom::as_html(&el)) else {
            return;
        };
        let Some(window) = dom::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(scroll_target(f64::from(section.offset_top()), self.inner.config.scroll_offset));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }

    /// Mark the link for `section_id` active and clear every other link.
    pub fn set_active_link(&self, section_id: &str) {
        if !self.inner.state.borrow_mut().set_active(section_id) {
            return;
        }
        for link in &self.inner.links {
            dom::remove_class(link, ACTIVE_LINK_CLASS);
            if link_matches(link.get_attribute("href").as_deref(), section_id) {
                dom::add_class(link, ACTIVE_LINK_CLASS);
            }
        }
    }

    fn reflect_menu(&self) {
        let menu = self.inner.state.borrow().menu;
        if let Some(body) = dom::document().and_then(|doc| doc.body()) {
            dom::toggle_class(&body, MENU_OPEN_CLASS, menu.is_open());
        }
        if let Some(toggle) = &self.inner.toggle {
            dom::set_attr(toggle, "aria-expanded", menu.aria_expanded());
        }
    }

    fn bind_events(&self) {
        if let Some(toggle) = &self.inner.toggle {
            let this = self.clone();
            dom::listen(toggle, "click", move |_: MouseEvent| this.toggle_menu());
        }

        if let Some(overlay) = &self.inner.overlay {
            let this = self.clone();
            dom::listen(overlay, "click", move |_: MouseEvent| this.close_menu());
        }

        for link in &self.inner.links {
            let this = self.clone();
            let href = link.get_attribute("href");
            dom::listen(link, "click", move |event: MouseEvent| {
                event.prevent_default();
                if let Some(href) = href.as_deref() {
                    this.scroll_to_section(href);
                }
                if closes_menu_on_link(dom::viewport_width(), this.inner.config.mobile_breakpoint) {
                    this.close_menu();
                }
            });
        }

        if let Some(document) = dom::document() {
            let this = self.clone();
            dom::listen(&document, "keydown", move |event: KeyboardEvent| {
                if event.key() == "Escape" && this.inner.state.borrow_mut().on_escape() {
                    this.reflect_menu();
                }
            });
        }

        if let Some(window) = dom::window() {
            let this = self.clone();
            let mut on_scroll = throttle(self.inner.config.throttle_delay, move || this.handle_scroll());
            dom::listen(&window, "scroll", move |_: Event| on_scroll());
        }
    }

    fn handle_scroll(&self) {
        let scroll_y = dom::scroll_y();
        let scrolled = navbar_scrolled(scroll_y, self.inner.config.navbar_scroll_threshold);
        let changed = self.inner.state.borrow_mut().set_scrolled(scrolled);
        if let Some(navbar) = self.inner.navbar.as_ref().filter(|_| changed) {
            dom::toggle_class(navbar, NAVBAR_SCROLLED_CLASS, scrolled);
        }

        if !self.inner.observer_spy.get() {
            self.update_active_from_position(scroll_y);
        }
    }

    fn update_active_from_position(&self, scroll_y: f64) {
        let sections = dom::query_all(SECTION_SELECTOR)
            .iter()
            .filter_map(|el| {
                let html = dom::as_html(el)?;
                Some(SectionBand {
                    id: el.id(),
                    offset_top: f64::from(html.offset_top()),
                    height: f64::from(html.offset_height()),
                })
            })
            .collect::<Vec<_>>();
        if let Some(section_id) = active_section_at(scroll_y, &sections, self.inner.config.scroll_offset) {
            self.set_active_link(section_id);
        }
    }

    /// Observe sections; returns `false` when no observer could be created.
    fn setup_scroll_spy(&self) -> bool {
        let (_, viewport_height) = dom::viewport_size();
        let margin = spy_root_margin(self.inner.config.scroll_offset, viewport_height);
        let this = self.clone();
        let Some(observer) = dom::intersection_observer(Some(&margin), 0.0, move |entries, _| {
            for entry in entries.iter().filter(|entry| entry.is_intersecting()) {
                this.set_active_link(&entry.target().id());
            }
        }) else {
            return false;
        };
        for section in dom::query_all(SECTION_SELECTOR) {
            observer.observe(&section);
        }
        true
    }
}
