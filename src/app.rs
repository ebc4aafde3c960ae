//! Page bootstrap: mounts every manager once the document is parsed.

use web_sys::{ErrorEvent, Event, PromiseRejectionEvent};

use crate::config::PortfolioConfig;
use crate::managers::animation::AnimationManager;
use crate::managers::contact::ContactManager;
use crate::managers::navigation::NavigationManager;
use crate::managers::skills::SkillsManager;
use crate::managers::theme::ThemeManager;
use crate::util::dom;
use crate::util::timing::debounce;

const CURRENT_YEAR_ID: &str = "current-year";

/// Handles to the mounted managers. Listeners keep their own clones, so
/// dropping this does not unbind anything.
pub struct Portfolio {
    pub theme: ThemeManager,
    pub navigation: NavigationManager,
    pub animation: AnimationManager,
    pub skills: SkillsManager,
    pub contact: ContactManager,
}

pub fn boot(config: &PortfolioConfig) -> Portfolio {
    let portfolio = Portfolio {
        theme: ThemeManager::mount(),
        navigation: NavigationManager::mount(config),
        animation: AnimationManager::mount(config),
        skills: SkillsManager::mount(),
        contact: ContactManager::mount(config),
    };

    if let Some(window) = dom::window() {
        let navigation = portfolio.navigation.clone();
        let mut on_resize = debounce(config.debounce_delay, move || {
            if navigation.is_menu_open() {
                navigation.handle_resize(dom::viewport_width());
            }
        });
        dom::listen(&window, "resize", move |_: Event| on_resize());
    }

    set_footer_year();
    log::info!(
        "portfolio ready: theme {}, {} reveal targets, {} counters, {} reveal sections, {} skill cards ({} level bars)",
        portfolio.theme.current().as_str(),
        portfolio.animation.reveal_target_count(),
        portfolio.animation.counter_count(),
        portfolio.animation.section_count(),
        portfolio.skills.card_count(),
        portfolio.skills.level_bar_count()
    );
    portfolio
}

fn set_footer_year() {
    if let Some(el) = dom::by_id(CURRENT_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Log uncaught script errors and unhandled promise rejections.
pub fn install_error_hooks() {
    let Some(window) = dom::window() else {
        return;
    };
    dom::listen(&window, "error", |event: ErrorEvent| {
        log::error!("uncaught error: {} ({:?})", event.message(), event.error());
    });
    dom::listen(&window, "unhandledrejection", |event: PromiseRejectionEvent| {
        log::error!("unhandled promise rejection: {:?}", event.reason());
    });
}

/// Run `f` once the DOM is parsed: immediately if it already is, otherwise
/// on `DOMContentLoaded`.
pub fn run_when_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut pending = Some(f);
    dom::listen(&document, "DOMContentLoaded", move |_: Event| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}
