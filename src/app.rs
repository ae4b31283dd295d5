//! WASM entry point: wires every component on page load.
//!
//! Order matters. The theme class is applied synchronously so the first paint
//! already has the right colors. Fragment injection starts next; everything
//! inside the navbar/footer waits for both fragments. The login form and the
//! success banner only need the static markup and are wired independently:
//! a failure in either is logged and does not stop the rest.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::components::auth_banner;
use crate::components::nav_menu::NavMenu;
use crate::components::navbar::NavbarHighlighter;
use crate::components::progress::ScrollProgress;
use crate::components::theme_toggle::ThemeToggle;
use crate::config::SiteConfig;
use crate::consts::SITE_CONFIG_ID;
use crate::error::SiteError;
use crate::net::fragments::{FetchSource, inject_all};
use crate::pages::login::LoginForm;
use crate::util::dark_mode::ThemePreference;
use crate::util::dom::{self, optional_element, scroll_y};
use crate::util::listener::listen;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        // Another logger is already installed; keep using it.
        log::debug!("console logger not installed: {e}");
    }
    if let Err(e) = boot() {
        log::error!("site chrome failed to start: {e}");
    }
}

/// Page-level overrides from `#site-config`, or defaults.
fn load_config(doc: &Document) -> SiteConfig {
    let Some(raw) = optional_element(doc, SITE_CONFIG_ID).and_then(|el| el.text_content()) else {
        return SiteConfig::default();
    };
    match SiteConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{SITE_CONFIG_ID}: {e}");
            SiteConfig::default()
        }
    }
}

fn boot() -> Result<(), SiteError> {
    let window = dom::window()?;
    let doc = dom::document()?;
    let config = Rc::new(load_config(&doc));

    let theme = Rc::new(ThemePreference::new(window.clone(), &config)?);
    if let Err(e) = theme.apply_preferred() {
        log::error!("theme class not applied: {e}");
    }

    // Injection never depends on the page-specific setup below.
    let (nav_window, nav_doc, nav_config) = (window.clone(), doc.clone(), Rc::clone(&config));
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = after_injection(nav_window, nav_doc, nav_config, theme).await {
            log::error!("navbar setup failed: {e}");
        }
    });

    if let Err(e) = install_login(&window, &doc, &config) {
        log::error!("login form setup failed: {e}");
    }
    if let Err(e) = show_banner(&window, &doc, &config) {
        log::error!("auth banner failed: {e}");
    }
    Ok(())
}

fn install_login(window: &Window, doc: &Document, config: &SiteConfig) -> Result<(), SiteError> {
    match LoginForm::find(window.clone(), doc)? {
        Some(form) => form.install(config),
        None => Ok(()),
    }
}

fn show_banner(window: &Window, doc: &Document, config: &SiteConfig) -> Result<bool, SiteError> {
    auth_banner::show_if_requested(doc, config, &window.location().hash()?)
}

async fn after_injection(
    window: Window,
    doc: Document,
    config: Rc<SiteConfig>,
    theme: Rc<ThemePreference>,
) -> Result<(), SiteError> {
    inject_all(&FetchSource, &doc, &config).await?;
    log::info!("navbar and footer injected");

    NavbarHighlighter::new(&doc)?.apply(&window.location().pathname()?)?;
    ThemeToggle::new(&doc, theme)?.install()?;

    let progress = ScrollProgress::new(window.clone(), &doc, config.scroll_threshold_px)?;
    // Reloading mid-page restores the scroll position without a scroll event.
    if scroll_y(&window) > 0.0 {
        progress.refresh()?;
    }
    listen(&doc, "scroll", true, move |_| progress.refresh())?;

    let menu = NavMenu::new(window, &doc)?;
    listen(&doc, "click", true, move |event| menu.handle_click(&event))?;
    Ok(())
}
