//! Mobile navigation menu and inline dropdown.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, Node, Window};

use crate::components::header::apply_header_style;
use crate::consts::{DROPDOWN_ID, DROPDOWN_MENU_ID, HEADER_ID, NAV_CONTENT_ID, NAV_TOGGLE_ID};
use crate::error::SiteError;
use crate::state::menu::{ClickTarget, on_click};
use crate::util::dom::{is_hidden, optional_element, required_element, required_input, scroll_y, set_hidden};

pub struct NavMenu {
    window: Window,
    toggle: Element,
    nav_content: Element,
    header: Option<Element>,
    dropdown: HtmlInputElement,
    dropdown_menu: Element,
}

impl NavMenu {
    /// # Errors
    ///
    /// Returns an error if the toggle, menu container, dropdown checkbox or
    /// dropdown menu is missing.
    pub fn new(window: Window, doc: &Document) -> Result<Self, SiteError> {
        Ok(Self {
            window,
            toggle: required_element(doc, NAV_TOGGLE_ID)?,
            nav_content: required_element(doc, NAV_CONTENT_ID)?,
            header: optional_element(doc, HEADER_ID),
            dropdown: required_input(doc, DROPDOWN_ID)?,
            dropdown_menu: required_element(doc, DROPDOWN_MENU_ID)?,
        })
    }

    fn classify(&self, target: Option<&Node>) -> ClickTarget {
        ClickTarget::classify(self.toggle.contains(target), self.nav_content.contains(target))
    }

    /// Handle one document click.
    ///
    /// # Errors
    ///
    /// Returns an error if a class list update throws.
    pub fn handle_click(&self, event: &Event) -> Result<(), SiteError> {
        let target = event.target();
        let node = target.as_ref().and_then(|t| t.dyn_ref::<Node>());
        let menu_open = !is_hidden(&self.nav_content);
        let update = on_click(self.classify(node), menu_open, scroll_y(&self.window));

        if let Some(open) = update.open {
            set_hidden(&self.nav_content, !open)?;
        }
        if update.uncheck_dropdown {
            self.dropdown.set_checked(false);
        }
        if let Some(style) = update.header {
            apply_header_style(self.header.as_ref(), Some(&self.nav_content), style)?;
        }

        set_hidden(&self.dropdown_menu, !self.dropdown.checked())
    }
}
