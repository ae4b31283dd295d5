//! Theme toggle button in the navbar.

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::consts::{HIDDEN_CLASS, THEME_TOGGLE_DARK_ICON_ID, THEME_TOGGLE_ID, THEME_TOGGLE_LIGHT_ICON_ID};
use crate::error::SiteError;
use crate::util::dark_mode::ThemePreference;
use crate::util::dom::{required_element, set_hidden};
use crate::util::listener::listen;

pub struct ThemeToggle {
    button: Element,
    dark_icon: Element,
    light_icon: Element,
    theme: Rc<ThemePreference>,
}

impl ThemeToggle {
    /// # Errors
    ///
    /// Returns an error if the button or either icon is missing.
    pub fn new(doc: &Document, theme: Rc<ThemePreference>) -> Result<Self, SiteError> {
        Ok(Self {
            button: required_element(doc, THEME_TOGGLE_ID)?,
            dark_icon: required_element(doc, THEME_TOGGLE_DARK_ICON_ID)?,
            light_icon: required_element(doc, THEME_TOGGLE_LIGHT_ICON_ID)?,
            theme,
        })
    }

    /// Reveal the icon for switching away from the current preference: the
    /// sun while dark, the moon while light.
    fn show_initial_icon(&self) -> Result<(), SiteError> {
        if self.theme.is_dark_preferred() {
            set_hidden(&self.light_icon, false)
        } else {
            set_hidden(&self.dark_icon, false)
        }
    }

    fn on_click(&self) -> Result<(), SiteError> {
        self.dark_icon.class_list().toggle(HIDDEN_CLASS)?;
        self.light_icon.class_list().toggle(HIDDEN_CLASS)?;
        self.theme.toggle()?;
        Ok(())
    }

    /// Set the initial icon and listen for clicks.
    ///
    /// # Errors
    ///
    /// Returns an error if the icon update or listener registration fails.
    pub fn install(self) -> Result<(), SiteError> {
        self.show_initial_icon()?;
        let button = self.button.clone();
        listen(&button, "click", true, move |_| self.on_click())
    }
}
