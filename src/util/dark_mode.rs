//! Dark mode initialization and toggle.
//!
//! Reads the stored `"light"`/`"dark"` choice from `localStorage`, falls back
//! to `prefers-color-scheme`, and applies the dark class to the `<html>`
//! element. Toggle writes back to `localStorage` and updates the class.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort: private browsing can make `localStorage`
//! unavailable or throw on write. The page then follows the OS hint and a
//! toggle only lasts until the next load; the failure is logged.

use web_sys::{Element, Storage, Window};

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::state::theme::{StoredTheme, Theme, ThemeState};

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The `<html>` theme class plus its persisted preference.
pub struct ThemePreference {
    window: Window,
    root: Element,
    storage: Option<Storage>,
    storage_key: String,
    dark_class: String,
}

impl ThemePreference {
    /// # Errors
    ///
    /// Returns an error when there is no document or `<html>` element.
    pub fn new(window: Window, config: &SiteConfig) -> Result<Self, SiteError> {
        let root = window
            .document()
            .and_then(|doc| doc.document_element())
            .ok_or(SiteError::NoGlobal("document element"))?;
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("localStorage unavailable: {}", SiteError::from(e));
                None
            }
        };
        Ok(Self {
            window,
            root,
            storage,
            storage_key: config.theme_storage_key.clone(),
            dark_class: config.dark_class.clone(),
        })
    }

    /// What the theme key holds. Unreadable storage counts as no key.
    pub fn stored(&self) -> StoredTheme {
        let Some(storage) = self.storage.as_ref() else {
            return StoredTheme::Absent;
        };
        match storage.get_item(&self.storage_key) {
            Ok(value) => StoredTheme::from_raw(value.as_deref()),
            Err(_) => StoredTheme::Absent,
        }
    }

    /// Whether the OS reports a dark color-scheme preference.
    pub fn os_prefers_dark(&self) -> bool {
        match self.window.match_media(DARK_SCHEME_QUERY) {
            Ok(Some(mq)) => mq.matches(),
            _ => false,
        }
    }

    /// Returns `true` if dark mode was stored, or no key is stored and the
    /// system prefers dark mode.
    pub fn is_dark_preferred(&self) -> bool {
        crate::state::theme::is_dark_preferred(self.stored(), self.os_prefers_dark())
    }

    pub fn is_applied(&self) -> bool {
        self.root.class_list().contains(&self.dark_class)
    }

    pub fn state(&self) -> ThemeState {
        ThemeState { stored: self.stored(), applied_dark: self.is_applied() }
    }

    /// Apply or remove the dark class on `<html>`.
    ///
    /// # Errors
    ///
    /// Returns an error if the class list rejects the token.
    pub fn apply(&self, dark: bool) -> Result<(), SiteError> {
        let list = self.root.class_list();
        if dark {
            list.add_1(&self.dark_class)?;
        } else {
            list.remove_1(&self.dark_class)?;
        }
        Ok(())
    }

    /// Resolve the preference and apply it. Runs before the fragments load.
    ///
    /// # Errors
    ///
    /// See [`ThemePreference::apply`].
    pub fn apply_preferred(&self) -> Result<bool, SiteError> {
        let dark = self.is_dark_preferred();
        self.apply(dark)?;
        Ok(dark)
    }

    /// Flip the applied class and persist the new choice.
    ///
    /// # Errors
    ///
    /// See [`ThemePreference::apply`]. A failed storage write is logged, not
    /// returned.
    pub fn toggle(&self) -> Result<Theme, SiteError> {
        let next = self.state().toggled();
        self.apply(next.applied_dark)?;
        let theme = Theme::from_dark(next.applied_dark);
        if let Some(storage) = &self.storage {
            if let Err(e) = storage.set_item(&self.storage_key, theme.as_str()) {
                log::warn!("could not persist theme: {}", SiteError::from(e));
            }
        }
        log::debug!("theme toggled to {}", theme.as_str());
        Ok(theme)
    }
}
