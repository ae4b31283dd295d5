//! Mobile navigation menu transitions.
//!
//! Every document click is classified against the menu button and menu
//! container, then mapped to a [`MenuUpdate`] the DOM layer applies. The
//! inline dropdown's visibility is resynchronized separately after every
//! click, whatever the branch.

use super::scroll::HeaderStyle;

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Where a click landed relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    /// On (or inside) the menu button.
    Toggle,
    /// Inside the menu container, not on the button.
    InsideMenu,
    /// Anywhere else.
    Outside,
}

impl ClickTarget {
    /// The button check wins when the button sits inside the container.
    pub fn classify(on_toggle: bool, inside_menu: bool) -> Self {
        if on_toggle {
            Self::Toggle
        } else if inside_menu {
            Self::InsideMenu
        } else {
            Self::Outside
        }
    }
}

/// Changes to apply after a click. `None` fields mean "leave as is".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuUpdate {
    /// New open state of the menu.
    pub open: Option<bool>,
    /// Uncheck the inline dropdown checkbox.
    pub uncheck_dropdown: bool,
    /// New header (and menu background) style.
    pub header: Option<HeaderStyle>,
}

/// Transition for a click.
///
/// Closing only flattens the header when the page is at the very top, so a
/// scrolled page keeps its shadow.
pub fn on_click(target: ClickTarget, menu_open: bool, scroll_y: f64) -> MenuUpdate {
    let at_top = scroll_y <= 0.0;
    let flatten = at_top.then_some(HeaderStyle::Flat);
    match target {
        ClickTarget::Toggle if menu_open => MenuUpdate { open: Some(false), uncheck_dropdown: false, header: flatten },
        ClickTarget::Toggle => {
            MenuUpdate { open: Some(true), uncheck_dropdown: false, header: Some(HeaderStyle::Raised) }
        }
        ClickTarget::Outside => MenuUpdate { open: Some(false), uncheck_dropdown: true, header: flatten },
        ClickTarget::InsideMenu => MenuUpdate::default(),
    }
}
