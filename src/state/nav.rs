//! Navigation link highlighting.

use crate::consts::{NAV_ACTIVE_CLASSES, NAV_INACTIVE_CLASSES};

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkStyle {
    Active,
    Inactive,
}

impl LinkStyle {
    /// Classes to add for this style.
    pub fn added(self) -> &'static [&'static str] {
        match self {
            Self::Active => NAV_ACTIVE_CLASSES,
            Self::Inactive => NAV_INACTIVE_CLASSES,
        }
    }

    /// Classes to remove for this style.
    pub fn removed(self) -> &'static [&'static str] {
        match self {
            Self::Active => NAV_INACTIVE_CLASSES,
            Self::Inactive => NAV_ACTIVE_CLASSES,
        }
    }
}

/// Style for one anchor. Exact string match only: `/about/` and
/// `/about?x=1` do not match `/about`. Anchors without an `href` are inactive.
pub fn link_style(href: Option<&str>, current_path: &str) -> LinkStyle {
    if href == Some(current_path) { LinkStyle::Active } else { LinkStyle::Inactive }
}

/// Styles for a list of anchors, in order.
pub fn highlight_plan<'a, I>(hrefs: I, current_path: &str) -> Vec<LinkStyle>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs.into_iter().map(|href| link_style(href, current_path)).collect()
}
