//! Active-link highlighting in the injected navbar.

use web_sys::{Document, Element};

use crate::consts::NAV_LIST_ID;
use crate::error::SiteError;
use crate::state::nav::highlight_plan;
use crate::util::dom::{required_element, swap_classes};

pub struct NavbarHighlighter {
    nav_list: Element,
}

impl NavbarHighlighter {
    /// # Errors
    ///
    /// Returns an error if `#nav-list` is missing (the navbar was not injected).
    pub fn new(doc: &Document) -> Result<Self, SiteError> {
        Ok(Self { nav_list: required_element(doc, NAV_LIST_ID)? })
    }

    /// Style every anchor in the list against `current_path`.
    ///
    /// # Errors
    ///
    /// Returns an error if a class list update throws.
    pub fn apply(&self, current_path: &str) -> Result<(), SiteError> {
        let collection = self.nav_list.get_elements_by_tag_name("a");
        let anchors: Vec<Element> = (0..collection.length()).filter_map(|i| collection.item(i)).collect();
        let hrefs: Vec<Option<String>> = anchors.iter().map(|a| a.get_attribute("href")).collect();

        let plan = highlight_plan(hrefs.iter().map(Option::as_deref), current_path);
        for (anchor, style) in anchors.iter().zip(plan) {
            swap_classes(anchor, style.added(), style.removed())?;
        }
        Ok(())
    }
}
