//! Scroll progress bar and header shadow.

use web_sys::{Document, Element, HtmlElement, Window};

use crate::components::header::apply_header_style;
use crate::consts::{HEADER_ID, NAV_CONTENT_ID, PROGRESS_ID};
use crate::error::SiteError;
use crate::state::scroll::{ScrollMetrics, header_style, root_or_body};
use crate::util::dom::{is_hidden, optional_element, optional_html_element, scroll_y};

/// Custom property the progress bar's width is bound to.
const SCROLL_PROPERTY: &str = "--scroll";

pub struct ScrollProgress {
    window: Window,
    root: Element,
    body: Option<HtmlElement>,
    progress: Option<HtmlElement>,
    header: Option<Element>,
    nav_content: Option<Element>,
    threshold: f64,
}

impl ScrollProgress {
    /// Every element is optional: the matching update is skipped when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the document has no root element.
    pub fn new(window: Window, doc: &Document, threshold: f64) -> Result<Self, SiteError> {
        let root = doc.document_element().ok_or(SiteError::NoGlobal("document element"))?;
        Ok(Self {
            window,
            root,
            body: doc.body(),
            progress: optional_html_element(doc, PROGRESS_ID),
            header: optional_element(doc, HEADER_ID),
            nav_content: optional_element(doc, NAV_CONTENT_ID),
            threshold,
        })
    }

    fn metrics(&self) -> ScrollMetrics {
        let (body_top, body_height) = match &self.body {
            Some(body) => (f64::from(body.scroll_top()), f64::from(body.scroll_height())),
            None => (0.0, 0.0),
        };
        ScrollMetrics {
            scroll_top: root_or_body(f64::from(self.root.scroll_top()), body_top),
            scroll_height: root_or_body(f64::from(self.root.scroll_height()), body_height),
            viewport_height: f64::from(self.root.client_height()),
        }
    }

    fn menu_open(&self) -> bool {
        self.nav_content.as_ref().is_some_and(|nav| !is_hidden(nav))
    }

    /// Recompute the bar width and header style. Runs on every scroll event.
    ///
    /// # Errors
    ///
    /// Returns an error if a style or class update throws.
    pub fn refresh(&self) -> Result<(), SiteError> {
        if let Some(progress) = &self.progress {
            progress.style().set_property(SCROLL_PROPERTY, &self.metrics().css_value())?;
        }
        if self.header.is_some() {
            let style = header_style(scroll_y(&self.window), self.threshold, self.menu_open());
            apply_header_style(self.header.as_ref(), self.nav_content.as_ref(), style)?;
        }
        Ok(())
    }
}
