//! Small web-sys helpers shared by the DOM components.
//!
//! Lookups come in two flavors: `required_*` turns a missing element into
//! [`SiteError::MissingElement`], `optional_*` returns `None` and lets the
//! caller skip its work.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window};

use crate::error::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoGlobal("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoGlobal("document"))
}

pub fn required_element(doc: &Document, id: &str) -> Result<Element, SiteError> {
    doc.get_element_by_id(id).ok_or_else(|| SiteError::missing(id))
}

pub fn optional_element(doc: &Document, id: &str) -> Option<Element> {
    doc.get_element_by_id(id)
}

pub fn required_input(doc: &Document, id: &str) -> Result<HtmlInputElement, SiteError> {
    required_element(doc, id)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| SiteError::WrongElementKind { id: id.to_owned(), expected: "an <input>" })
}

pub fn optional_html_element(doc: &Document, id: &str) -> Option<HtmlElement> {
    optional_element(doc, id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn add_classes(el: &Element, classes: &[&str]) -> Result<(), SiteError> {
    let list = el.class_list();
    for class in classes {
        list.add_1(class)?;
    }
    Ok(())
}

pub fn remove_classes(el: &Element, classes: &[&str]) -> Result<(), SiteError> {
    let list = el.class_list();
    for class in classes {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Replace `remove` with `add` on `el`.
pub fn swap_classes(el: &Element, add: &[&str], remove: &[&str]) -> Result<(), SiteError> {
    remove_classes(el, remove)?;
    add_classes(el, add)
}

pub fn set_hidden(el: &Element, hidden: bool) -> Result<(), SiteError> {
    let list = el.class_list();
    if hidden {
        list.add_1(crate::consts::HIDDEN_CLASS)?;
    } else {
        list.remove_1(crate::consts::HIDDEN_CLASS)?;
    }
    Ok(())
}

pub fn is_hidden(el: &Element) -> bool {
    el.class_list().contains(crate::consts::HIDDEN_CLASS)
}

/// Current `window.scrollY`, treating a failed read as the top of the page.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}
