//! Thin lookup and mutation helpers over `web_sys`.
//!
//! Missing elements are an expected condition here: every page only
//! provides the subset of the DOM contract it needs, so lookups return
//! `Option` and callers skip work when a hook is absent.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::DomError;

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .ok_or(DomError::NoWindow)?
        .document()
        .ok_or(DomError::NoDocument)
}

pub fn by_id(doc: &Document, id: &str) -> Option<Element> {
    doc.get_element_by_id(id)
}

/// `querySelectorAll` flattened to the elements that matched. An invalid
/// selector yields an empty list rather than a panic.
pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut elements = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(element) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    elements
}

pub fn query_in(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn show(el: &HtmlElement) {
    let _ = el.style().set_property("display", "");
}

pub fn hide(el: &HtmlElement) {
    let _ = el.style().set_property("display", "none");
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

/// Nearest ancestor (or self) matching `selector`.
pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}
