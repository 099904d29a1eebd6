//! Live image preview for the admin product form.
//!
//! Mirrors the `image_url` text input into an `<img>` inside the
//! `#product-image-preview` container, creating the element lazily on
//! first use. The value is passed through untransformed; a broken URL is
//! the browser's native broken-image rendering and nothing here observes
//! it.

#![cfg(target_arch = "wasm32")]

use gloo_events::EventListener;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, HtmlInputElement};

const INPUT_SELECTOR: &str = r#"input[name="image_url"]"#;
const CONTAINER_ID: &str = "product-image-preview";
const IMAGE_ID: &str = "product-image-preview-img";
const PLACEHOLDER_TEXT: &str = "(no image)";
const IMAGE_STYLE: &str = "width:100px;height:140px;object-fit:cover;border-radius:4px;";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let Ok(doc) = minishop_dom::document() else {
        return;
    };
    let Some(input) = minishop_dom::query_all(&doc, INPUT_SELECTOR)
        .into_iter()
        .next()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        // Not the product form page.
        return;
    };

    let initial = input.value();
    render_preview(&doc, initial.trim());

    // Live update while typing, plus `change` for paste/autofill paths
    // that only settle when focus leaves the field.
    for event in ["input", "change"] {
        let doc = doc.clone();
        let field = input.clone();
        EventListener::new(&input, event, move |_event| {
            let value = field.value();
            render_preview(&doc, value.trim());
        })
        .forget();
    }
}

/// Renders `url` (already trimmed) into the preview container. Empty
/// means "no image": the element is hidden, its `src` dropped, and the
/// placeholder text shown.
pub fn render_preview(doc: &Document, url: &str) {
    let Some(container) = minishop_dom::by_id(doc, CONTAINER_ID) else {
        return;
    };
    let Some(img) = ensure_preview_image(doc, &container) else {
        return;
    };
    if url.is_empty() {
        let _ = img.remove_attribute("src");
        minishop_dom::hide(&img);
        set_placeholder(doc, &container, PLACEHOLDER_TEXT);
    } else {
        minishop_dom::show(&img);
        img.set_src(url);
        set_placeholder(doc, &container, "");
    }
}

/// Finds the preview `<img>`, creating it inside `container` on first
/// call. Creation happens at most once per page.
fn ensure_preview_image(doc: &Document, container: &Element) -> Option<HtmlImageElement> {
    if let Some(existing) = minishop_dom::by_id(doc, IMAGE_ID) {
        return existing.dyn_into::<HtmlImageElement>().ok();
    }
    let img = doc
        .create_element("img")
        .ok()?
        .dyn_into::<HtmlImageElement>()
        .ok()?;
    img.set_id(IMAGE_ID);
    let _ = img.set_attribute("style", IMAGE_STYLE);
    container.append_child(&img).ok()?;
    Some(img)
}

/// Replaces the container's text nodes with `text`, leaving the image
/// element in place. An empty `text` just clears the placeholder.
fn set_placeholder(doc: &Document, container: &Element, text: &str) {
    let nodes = container.child_nodes();
    let mut text_nodes = Vec::new();
    for i in 0..nodes.length() {
        if let Some(node) = nodes.item(i) {
            if node.node_type() == web_sys::Node::TEXT_NODE {
                text_nodes.push(node);
            }
        }
    }
    for node in text_nodes {
        let _ = container.remove_child(&node);
    }
    if !text.is_empty() {
        let _ = container.append_child(&doc.create_text_node(text));
    }
}
