//! Event wiring: one leaked listener per control, each handler reading
//! the page state it needs at event time and handing the exchange to a
//! `spawn_local` future. Handlers take no locks and hold no state, so
//! rapid gestures can race in flight; the last response to land wins.

use std::rc::Rc;

use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::api::CartApi;
use crate::quantity;
use crate::view;

const ADD_BUTTON_SELECTOR: &str = "[data-add-product]";
const QTY_FORM_SELECTOR: &str = "[data-qty-form]";
const QTY_FIELD_SELECTOR: &str = "[data-qty]";
const DECREASE_SELECTOR: &str = ".qty-decrease";
const INCREASE_SELECTOR: &str = ".qty-increase";
const REMOVE_SELECTOR: &str = ".remove-item";

const ADDED_LABEL: &str = "Added";
const ADDED_FLASH_MS: u32 = 900;

pub fn init(doc: &Document, api: &Rc<CartApi>) {
    bind_add_buttons(doc, api);
    bind_step_buttons(doc, api, DECREASE_SELECTOR, -1);
    bind_step_buttons(doc, api, INCREASE_SELECTOR, 1);
    bind_quantity_inputs(doc, api);
    bind_selection_boxes(doc);
    bind_remove_buttons(doc, api);
    bind_checkout_button(doc, api);
}

/// Product list/detail "add to cart" controls. Quantity comes from the
/// nearest qty form when one wraps the button, else 1.
fn bind_add_buttons(doc: &Document, api: &Rc<CartApi>) {
    for button in minishop_dom::query_all(doc, ADD_BUTTON_SELECTOR) {
        let doc = doc.clone();
        let api = api.clone();
        let target = button.clone();
        EventListener::new(&button, "click", move |event| {
            event.prevent_default();
            let Some(pid) = target.get_attribute("data-add-product") else {
                return;
            };
            let qty = minishop_dom::closest(&target, QTY_FORM_SELECTOR)
                .and_then(|form| minishop_dom::query_in(&form, QTY_FIELD_SELECTOR))
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
                .map(|input| quantity::clamp(quantity::parse(&input.value())))
                .unwrap_or(1);
            let doc = doc.clone();
            let api = api.clone();
            let button = target.clone();
            spawn_local(async move {
                match api.add_to_cart(&pid, qty).await {
                    Ok(resp) if resp.success => {
                        view::update_badge(&doc, resp.cart_count);
                        flash_added(&button);
                    }
                    Ok(_) => {}
                    Err(err) => log::warn!("add to cart failed for {pid}: {err}"),
                }
            });
        })
        .forget();
    }
}

/// Quick visual feedback on the triggering control, reverted after a
/// beat. The original label is captured per click, so overlapping adds
/// on the same control can briefly pin it to "Added".
fn flash_added(button: &Element) {
    let Some(button) = button.dyn_ref::<HtmlElement>().cloned() else {
        return;
    };
    let original = button.inner_html();
    button.set_inner_html(ADDED_LABEL);
    Timeout::new(ADDED_FLASH_MS, move || {
        button.set_inner_html(&original);
    })
    .forget();
}

/// Plus/minus controls inside a cart row.
fn bind_step_buttons(doc: &Document, api: &Rc<CartApi>, selector: &str, delta: i64) {
    for button in minishop_dom::query_all(doc, selector) {
        let doc = doc.clone();
        let api = api.clone();
        let target = button.clone();
        EventListener::new(&button, "click", move |event| {
            event.prevent_default();
            let Some((pid, input)) = row_quantity_context(&target) else {
                return;
            };
            let qty = quantity::clamp(quantity::parse(&input.value()).saturating_add(delta));
            input.set_value(&qty.to_string());
            submit_quantity(&doc, &api, pid, qty);
        })
        .forget();
    }
}

/// Direct numeric edits of the quantity field.
fn bind_quantity_inputs(doc: &Document, api: &Rc<CartApi>) {
    for input in minishop_dom::query_all(doc, view::QTY_INPUT_SELECTOR) {
        let doc = doc.clone();
        let api = api.clone();
        let target = input.clone();
        EventListener::new(&input, "change", move |_event| {
            let Some((pid, input)) = row_quantity_context(&target) else {
                return;
            };
            let qty = quantity::clamp(quantity::parse(&input.value()));
            input.set_value(&qty.to_string());
            submit_quantity(&doc, &api, pid, qty);
        })
        .forget();
    }
}

/// Resolves the row a quantity control lives in: the product id and the
/// quantity input to read/write.
fn row_quantity_context(control: &Element) -> Option<(String, HtmlInputElement)> {
    let row = minishop_dom::closest(control, view::ROW_SELECTOR)?;
    let pid = row.get_attribute("data-pid")?;
    let input = minishop_dom::query_in(&row, view::QTY_INPUT_SELECTOR)?
        .dyn_into::<HtmlInputElement>()
        .ok()?;
    Some((pid, input))
}

fn submit_quantity(doc: &Document, api: &Rc<CartApi>, pid: String, qty: u32) {
    let doc = doc.clone();
    let api = api.clone();
    spawn_local(async move {
        match api.update_quantity(&pid, qty).await {
            Ok(resp) => {
                // A non-OK status decodes to None: leave the page as-is
                // but still refresh the selected total, which only reads
                // what is already rendered.
                if let Some(resp) = &resp {
                    view::apply_quantity_update(&doc, &pid, resp);
                }
                view::recompute_selected_total(&doc);
            }
            Err(err) => log::warn!("quantity update failed for {pid}: {err}"),
        }
    });
}

fn bind_selection_boxes(doc: &Document) {
    for checkbox in minishop_dom::query_all(doc, view::SELECT_BOX_SELECTOR) {
        let doc = doc.clone();
        EventListener::new(&checkbox, "change", move |_event| {
            view::recompute_selected_total(&doc);
        })
        .forget();
    }
}

fn bind_remove_buttons(doc: &Document, api: &Rc<CartApi>) {
    for button in minishop_dom::query_all(doc, REMOVE_SELECTOR) {
        let doc = doc.clone();
        let api = api.clone();
        let target = button.clone();
        EventListener::new(&button, "click", move |event| {
            event.prevent_default();
            let Some(pid) = target.get_attribute("data-pid") else {
                return;
            };
            let doc = doc.clone();
            let api = api.clone();
            spawn_local(async move {
                match api.remove_item(&pid).await {
                    Ok(resp) if resp.success => {
                        view::apply_removal(&doc, &pid, &resp);
                        view::recompute_selected_total(&doc);
                    }
                    Ok(_) => {}
                    Err(err) => log::warn!("remove failed for {pid}: {err}"),
                }
            });
        })
        .forget();
    }
}

fn bind_checkout_button(doc: &Document, api: &Rc<CartApi>) {
    let Some(button) = minishop_dom::by_id(doc, view::CHECKOUT_BUTTON_ID) else {
        return;
    };
    let doc = doc.clone();
    let api = api.clone();
    EventListener::new(&button, "click", move |event| {
        event.prevent_default();
        let Some(selected) = checkout_selection(&doc) else {
            return;
        };
        let doc = doc.clone();
        let api = api.clone();
        spawn_local(async move {
            match api.prepare_checkout(&selected).await {
                Ok(resp) => match resp.redirect_target() {
                    Some(redirect) => navigate(&redirect),
                    None => view::show_warning(&doc, view::CHECKOUT_FAILED_WARNING),
                },
                // Transport failures stay unhandled beyond the log; the
                // page is still in its pre-request state.
                Err(err) => log::warn!("checkout preparation failed: {err}"),
            }
        });
    })
    .forget();
}

/// Gathers the checked selection, or shows the "select something"
/// warning and returns `None`, in which case no request is made.
pub fn checkout_selection(doc: &Document) -> Option<Vec<String>> {
    let selected = view::selected_ids(doc);
    if selected.is_empty() {
        view::show_warning(doc, view::SELECT_ITEMS_WARNING);
        return None;
    }
    Some(selected)
}

fn navigate(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(url) {
            log::warn!("redirect to {url} failed: {err:?}");
        }
    }
}
