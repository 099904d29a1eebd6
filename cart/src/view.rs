//! DOM reconciliation for the cart page.
//!
//! Everything here mirrors server responses (or already-rendered text)
//! into the page; the one piece of client arithmetic is the selected
//! total, which re-sums the subtotal strings the server previously
//! rendered.

use minishop_dom::money;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

use crate::payload::UpdateResponse;

pub const BADGE_ID: &str = "cart-badge";
pub const CART_TOTAL_ID: &str = "cart-total-all";
pub const SELECTED_TOTAL_ID: &str = "cart-selected-total";
pub const CHECKOUT_BUTTON_ID: &str = "checkout-btn";
pub const WARNING_ID: &str = "checkout-warning";

pub const ROW_SELECTOR: &str = ".cart-item-row";
pub const SELECT_BOX_SELECTOR: &str = ".select-item";
pub const QTY_INPUT_SELECTOR: &str = ".qty-input";
const SUBTOTAL_SELECTOR: &str = "[data-subtotal]";

const HIDDEN_CLASS: &str = "d-none";

pub const SELECT_ITEMS_WARNING: &str = "Please select at least one item to checkout.";
pub const CHECKOUT_FAILED_WARNING: &str = "Unable to prepare checkout. Please try again.";

/// Badge shows the count only when there is something in the cart.
pub fn update_badge(doc: &Document, count: u32) {
    let Some(badge) = minishop_dom::by_id(doc, BADGE_ID) else {
        return;
    };
    let text = if count > 0 {
        count.to_string()
    } else {
        String::new()
    };
    minishop_dom::set_text(&badge, &text);
}

/// Applies a successful quantity-update response to the page: badge
/// always, row subtotal and cart total when the server included them.
pub fn apply_quantity_update(doc: &Document, pid: &str, resp: &UpdateResponse) {
    update_badge(doc, resp.cart_count);
    if let Some(subtotal) = &resp.item_subtotal {
        set_row_subtotal(doc, pid, subtotal);
    }
    if let Some(total) = &resp.total_amount {
        set_cart_total(doc, total);
    }
}

/// Applies a successful removal: the row disappears and the totals
/// mirror the response.
pub fn apply_removal(doc: &Document, pid: &str, resp: &UpdateResponse) {
    if let Some(row) = find_row(doc, pid) {
        row.remove();
    }
    if let Some(total) = &resp.total_amount {
        set_cart_total(doc, total);
    }
    update_badge(doc, resp.cart_count);
}

fn set_row_subtotal(doc: &Document, pid: &str, amount: &str) {
    let selector = format!(r#"[data-subtotal="{pid}"]"#);
    if let Some(el) = doc.query_selector(&selector).ok().flatten() {
        minishop_dom::set_text(&el, &money::format(money::parse(amount)));
    }
}

fn set_cart_total(doc: &Document, amount: &str) {
    if let Some(el) = minishop_dom::by_id(doc, CART_TOTAL_ID) {
        minishop_dom::set_text(&el, &money::format(money::parse(amount)));
    }
}

fn find_row(doc: &Document, pid: &str) -> Option<Element> {
    let selector = format!(r#"{ROW_SELECTOR}[data-pid="{pid}"]"#);
    doc.query_selector(&selector).ok().flatten()
}

/// Values of the currently checked selection boxes, in document order.
pub fn selected_ids(doc: &Document) -> Vec<String> {
    minishop_dom::query_all(doc, &format!("{SELECT_BOX_SELECTOR}:checked"))
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .collect()
}

/// Re-derives the selected total from the checked rows' subtotal text,
/// toggles the checkout button, and clears any stale warning. Runs on
/// every selection or quantity change.
pub fn recompute_selected_total(doc: &Document) {
    let mut total = 0.0;
    for row in minishop_dom::query_all(doc, ROW_SELECTOR) {
        let checked = minishop_dom::query_in(&row, SELECT_BOX_SELECTOR)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .is_some_and(|input| input.checked());
        if !checked {
            continue;
        }
        let subtotal = minishop_dom::query_in(&row, SUBTOTAL_SELECTOR)
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        total += money::parse(&subtotal);
    }

    if let Some(el) = minishop_dom::by_id(doc, SELECTED_TOTAL_ID) {
        minishop_dom::set_text(&el, &money::format(total));
    }
    if let Some(button) = minishop_dom::by_id(doc, CHECKOUT_BUTTON_ID)
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    {
        button.set_disabled(total <= 0.0);
    }
    hide_warning(doc);
}

pub fn show_warning(doc: &Document, message: &str) {
    if let Some(warning) = minishop_dom::by_id(doc, WARNING_ID) {
        minishop_dom::set_text(&warning, message);
        minishop_dom::remove_class(&warning, HIDDEN_CLASS);
    }
}

pub fn hide_warning(doc: &Document) {
    if let Some(warning) = minishop_dom::by_id(doc, WARNING_ID) {
        minishop_dom::add_class(&warning, HIDDEN_CLASS);
    }
}
