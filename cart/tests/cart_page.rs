#![cfg(target_arch = "wasm32")]

use minishop_cart::payload::UpdateResponse;
use minishop_cart::{controls, view};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlButtonElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn setup() -> Document {
    let doc = web_sys::window().unwrap().document().unwrap();
    doc.body().unwrap().set_inner_html(
        r#"<span id="cart-badge"></span>
           <div class="cart-item-row" data-pid="1">
             <input type="checkbox" class="select-item" value="1" checked>
             <span data-subtotal="1">10.00</span>
             <input class="qty-input" value="2">
           </div>
           <div class="cart-item-row" data-pid="2">
             <input type="checkbox" class="select-item" value="2">
             <span data-subtotal="2">5.00</span>
             <input class="qty-input" value="1">
           </div>
           <span id="cart-total-all">15.00</span>
           <span id="cart-selected-total"></span>
           <button id="checkout-btn"></button>
           <div id="checkout-warning" class="d-none"></div>"#,
    );
    doc
}

fn text_of(doc: &Document, id: &str) -> String {
    doc.get_element_by_id(id)
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

fn checkbox_for(doc: &Document, pid: &str) -> HtmlInputElement {
    doc.query_selector(&format!(
        r#".cart-item-row[data-pid="{pid}"] .select-item"#
    ))
    .unwrap()
    .unwrap()
    .dyn_into()
    .unwrap()
}

fn checkout_button(doc: &Document) -> HtmlButtonElement {
    doc.get_element_by_id("checkout-btn")
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn warning_hidden(doc: &Document) -> bool {
    doc.get_element_by_id("checkout-warning")
        .unwrap()
        .class_list()
        .contains("d-none")
}

#[wasm_bindgen_test]
fn selected_total_sums_only_checked_rows() {
    let doc = setup();
    view::recompute_selected_total(&doc);

    assert_eq!(text_of(&doc, "cart-selected-total"), "10.00");
    assert!(!checkout_button(&doc).disabled());
    assert!(warning_hidden(&doc));
}

#[wasm_bindgen_test]
fn checking_second_row_adds_its_subtotal() {
    let doc = setup();
    checkbox_for(&doc, "2").set_checked(true);
    view::recompute_selected_total(&doc);

    assert_eq!(text_of(&doc, "cart-selected-total"), "15.00");
}

#[wasm_bindgen_test]
fn unchecking_all_rows_disables_checkout() {
    let doc = setup();
    checkbox_for(&doc, "1").set_checked(false);
    view::recompute_selected_total(&doc);

    assert_eq!(text_of(&doc, "cart-selected-total"), "0.00");
    assert!(checkout_button(&doc).disabled());
}

#[wasm_bindgen_test]
fn checkout_with_no_selection_warns_and_sends_nothing() {
    let doc = setup();
    checkbox_for(&doc, "1").set_checked(false);

    // `None` means the click handler bails before building a request.
    assert_eq!(controls::checkout_selection(&doc), None);
    assert!(!warning_hidden(&doc));
    assert_eq!(
        text_of(&doc, "checkout-warning"),
        "Please select at least one item to checkout."
    );
}

#[wasm_bindgen_test]
fn checkout_selection_collects_checked_values() {
    let doc = setup();
    checkbox_for(&doc, "2").set_checked(true);

    let selected = controls::checkout_selection(&doc).unwrap();
    assert_eq!(selected, vec!["1".to_string(), "2".to_string()]);
}

#[wasm_bindgen_test]
fn recompute_clears_previous_warning() {
    let doc = setup();
    view::show_warning(&doc, view::SELECT_ITEMS_WARNING);
    assert!(!warning_hidden(&doc));

    view::recompute_selected_total(&doc);
    assert!(warning_hidden(&doc));
}

#[wasm_bindgen_test]
fn quantity_update_response_refreshes_row_and_totals() {
    let doc = setup();
    let resp = UpdateResponse {
        success: true,
        cart_count: 4,
        item_subtotal: Some("21.0".to_string()),
        total_amount: Some("26".to_string()),
        removed: None,
    };
    view::apply_quantity_update(&doc, "1", &resp);

    assert_eq!(text_of(&doc, "cart-badge"), "4");
    let subtotal = doc
        .query_selector(r#"[data-subtotal="1"]"#)
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap();
    assert_eq!(subtotal, "21.00");
    assert_eq!(text_of(&doc, "cart-total-all"), "26.00");
}

#[wasm_bindgen_test]
fn removal_response_deletes_row_and_mirrors_totals() {
    let doc = setup();
    let resp = UpdateResponse {
        success: true,
        cart_count: 1,
        item_subtotal: None,
        total_amount: Some("5.00".to_string()),
        removed: Some(true),
    };
    view::apply_removal(&doc, "1", &resp);

    assert!(doc
        .query_selector(r#".cart-item-row[data-pid="1"]"#)
        .unwrap()
        .is_none());
    assert_eq!(text_of(&doc, "cart-total-all"), "5.00");
    assert_eq!(text_of(&doc, "cart-badge"), "1");
}

#[wasm_bindgen_test]
fn badge_is_blank_at_zero() {
    let doc = setup();
    view::update_badge(&doc, 3);
    assert_eq!(text_of(&doc, "cart-badge"), "3");

    view::update_badge(&doc, 0);
    assert_eq!(text_of(&doc, "cart-badge"), "");
}
