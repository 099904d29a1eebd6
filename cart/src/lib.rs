//! Cart controller for the storefront pages.
//!
//! Translates user gestures (add, quantity change, remove, selection,
//! checkout) into calls against the cart endpoints and mirrors each
//! response back into the page. The server owns all cart state; the only
//! client-side arithmetic is the selected total, re-summed from rendered
//! subtotal text.

pub mod payload;
pub mod quantity;

mod error;
pub use error::CartError;

#[cfg(target_arch = "wasm32")]
mod api;
#[cfg(target_arch = "wasm32")]
pub mod controls;
#[cfg(target_arch = "wasm32")]
pub mod view;

#[cfg(target_arch = "wasm32")]
mod boot {
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;

    use crate::api::CartApi;
    use crate::{controls, view, CartError};

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Debug);

        if let Err(err) = init() {
            log::warn!("cart controller not initialized: {err}");
        }
    }

    fn init() -> Result<(), CartError> {
        let doc = minishop_dom::document()?;
        let api = Rc::new(CartApi::from_cookie());

        controls::init(&doc, &api);
        view::recompute_selected_total(&doc);

        // Populate the badge from the server once the page is wired up.
        wasm_bindgen_futures::spawn_local(async move {
            match api.summary().await {
                Ok(summary) => view::update_badge(&doc, summary.cart_count),
                Err(err) => log::warn!("cart summary fetch failed: {err}"),
            }
        });
        Ok(())
    }
}
