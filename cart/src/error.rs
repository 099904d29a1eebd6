use minishop_dom::DomError;
use thiserror::Error;

/// Failure surface of the cart controller. Handlers at the event rim log
/// these and move on; nothing is retried (the server stays the source of
/// truth and the user can re-trigger the gesture).
#[derive(Debug, Error)]
pub enum CartError {
    #[cfg(target_arch = "wasm32")]
    #[error("request failed: {0}")]
    Http(#[from] gloo_net::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error(transparent)]
    Dom(#[from] DomError),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for CartError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
