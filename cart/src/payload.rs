//! JSON payloads returned by the cart endpoints.
//!
//! The server serializes money as decimal strings (`"10.00"`) and counts
//! as integers. Optional fields are absent rather than null depending on
//! the branch the server took, so everything non-essential is `Option`
//! and `success` defaults to false when missing.

use serde::Deserialize;

/// `POST /cart/add_ajax/{pid}/`
#[derive(Debug, Clone, Deserialize)]
pub struct AddResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cart_count: u32,
    /// Cumulative quantity of the product after the add.
    pub item_qty: Option<u32>,
}

/// `POST /cart/update_ajax/`, for both quantity updates and removals.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub cart_count: u32,
    pub item_subtotal: Option<String>,
    pub total_amount: Option<String>,
    pub removed: Option<bool>,
}

/// `GET /cart/summary_ajax/`
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub cart_count: u32,
    pub total_amount: Option<String>,
}

/// `POST /cart/checkout_prepare/`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutResponse {
    #[serde(default)]
    pub success: bool,
    pub redirect: Option<String>,
    pub error: Option<String>,
}

impl CheckoutResponse {
    /// The URL to navigate to, present only on a success that carries a
    /// non-empty redirect. An empty string is no target, same as the
    /// falsiness check the server's clients rely on.
    pub fn redirect_target(self) -> Option<String> {
        let success = self.success;
        self.redirect.filter(|url| success && !url.is_empty())
    }
}
